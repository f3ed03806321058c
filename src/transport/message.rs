use crate::domain::{
    Alphaname, MessageClass, MessageIds, MessageText, Recipient, SendOptions, ValidityMinutes,
};

use super::format_timestamp;

const WITH_NUMBER_INFO: (&str, &str) = ("withNumberInfo", "1");

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageFilter<'a> {
    Id(u64),
    CampaignId(u64),
    Phone(&'a Recipient),
}

pub fn encode_message_filter_form(filter: MessageFilter<'_>) -> Vec<(String, String)> {
    let criterion = match filter {
        MessageFilter::Id(id) => ("criteria[id]".to_owned(), id.to_string()),
        MessageFilter::CampaignId(id) => ("criteria[campaignId]".to_owned(), id.to_string()),
        MessageFilter::Phone(phone) => ("criteria[to]".to_owned(), phone.as_str().to_owned()),
    };
    vec![
        criterion,
        (WITH_NUMBER_INFO.0.to_owned(), WITH_NUMBER_INFO.1.to_owned()),
    ]
}

pub fn encode_send_message_form(
    text: &MessageText,
    recipient: &Recipient,
    options: &SendOptions,
) -> Vec<(String, String)> {
    let mut params = vec![
        (Recipient::FIELD.to_owned(), recipient.as_str().to_owned()),
        (MessageText::FIELD.to_owned(), text.as_str().to_owned()),
    ];

    if let Some(from) = options.from.as_ref() {
        params.push((Alphaname::FIELD.to_owned(), from.as_str().to_owned()));
    }
    if let Some(name) = options.name.as_deref().filter(|name| !name.is_empty()) {
        params.push(("params[name]".to_owned(), name.to_owned()));
    }
    if let Some(deferred_to) = options.deferred_to {
        params.push((
            "params[deferredToTs]".to_owned(),
            format_timestamp(deferred_to),
        ));
    }
    if options.mclass != MessageClass::default() {
        params.push(("params[mclass]".to_owned(), options.mclass.code().to_string()));
    }
    if options.validity != ValidityMinutes::default() {
        params.push((
            format!("params[{}]", ValidityMinutes::FIELD),
            options.validity.value().to_string(),
        ));
    }

    params
}

pub fn encode_message_status_form(ids: &MessageIds) -> Vec<(String, String)> {
    let joined = ids
        .ids()
        .iter()
        .map(u64::to_string)
        .collect::<Vec<_>>()
        .join(",");
    vec![(MessageIds::FIELD.to_owned(), joined)]
}
