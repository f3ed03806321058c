use crate::domain::{CampaignRecipients, CreateCampaign, Recipient};

use super::format_timestamp;

pub fn encode_create_campaign_form(request: &CreateCampaign) -> Vec<(String, String)> {
    let mut params = vec![
        ("data[name]".to_owned(), request.name.as_str().to_owned()),
        ("data[text]".to_owned(), request.text.as_str().to_owned()),
        ("data[type]".to_owned(), request.kind.code().to_string()),
    ];

    if let Some(from) = request.from.as_ref() {
        params.push(("data[from]".to_owned(), from.as_str().to_owned()));
    }
    if let Some(rate_limit) = non_zero(request.rate_limit) {
        params.push(("data[rateLimit]".to_owned(), rate_limit.to_string()));
    }
    if let Some(rate_period) = non_zero(request.rate_period) {
        params.push(("data[ratePeriod]".to_owned(), rate_period.to_string()));
    }
    if let Some(deferred_to) = request.deferred_to {
        params.push(("data[deferredToTs]".to_owned(), format_timestamp(deferred_to)));
    }
    if let Some(ttl) = non_zero(request.ttl) {
        params.push(("data[ttl]".to_owned(), ttl.to_string()));
    }

    params
}

pub fn encode_add_recipients_form(
    campaign_id: u64,
    recipients: &CampaignRecipients,
) -> Vec<(String, String)> {
    let joined = recipients
        .recipients()
        .iter()
        .map(Recipient::as_str)
        .collect::<Vec<_>>()
        .join(",");
    vec![
        ("id".to_owned(), campaign_id.to_string()),
        (CampaignRecipients::FIELD.to_owned(), joined),
    ]
}

pub fn encode_campaign_id_form(campaign_id: u64) -> Vec<(String, String)> {
    vec![("id".to_owned(), campaign_id.to_string())]
}

pub fn encode_campaign_links_form(campaign_id: u64) -> Vec<(String, String)> {
    vec![("campaignId".to_owned(), campaign_id.to_string())]
}

fn non_zero(value: Option<u32>) -> Option<u32> {
    value.filter(|value| *value != 0)
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::domain::{Alphaname, CampaignName, CampaignType, MessageText};

    fn campaign() -> CreateCampaign {
        CreateCampaign::new(
            CampaignName::new("promo").unwrap(),
            MessageText::new("sale today").unwrap(),
        )
    }

    #[test]
    fn create_campaign_sends_required_fields_only_by_default() {
        let params = encode_create_campaign_form(&campaign());
        assert_eq!(
            params,
            vec![
                ("data[name]".to_owned(), "promo".to_owned()),
                ("data[text]".to_owned(), "sale today".to_owned()),
                ("data[type]".to_owned(), "2".to_owned()),
            ]
        );
    }

    #[test]
    fn create_campaign_includes_set_options_and_skips_zeroes() {
        let request = CreateCampaign {
            kind: CampaignType::Template,
            from: Some(Alphaname::new("Shop").unwrap()),
            rate_limit: Some(100),
            rate_period: Some(0),
            deferred_to: NaiveDate::from_ymd_opt(2026, 12, 31)
                .and_then(|d| d.and_hms_opt(23, 0, 0)),
            ttl: Some(60),
            ..campaign()
        };
        let params = encode_create_campaign_form(&request);
        assert_eq!(
            params,
            vec![
                ("data[name]".to_owned(), "promo".to_owned()),
                ("data[text]".to_owned(), "sale today".to_owned()),
                ("data[type]".to_owned(), "3".to_owned()),
                ("data[from]".to_owned(), "Shop".to_owned()),
                ("data[rateLimit]".to_owned(), "100".to_owned()),
                ("data[deferredToTs]".to_owned(), "2026-12-31 23:00:00".to_owned()),
                ("data[ttl]".to_owned(), "60".to_owned()),
            ]
        );
    }

    #[test]
    fn add_recipients_joins_numbers_by_comma() {
        let recipients = CampaignRecipients::new(vec![
            Recipient::new("+77012345678").unwrap(),
            Recipient::new("380671234567").unwrap(),
        ])
        .unwrap();
        assert_eq!(
            encode_add_recipients_form(9, &recipients),
            vec![
                ("id".to_owned(), "9".to_owned()),
                (
                    "recipients".to_owned(),
                    "77012345678,380671234567".to_owned()
                ),
            ]
        );
    }

    #[test]
    fn campaign_links_use_campaign_id_field() {
        assert_eq!(
            encode_campaign_links_form(3),
            vec![("campaignId".to_owned(), "3".to_owned())]
        );
        assert_eq!(
            encode_campaign_id_form(3),
            vec![("id".to_owned(), "3".to_owned())]
        );
    }
}
