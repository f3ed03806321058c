use url::Url;

use crate::domain::{ApiKey, ApiVersion, ClientConfig, ResponseFormat};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    OwnBalance,
    MessageList,
    SendSmsMessage,
    SmsStatus,
    CampaignCreate,
    CampaignAddRecipients,
    CampaignDelete,
    CampaignGet,
    CampaignLinks,
    CampaignInfo,
    CampaignSend,
    LinkCreate,
    LinkGet,
    LinkDelete,
    TaskQueueStatus,
}

impl Endpoint {
    pub fn path(self) -> &'static str {
        match self {
            Self::OwnBalance => "service/user/getownbalance",
            Self::MessageList => "service/message/list",
            Self::SendSmsMessage => "service/message/sendsmsmessage",
            Self::SmsStatus => "service/message/getsmsstatus",
            Self::CampaignCreate => "service/campaign/create",
            Self::CampaignAddRecipients => "service/campaign/addrecipients",
            Self::CampaignDelete => "service/campaign/delete",
            Self::CampaignGet => "service/campaign/get",
            Self::CampaignLinks => "service/campaign/getlinks",
            Self::CampaignInfo => "service/campaign/getinfo",
            Self::CampaignSend => "service/campaign/send",
            Self::LinkCreate => "service/link/create",
            Self::LinkGet => "service/link/get",
            Self::LinkDelete => "service/link/delete",
            Self::TaskQueueStatus => "service/taskqueue/getstatus",
        }
    }
}

/// Signed endpoint URL: scheme, host, path and the `output`/`api`/`apiKey` query.
///
/// Request arguments never go into the query string.
pub fn api_url(config: &ClientConfig, endpoint: Endpoint) -> Result<Url, url::ParseError> {
    let base = format!("{}://{}/", config.scheme(), config.host().as_str());
    let mut url = Url::parse(&base)?.join(endpoint.path())?;
    url.query_pairs_mut()
        .append_pair(ResponseFormat::FIELD, config.format().as_str())
        .append_pair(ApiVersion::FIELD, config.api_version().as_str())
        .append_pair(ApiKey::FIELD, config.api_key().as_str());
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ApiHost;

    const KEY: &str = "0123456789abcdefghij0123456789abcdefghij";

    fn config(force_http: bool, format: ResponseFormat, version: &str) -> ClientConfig {
        ClientConfig::with_options(
            ApiKey::new(KEY).unwrap(),
            ApiHost::new("api.example.com").unwrap(),
            format,
            30,
            ApiVersion::new(version).unwrap(),
            false,
            force_http,
        )
        .unwrap()
    }

    #[test]
    fn balance_url_carries_fixed_query_in_order() {
        let url = api_url(
            &config(false, ResponseFormat::Json, "v1"),
            Endpoint::OwnBalance,
        )
        .unwrap();
        assert_eq!(
            url.as_str(),
            format!(
                "https://api.example.com/service/user/getownbalance?output=json&api=v1&apiKey={KEY}"
            )
        );
    }

    #[test]
    fn force_http_and_format_change_scheme_and_output() {
        let url = api_url(
            &config(true, ResponseFormat::Xml, "v2"),
            Endpoint::TaskQueueStatus,
        )
        .unwrap();
        assert_eq!(url.scheme(), "http");
        assert_eq!(url.path(), "/service/taskqueue/getstatus");
        assert_eq!(
            url.query(),
            Some(format!("output=xml&api=v2&apiKey={KEY}").as_str())
        );
    }

    #[test]
    fn every_endpoint_lives_under_service_namespace() {
        let all = [
            Endpoint::OwnBalance,
            Endpoint::MessageList,
            Endpoint::SendSmsMessage,
            Endpoint::SmsStatus,
            Endpoint::CampaignCreate,
            Endpoint::CampaignAddRecipients,
            Endpoint::CampaignDelete,
            Endpoint::CampaignGet,
            Endpoint::CampaignLinks,
            Endpoint::CampaignInfo,
            Endpoint::CampaignSend,
            Endpoint::LinkCreate,
            Endpoint::LinkGet,
            Endpoint::LinkDelete,
            Endpoint::TaskQueueStatus,
        ];
        for endpoint in all {
            let segments = endpoint.path().split('/').collect::<Vec<_>>();
            assert_eq!(segments.len(), 3, "{endpoint:?}");
            assert_eq!(segments[0], "service");
        }
    }
}
