//! Domain layer: strong types with validation and invariants (no I/O).

mod config;
mod request;
mod response;
mod validation;
mod value;

pub use config::{ClientConfig, ConfigurationError, DEFAULT_TIMEOUT_SECS};
pub use request::{
    CAMPAIGN_MAX_RECIPIENTS, CampaignRecipients, CreateCampaign, CreateLink,
    MESSAGE_STATUS_MAX_IDS, MessageIds, SendOptions,
};
pub use response::{ApiEnvelope, ApiResponse, ResponseError};
pub use validation::ValidationError;
pub use value::{
    Alphaname, ApiHost, ApiKey, ApiVersion, CampaignName, CampaignType, FullLink, LinkStatus,
    MessageClass, MessageText, PhoneNumber, Recipient, ResponseFormat, TaskId, ValidityMinutes,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_ids_reject_empty_and_oversized_lists() {
        assert!(matches!(
            MessageIds::new(Vec::new()),
            Err(ValidationError::Empty {
                field: MessageIds::FIELD
            })
        ));

        let ids = (1..=(MESSAGE_STATUS_MAX_IDS as u64 + 1)).collect::<Vec<_>>();
        assert_eq!(
            MessageIds::new(ids).unwrap_err(),
            ValidationError::TooManyIds {
                max: 100,
                actual: 101
            }
        );
    }

    #[test]
    fn message_ids_keep_caller_order() {
        let ids = MessageIds::new(vec![30, 10, 20]).unwrap();
        assert_eq!(ids.ids(), &[30, 10, 20]);

        let full = (1..=MESSAGE_STATUS_MAX_IDS as u64).collect::<Vec<_>>();
        assert_eq!(MessageIds::new(full).unwrap().ids().len(), 100);
        assert_eq!(MessageIds::one(7).ids(), &[7]);
    }

    #[test]
    fn campaign_recipient_limit_is_enforced() {
        let recipient = Recipient::new("77012345678").unwrap();

        let err =
            CampaignRecipients::new(vec![recipient.clone(); CAMPAIGN_MAX_RECIPIENTS + 1])
                .unwrap_err();
        assert!(matches!(
            err,
            ValidationError::TooManyRecipients {
                max: 500,
                actual: 501
            }
        ));

        let ok = CampaignRecipients::new(vec![recipient; CAMPAIGN_MAX_RECIPIENTS]).unwrap();
        assert_eq!(ok.recipients().len(), 500);
        assert!(CampaignRecipients::new(Vec::new()).is_err());
    }

    #[test]
    fn request_defaults_match_provider_defaults() {
        let options = SendOptions::default();
        assert_eq!(options.mclass, MessageClass::Normal);
        assert_eq!(options.validity.value(), 1440);
        assert!(options.from.is_none());

        let campaign = CreateCampaign::new(
            CampaignName::new("promo").unwrap(),
            MessageText::new("hello").unwrap(),
        );
        assert_eq!(campaign.kind, CampaignType::Bulk);
        assert!(campaign.rate_limit.is_none());

        let link = CreateLink::new(FullLink::new("https://example.com").unwrap());
        assert_eq!(link.status, LinkStatus::Active);
        assert!(link.expiration_date.is_none());
    }
}
