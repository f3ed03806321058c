use chrono::{NaiveDate, NaiveDateTime};

use crate::domain::validation::ValidationError;
use crate::domain::value::{
    Alphaname, CampaignName, CampaignType, FullLink, LinkStatus, MessageClass, MessageText,
    Recipient, ValidityMinutes,
};

pub const MESSAGE_STATUS_MAX_IDS: usize = 100;
pub const CAMPAIGN_MAX_RECIPIENTS: usize = 500;

#[derive(Debug, Clone, Default)]
/// Optional parameters of a single SMS.
///
/// Fields left at their defaults are not sent.
pub struct SendOptions {
    /// Sender alphaname; the account default is used when unset.
    pub from: Option<Alphaname>,
    /// Campaign name the message is filed under.
    pub name: Option<String>,
    /// Deferred send time, in the account's time zone.
    pub deferred_to: Option<NaiveDateTime>,
    pub mclass: MessageClass,
    pub validity: ValidityMinutes,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Message ids for a status lookup.
///
/// Invariant: `1..=MESSAGE_STATUS_MAX_IDS` ids, order preserved.
pub struct MessageIds(Vec<u64>);

impl MessageIds {
    pub const FIELD: &'static str = "ids";

    pub fn new(ids: Vec<u64>) -> Result<Self, ValidationError> {
        if ids.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        if ids.len() > MESSAGE_STATUS_MAX_IDS {
            return Err(ValidationError::TooManyIds {
                max: MESSAGE_STATUS_MAX_IDS,
                actual: ids.len(),
            });
        }
        Ok(Self(ids))
    }

    pub fn one(id: u64) -> Self {
        Self(vec![id])
    }

    pub fn ids(&self) -> &[u64] {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Phone numbers added to a campaign in one call.
///
/// Invariant: `1..=CAMPAIGN_MAX_RECIPIENTS` recipients, order preserved.
pub struct CampaignRecipients(Vec<Recipient>);

impl CampaignRecipients {
    pub const FIELD: &'static str = "recipients";

    pub fn new(recipients: Vec<Recipient>) -> Result<Self, ValidationError> {
        if recipients.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        if recipients.len() > CAMPAIGN_MAX_RECIPIENTS {
            return Err(ValidationError::TooManyRecipients {
                max: CAMPAIGN_MAX_RECIPIENTS,
                actual: recipients.len(),
            });
        }
        Ok(Self(recipients))
    }

    pub fn one(recipient: Recipient) -> Self {
        Self(vec![recipient])
    }

    pub fn recipients(&self) -> &[Recipient] {
        &self.0
    }
}

#[derive(Debug, Clone)]
/// Parameters of `campaign/create`.
pub struct CreateCampaign {
    pub name: CampaignName,
    pub text: MessageText,
    pub kind: CampaignType,
    pub from: Option<Alphaname>,
    /// Maximum messages per `rate_period`.
    pub rate_limit: Option<u32>,
    /// Rate limit period in seconds.
    pub rate_period: Option<u32>,
    pub deferred_to: Option<NaiveDateTime>,
    /// Message time-to-live in minutes.
    pub ttl: Option<u32>,
}

impl CreateCampaign {
    /// Bulk campaign with the given name and text and no optional settings.
    pub fn new(name: CampaignName, text: MessageText) -> Self {
        Self {
            name,
            text,
            kind: CampaignType::default(),
            from: None,
            rate_limit: None,
            rate_period: None,
            deferred_to: None,
            ttl: None,
        }
    }
}

#[derive(Debug, Clone)]
/// Parameters of `link/create`.
pub struct CreateLink {
    pub full_link: FullLink,
    pub status: LinkStatus,
    /// Dates on or before 1970-01-01 are treated as unset.
    pub expiration_date: Option<NaiveDate>,
    pub comment: Option<String>,
}

impl CreateLink {
    pub fn new(full_link: FullLink) -> Self {
        Self {
            full_link,
            status: LinkStatus::default(),
            expiration_date: None,
            comment: None,
        }
    }
}
