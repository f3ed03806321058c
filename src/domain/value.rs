use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use phonenumber::country;
use regex::Regex;

use crate::domain::config::ConfigurationError;
use crate::domain::validation::ValidationError;

static API_KEY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:[a-z0-9]{40}|[a-z0-9]{70})$").expect("api key pattern is valid")
});

static HOST_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-z0-9][-a-z0-9]+(?:\.[a-z0-9][-a-z0-9]*)+$").expect("host pattern is valid")
});

static API_VERSION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^v[1-9][0-9]*$").expect("api version pattern is valid"));

#[derive(Clone, PartialEq, Eq, Hash)]
/// Mobizon API key, copied from the account settings.
///
/// Invariant: 40 or 70 lowercase alphanumeric characters. `Debug` output is redacted.
pub struct ApiKey(String);

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ApiKey").field(&"***").finish()
    }
}

impl ApiKey {
    /// Query parameter carrying the key (`apiKey`).
    pub const FIELD: &'static str = "apiKey";

    /// Create a validated [`ApiKey`].
    pub fn new(value: impl Into<String>) -> Result<Self, ConfigurationError> {
        let value = value.into();
        if !API_KEY_RE.is_match(&value) {
            return Err(ConfigurationError::InvalidApiKey);
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// API server host name, e.g. `api.mobizon.kz`.
///
/// The host depends on the site the account was registered on.
pub struct ApiHost(String);

impl ApiHost {
    /// Create a validated [`ApiHost`].
    pub fn new(value: impl Into<String>) -> Result<Self, ConfigurationError> {
        let value = value.into();
        if !HOST_RE.is_match(&value) {
            return Err(ConfigurationError::InvalidHost(value));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// API version string (`api` query parameter).
///
/// Invariant: `v` followed by a number starting with a digit `>= 1`.
pub struct ApiVersion(String);

impl ApiVersion {
    /// Query parameter carrying the version (`api`).
    pub const FIELD: &'static str = "api";

    /// Create a validated [`ApiVersion`].
    pub fn new(value: impl Into<String>) -> Result<Self, ConfigurationError> {
        let value = value.into();
        if !API_VERSION_RE.is_match(&value) {
            return Err(ConfigurationError::InvalidApiVersion(value));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for ApiVersion {
    fn default() -> Self {
        Self("v1".to_owned())
    }
}

impl FromStr for ApiVersion {
    type Err = ConfigurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
/// Format the server answers in (`output` query parameter).
pub enum ResponseFormat {
    #[default]
    Json,
    Xml,
}

impl ResponseFormat {
    /// Query parameter carrying the format (`output`).
    pub const FIELD: &'static str = "output";

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Xml => "xml",
        }
    }
}

impl fmt::Display for ResponseFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResponseFormat {
    type Err = ConfigurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "json" => Ok(Self::Json),
            "xml" => Ok(Self::Xml),
            other => Err(ConfigurationError::InvalidResponseFormat(other.to_owned())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// SMS message text.
///
/// Invariant: non-empty after trimming. The original value (including whitespace) is preserved.
pub struct MessageText(String);

impl MessageText {
    pub const FIELD: &'static str = "text";

    /// Create validated message text.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Registered alphanumeric sender name (`from`).
///
/// Invariant: non-empty after trimming. The name must be approved for the account.
pub struct Alphaname(String);

impl Alphaname {
    pub const FIELD: &'static str = "from";

    /// Create a validated [`Alphaname`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Recipient phone number in the form the API expects: digits only, no leading `+`.
///
/// A single leading `+` is stripped; anything else that is not a digit is rejected.
/// To accept national or formatted input, parse into [`PhoneNumber`] and convert.
pub struct Recipient(String);

impl Recipient {
    pub const FIELD: &'static str = "recipient";

    /// Create a validated recipient.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }

        let digits = trimmed.strip_prefix('+').unwrap_or(trimmed);
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ValidationError::InvalidPhoneNumber {
                input: trimmed.to_owned(),
            });
        }
        Ok(Self(digits.to_owned()))
    }

    /// Digits as sent to the API.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<PhoneNumber> for Recipient {
    fn from(value: PhoneNumber) -> Self {
        let digits = value.e164.trim_start_matches('+').to_owned();
        Self(digits)
    }
}

impl From<u64> for Recipient {
    fn from(value: u64) -> Self {
        Self(value.to_string())
    }
}

#[derive(Debug, Clone)]
/// Parsed phone number with an E.164 representation.
///
/// Equality, ordering, and hashing are based on the E.164 form.
pub struct PhoneNumber {
    raw: String,
    e164: String,
    parsed: phonenumber::PhoneNumber,
}

impl PhoneNumber {
    /// Parse and normalize a phone number into E.164.
    ///
    /// `default_region` is used when the input does not contain an explicit country prefix.
    pub fn parse(
        default_region: Option<country::Id>,
        input: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let input = input.into();
        let raw = input.trim().to_owned();
        if raw.is_empty() {
            return Err(ValidationError::Empty {
                field: Recipient::FIELD,
            });
        }

        let parsed = phonenumber::parse(default_region, &raw)
            .map_err(|_| ValidationError::InvalidPhoneNumber { input: raw.clone() })?;

        let e164 = phonenumber::format(&parsed)
            .mode(phonenumber::Mode::E164)
            .to_string();

        Ok(Self { raw, e164, parsed })
    }

    /// Raw input after trimming.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Normalized E.164 representation.
    pub fn e164(&self) -> &str {
        &self.e164
    }

    /// The parsed phone number from the `phonenumber` crate.
    pub fn parsed(&self) -> &phonenumber::PhoneNumber {
        &self.parsed
    }
}

impl PartialEq for PhoneNumber {
    fn eq(&self, other: &Self) -> bool {
        self.e164 == other.e164
    }
}

impl Eq for PhoneNumber {}

impl std::hash::Hash for PhoneNumber {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.e164.hash(state);
    }
}

impl PartialOrd for PhoneNumber {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for PhoneNumber {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.e164.cmp(&other.e164)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
/// Message class (`mclass`).
pub enum MessageClass {
    /// Shown on screen immediately and not stored on the handset.
    Flash,
    #[default]
    Normal,
}

impl MessageClass {
    pub fn code(self) -> u8 {
        match self {
            Self::Flash => 0,
            Self::Normal => 1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// How long the operator keeps trying to deliver a message, in minutes (`validity`).
///
/// Invariant: `60..=1440`.
pub struct ValidityMinutes(u16);

impl ValidityMinutes {
    pub const FIELD: &'static str = "validity";

    pub const MIN: u16 = 60;
    pub const MAX: u16 = 1440;

    /// Create a validated validity window.
    pub fn new(value: u16) -> Result<Self, ValidationError> {
        if !(Self::MIN..=Self::MAX).contains(&value) {
            return Err(ValidationError::ValidityOutOfRange {
                min: Self::MIN,
                max: Self::MAX,
                actual: value,
            });
        }
        Ok(Self(value))
    }

    pub fn value(self) -> u16 {
        self.0
    }
}

impl Default for ValidityMinutes {
    fn default() -> Self {
        Self(Self::MAX)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
/// Campaign kind (`type`).
pub enum CampaignType {
    /// One message to one recipient.
    Single,
    #[default]
    Bulk,
    /// Text with per-recipient placeholders.
    Template,
}

impl CampaignType {
    pub fn code(self) -> u8 {
        match self {
            Self::Single => 1,
            Self::Bulk => 2,
            Self::Template => 3,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Campaign name shown in the account.
///
/// Invariant: non-empty after trimming.
pub struct CampaignName(String);

impl CampaignName {
    pub const FIELD: &'static str = "name";

    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
/// Short link state (`status`).
pub enum LinkStatus {
    Inactive,
    #[default]
    Active,
}

impl LinkStatus {
    pub fn code(self) -> u8 {
        match self {
            Self::Inactive => 0,
            Self::Active => 1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Target URL of a short link (`fullLink`).
///
/// Invariant: non-empty after trimming.
pub struct FullLink(String);

impl FullLink {
    pub const FIELD: &'static str = "fullLink";

    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Background task id from the task queue.
///
/// Invariant: strictly positive.
pub struct TaskId(i64);

impl TaskId {
    pub const FIELD: &'static str = "id";

    pub fn new(value: i64) -> Result<Self, ValidationError> {
        if value <= 0 {
            return Err(ValidationError::NonPositiveId {
                field: Self::FIELD,
                actual: value,
            });
        }
        Ok(Self(value))
    }

    pub fn value(self) -> i64 {
        self.0
    }
}
