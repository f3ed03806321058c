use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    Empty { field: &'static str },
    TooManyIds { max: usize, actual: usize },
    TooManyRecipients { max: usize, actual: usize },
    InvalidPhoneNumber { input: String },
    NonPositiveId { field: &'static str, actual: i64 },
    ValidityOutOfRange { min: u16, max: u16, actual: u16 },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty { field } => write!(f, "{field} must not be empty"),
            Self::TooManyIds { max, actual } => {
                write!(f, "too many ids: {actual} (max {max})")
            }
            Self::TooManyRecipients { max, actual } => {
                write!(f, "too many recipients: {actual} (max {max})")
            }
            Self::InvalidPhoneNumber { input } => write!(f, "invalid phone number: {input}"),
            Self::NonPositiveId { field, actual } => {
                write!(f, "{field} must be positive, got {actual}")
            }
            Self::ValidityOutOfRange { min, max, actual } => {
                write!(
                    f,
                    "validity minutes out of range: {actual} (expected {min}..={max})"
                )
            }
        }
    }
}

impl std::error::Error for ValidationError {}
