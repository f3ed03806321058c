//! Typed Rust client for the Mobizon SMS HTTP API.
//!
//! The crate has three layers: a domain layer of validated types, a transport layer that
//! knows endpoint paths and form field names, and a small client layer performing one
//! HTTP request per call. Response bodies are returned verbatim in the configured
//! format (`json` or `xml`); [`ApiResponse::envelope`] decodes the standard JSON
//! envelope when needed.
//!
//! ```rust,no_run
//! use mobizon::{MessageText, MobizonClient, Recipient, SendOptions};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), mobizon::MobizonError> {
//!     let client = MobizonClient::new("...", "api.mobizon.kz")?;
//!     let text = MessageText::new("hello")?;
//!     let recipient = Recipient::new("+77012345678")?;
//!     let response = client.send_message(text, recipient, SendOptions::default()).await?;
//!     println!("{}", response.as_str());
//!     Ok(())
//! }
//! ```
#![forbid(unsafe_code)]

pub mod client;
pub mod domain;
mod transport;

pub use client::{ApiError, MobizonClient, MobizonClientBuilder, MobizonError};
pub use domain::{
    Alphaname, ApiEnvelope, ApiHost, ApiKey, ApiResponse, ApiVersion, CampaignName,
    CampaignType, ClientConfig, ConfigurationError, CreateCampaign, CreateLink, FullLink,
    LinkStatus, MessageClass, MessageText, PhoneNumber, Recipient, ResponseError,
    ResponseFormat, SendOptions, TaskId, ValidationError, ValidityMinutes,
};
