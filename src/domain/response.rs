use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::value::RawValue;

use crate::domain::value::ResponseFormat;

#[derive(Debug, thiserror::Error)]
/// Failure of the optional JSON helpers on [`ApiResponse`].
pub enum ResponseError {
    #[error("response body is {0}, not json")]
    NotJson(ResponseFormat),

    #[error("invalid JSON response: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Raw response body, returned exactly as the server sent it.
pub struct ApiResponse {
    format: ResponseFormat,
    body: String,
}

impl ApiResponse {
    pub fn new(format: ResponseFormat, body: impl Into<String>) -> Self {
        Self {
            format,
            body: body.into(),
        }
    }

    /// Format the body was requested in.
    pub fn format(&self) -> ResponseFormat {
        self.format
    }

    pub fn as_str(&self) -> &str {
        &self.body
    }

    pub fn into_string(self) -> String {
        self.body
    }

    /// Deserialize a JSON body into `T`.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, ResponseError> {
        if self.format != ResponseFormat::Json {
            return Err(ResponseError::NotJson(self.format));
        }
        Ok(serde_json::from_str(&self.body)?)
    }

    /// Deserialize a JSON body into the standard `{code, data, message}` envelope.
    pub fn envelope(&self) -> Result<ApiEnvelope, ResponseError> {
        self.json()
    }
}

#[derive(Debug, Deserialize)]
/// Standard Mobizon JSON envelope.
///
/// `data` is kept as raw JSON; decode it with [`ApiEnvelope::data_as`].
pub struct ApiEnvelope {
    pub code: i64,
    #[serde(default)]
    pub message: String,
    pub data: Box<RawValue>,
}

impl ApiEnvelope {
    /// `code == 0` means the call was accepted.
    pub fn is_success(&self) -> bool {
        self.code == 0
    }

    pub fn data_as<T: DeserializeOwned>(&self) -> Result<T, ResponseError> {
        Ok(serde_json::from_str(self.data.get())?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Balance {
        balance: String,
        currency: String,
    }

    #[test]
    fn body_is_returned_verbatim() {
        let xml = "<response><code>0</code></response>";
        let response = ApiResponse::new(ResponseFormat::Xml, xml);
        assert_eq!(response.as_str(), xml);
        assert_eq!(response.format(), ResponseFormat::Xml);
        assert_eq!(response.into_string(), xml);
    }

    #[test]
    fn envelope_exposes_code_and_raw_data() {
        let json = r#"{"code":0,"data":{"balance":"12.50","currency":"KZT"},"message":""}"#;
        let response = ApiResponse::new(ResponseFormat::Json, json);

        let envelope = response.envelope().unwrap();
        assert!(envelope.is_success());
        assert_eq!(
            envelope.data_as::<Balance>().unwrap(),
            Balance {
                balance: "12.50".to_owned(),
                currency: "KZT".to_owned(),
            }
        );
    }

    #[test]
    fn envelope_reports_api_level_failure_code() {
        let json = r#"{"code":1,"data":{"recipient":"invalid"},"message":"Validation failed"}"#;
        let envelope = ApiResponse::new(ResponseFormat::Json, json)
            .envelope()
            .unwrap();
        assert!(!envelope.is_success());
        assert_eq!(envelope.message, "Validation failed");
    }

    #[test]
    fn json_helpers_refuse_xml_and_malformed_bodies() {
        let xml = ApiResponse::new(ResponseFormat::Xml, "<response/>");
        assert!(matches!(
            xml.envelope(),
            Err(ResponseError::NotJson(ResponseFormat::Xml))
        ));

        let broken = ApiResponse::new(ResponseFormat::Json, "{ not json }");
        assert!(matches!(broken.envelope(), Err(ResponseError::Json(_))));
    }
}
