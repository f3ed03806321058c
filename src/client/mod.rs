//! Client layer: builds signed requests, performs one round trip per call and maps
//! transport failures to [`ApiError`].

use std::error::Error as StdError;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use tracing::{debug, warn};

use crate::domain::{
    ApiHost, ApiKey, ApiResponse, ApiVersion, CampaignRecipients, ClientConfig,
    ConfigurationError, CreateCampaign, CreateLink, DEFAULT_TIMEOUT_SECS, MessageIds,
    MessageText, Recipient, ResponseFormat, SendOptions, TaskId, ValidationError,
};
use crate::transport::{self, Endpoint, MessageFilter};

type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

type TransportResult = Result<HttpResponse, Box<dyn StdError + Send + Sync>>;

#[derive(Debug, Clone)]
struct HttpResponse {
    status: u16,
    body: String,
}

trait HttpTransport: Send + Sync {
    fn get<'a>(&'a self, url: &'a str) -> BoxFuture<'a, TransportResult>;

    fn post_form<'a>(
        &'a self,
        url: &'a str,
        params: Vec<(String, String)>,
    ) -> BoxFuture<'a, TransportResult>;
}

#[derive(Debug, Clone)]
struct ReqwestTransport {
    client: reqwest::Client,
}

// Request URLs carry the API key in the query string, so reqwest errors are
// stripped of their URL before they leave the transport.
impl ReqwestTransport {
    async fn read(response: reqwest::Response) -> TransportResult {
        let status = response.status().as_u16();
        let body = response.text().await.map_err(reqwest::Error::without_url)?;
        Ok(HttpResponse { status, body })
    }
}

impl HttpTransport for ReqwestTransport {
    fn get<'a>(&'a self, url: &'a str) -> BoxFuture<'a, TransportResult> {
        Box::pin(async move {
            let response = self
                .client
                .get(url)
                .send()
                .await
                .map_err(reqwest::Error::without_url)?;
            Self::read(response).await
        })
    }

    fn post_form<'a>(
        &'a self,
        url: &'a str,
        params: Vec<(String, String)>,
    ) -> BoxFuture<'a, TransportResult> {
        Box::pin(async move {
            let response = self
                .client
                .post(url)
                .header(reqwest::header::CACHE_CONTROL, "no-cache")
                .form(&params)
                .send()
                .await
                .map_err(reqwest::Error::without_url)?;
            Self::read(response).await
        })
    }
}

/// Disables certificate and host name verification.
///
/// Every server certificate is trusted. Only reachable when the client is built with
/// [`MobizonClientBuilder::danger_accept_invalid_certs`] over HTTPS.
fn accept_invalid_certs(builder: reqwest::ClientBuilder) -> reqwest::ClientBuilder {
    warn!("TLS certificate and host name verification is disabled for this client");
    builder
        .tls_danger_accept_invalid_certs(true)
        .tls_danger_accept_invalid_hostnames(true)
}

/// Build the reqwest client for a validated configuration.
///
/// The timeout bounds connecting and each read from the socket, not the whole
/// exchange, so a slow but steady response body is not cut off.
fn http_client(
    config: &ClientConfig,
    user_agent: Option<String>,
) -> Result<reqwest::Client, reqwest::Error> {
    let mut builder = reqwest::Client::builder();
    if let Some(timeout) = config.timeout() {
        builder = builder.connect_timeout(timeout).read_timeout(timeout);
    }
    if let Some(user_agent) = user_agent {
        builder = builder.user_agent(user_agent);
    }
    if config.skip_verify_ssl() {
        builder = accept_invalid_certs(builder);
    }
    builder.build()
}

#[derive(Debug, thiserror::Error)]
/// Failure talking to the API server.
pub enum ApiError {
    /// HTTP client / transport failure (DNS, TLS, timeouts, etc).
    #[error("transport error: {0}")]
    Transport(#[source] Box<dyn StdError + Send + Sync>),

    /// Non-successful HTTP status code returned by the server.
    #[error("unexpected HTTP status: {status}")]
    HttpStatus { status: u16, body: Option<String> },
}

#[derive(Debug, thiserror::Error)]
/// Errors returned by [`MobizonClient`].
///
/// Configuration and validation errors are raised before any request is sent.
pub enum MobizonError {
    #[error("configuration error: {0}")]
    Configuration(#[from] ConfigurationError),

    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("API error: {0}")]
    Api(#[from] ApiError),
}

#[derive(Clone)]
/// Builder for [`MobizonClient`].
///
/// Values are validated in [`MobizonClientBuilder::build`].
pub struct MobizonClientBuilder {
    api_key: String,
    host: String,
    format: ResponseFormat,
    timeout_secs: i64,
    api_version: String,
    skip_verify_ssl: bool,
    force_http: bool,
    user_agent: Option<String>,
}

impl std::fmt::Debug for MobizonClientBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MobizonClientBuilder")
            .field("host", &self.host)
            .field("format", &self.format)
            .field("timeout_secs", &self.timeout_secs)
            .field("api_version", &self.api_version)
            .field("skip_verify_ssl", &self.skip_verify_ssl)
            .field("force_http", &self.force_http)
            .field("user_agent", &self.user_agent)
            .finish_non_exhaustive()
    }
}

impl MobizonClientBuilder {
    /// Create a builder with JSON responses, API `v1`, a 30 second timeout and HTTPS.
    pub fn new(api_key: impl Into<String>, host: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            host: host.into(),
            format: ResponseFormat::default(),
            timeout_secs: DEFAULT_TIMEOUT_SECS as i64,
            api_version: ApiVersion::default().as_str().to_owned(),
            skip_verify_ssl: false,
            force_http: false,
            user_agent: None,
        }
    }

    pub fn format(mut self, format: ResponseFormat) -> Self {
        self.format = format;
        self
    }

    /// Response timeout in seconds. `0` disables it; negative values fail at build time.
    pub fn timeout_secs(mut self, timeout_secs: i64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }

    pub fn api_version(mut self, api_version: impl Into<String>) -> Self {
        self.api_version = api_version.into();
        self
    }

    /// Trust any server certificate and host name.
    ///
    /// This is insecure and only meant for temporary certificate problems on the server
    /// side. Ignored when [`MobizonClientBuilder::force_http`] is set.
    pub fn danger_accept_invalid_certs(mut self, accept: bool) -> Self {
        self.skip_verify_ssl = accept;
        self
    }

    /// Use plain HTTP instead of HTTPS.
    pub fn force_http(mut self, force_http: bool) -> Self {
        self.force_http = force_http;
        self
    }

    /// Override the HTTP `User-Agent` header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Validate the configuration and build a [`MobizonClient`].
    pub fn build(self) -> Result<MobizonClient, MobizonError> {
        let config = ClientConfig::with_options(
            ApiKey::new(self.api_key)?,
            ApiHost::new(self.host)?,
            self.format,
            self.timeout_secs,
            ApiVersion::new(self.api_version)?,
            self.skip_verify_ssl,
            self.force_http,
        )?;

        let client = http_client(&config, self.user_agent)
            .map_err(|err| ApiError::Transport(Box::new(err)))?;

        Ok(MobizonClient {
            config: Arc::new(config),
            http: Arc::new(ReqwestTransport { client }),
        })
    }
}

#[derive(Clone)]
/// Mobizon API client.
///
/// Every method performs exactly one HTTP request and returns the response body as
/// received. The configuration is immutable, so a client can be cloned and shared
/// between tasks freely.
pub struct MobizonClient {
    config: Arc<ClientConfig>,
    http: Arc<dyn HttpTransport>,
}

impl std::fmt::Debug for MobizonClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MobizonClient")
            .field("host", &self.config.host())
            .field("format", &self.config.format())
            .finish_non_exhaustive()
    }
}

impl MobizonClient {
    /// Create a client with default settings for the given key and API server.
    ///
    /// For more customization, use [`MobizonClient::builder`].
    pub fn new(api_key: impl Into<String>, host: impl Into<String>) -> Result<Self, MobizonError> {
        MobizonClientBuilder::new(api_key, host).build()
    }

    /// Create a client with every setting given explicitly.
    ///
    /// `format` is `"json"` or `"xml"`; `timeout_secs` of `0` disables the timeout;
    /// `skip_verify_ssl` is ignored when `force_http` is set.
    pub fn with_options(
        api_key: impl Into<String>,
        host: impl Into<String>,
        format: &str,
        timeout_secs: i64,
        api_version: impl Into<String>,
        skip_verify_ssl: bool,
        force_http: bool,
    ) -> Result<Self, MobizonError> {
        MobizonClientBuilder::new(api_key, host)
            .format(format.parse()?)
            .timeout_secs(timeout_secs)
            .api_version(api_version)
            .danger_accept_invalid_certs(skip_verify_ssl)
            .force_http(force_http)
            .build()
    }

    /// Start building a client with custom settings.
    pub fn builder(api_key: impl Into<String>, host: impl Into<String>) -> MobizonClientBuilder {
        MobizonClientBuilder::new(api_key, host)
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Current account balance and currency.
    pub async fn get_balance(&self) -> Result<ApiResponse, MobizonError> {
        self.call(Endpoint::OwnBalance, None).await
    }

    /// All messages of the account.
    pub async fn list_messages(&self) -> Result<ApiResponse, MobizonError> {
        self.call(Endpoint::MessageList, None).await
    }

    pub async fn get_message(&self, message_id: u64) -> Result<ApiResponse, MobizonError> {
        let form = transport::encode_message_filter_form(MessageFilter::Id(message_id));
        self.call(Endpoint::MessageList, Some(form)).await
    }

    pub async fn get_messages_by_campaign(
        &self,
        campaign_id: u64,
    ) -> Result<ApiResponse, MobizonError> {
        let form = transport::encode_message_filter_form(MessageFilter::CampaignId(campaign_id));
        self.call(Endpoint::MessageList, Some(form)).await
    }

    pub async fn get_messages_by_phone(
        &self,
        phone: Recipient,
    ) -> Result<ApiResponse, MobizonError> {
        let form = transport::encode_message_filter_form(MessageFilter::Phone(&phone));
        self.call(Endpoint::MessageList, Some(form)).await
    }

    /// Send one SMS.
    ///
    /// Options left at their defaults are not sent, so the account defaults apply.
    pub async fn send_message(
        &self,
        text: MessageText,
        recipient: Recipient,
        options: SendOptions,
    ) -> Result<ApiResponse, MobizonError> {
        let form = transport::encode_send_message_form(&text, &recipient, &options);
        self.call(Endpoint::SendSmsMessage, Some(form)).await
    }

    /// Delivery status of up to 100 messages.
    ///
    /// Errors:
    /// - [`MobizonError::Validation`] when `ids` is empty or longer than 100.
    pub async fn get_message_status(&self, ids: &[u64]) -> Result<ApiResponse, MobizonError> {
        self.message_status(MessageIds::new(ids.to_vec())?).await
    }

    /// Delivery status of a single message.
    pub async fn get_message_status_by_id(
        &self,
        message_id: u64,
    ) -> Result<ApiResponse, MobizonError> {
        self.message_status(MessageIds::one(message_id)).await
    }

    async fn message_status(&self, ids: MessageIds) -> Result<ApiResponse, MobizonError> {
        let form = transport::encode_message_status_form(&ids);
        self.call(Endpoint::SmsStatus, Some(form)).await
    }

    pub async fn create_campaign(
        &self,
        request: CreateCampaign,
    ) -> Result<ApiResponse, MobizonError> {
        let form = transport::encode_create_campaign_form(&request);
        self.call(Endpoint::CampaignCreate, Some(form)).await
    }

    pub async fn add_campaign_recipient(
        &self,
        campaign_id: u64,
        recipient: Recipient,
    ) -> Result<ApiResponse, MobizonError> {
        let recipients = CampaignRecipients::one(recipient);
        let form = transport::encode_add_recipients_form(campaign_id, &recipients);
        self.call(Endpoint::CampaignAddRecipients, Some(form)).await
    }

    /// Add up to 500 recipients to a campaign.
    ///
    /// Errors:
    /// - [`MobizonError::Validation`] when `recipients` is empty or longer than 500.
    pub async fn add_campaign_recipients(
        &self,
        campaign_id: u64,
        recipients: Vec<Recipient>,
    ) -> Result<ApiResponse, MobizonError> {
        let recipients = CampaignRecipients::new(recipients)?;
        let form = transport::encode_add_recipients_form(campaign_id, &recipients);
        self.call(Endpoint::CampaignAddRecipients, Some(form)).await
    }

    pub async fn delete_campaign(&self, campaign_id: u64) -> Result<ApiResponse, MobizonError> {
        let form = transport::encode_campaign_id_form(campaign_id);
        self.call(Endpoint::CampaignDelete, Some(form)).await
    }

    pub async fn get_campaign(&self, campaign_id: u64) -> Result<ApiResponse, MobizonError> {
        let form = transport::encode_campaign_id_form(campaign_id);
        self.call(Endpoint::CampaignGet, Some(form)).await
    }

    /// Short links used in the campaign text.
    pub async fn get_campaign_links(
        &self,
        campaign_id: u64,
    ) -> Result<ApiResponse, MobizonError> {
        let form = transport::encode_campaign_links_form(campaign_id);
        self.call(Endpoint::CampaignLinks, Some(form)).await
    }

    /// Campaign delivery statistics.
    pub async fn get_campaign_info(&self, campaign_id: u64) -> Result<ApiResponse, MobizonError> {
        let form = transport::encode_campaign_id_form(campaign_id);
        self.call(Endpoint::CampaignInfo, Some(form)).await
    }

    /// Start sending a campaign. The response carries a task queue id for bulk campaigns.
    pub async fn start_campaign(&self, campaign_id: u64) -> Result<ApiResponse, MobizonError> {
        let form = transport::encode_campaign_id_form(campaign_id);
        self.call(Endpoint::CampaignSend, Some(form)).await
    }

    pub async fn create_link(&self, request: CreateLink) -> Result<ApiResponse, MobizonError> {
        let form = transport::encode_create_link_form(&request);
        self.call(Endpoint::LinkCreate, Some(form)).await
    }

    pub async fn get_link(&self, link_id: u64) -> Result<ApiResponse, MobizonError> {
        let form = transport::encode_link_id_form(link_id);
        self.call(Endpoint::LinkGet, Some(form)).await
    }

    pub async fn delete_link(&self, link_id: u64) -> Result<ApiResponse, MobizonError> {
        let form = transport::encode_delete_link_form(link_id);
        self.call(Endpoint::LinkDelete, Some(form)).await
    }

    /// Progress of a background task.
    ///
    /// Errors:
    /// - [`MobizonError::Validation`] when `task_id <= 0`.
    pub async fn get_task_status(&self, task_id: i64) -> Result<ApiResponse, MobizonError> {
        let task_id = TaskId::new(task_id)?;
        let form = transport::encode_task_status_form(task_id);
        self.call(Endpoint::TaskQueueStatus, Some(form)).await
    }

    async fn call(
        &self,
        endpoint: Endpoint,
        form: Option<Vec<(String, String)>>,
    ) -> Result<ApiResponse, MobizonError> {
        let url = transport::api_url(&self.config, endpoint)
            .map_err(|err| ApiError::Transport(Box::new(err)))?;

        let response = match form {
            Some(params) => {
                debug!(path = endpoint.path(), fields = params.len(), "POST");
                self.http.post_form(url.as_str(), params).await
            }
            None => {
                debug!(path = endpoint.path(), "GET");
                self.http.get(url.as_str()).await
            }
        }
        .map_err(ApiError::Transport)?;

        debug!(path = endpoint.path(), status = response.status, "response");

        if !(200..=299).contains(&response.status) {
            let body = if response.body.trim().is_empty() {
                None
            } else {
                Some(response.body)
            };
            return Err(ApiError::HttpStatus {
                status: response.status,
                body,
            }
            .into());
        }

        Ok(ApiResponse::new(self.config.format(), response.body))
    }
}
