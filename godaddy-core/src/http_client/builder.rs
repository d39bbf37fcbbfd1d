use crate::config::ClientConfig;
use crate::context::RequestContext;
use crate::error::{ContextExt, Error, Result};
use crate::rate_limiter::RateLimiter;
use reqwest::header::HeaderValue;
use std::sync::Arc;
use tracing::{error, info, instrument, warn};

use super::logger::{NoopLogger, RequestLogger};
use super::transport::{HttpTransport, ReqwestTransport};

/// Rate-limited, retrying client for the GoDaddy REST API.
///
/// Cheap to clone; clones share the rate limiter, transport and logger, so
/// the request quota is enforced across all of them. The configuration is
/// never mutated after construction.
#[derive(Debug, Clone)]
pub struct Client {
    config: Arc<ClientConfig>,
    auth_header: HeaderValue,
    user_agent: HeaderValue,
    transport: Arc<dyn HttpTransport>,
    rate_limiter: RateLimiter,
    logger: Arc<dyn RequestLogger>,
}

impl Client {
    /// Builds a client with the default transport and validates the
    /// credentials against the API.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the validation
    /// call fails for any reason other than an exhausted quota.
    pub async fn new(config: ClientConfig) -> Result<Self> {
        ClientBuilder::new(config).build().await
    }

    /// Starts a builder for injecting a transport, logger or limiter.
    pub fn builder(config: ClientConfig) -> ClientBuilder {
        ClientBuilder::new(config)
    }

    /// Assembles a client without touching the network.
    pub(crate) fn from_parts(
        config: ClientConfig,
        transport: Arc<dyn HttpTransport>,
        rate_limiter: RateLimiter,
        logger: Arc<dyn RequestLogger>,
    ) -> Result<Self> {
        let auth_header = config.credentials.authorization_header()?;
        let user_agent = HeaderValue::from_str(&config.user_agent)
            .map_err(|_| Error::invalid_request("User-Agent contains invalid header characters"))?;

        Ok(Self {
            config: Arc::new(config),
            auth_header,
            user_agent,
            transport,
            rate_limiter,
            logger,
        })
    }

    /// Returns the configuration the client was built with.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Returns the shared rate limiter.
    pub fn rate_limiter(&self) -> &RateLimiter {
        &self.rate_limiter
    }

    pub(crate) fn auth_header(&self) -> &HeaderValue {
        &self.auth_header
    }

    pub(crate) fn user_agent(&self) -> &HeaderValue {
        &self.user_agent
    }

    pub(crate) fn transport(&self) -> &dyn HttpTransport {
        self.transport.as_ref()
    }

    pub(crate) fn logger(&self) -> &dyn RequestLogger {
        self.logger.as_ref()
    }

    /// Probes the validation path once, discarding the body.
    ///
    /// A `QUOTA_EXCEEDED` answer is tolerated: quotas are per endpoint, so
    /// hitting it here says nothing about the credentials or about other
    /// endpoints.
    #[instrument(name = "godaddy_validate", skip(self, ctx), fields(path = %self.config.validation_path))]
    pub(crate) async fn validate(&self, ctx: &RequestContext) -> Result<()> {
        match self
            .get_no_content_with_context(ctx, &self.config.validation_path)
            .await
        {
            Ok(()) => {
                info!("GoDaddy credentials validated");
                Ok(())
            }
            Err(e) if e.is_quota_exceeded() => {
                warn!(
                    error = %e,
                    "Quota exceeded on validation endpoint, continuing; other endpoints keep their own quota"
                );
                Ok(())
            }
            Err(e) => {
                error!(error = %e, "GoDaddy client validation failed");
                Err(e)
            }
        }
    }
}

/// Builder for [`Client`].
///
/// # Example
///
/// ```rust,no_run
/// use godaddy_core::config::ClientConfig;
/// use godaddy_core::http_client::{Client, TracingRequestLogger};
/// use std::sync::Arc;
///
/// # async fn example() -> godaddy_core::Result<()> {
/// let client = Client::builder(ClientConfig::new("key", "secret"))
///     .logger(Arc::new(TracingRequestLogger))
///     .build()
///     .await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct ClientBuilder {
    config: ClientConfig,
    transport: Option<Arc<dyn HttpTransport>>,
    rate_limiter: Option<RateLimiter>,
    logger: Option<Arc<dyn RequestLogger>>,
}

impl ClientBuilder {
    /// Creates a builder around `config`.
    pub fn new(config: ClientConfig) -> Self {
        Self {
            config,
            transport: None,
            rate_limiter: None,
            logger: None,
        }
    }

    /// Replaces the default reqwest transport.
    pub fn transport(mut self, transport: Arc<dyn HttpTransport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Shares an existing rate limiter instead of creating one from the config.
    pub fn rate_limiter(mut self, rate_limiter: RateLimiter) -> Self {
        self.rate_limiter = Some(rate_limiter);
        self
    }

    /// Installs a request/response observer.
    pub fn logger(mut self, logger: Arc<dyn RequestLogger>) -> Self {
        self.logger = Some(logger);
        self
    }

    /// Builds and validates the client with no cancellation.
    pub async fn build(self) -> Result<Client> {
        self.build_with_context(&RequestContext::background()).await
    }

    /// Builds the client, running the validation call under `ctx`.
    #[instrument(name = "godaddy_client_build", skip(self, ctx), fields(endpoint = %self.config.endpoint))]
    pub async fn build_with_context(self, ctx: &RequestContext) -> Result<Client> {
        let client = self.build_unvalidated()?;
        client
            .validate(ctx)
            .await
            .context("validating GoDaddy client")?;
        Ok(client)
    }

    pub(crate) fn build_unvalidated(self) -> Result<Client> {
        let validation = self.config.validate()?;
        for warning in &validation.warnings {
            warn!(warning = %warning, "Client configuration warning");
        }

        let transport = match self.transport {
            Some(transport) => transport,
            None => Arc::new(ReqwestTransport::new()?),
        };
        let rate_limiter = self
            .rate_limiter
            .unwrap_or_else(|| RateLimiter::new(self.config.rate_limit));
        let logger = self.logger.unwrap_or_else(|| Arc::new(NoopLogger));

        Client::from_parts(self.config, transport, rate_limiter, logger)
    }
}
