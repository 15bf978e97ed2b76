use std::{str::FromStr, time::Duration};

use reqwest::{
    ClientBuilder as BaseClientBuilder,
    header::{HeaderMap, HeaderName, HeaderValue},
};
use reqwest_middleware::{ClientBuilder as RetryableClientBuilder, ClientWithMiddleware};
use reqwest_retry::{RetryTransientMiddleware, policies::ExponentialBackoff};
use tracing::{debug, info};

use crate::{
    errors::ApiClientError,
    request::Request,
    traits::{ApiResponse, HttpMethod},
};

const REQUEST_TIMEOUT_SECONDS: u64 = 30;
const MIN_SECS_BACKOFF: u64 = 1;
const MAX_SECS_BACKOFF: u64 = 5;
// the upstream is called once unless retries are asked for
const MAX_RETRY: u32 = 0;

const USER_AGENT: &str = "flow-shop-storefront/0.1";

#[derive(Debug, Clone)]
pub struct ClientSettings {
    pub timeout: Duration,
    pub min_backoff: Duration,
    pub max_backoff: Duration,
    pub max_retries: u32,
    pub https_only: bool,
    pub user_agent: String,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(REQUEST_TIMEOUT_SECONDS),
            min_backoff: Duration::from_secs(MIN_SECS_BACKOFF),
            max_backoff: Duration::from_secs(MAX_SECS_BACKOFF),
            max_retries: MAX_RETRY,
            https_only: true,
            user_agent: USER_AGENT.into(),
        }
    }
}

/// HTTP client for the upstream commerce API. Cheap to clone.
#[derive(Clone)]
pub struct ApiClient {
    client: ClientWithMiddleware,
}

impl ApiClient {
    pub fn new(settings: &ClientSettings) -> Result<Self, ApiClientError> {
        let base_client = BaseClientBuilder::new()
            .gzip(true)
            .timeout(settings.timeout)
            .user_agent(settings.user_agent.clone())
            .https_only(settings.https_only)
            .build()
            .map_err(|err| ApiClientError::ClientBuild(err.to_string()))?;

        let retry_strat = ExponentialBackoff::builder()
            .retry_bounds(settings.min_backoff, settings.max_backoff)
            .build_with_max_retries(settings.max_retries);
        let retry_middleware = RetryTransientMiddleware::new_with_policy(retry_strat);

        let client = RetryableClientBuilder::new(base_client)
            .with(retry_middleware)
            .build();

        Ok(Self { client })
    }

    pub async fn send(&self, request: Request) -> Result<ApiResponse, ApiClientError> {
        let mut request_builder = match request.method {
            HttpMethod::GET => self.client.get(request.url.clone()),
            HttpMethod::POST => self.client.post(request.url.clone()),
        };

        if let Some(json) = request.json {
            request_builder = request_builder.json(&json);
        }

        if !request.headers.is_empty() {
            let mut header_map = HeaderMap::new();

            for (key, value) in request.headers.iter() {
                header_map.append(HeaderName::from_str(key)?, HeaderValue::from_str(value)?);
            }

            request_builder = request_builder.headers(header_map);
        }

        info!("Sending {:?} request to {}", request.method, request.url);

        let response = request_builder.send().await?;

        debug!("{response:?}");

        let status = response.status();

        if !status.is_success() {
            return Err(ApiClientError::UnexpectedStatus(status.as_u16()));
        }

        let body = response.text().await?;

        Ok(ApiResponse { status, body })
    }
}
