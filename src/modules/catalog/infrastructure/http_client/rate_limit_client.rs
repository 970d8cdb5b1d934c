//! HTTP client with client-side rate limiting and retries
//!
//! Wraps `reqwest` with a `governor` token bucket so the process never
//! exceeds the catalog's published request budget.

use super::retry_policy::{is_retryable_error, RateLimitInfo, RetryPolicy};
use crate::shared::errors::{AppError, AppResult};
use governor::{
    clock::DefaultClock,
    middleware::NoOpMiddleware,
    state::{direct::NotKeyed, InMemoryState},
    Quota, RateLimiter as GovernorRateLimiter,
};
use reqwest::{Client, Response, StatusCode};
use std::num::NonZeroU32;
use std::time::Duration;
use tokio::time::sleep;
use tracing::{debug, warn};

type DirectRateLimiter = GovernorRateLimiter<NotKeyed, InMemoryState, DefaultClock, NoOpMiddleware>;

const USER_AGENT: &str = "mangashelf/0.1";

pub struct RateLimitClient {
    client: Client,
    rate_limiter: DirectRateLimiter,
    retry_policy: RetryPolicy,
    provider_name: String,
}

impl RateLimitClient {
    /// Client tuned for Jikan v4: ~60 req/min average with a burst of 3
    pub fn for_jikan() -> AppResult<Self> {
        Self::new("Jikan", RetryPolicy::jikan(), 1.0, 3)
    }

    pub fn new(
        provider_name: &str,
        retry_policy: RetryPolicy,
        requests_per_second: f64,
        burst_size: u32,
    ) -> AppResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| {
                AppError::ExternalServiceError(format!("Failed to create HTTP client: {}", e))
            })?;

        Ok(Self {
            client,
            rate_limiter: Self::create_rate_limiter(requests_per_second, burst_size)?,
            retry_policy,
            provider_name: provider_name.to_string(),
        })
    }

    fn create_rate_limiter(requests_per_second: f64, burst_size: u32) -> AppResult<DirectRateLimiter> {
        if requests_per_second <= 0.0 {
            return Err(AppError::ValidationError(
                "Request rate must be positive".to_string(),
            ));
        }
        let period = Duration::from_secs_f64(1.0 / requests_per_second);
        let burst = NonZeroU32::new(burst_size.max(1)).unwrap_or(NonZeroU32::MIN);
        let quota = Quota::with_period(period)
            .ok_or_else(|| AppError::ValidationError("Request period must be non-zero".to_string()))?
            .allow_burst(burst);

        Ok(GovernorRateLimiter::direct(quota))
    }

    /// GET `url` with `query`, deserializing a JSON body.
    /// A 404 is reported as `AppError::NotFound`.
    pub async fn get_json<T, Q>(&self, url: &str, query: &Q) -> AppResult<T>
    where
        T: serde::de::DeserializeOwned,
        Q: serde::Serialize + ?Sized,
    {
        let mut attempt = 0;

        loop {
            self.rate_limiter.until_ready().await;
            debug!("{} GET {} (attempt {})", self.provider_name, url, attempt + 1);

            let outcome = self.client.get(url).query(query).send().await;
            let can_retry = attempt < self.retry_policy.max_retries;

            match outcome {
                Ok(response) if response.status().is_success() => {
                    return self.parse_response(response).await;
                }
                Ok(response) if response.status() == StatusCode::NOT_FOUND => {
                    return Err(AppError::NotFound(format!(
                        "{} resource not found: {}",
                        self.provider_name, url
                    )));
                }
                Ok(response) if response.status() == StatusCode::TOO_MANY_REQUESTS => {
                    if !can_retry {
                        return Err(AppError::RateLimitError(format!(
                            "{} API rate limit exceeded after {} attempts",
                            self.provider_name,
                            attempt + 1
                        )));
                    }
                    let info = RateLimitInfo::from_headers(response.headers());
                    let delay = self.retry_policy.calculate_delay(attempt, info.retry_after);
                    warn!(
                        "{} API rate limited (attempt {}). Waiting {:?} before retry.",
                        self.provider_name,
                        attempt + 1,
                        delay
                    );
                    sleep(delay).await;
                }
                Ok(response) if response.status().is_server_error() && can_retry => {
                    let delay = self.retry_policy.calculate_delay(attempt, None);
                    warn!(
                        "{} API returned {} (attempt {}). Retrying in {:?}",
                        self.provider_name,
                        response.status(),
                        attempt + 1,
                        delay
                    );
                    sleep(delay).await;
                }
                Ok(response) => {
                    let status = response.status();
                    return Err(if status.is_server_error() {
                        AppError::ExternalServiceError(format!(
                            "{} service unavailable: {}",
                            self.provider_name, status
                        ))
                    } else {
                        AppError::ApiError(format!(
                            "{} API returned error: {}",
                            self.provider_name, status
                        ))
                    });
                }
                Err(e) if is_retryable_error(&e) && can_retry => {
                    let delay = self.retry_policy.calculate_delay(attempt, None);
                    warn!(
                        "{} API request failed (attempt {}): {}. Retrying in {:?}",
                        self.provider_name,
                        attempt + 1,
                        e,
                        delay
                    );
                    sleep(delay).await;
                }
                Err(e) => return Err(AppError::from(e)),
            }

            attempt += 1;
        }
    }

    async fn parse_response<T>(&self, response: Response) -> AppResult<T>
    where
        T: serde::de::DeserializeOwned,
    {
        let response_text = response.text().await.map_err(|e| {
            AppError::SerializationError(format!(
                "Failed to read {} response: {}",
                self.provider_name, e
            ))
        })?;

        serde_json::from_str(&response_text).map_err(|e| {
            let preview: String = response_text.chars().take(200).collect();
            AppError::SerializationError(format!(
                "Failed to parse {} response: {}. Response: {}",
                self.provider_name, e, preview
            ))
        })
    }

    /// Check if a request can be made now without waiting
    pub fn can_make_request_now(&self) -> bool {
        self.rate_limiter.check().is_ok()
    }

    pub fn provider_name(&self) -> &str {
        &self.provider_name
    }
}
