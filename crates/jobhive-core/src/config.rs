//! Configuration module
//!
//! Settings for the storage backend, the public gateway, the accessibility
//! probe and the per-category upload policies.
//!
//! The configuration is read once at process start. The clients built from it
//! are shared behind `Arc` for the life of the process and never torn down.

use std::env;
use std::time::Duration;

use crate::constants::{
    ACCESS_PROBE_DELAY_MS, ACCESS_PROBE_MAX_ATTEMPTS, DEFAULT_GATEWAY_BASE_URL,
    DEFAULT_PINATA_API_URL, DEFAULT_PINATA_UPLOAD_URL, DOCUMENT_ALLOWED_CONTENT_TYPES,
    IMAGE_ALLOWED_CONTENT_TYPES, MAX_DOCUMENT_SIZE_BYTES, MAX_IMAGE_SIZE_BYTES,
};
use crate::models::{PolicyKind, UploadCategory, UploadPolicy};
use crate::retry::RetryPolicy;

const HTTP_TIMEOUT_SECS: u64 = 60;

/// Application configuration
#[derive(Clone, Debug)]
pub struct Config {
    environment: String,
    pinata_jwt: String,
    pinata_api_url: String,
    pinata_upload_url: String,
    gateway_base_url: String,
    http_timeout_secs: u64,
    probe_max_attempts: u32,
    probe_delay_ms: u64,
    image_policy: UploadPolicy,
    document_policy: UploadPolicy,
}

impl Config {
    /// Configuration with default endpoints and policies for the given Pinata JWT.
    pub fn new(pinata_jwt: impl Into<String>) -> Self {
        Self {
            environment: "development".to_string(),
            pinata_jwt: pinata_jwt.into(),
            pinata_api_url: DEFAULT_PINATA_API_URL.to_string(),
            pinata_upload_url: DEFAULT_PINATA_UPLOAD_URL.to_string(),
            gateway_base_url: DEFAULT_GATEWAY_BASE_URL.to_string(),
            http_timeout_secs: HTTP_TIMEOUT_SECS,
            probe_max_attempts: ACCESS_PROBE_MAX_ATTEMPTS,
            probe_delay_ms: ACCESS_PROBE_DELAY_MS,
            image_policy: UploadPolicy::images(),
            document_policy: UploadPolicy::documents(),
        }
    }

    pub fn from_env() -> Result<Self, anyhow::Error> {
        dotenvy::dotenv().ok();

        let environment = env::var("ENVIRONMENT")
            .or_else(|_| env::var("APP_ENV"))
            .unwrap_or_else(|_| "development".to_string());

        let pinata_jwt = env::var("PINATA_JWT").unwrap_or_default();

        let image_policy = UploadPolicy::new(
            parse_list(
                env::var("IMAGE_ALLOWED_CONTENT_TYPES").ok(),
                IMAGE_ALLOWED_CONTENT_TYPES,
            ),
            parse_or(env::var("MAX_IMAGE_SIZE_BYTES").ok(), MAX_IMAGE_SIZE_BYTES),
        );

        let document_policy = UploadPolicy::new(
            parse_list(
                env::var("DOCUMENT_ALLOWED_CONTENT_TYPES").ok(),
                DOCUMENT_ALLOWED_CONTENT_TYPES,
            ),
            parse_or(
                env::var("MAX_DOCUMENT_SIZE_BYTES").ok(),
                MAX_DOCUMENT_SIZE_BYTES,
            ),
        );

        Ok(Self {
            environment,
            pinata_jwt,
            pinata_api_url: env::var("PINATA_API_URL")
                .unwrap_or_else(|_| DEFAULT_PINATA_API_URL.to_string()),
            pinata_upload_url: env::var("PINATA_UPLOAD_URL")
                .unwrap_or_else(|_| DEFAULT_PINATA_UPLOAD_URL.to_string()),
            gateway_base_url: env::var("GATEWAY_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_GATEWAY_BASE_URL.to_string()),
            http_timeout_secs: parse_or(env::var("HTTP_TIMEOUT_SECONDS").ok(), HTTP_TIMEOUT_SECS),
            probe_max_attempts: parse_or(
                env::var("ACCESS_PROBE_MAX_ATTEMPTS").ok(),
                ACCESS_PROBE_MAX_ATTEMPTS,
            ),
            probe_delay_ms: parse_or(
                env::var("ACCESS_PROBE_DELAY_MS").ok(),
                ACCESS_PROBE_DELAY_MS,
            ),
            image_policy,
            document_policy,
        })
    }

    pub fn validate(&self) -> Result<(), anyhow::Error> {
        if self.pinata_jwt.trim().is_empty() {
            return Err(anyhow::anyhow!("PINATA_JWT must be set"));
        }

        for (name, url) in [
            ("PINATA_API_URL", &self.pinata_api_url),
            ("PINATA_UPLOAD_URL", &self.pinata_upload_url),
            ("GATEWAY_BASE_URL", &self.gateway_base_url),
        ] {
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                return Err(anyhow::anyhow!(
                    "{} must be an http(s) URL, got '{}'",
                    name,
                    url
                ));
            }
        }

        if self.probe_max_attempts == 0 {
            return Err(anyhow::anyhow!(
                "ACCESS_PROBE_MAX_ATTEMPTS must be at least 1"
            ));
        }

        if self.image_policy.allowed_media_types.is_empty()
            || self.document_policy.allowed_media_types.is_empty()
        {
            return Err(anyhow::anyhow!(
                "Allowed content type lists must not be empty"
            ));
        }

        Ok(())
    }

    /// Check if the application is running in production mode
    pub fn is_production(&self) -> bool {
        let env = self.environment.to_lowercase();
        env == "production" || env == "prod"
    }

    pub fn environment(&self) -> &str {
        &self.environment
    }

    pub fn pinata_jwt(&self) -> &str {
        &self.pinata_jwt
    }

    pub fn pinata_api_url(&self) -> &str {
        &self.pinata_api_url
    }

    pub fn pinata_upload_url(&self) -> &str {
        &self.pinata_upload_url
    }

    pub fn gateway_base_url(&self) -> &str {
        &self.gateway_base_url
    }

    pub fn http_timeout(&self) -> Duration {
        Duration::from_secs(self.http_timeout_secs)
    }

    pub fn probe_retry_policy(&self) -> RetryPolicy {
        RetryPolicy::new(
            self.probe_max_attempts,
            Duration::from_millis(self.probe_delay_ms),
        )
    }

    pub fn policy_for(&self, category: UploadCategory) -> &UploadPolicy {
        match category.policy_kind() {
            PolicyKind::Image => &self.image_policy,
            PolicyKind::Document => &self.document_policy,
        }
    }

    pub fn with_pinata_urls(
        mut self,
        api_url: impl Into<String>,
        upload_url: impl Into<String>,
    ) -> Self {
        self.pinata_api_url = api_url.into();
        self.pinata_upload_url = upload_url.into();
        self
    }

    pub fn with_gateway_base_url(mut self, url: impl Into<String>) -> Self {
        self.gateway_base_url = url.into();
        self
    }

    pub fn with_probe_retry(mut self, policy: RetryPolicy) -> Self {
        self.probe_max_attempts = policy.max_attempts;
        self.probe_delay_ms = policy.delay.as_millis() as u64;
        self
    }
}

fn parse_or<T: std::str::FromStr>(value: Option<String>, default: T) -> T {
    value
        .and_then(|v| v.trim().parse::<T>().ok())
        .unwrap_or(default)
}

fn parse_list(value: Option<String>, default: &[&str]) -> Vec<String> {
    match value {
        Some(v) if !v.trim().is_empty() => v
            .split(',')
            .map(|s| s.trim().to_lowercase())
            .filter(|s| !s.is_empty())
            .collect(),
        _ => default.iter().map(|s| s.to_string()).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::new("jwt");
        assert_eq!(config.gateway_base_url(), "https://gateway.pinata.cloud");
        assert_eq!(config.probe_retry_policy(), RetryPolicy::default());
        assert_eq!(config.http_timeout(), Duration::from_secs(60));
        assert!(!config.is_production());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_policy_for_category() {
        let config = Config::new("jwt");
        assert_eq!(
            config.policy_for(UploadCategory::ProfileImage),
            &UploadPolicy::images()
        );
        assert_eq!(
            config.policy_for(UploadCategory::Resume),
            &UploadPolicy::documents()
        );
        assert_eq!(
            config.policy_for(UploadCategory::CompanyLicense),
            &UploadPolicy::documents()
        );
    }

    #[test]
    fn test_validate_rejects_missing_jwt() {
        assert!(Config::new("  ").validate().is_err());
    }

    #[test]
    fn test_validate_rejects_bad_urls_and_zero_attempts() {
        let config = Config::new("jwt").with_gateway_base_url("gateway.pinata.cloud");
        assert!(config.validate().is_err());

        let config = Config::new("jwt").with_probe_retry(RetryPolicy::immediate(0));
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_parse_helpers() {
        assert_eq!(parse_or(Some(" 7 ".to_string()), 3u32), 7);
        assert_eq!(parse_or(Some("seven".to_string()), 3u32), 3);
        assert_eq!(parse_or::<u32>(None, 3), 3);

        assert_eq!(
            parse_list(Some("Image/PNG, image/webp,".to_string()), &["x"]),
            vec!["image/png", "image/webp"]
        );
        assert_eq!(parse_list(Some("   ".to_string()), &["x"]), vec!["x"]);
    }
}
