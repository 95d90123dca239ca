use std::env;
use std::fmt;

const DEFAULT_REGION: &str = "us-east-1";
const DEFAULT_PREFIX: &str = "data/";

/// Connection settings for the test data uploader
#[derive(Clone, PartialEq, Eq)]
pub struct UploaderConfig {
    pub access_key_id: Option<String>,
    pub secret_access_key: Option<String>,
    pub region: String,
    /// Not validated here; an empty bucket fails at upload time.
    pub bucket: String,
    /// Always ends with `/`
    pub prefix: String,
    /// Custom endpoint for S3-compatible stores (MinIO, LocalStack)
    pub endpoint: Option<String>,
}

impl UploaderConfig {
    /// Load configuration from `.env` (if present) and the process environment
    pub fn from_env() -> Self {
        if let Ok(path) = dotenvy::dotenv() {
            log::debug!("Loaded environment from {}", path.display());
        }
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build configuration from an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            access_key_id: lookup("AWS_ACCESS_KEY_ID"),
            secret_access_key: lookup("AWS_SECRET_ACCESS_KEY"),
            region: lookup("AWS_REGION").unwrap_or_else(|| DEFAULT_REGION.to_string()),
            bucket: lookup("S3_BUCKET_NAME").unwrap_or_default(),
            prefix: normalize_prefix(
                &lookup("S3_PREFIX").unwrap_or_else(|| DEFAULT_PREFIX.to_string()),
            ),
            endpoint: lookup("S3_ENDPOINT_URL").filter(|e| !e.is_empty()),
        }
    }

    /// Get the full object key for a file name
    pub fn object_key(&self, filename: &str) -> String {
        format!("{}{}", self.prefix, filename)
    }
}

impl fmt::Debug for UploaderConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UploaderConfig")
            .field("access_key_id", &self.access_key_id)
            .field(
                "secret_access_key",
                &self.secret_access_key.as_ref().map(|_| "<redacted>"),
            )
            .field("region", &self.region)
            .field("bucket", &self.bucket)
            .field("prefix", &self.prefix)
            .field("endpoint", &self.endpoint)
            .finish()
    }
}

/// Ensure a key prefix ends with a slash
pub fn normalize_prefix(prefix: &str) -> String {
    if prefix.ends_with('/') {
        prefix.to_string()
    } else {
        format!("{}/", prefix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> UploaderConfig {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        UploaderConfig::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]);
        assert_eq!(config.region, "us-east-1");
        assert_eq!(config.prefix, "data/");
        assert_eq!(config.bucket, "");
        assert!(config.access_key_id.is_none());
        assert!(config.endpoint.is_none());
    }

    #[test]
    fn test_prefix_normalized() {
        let config = config_from(&[("S3_PREFIX", "raw/metrics"), ("S3_BUCKET_NAME", "test-bucket")]);
        assert_eq!(config.prefix, "raw/metrics/");
        assert_eq!(
            config.object_key("sample-metrics.csv"),
            "raw/metrics/sample-metrics.csv"
        );
        assert_eq!(normalize_prefix("data/"), "data/");
    }

    #[test]
    fn test_debug_redacts_secret() {
        let config = config_from(&[
            ("AWS_ACCESS_KEY_ID", "AKIAEXAMPLE"),
            ("AWS_SECRET_ACCESS_KEY", "super-secret"),
        ]);
        let debug = format!("{:?}", config);
        assert!(debug.contains("AKIAEXAMPLE"));
        assert!(!debug.contains("super-secret"));
    }
}
