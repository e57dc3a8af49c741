//! Service configuration loaded via OrthoConfig.
//!
//! Store credentials come from `SUPABASE_*` variables; listener and batching
//! knobs from `SEEDER_*`. Missing credentials are not a startup failure: the
//! service starts and answers every request with a configuration error.

use std::net::{AddrParseError, SocketAddr};
use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::Deserialize;
use url::Url;

const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_BATCH_SIZE: usize = 250;
const DEFAULT_PHOTO_BATCH_SIZE: usize = 500;

/// Remote store credentials.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "SUPABASE")]
pub struct SupabaseSettings {
    /// Project base URL, e.g. `https://<ref>.supabase.co`.
    pub url: Option<String>,
    /// Service-role key sent as `apikey` and bearer credential.
    pub service_role_key: Option<String>,
    /// Per-request timeout in seconds.
    pub request_timeout_secs: Option<u64>,
}

/// Parsed store credentials.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreCredentials {
    /// Project base URL.
    pub url: Url,
    /// Service-role key.
    pub service_role_key: String,
}

impl SupabaseSettings {
    /// Credentials when both values are present, non-blank, and the URL
    /// parses.
    pub fn credentials(&self) -> Option<StoreCredentials> {
        let url = self.url.as_deref().map(str::trim).filter(|u| !u.is_empty())?;
        let key = self
            .service_role_key
            .as_deref()
            .map(str::trim)
            .filter(|k| !k.is_empty())?;
        Some(StoreCredentials {
            url: Url::parse(url).ok()?,
            service_role_key: key.to_owned(),
        })
    }

    /// Per-request timeout, defaulting to thirty seconds.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(
            self.request_timeout_secs
                .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS),
        )
    }
}

/// Listener, batching, and access settings.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "SEEDER")]
pub struct SeederSettings {
    /// Socket address to bind.
    pub bind_addr: Option<String>,
    /// Profile rows per write request.
    pub batch_size: Option<usize>,
    /// Photo rows per write request.
    pub photo_batch_size: Option<usize>,
    /// Exact bearer token required by the endpoints, when set.
    pub admin_token: Option<String>,
}

impl SeederSettings {
    /// Bind address, defaulting to `0.0.0.0:8080`.
    ///
    /// # Errors
    ///
    /// Returns an error when the configured address does not parse.
    pub fn bind_addr(&self) -> Result<SocketAddr, AddrParseError> {
        self.bind_addr
            .as_deref()
            .unwrap_or(DEFAULT_BIND_ADDR)
            .parse()
    }

    /// Profile rows per write request.
    pub fn batch_size(&self) -> usize {
        self.batch_size.unwrap_or(DEFAULT_BATCH_SIZE).max(1)
    }

    /// Photo rows per write request.
    pub fn photo_batch_size(&self) -> usize {
        self.photo_batch_size
            .unwrap_or(DEFAULT_PHOTO_BATCH_SIZE)
            .max(1)
    }

    /// Admin token, ignoring blank values.
    pub fn admin_token(&self) -> Option<String> {
        self.admin_token
            .as_deref()
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .map(str::to_owned)
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for configuration parsing.

    use super::*;
    use std::ffi::OsString;

    use env_lock::lock_env;
    use rstest::rstest;

    const SUPABASE_VARS: [&str; 3] = [
        "SUPABASE_URL",
        "SUPABASE_SERVICE_ROLE_KEY",
        "SUPABASE_REQUEST_TIMEOUT_SECS",
    ];
    const SEEDER_VARS: [&str; 4] = [
        "SEEDER_BIND_ADDR",
        "SEEDER_BATCH_SIZE",
        "SEEDER_PHOTO_BATCH_SIZE",
        "SEEDER_ADMIN_TOKEN",
    ];

    fn load_supabase() -> SupabaseSettings {
        SupabaseSettings::load_from_iter([OsString::from("demo-seeder")])
            .expect("config should load")
    }

    fn load_seeder() -> SeederSettings {
        SeederSettings::load_from_iter([OsString::from("demo-seeder")])
            .expect("config should load")
    }

    #[rstest]
    fn missing_credentials_yield_none() {
        let _guard = lock_env(SUPABASE_VARS.map(|name| (name, None::<String>)));

        let settings = load_supabase();
        assert!(settings.credentials().is_none());
        assert_eq!(settings.request_timeout(), Duration::from_secs(30));
    }

    #[rstest]
    fn credentials_are_read_from_environment() {
        let _guard = lock_env([
            ("SUPABASE_URL", Some("https://abc.supabase.co".to_owned())),
            ("SUPABASE_SERVICE_ROLE_KEY", Some("service-key".to_owned())),
            ("SUPABASE_REQUEST_TIMEOUT_SECS", Some("5".to_owned())),
        ]);

        let settings = load_supabase();
        let credentials = settings.credentials().expect("credentials present");
        assert_eq!(credentials.url.as_str(), "https://abc.supabase.co/");
        assert_eq!(credentials.service_role_key, "service-key");
        assert_eq!(settings.request_timeout(), Duration::from_secs(5));
    }

    #[rstest]
    #[case(Some("https://abc.supabase.co"), Some("   "))]
    #[case(Some(""), Some("service-key"))]
    #[case(Some("not a url"), Some("service-key"))]
    fn blank_or_invalid_credentials_yield_none(
        #[case] url: Option<&str>,
        #[case] key: Option<&str>,
    ) {
        let settings = SupabaseSettings {
            url: url.map(str::to_owned),
            service_role_key: key.map(str::to_owned),
            request_timeout_secs: None,
        };
        assert!(settings.credentials().is_none());
    }

    #[rstest]
    fn seeder_defaults_apply() {
        let _guard = lock_env(SEEDER_VARS.map(|name| (name, None::<String>)));

        let settings = load_seeder();
        assert_eq!(
            settings.bind_addr().expect("default parses"),
            "0.0.0.0:8080".parse::<SocketAddr>().expect("literal parses")
        );
        assert_eq!(settings.batch_size(), 250);
        assert_eq!(settings.photo_batch_size(), 500);
        assert_eq!(settings.admin_token(), None);
    }

    #[rstest]
    fn seeder_overrides_are_respected() {
        let _guard = lock_env([
            ("SEEDER_BIND_ADDR", Some("127.0.0.1:9090".to_owned())),
            ("SEEDER_BATCH_SIZE", Some("100".to_owned())),
            ("SEEDER_PHOTO_BATCH_SIZE", Some("0".to_owned())),
            ("SEEDER_ADMIN_TOKEN", Some("s3cret".to_owned())),
        ]);

        let settings = load_seeder();
        assert_eq!(
            settings.bind_addr().expect("override parses").port(),
            9090
        );
        assert_eq!(settings.batch_size(), 100);
        assert_eq!(settings.photo_batch_size(), 1);
        assert_eq!(settings.admin_token().as_deref(), Some("s3cret"));
    }
}
