//! Relay configuration: compiled defaults, then an optional `dev.toml` in
//! the working directory, then `REAMAZE_*` environment variables.

use std::fmt;
use std::net::{Ipv4Addr, SocketAddr};

use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};

/// Prefix shared by every environment override, e.g. `REAMAZE_BRAND`.
pub const ENV_PREFIX: &str = "REAMAZE_";

/// Optional settings file, read from the working directory when present.
pub const CONFIG_FILE: &str = "dev.toml";

#[derive(Clone, PartialEq, Serialize, Deserialize)]
pub struct RelayConfig {
    /// Login email of the Re:amaze API user.
    pub email: String,
    pub api_token: String,
    /// Brand subdomain, `{brand}.reamaze.io`.
    pub brand: String,
    /// Channel slug new conversations are filed under.
    pub category: String,
    pub listen_addr: SocketAddr,
    /// Overrides the brand URL; used to point the relay at a stub server.
    pub base_url: Option<String>,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            email: "test@example.com".to_string(),
            api_token: "dummy".to_string(),
            brand: "example".to_string(),
            category: "relations".to_string(),
            listen_addr: SocketAddr::from((Ipv4Addr::UNSPECIFIED, 8080)),
            base_url: None,
        }
    }
}

impl RelayConfig {
    /// Defaults merged with `dev.toml` and the process environment.
    pub fn load() -> Result<Self, figment::Error> {
        Self::figment().extract()
    }

    pub fn figment() -> Figment {
        Figment::new()
            .merge(Serialized::defaults(RelayConfig::default()))
            .merge(Toml::file(CONFIG_FILE))
            .merge(Env::prefixed(ENV_PREFIX))
    }
}

impl fmt::Debug for RelayConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RelayConfig")
            .field("email", &self.email)
            .field("api_token", &"[REDACTED]")
            .field("brand", &self.brand)
            .field("category", &self.category)
            .field("listen_addr", &self.listen_addr)
            .field("base_url", &self.base_url)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use figment::Jail;

    use super::*;

    #[test]
    fn defaults_apply_without_environment() {
        Jail::expect_with(|_| {
            let config = RelayConfig::load()?;
            assert_eq!(config, RelayConfig::default());
            assert_eq!(config.listen_addr.to_string(), "0.0.0.0:8080");
            assert_eq!(config.category, "relations");
            Ok(())
        });
    }

    #[test]
    fn environment_overrides_defaults() {
        Jail::expect_with(|jail| {
            jail.set_env("REAMAZE_EMAIL", "ops@acme.test");
            jail.set_env("REAMAZE_API_TOKEN", "s3cret-token");
            jail.set_env("REAMAZE_BRAND", "acme");
            jail.set_env("REAMAZE_CATEGORY", "sales");
            jail.set_env("REAMAZE_LISTEN_ADDR", "127.0.0.1:9090");
            jail.set_env("REAMAZE_BASE_URL", "http://127.0.0.1:9999");

            let config = RelayConfig::load()?;
            assert_eq!(config.email, "ops@acme.test");
            assert_eq!(config.api_token, "s3cret-token");
            assert_eq!(config.brand, "acme");
            assert_eq!(config.category, "sales");
            assert_eq!(config.listen_addr.port(), 9090);
            assert_eq!(config.base_url.as_deref(), Some("http://127.0.0.1:9999"));
            Ok(())
        });
    }

    #[test]
    fn settings_file_sits_between_defaults_and_environment() {
        Jail::expect_with(|jail| {
            jail.create_file(
                CONFIG_FILE,
                r#"
                brand = "filebrand"
                category = "partners"
                listen_addr = "127.0.0.1:7070"
                "#,
            )?;
            jail.set_env("REAMAZE_CATEGORY", "sales");

            let config = RelayConfig::load()?;
            assert_eq!(config.brand, "filebrand");
            assert_eq!(config.category, "sales");
            assert_eq!(config.listen_addr.port(), 7070);
            assert_eq!(config.email, "test@example.com");
            Ok(())
        });
    }

    #[test]
    fn invalid_listen_addr_is_an_error() {
        Jail::expect_with(|jail| {
            jail.set_env("REAMAZE_LISTEN_ADDR", "not-an-address");
            assert!(RelayConfig::load().is_err());
            Ok(())
        });
    }

    #[test]
    fn debug_hides_token() {
        let debug = format!("{:?}", RelayConfig::default());
        assert!(debug.contains("example"));
        assert!(!debug.contains("dummy"));
    }
}
