//! Server configuration, layered with figment.
//!
//! Precedence, lowest first: built-in defaults, `carrent.yaml`,
//! `CARRENT_*` environment variables (`__` separates nested keys, e.g.
//! `CARRENT_DATABASE__URL`), and finally a bare `PORT`.

use std::path::Path;

use carrent_auth::AuthConfig;
use carrent_db::DbConfig;
use carrent_imagekit::ImageKitConfig;
use carrent_owner::ImagePolicies;
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Yaml};
use serde::{Deserialize, Serialize};

pub const DEFAULT_CONFIG_FILE: &str = "carrent.yaml";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Upper bound on request bodies, multipart uploads included.
    pub max_upload_bytes: usize,
    pub database: DbConfig,
    pub auth: AuthConfig,
    pub imagekit: ImageKitConfig,
    pub images: ImagePolicies,
    pub cors: CorsConfig,
}

/// Cross-origin policy for the browser client. `"*"` in a list allows
/// any value.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
    pub allowed_methods: Vec<String>,
    pub allowed_headers: Vec<String>,
    /// Ignored while `allowed_origins` contains `"*"`.
    pub allow_credentials: bool,
    /// Preflight cache lifetime; `0` leaves it to the browser.
    pub max_age_seconds: u64,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: vec!["*".into()],
            allowed_methods: vec!["*".into()],
            allowed_headers: vec!["*".into()],
            allow_credentials: false,
            max_age_seconds: 0,
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".into(),
            port: 3000,
            max_upload_bytes: 10 * 1024 * 1024,
            database: DbConfig::default(),
            auth: AuthConfig::default(),
            imagekit: ImageKitConfig::default(),
            images: ImagePolicies::default(),
            cors: CorsConfig::default(),
        }
    }
}

impl ServerConfig {
    pub fn figment(path: impl AsRef<Path>) -> Figment {
        Figment::from(Serialized::defaults(ServerConfig::default()))
            .merge(Yaml::file(path.as_ref()))
            .merge(Env::prefixed("CARRENT_").split("__"))
            .merge(Env::raw().only(&["PORT"]))
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, Box<figment::Error>> {
        Self::figment(path).extract().map_err(Box::new)
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cfg = ServerConfig::default();
        assert_eq!(cfg.port, 3000);
        assert_eq!(cfg.max_upload_bytes, 10 * 1024 * 1024);
        assert_eq!(cfg.images.cars.width, 1280);
        assert_eq!(cfg.bind_addr(), "0.0.0.0:3000");
        assert_eq!(cfg.cors.allowed_origins, vec!["*".to_string()]);
        assert!(!cfg.cors.allow_credentials);
    }

    #[test]
    fn cors_origins_can_be_restricted() {
        let cfg: ServerConfig = Figment::from(Serialized::defaults(ServerConfig::default()))
            .merge(Serialized::default(
                "cors.allowed_origins",
                vec!["https://owner.example"],
            ))
            .extract()
            .unwrap();
        assert_eq!(cfg.cors.allowed_origins, vec!["https://owner.example".to_string()]);
        assert_eq!(cfg.cors.allowed_methods, vec!["*".to_string()]);
    }

    #[test]
    fn nested_values_override_defaults() {
        let cfg: ServerConfig = Figment::from(Serialized::defaults(ServerConfig::default()))
            .merge(Serialized::default("port", 8080))
            .merge(Serialized::default("database.url", "mem://"))
            .merge(Serialized::default("images.users.width", 200))
            .extract()
            .unwrap();

        assert_eq!(cfg.port, 8080);
        assert_eq!(cfg.database.url, "mem://");
        assert_eq!(cfg.database.namespace, "carrent");
        assert_eq!(cfg.images.users.width, 200);
        assert_eq!(cfg.images.users.folder, "/users");
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let cfg: ServerConfig = Figment::from(Serialized::defaults(ServerConfig::default()))
            .merge(Yaml::file("does-not-exist.yaml"))
            .extract()
            .unwrap();
        assert_eq!(cfg.host, "0.0.0.0");
    }
}
