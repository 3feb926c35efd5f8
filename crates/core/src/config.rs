use serde::Deserialize;

use crate::services::tmdb::TMDB_BASE_URL;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Empty or placeholder keys leave the catalog running on synthesized data
    #[serde(default)]
    pub tmdb_api_key: String,

    #[serde(default = "default_tmdb_base_url")]
    pub tmdb_base_url: String,

    /// Directory holding the persisted wishlist
    #[serde(default = "default_data_dir")]
    pub data_dir: String,

    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Built front end to serve next to the API; API-only when unset
    #[serde(default)]
    pub static_dir: Option<String>,
}

fn default_tmdb_base_url() -> String {
    TMDB_BASE_URL.to_string()
}

fn default_data_dir() -> String {
    "./data".to_string()
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tmdb_api_key: String::new(),
            tmdb_base_url: default_tmdb_base_url(),
            data_dir: default_data_dir(),
            host: default_host(),
            port: default_port(),
            static_dir: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, envy::Error> {
        envy::from_env::<Config>()
    }

    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_leave_upstream_unconfigured() {
        let config: Config = envy::from_iter(Vec::<(String, String)>::new()).unwrap();
        assert!(config.tmdb_api_key.is_empty());
        assert_eq!(config.tmdb_base_url, "https://api.themoviedb.org/3");
        assert_eq!(config.data_dir, "./data");
        assert_eq!(config.server_addr(), "0.0.0.0:3000");
        assert!(config.static_dir.is_none());
    }

    #[test]
    fn test_reads_values_from_environment_pairs() {
        let config: Config = envy::from_iter(vec![
            ("TMDB_API_KEY".to_string(), "abcdef0123456789".to_string()),
            ("PORT".to_string(), "8080".to_string()),
            ("DATA_DIR".to_string(), "/var/lib/cinefront".to_string()),
            ("STATIC_DIR".to_string(), "./frontend/dist".to_string()),
        ])
        .unwrap();
        assert_eq!(config.tmdb_api_key, "abcdef0123456789");
        assert_eq!(config.port, 8080);
        assert_eq!(config.data_dir, "/var/lib/cinefront");
        assert_eq!(config.static_dir.as_deref(), Some("./frontend/dist"));
        assert_eq!(config.server_addr(), "0.0.0.0:8080");
    }
}
