use serde::Deserialize;

/// Application configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Catalog search API base URL
    #[serde(default = "default_catalog_api_url")]
    pub catalog_api_url: String,

    /// Stream resolution API base URL, tried first
    #[serde(default = "default_resolver_api_url")]
    pub resolver_api_url: String,

    /// Stream resolution API fallback base URL, tried when the primary
    /// endpoint fails or returns a placeholder item
    #[serde(default = "default_resolver_fallback_url")]
    pub resolver_fallback_url: String,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5000
}

fn default_catalog_api_url() -> String {
    "https://yewtu.be".to_string()
}

fn default_resolver_api_url() -> String {
    "https://yewtu.be".to_string()
}

fn default_resolver_fallback_url() -> String {
    "https://inv.nadeko.net".to_string()
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        envy::from_env::<Config>().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))
    }
}
