use serde::Deserialize;

/// Application configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Path to the movies CSV file (needs `title` and `genres` columns)
    #[serde(default = "default_movies_path")]
    pub movies_path: String,

    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,

    /// How many similar movies to return when the caller does not say
    #[serde(default = "default_num_recommendations")]
    pub num_recommendations: usize,

    /// Number of random titles shown by the CLI `list` command
    #[serde(default = "default_sample_size")]
    pub sample_size: usize,
}

fn default_movies_path() -> String {
    "movies.csv".to_string()
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_num_recommendations() -> usize {
    5
}

fn default_sample_size() -> usize {
    20
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        envy::from_env::<Config>().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))
    }

    /// Socket address string the server binds to
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
