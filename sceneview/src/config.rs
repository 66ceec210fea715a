use std::{env, fs, net::SocketAddr, path::PathBuf, str::FromStr};

use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Clone, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub http: Http,
    #[serde(default)]
    pub log: Log,
    #[serde(default)]
    pub data: Data,
    #[serde(default)]
    pub titles: Titles,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Http {
    #[serde(default = "default_http_listen")]
    pub listen: SocketAddr,
    #[serde(default)]
    pub cors: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Log {
    #[serde(default = "default_log_level")]
    pub level: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Data {
    /// Root directory holding one sub-directory of per-video JSON files
    /// per model.
    #[serde(default = "default_data_dir")]
    pub dir: PathBuf,
    /// Supported model identifiers. Listing an unknown model fails before
    /// any filesystem access.
    #[serde(default = "default_models")]
    pub models: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Titles {
    /// oEmbed endpoint used for display-title lookup.
    #[serde(default = "default_titles_endpoint")]
    pub endpoint: String,
}

fn default_http_listen() -> SocketAddr {
    SocketAddr::from_str(&format!(
        "0.0.0.0:{}",
        env::var("PORT").unwrap_or(String::from("8777"))
    ))
    .expect("invalid listen address")
}

impl Default for Http {
    fn default() -> Self {
        Self {
            listen: default_http_listen(),
            cors: Default::default(),
        }
    }
}

impl Default for Log {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    env::var("LOG_LEVEL").unwrap_or_else(|_| {
        if cfg!(debug_assertions) {
            "debug".to_string()
        } else {
            "info".to_string()
        }
    })
}

impl Default for Data {
    fn default() -> Self {
        Self {
            dir: default_data_dir(),
            models: default_models(),
        }
    }
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("data")
}

fn default_models() -> Vec<String> {
    vec!["model1".to_string(), "model2".to_string()]
}

impl Default for Titles {
    fn default() -> Self {
        Self {
            endpoint: default_titles_endpoint(),
        }
    }
}

fn default_titles_endpoint() -> String {
    "https://www.youtube.com/oembed".to_string()
}

impl Config {
    pub fn parse(path: Option<String>) -> Self {
        let result = fs::read_to_string(path.unwrap_or(String::from("sceneview.toml")))
            .or(fs::read_to_string("/etc/sceneview/sceneview.toml"))
            .unwrap_or("".to_string());
        let cfg: Self = toml::from_str(result.as_str()).expect("config parse error");
        match cfg.validate() {
            Ok(_) => cfg,
            Err(err) => panic!("config validate [{}]", err),
        }
    }

    fn validate(&self) -> anyhow::Result<()> {
        if self.data.models.is_empty() {
            return Err(anyhow::anyhow!("at least one model must be configured"));
        }
        for model in self.data.models.iter() {
            if model.is_empty() || model.contains(['/', '\\']) || model.contains("..") {
                return Err(anyhow::anyhow!("invalid model identifier: {:?}", model));
            }
        }
        Ok(())
    }
}
