use crate::error::DocDeckError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::str::FromStr;

/// How `/generate-slides` turns LLM output into slides
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SlideMode {
    /// Return the raw LLM text as a single title slide
    #[default]
    Raw,
    /// Run the LLM text through the slide parser
    Parsed,
}

impl FromStr for SlideMode {
    type Err = DocDeckError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "raw" => Ok(Self::Raw),
            "parsed" => Ok(Self::Parsed),
            other => Err(DocDeckError::config(format!(
                "Invalid slide mode '{}', expected 'raw' or 'parsed'",
                other
            ))),
        }
    }
}

/// DocDeck application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Directory for transient upload files
    pub upload_dir: PathBuf,

    /// Groq API key
    #[serde(skip_serializing)]
    pub groq_api_key: String,

    /// OpenAI-compatible API base URL
    pub llm_base_url: String,

    /// Chat completion model name
    pub llm_model: String,

    /// LLM request timeout in seconds
    pub llm_timeout_secs: u64,

    /// Server bind address
    pub server_host: String,

    /// Server port
    pub server_port: u16,

    /// Origins allowed by the CORS policy
    pub cors_allowed_origins: Vec<String>,

    /// Slide generation response mode
    pub slide_mode: SlideMode,

    /// Log directory
    pub log_dir: PathBuf,

    /// Log level
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            upload_dir: PathBuf::from("./uploads"),
            groq_api_key: String::new(),
            llm_base_url: "https://api.groq.com/openai/v1".to_string(),
            llm_model: "meta-llama/llama-4-scout-17b-16e-instruct".to_string(),
            llm_timeout_secs: 60,
            server_host: "0.0.0.0".to_string(),
            server_port: 5000,
            cors_allowed_origins: vec!["http://localhost:3000".to_string()],
            slide_mode: SlideMode::Raw,
            log_dir: PathBuf::from("./logs"),
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables and .env file
    pub fn from_env() -> Result<Self, DocDeckError> {
        // Load .env file (ignore if not exists)
        let _ = dotenv::dotenv();

        let config = Self::from_lookup(|key| std::env::var(key).ok())?;

        // Ensure required directories exist
        config.ensure_directories()?;

        Ok(config)
    }

    /// Build configuration from an arbitrary variable source
    pub fn from_lookup<F>(lookup: F) -> Result<Self, DocDeckError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let groq_api_key = lookup("GROQ_API_KEY")
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| DocDeckError::config("GROQ_API_KEY environment variable is not set"))?;

        let server_port = match lookup("SERVER_PORT") {
            Some(port) => port.parse::<u16>().map_err(|e| {
                DocDeckError::config(format!("Invalid SERVER_PORT '{}': {}", port, e))
            })?,
            None => defaults.server_port,
        };

        let llm_timeout_secs = match lookup("LLM_TIMEOUT_SECS") {
            Some(secs) => secs.parse::<u64>().map_err(|e| {
                DocDeckError::config(format!("Invalid LLM_TIMEOUT_SECS '{}': {}", secs, e))
            })?,
            None => defaults.llm_timeout_secs,
        };

        let slide_mode = match lookup("SLIDE_MODE") {
            Some(mode) => mode.parse()?,
            None => defaults.slide_mode,
        };

        let cors_allowed_origins = lookup("ALLOWED_ORIGINS")
            .map(|origins| {
                origins
                    .split(',')
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty())
                    .collect()
            })
            .unwrap_or(defaults.cors_allowed_origins);

        Ok(Self {
            upload_dir: lookup("UPLOAD_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.upload_dir),
            groq_api_key,
            llm_base_url: lookup("LLM_BASE_URL").unwrap_or(defaults.llm_base_url),
            llm_model: lookup("LLM_MODEL").unwrap_or(defaults.llm_model),
            llm_timeout_secs,
            server_host: lookup("SERVER_HOST").unwrap_or(defaults.server_host),
            server_port,
            cors_allowed_origins,
            slide_mode,
            log_dir: lookup("LOG_DIR").map(PathBuf::from).unwrap_or(defaults.log_dir),
            log_level: lookup("LOG_LEVEL").unwrap_or(defaults.log_level),
        })
    }

    /// Ensure required directories exist, create if not
    pub fn ensure_directories(&self) -> Result<(), DocDeckError> {
        for dir in [&self.upload_dir, &self.log_dir] {
            if !dir.as_os_str().is_empty() && !dir.exists() {
                std::fs::create_dir_all(dir).map_err(|e| {
                    DocDeckError::config(format!(
                        "Failed to create directory {}: {}",
                        dir.display(),
                        e
                    ))
                })?;
            }
        }

        Ok(())
    }

    /// Get full path for a transient upload file
    pub fn get_upload_path(&self, filename: &str) -> PathBuf {
        self.upload_dir.join(filename)
    }

    /// Whether logs also go to a file; an empty `LOG_DIR` means console only
    pub fn file_logging_enabled(&self) -> bool {
        !self.log_dir.as_os_str().is_empty()
    }

    /// Get server bind address (host:port)
    pub fn server_bind_address(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), DocDeckError> {
        if self.groq_api_key.trim().is_empty() {
            return Err(DocDeckError::config("GROQ_API_KEY cannot be empty"));
        }

        if !self.llm_base_url.starts_with("http://")
            && !self.llm_base_url.starts_with("https://") {
            return Err(DocDeckError::config(
                "LLM base URL must start with http:// or https://"
            ));
        }

        if self.llm_model.is_empty() {
            return Err(DocDeckError::config("LLM model name cannot be empty"));
        }

        if self.server_port == 0 {
            return Err(DocDeckError::config("Server port cannot be 0"));
        }

        Ok(())
    }
}
