use serde::Deserialize;
use std::fs;
use std::path::Path;

const ENV_CONFIG_PATH: &str = "PHISHGUARD_CONFIG_PATH";
const DEFAULT_CONFIG_PATH: &str = "config.yaml";

const ENV_HOST: &str = "HOST";
const ENV_PORT: &str = "PORT";
const ENV_CLASSIFIER_MODEL: &str = "CLASSIFIER_MODEL";
const ENV_CLASSIFICATION_MODE: &str = "CLASSIFICATION_MODE";
const ENV_CLASSIFIER_TIMEOUT_SECS: &str = "CLASSIFIER_TIMEOUT_SECS";

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 3000;
const DEFAULT_MAX_PAYLOAD_BYTES: usize = 256 * 1024;
const DEFAULT_MODEL: &str = rig::providers::openai::GPT_4O_MINI;
const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// How the classifier asks the model for a verdict
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClassificationMode {
    /// Tool-calling constrained to the verdict schema
    #[default]
    Structured,
    /// Free-text reply scanned for the word "fraud".
    /// Only for providers without structured output support.
    Keyword,
}

impl std::str::FromStr for ClassificationMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "structured" => Ok(Self::Structured),
            "keyword" => Ok(Self::Keyword),
            other => Err(format!("unknown classification mode: {other}")),
        }
    }
}

impl std::fmt::Display for ClassificationMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Structured => write!(f, "structured"),
            Self::Keyword => write!(f, "keyword"),
        }
    }
}

/// Classifier settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ClassifierConfig {
    pub mode: ClassificationMode,
    /// OpenAI model name
    pub model: String,
    /// Upper bound for a single provider round trip
    pub timeout_secs: u64,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            mode: ClassificationMode::default(),
            model: DEFAULT_MODEL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

/// YAML configuration file structure
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ConfigFile {
    pub host: String,
    pub port: u16,
    pub max_payload_bytes: usize,
    pub classifier: ClassifierConfig,
}

impl Default for ConfigFile {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            max_payload_bytes: DEFAULT_MAX_PAYLOAD_BYTES,
            classifier: ClassifierConfig::default(),
        }
    }
}

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub max_payload_bytes: usize,
    pub classifier: ClassifierConfig,
}

impl Default for Config {
    fn default() -> Self {
        ConfigFile::default().into()
    }
}

impl From<ConfigFile> for Config {
    fn from(file: ConfigFile) -> Self {
        Self {
            host: file.host,
            port: file.port,
            max_payload_bytes: file.max_payload_bytes,
            classifier: file.classifier,
        }
    }
}

impl Config {
    /// Load configuration from the config file, then apply environment overrides
    pub fn from_env() -> Self {
        let config_path =
            std::env::var(ENV_CONFIG_PATH).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());

        let mut config: Config = Self::load_config_file(&config_path)
            .unwrap_or_default()
            .into();

        config.apply_overrides(|key| std::env::var(key).ok());
        config
    }

    /// Apply overrides from a key lookup (the process environment in production)
    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(host) = lookup(ENV_HOST) {
            self.host = host;
        }

        if let Some(port) = lookup(ENV_PORT) {
            match port.parse() {
                Ok(port) => self.port = port,
                Err(e) => tracing::warn!(value = %port, error = %e, "Ignoring invalid PORT"),
            }
        }

        if let Some(model) = lookup(ENV_CLASSIFIER_MODEL) {
            self.classifier.model = model;
        }

        if let Some(mode) = lookup(ENV_CLASSIFICATION_MODE) {
            match mode.parse() {
                Ok(mode) => self.classifier.mode = mode,
                Err(e) => tracing::warn!(error = %e, "Ignoring invalid CLASSIFICATION_MODE"),
            }
        }

        if let Some(timeout) = lookup(ENV_CLASSIFIER_TIMEOUT_SECS) {
            match timeout.parse::<u64>() {
                Ok(0) => {
                    tracing::warn!(value = %timeout, "Ignoring invalid CLASSIFIER_TIMEOUT_SECS, must be positive")
                }
                Ok(secs) => self.classifier.timeout_secs = secs,
                Err(e) => {
                    tracing::warn!(value = %timeout, error = %e, "Ignoring invalid CLASSIFIER_TIMEOUT_SECS")
                }
            }
        }
    }

    /// Load configuration from YAML file
    fn load_config_file(path: &str) -> Option<ConfigFile> {
        let path = Path::new(path);

        if !path.exists() {
            tracing::debug!(path = %path.display(), "Config file not found, using defaults");
            return None;
        }

        match fs::read_to_string(path) {
            Ok(contents) => Self::parse_config(&contents).or_else(|| {
                tracing::warn!(path = %path.display(), "Failed to parse config file, using defaults");
                None
            }),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Failed to read config file, using defaults");
                None
            }
        }
    }

    fn parse_config(contents: &str) -> Option<ConfigFile> {
        let contents = contents.trim();
        if contents.is_empty() {
            return Some(ConfigFile::default());
        }

        match serde_yaml::from_str::<ConfigFile>(contents) {
            Ok(mut config) => {
                if config.classifier.timeout_secs == 0 {
                    tracing::warn!(
                        default = DEFAULT_TIMEOUT_SECS,
                        "Ignoring invalid classifier.timeout_secs, must be positive"
                    );
                    config.classifier.timeout_secs = DEFAULT_TIMEOUT_SECS;
                }
                Some(config)
            }
            Err(e) => {
                tracing::debug!(error = %e, "Invalid YAML configuration");
                None
            }
        }
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
