use serde::{Deserialize, Serialize};
use setgame_engine::rules::GameConfig;
use std::fs;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ValueSource {
    Default,
    File,
    Env,
}

#[derive(Debug, Clone, Copy)]
pub struct ConfigSources {
    pub initial_table_size: ValueSource,
    pub match_reward: ValueSource,
    pub mismatch_penalty: ValueSource,
    pub seed: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            initial_table_size: ValueSource::Default,
            match_reward: ValueSource::Default,
            mismatch_penalty: ValueSource::Default,
            seed: ValueSource::Default,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConfigResolved {
    pub config: GameConfig,
    pub sources: ConfigSources,
}

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Invalid(String),
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}
impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        ConfigError::Parse(e)
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "cannot read config file: {}", e),
            ConfigError::Parse(e) => write!(f, "cannot parse config file: {}", e),
            ConfigError::Invalid(msg) => write!(f, "{}", msg),
        }
    }
}

/// Resolves the game configuration: defaults, then the TOML file named by
/// `SETGAME_CONFIG`, then `SETGAME_*` environment overrides.
pub fn load_with_sources() -> Result<ConfigResolved, ConfigError> {
    let mut cfg = GameConfig::default();
    let mut sources = ConfigSources::default();

    if let Ok(path) = std::env::var("SETGAME_CONFIG") {
        let s = fs::read_to_string(path)?;
        let f: FileConfig = toml::from_str(&s)?;
        if let Some(v) = f.initial_table_size {
            cfg.initial_table_size = v;
            sources.initial_table_size = ValueSource::File;
        }
        if let Some(v) = f.match_reward {
            cfg.match_reward = v;
            sources.match_reward = ValueSource::File;
        }
        if let Some(v) = f.mismatch_penalty {
            cfg.mismatch_penalty = v;
            sources.mismatch_penalty = ValueSource::File;
        }
        if let Some(v) = f.seed {
            cfg.seed = Some(v);
            sources.seed = ValueSource::File;
        }
    }

    if let Some(v) = env_number("SETGAME_TABLE_SIZE")? {
        cfg.initial_table_size = v;
        sources.initial_table_size = ValueSource::Env;
    }
    if let Some(v) = env_number("SETGAME_MATCH_REWARD")? {
        cfg.match_reward = v;
        sources.match_reward = ValueSource::Env;
    }
    if let Some(v) = env_number("SETGAME_MISMATCH_PENALTY")? {
        cfg.mismatch_penalty = v;
        sources.mismatch_penalty = ValueSource::Env;
    }
    if let Some(v) = env_number("SETGAME_SEED")? {
        cfg.seed = Some(v);
        sources.seed = ValueSource::Env;
    }

    cfg.validate()
        .map_err(|e| ConfigError::Invalid(e.to_string()))?;
    Ok(ConfigResolved {
        config: cfg,
        sources,
    })
}

pub fn load() -> Result<GameConfig, ConfigError> {
    load_with_sources().map(|resolved| resolved.config)
}

fn env_number<T: std::str::FromStr>(key: &str) -> Result<Option<T>, ConfigError> {
    match std::env::var(key) {
        Ok(v) if !v.is_empty() => v
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::Invalid(format!("Invalid {}: {}", key, v))),
        _ => Ok(None),
    }
}

#[derive(Debug, Deserialize)]
struct FileConfig {
    #[serde(default)]
    initial_table_size: Option<usize>,
    #[serde(default)]
    match_reward: Option<u32>,
    #[serde(default)]
    mismatch_penalty: Option<u32>,
    #[serde(default)]
    seed: Option<u64>,
}
