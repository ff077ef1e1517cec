use serde::Deserialize;
use std::{
    env,
    path::{Path, PathBuf},
};

pub const CONFIG_ENV_VAR: &str = "PIET_CONFIG";
pub const DEFAULT_CONFIG_FILE: &str = "piet.toml";

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EngineConfig {
    pub run: Option<RunConfig>,
    pub trace: Option<TraceConfig>,
    pub log: Option<LogConfig>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RunConfig {
    pub step_limit: Option<u64>,
    /// Fed to the program as its input in `debug` mode.
    pub input: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TraceConfig {
    /// JSON destination; stdout when unset.
    pub output: Option<PathBuf>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LogConfig {
    /// An `EnvFilter` directive such as `info` or `piet_engine=trace`.
    pub filter: Option<String>,
    pub file: Option<PathBuf>,
}

impl EngineConfig {
    /// Loads from `explicit`, else `$PIET_CONFIG`, else `./piet.toml`.
    ///
    /// A missing file gives the defaults; an unreadable or invalid one is ignored. Problems
    /// are returned as warnings because logging is configured from the result.
    pub fn load(explicit: Option<&Path>) -> (Self, Vec<String>) {
        let path = config_path(explicit);
        let mut warnings = Vec::new();
        if !path.exists() {
            if explicit.is_some() {
                warnings.push(format!("Config file {:?} does not exist, using defaults", path));
            }
            return (EngineConfig::default(), warnings);
        }

        let content = match std::fs::read_to_string(&path) {
            Ok(content) => content,
            Err(err) => {
                warnings.push(format!("Failed to read config at {:?}: {}", path, err));
                return (EngineConfig::default(), warnings);
            }
        };

        match EngineConfig::parse(&content) {
            Ok(config) => (config, warnings),
            Err(err) => {
                warnings.push(format!("Failed to parse config at {:?}: {}", path, err));
                (EngineConfig::default(), warnings)
            }
        }
    }

    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    pub fn step_limit(&self) -> Option<u64> {
        self.run.as_ref().and_then(|run| run.step_limit)
    }

    pub fn input(&self) -> &str {
        self.run
            .as_ref()
            .and_then(|run| run.input.as_deref())
            .unwrap_or("")
    }

    pub fn trace_output(&self) -> Option<&Path> {
        self.trace.as_ref().and_then(|trace| trace.output.as_deref())
    }

    pub fn log_filter(&self) -> Option<&str> {
        self.log.as_ref().and_then(|log| log.filter.as_deref())
    }

    pub fn log_file(&self) -> Option<&Path> {
        self.log.as_ref().and_then(|log| log.file.as_deref())
    }
}

fn config_path(explicit: Option<&Path>) -> PathBuf {
    if let Some(path) = explicit {
        return path.to_path_buf();
    }
    match env::var_os(CONFIG_ENV_VAR) {
        Some(path) if !path.is_empty() => PathBuf::from(path),
        _ => PathBuf::from(DEFAULT_CONFIG_FILE),
    }
}
