use std::env;

/// Console filter used when RUST_LOG is not set
pub const DEFAULT_CONSOLE_LOG_LEVEL: &str = "chicken_server=info,tower_http=warn";

/// Configuration for the logging system
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    /// Filter directives for console output
    pub console_log_level: String,

    /// Console format: "compact", "pretty" or "json" (default: compact)
    pub format: LogFormat,

    /// Directory for the JSON access log; file logging is off when unset
    pub log_dir: Option<String>,

    /// Write the access log when a directory is configured (default: true)
    pub access_enabled: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Json,
    Pretty,
    Compact,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            console_log_level: DEFAULT_CONSOLE_LOG_LEVEL.to_string(),
            format: LogFormat::Compact,
            log_dir: None,
            access_enabled: true,
        }
    }
}

impl LogConfig {
    /// Load logging configuration from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(level) = lookup("RUST_LOG") {
            config.console_log_level = level;
        }

        if let Some(format_str) = lookup("LOG_FORMAT") {
            config.format = match format_str.to_lowercase().as_str() {
                "pretty" => LogFormat::Pretty,
                "json" => LogFormat::Json,
                _ => LogFormat::Compact,
            };
        }

        config.log_dir = lookup("CHICKEN_LOG_DIR").filter(|dir| !dir.trim().is_empty());

        if let Some(val) = lookup("LOG_ACCESS_ENABLED") {
            config.access_enabled = val.to_lowercase() == "true";
        }

        config
    }

    /// Whether the access log file should be written
    pub fn access_log_dir(&self) -> Option<&str> {
        if self.access_enabled {
            self.log_dir.as_deref()
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = LogConfig::default();
        assert_eq!(config.console_log_level, DEFAULT_CONSOLE_LOG_LEVEL);
        assert_eq!(config.format, LogFormat::Compact);
        assert!(config.log_dir.is_none());
        assert!(config.access_enabled);
        assert_eq!(config.access_log_dir(), None);
    }

    #[test]
    fn test_from_lookup_custom_values() {
        let config = LogConfig::from_lookup(|key| match key {
            "RUST_LOG" => Some("debug".to_string()),
            "LOG_FORMAT" => Some("JSON".to_string()),
            "CHICKEN_LOG_DIR" => Some("/var/log/chicken".to_string()),
            _ => None,
        });

        assert_eq!(config.console_log_level, "debug");
        assert_eq!(config.format, LogFormat::Json);
        assert_eq!(config.access_log_dir(), Some("/var/log/chicken"));
    }

    #[test]
    fn test_access_log_can_be_disabled() {
        let config = LogConfig::from_lookup(|key| match key {
            "CHICKEN_LOG_DIR" => Some("/tmp/chicken".to_string()),
            "LOG_ACCESS_ENABLED" => Some("false".to_string()),
            _ => None,
        });

        assert_eq!(config.log_dir.as_deref(), Some("/tmp/chicken"));
        assert_eq!(config.access_log_dir(), None);
    }

    #[test]
    fn test_unknown_format_is_compact() {
        let config = LogConfig::from_lookup(|key| match key {
            "LOG_FORMAT" => Some("fancy".to_string()),
            _ => None,
        });
        assert_eq!(config.format, LogFormat::Compact);
    }

    #[test]
    fn test_blank_log_dir_is_ignored() {
        let config = LogConfig::from_lookup(|key| match key {
            "CHICKEN_LOG_DIR" => Some("  ".to_string()),
            _ => None,
        });
        assert!(config.log_dir.is_none());
    }
}
