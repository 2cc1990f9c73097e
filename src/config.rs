//! Service configuration read from the environment
//!
//! Recognized variables:
//!   RETIREMENT_AUDIT_LOG      path of the audit log file (unset: stderr)
//!   RETIREMENT_INCLUDE_TRACE  include the calculation trace in API responses
//!   RETIREMENT_CORS_ORIGIN    Access-Control-Allow-Origin value (default `*`)

use std::env;
use std::path::PathBuf;

pub const AUDIT_LOG_VAR: &str = "RETIREMENT_AUDIT_LOG";
pub const INCLUDE_TRACE_VAR: &str = "RETIREMENT_INCLUDE_TRACE";
pub const CORS_ORIGIN_VAR: &str = "RETIREMENT_CORS_ORIGIN";

/// Default file name used when audit logging to disk is requested without a path
pub const DEFAULT_AUDIT_LOG: &str = "retirement_calculation.log";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    /// Where audit records go; `None` keeps them on stderr
    pub audit_log: Option<PathBuf>,

    /// Attach the calculation trace to API responses
    pub include_trace: bool,

    /// CORS origin sent with every API response
    pub cors_origin: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            audit_log: None,
            include_trace: false,
            cors_origin: "*".to_string(),
        }
    }
}

impl ServiceConfig {
    /// Read config from environment or use defaults
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build config from any key lookup (environment, test map)
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let audit_log = lookup(AUDIT_LOG_VAR)
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .map(|s| if s == "1" { PathBuf::from(DEFAULT_AUDIT_LOG) } else { PathBuf::from(s) });

        let include_trace = lookup(INCLUDE_TRACE_VAR)
            .and_then(|s| parse_flag(&s))
            .unwrap_or(defaults.include_trace);

        let cors_origin = lookup(CORS_ORIGIN_VAR)
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or(defaults.cors_origin);

        Self {
            audit_log,
            include_trace,
            cors_origin,
        }
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> ServiceConfig {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ServiceConfig::from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        assert_eq!(config_from(&[]), ServiceConfig::default());
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            (AUDIT_LOG_VAR, "/var/log/retirement.log"),
            (INCLUDE_TRACE_VAR, "true"),
            (CORS_ORIGIN_VAR, "https://calc.example.org"),
        ]);
        assert_eq!(config.audit_log, Some(PathBuf::from("/var/log/retirement.log")));
        assert!(config.include_trace);
        assert_eq!(config.cors_origin, "https://calc.example.org");
    }

    #[test]
    fn test_audit_log_shorthand() {
        let config = config_from(&[(AUDIT_LOG_VAR, "1")]);
        assert_eq!(config.audit_log, Some(PathBuf::from(DEFAULT_AUDIT_LOG)));
    }

    #[test]
    fn test_unparseable_flag_falls_back() {
        let config = config_from(&[(INCLUDE_TRACE_VAR, "maybe"), (CORS_ORIGIN_VAR, "  ")]);
        assert!(!config.include_trace);
        assert_eq!(config.cors_origin, "*");
    }
}
