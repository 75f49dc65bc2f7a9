use std::str::FromStr;
use std::time::Duration;

use tracing::warn;

use crate::format::DateStyle;
use crate::session::SessionPolicy;

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub api_server: String,
    pub api_base_url: String,
    pub date_style: DateStyle,
    pub session_policy: SessionPolicy,
    pub toast_duration: Duration,
}

impl Config {
    const DEFAULT_API_SERVER: &str = "http://localhost:8000";
    const DEFAULT_API_PREFIX: &str = "/api";
    const DEFAULT_TOAST_SECONDS: u64 = 3;

    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable lookup. Unparseable values fall back
    /// to defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_server = lookup("FOLIO_API_SERVER")
            .map(|s| s.trim().trim_end_matches('/').to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| Self::DEFAULT_API_SERVER.to_string());

        let api_prefix = lookup("FOLIO_API_PREFIX")
            .map(|s| s.trim().trim_matches('/').to_string())
            .map(|s| if s.is_empty() { s } else { format!("/{s}") })
            .unwrap_or_else(|| Self::DEFAULT_API_PREFIX.to_string());

        let date_style = parse_or_default(&lookup, "FOLIO_DATE_STYLE", DateStyle::default());

        let session_policy = match lookup("FOLIO_STRICT_SESSION") {
            Some(raw) => match parse_flag(&raw) {
                Some(true) => SessionPolicy::Strict,
                Some(false) => SessionPolicy::Lenient,
                None => {
                    warn!("FOLIO_STRICT_SESSION={raw:?} is not a boolean, using lenient sessions");
                    SessionPolicy::Lenient
                }
            },
            None => SessionPolicy::default(),
        };

        let toast_seconds =
            parse_or_default(&lookup, "FOLIO_TOAST_SECONDS", Self::DEFAULT_TOAST_SECONDS);

        Self {
            api_base_url: format!("{api_server}{api_prefix}"),
            api_server,
            date_style,
            session_policy,
            toast_duration: Duration::from_secs(toast_seconds),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

fn parse_or_default<F, T>(lookup: &F, key: &str, default: T) -> T
where
    F: Fn(&str) -> Option<String>,
    T: FromStr + std::fmt::Display,
{
    match lookup(key) {
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            warn!("{key}={raw:?} is invalid, using default {default}");
            default
        }),
        None => default,
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.api_server, "http://localhost:8000");
        assert_eq!(config.api_base_url, "http://localhost:8000/api");
        assert_eq!(config.date_style, DateStyle::EnUs);
        assert_eq!(config.session_policy, SessionPolicy::Lenient);
        assert_eq!(config.toast_duration, Duration::from_secs(3));
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup(&[
            ("FOLIO_API_SERVER", "https://resumes.example.com/"),
            ("FOLIO_API_PREFIX", "v2/"),
            ("FOLIO_DATE_STYLE", "de-DE"),
            ("FOLIO_STRICT_SESSION", "yes"),
            ("FOLIO_TOAST_SECONDS", "5"),
        ]));
        assert_eq!(config.api_server, "https://resumes.example.com");
        assert_eq!(config.api_base_url, "https://resumes.example.com/v2");
        assert_eq!(config.date_style, DateStyle::De);
        assert_eq!(config.session_policy, SessionPolicy::Strict);
        assert_eq!(config.toast_duration, Duration::from_secs(5));
    }

    #[test]
    fn test_empty_prefix() {
        let config = Config::from_lookup(lookup(&[("FOLIO_API_PREFIX", "")]));
        assert_eq!(config.api_base_url, "http://localhost:8000");
    }

    #[test]
    fn test_invalid_values_fall_back() {
        let config = Config::from_lookup(lookup(&[
            ("FOLIO_DATE_STYLE", "klingon"),
            ("FOLIO_STRICT_SESSION", "maybe"),
            ("FOLIO_TOAST_SECONDS", "-1"),
        ]));
        assert_eq!(config.date_style, DateStyle::EnUs);
        assert_eq!(config.session_policy, SessionPolicy::Lenient);
        assert_eq!(config.toast_duration, Duration::from_secs(3));
    }
}
