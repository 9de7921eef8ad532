//! Connection settings, from flags first and the environment second.

use anyhow::{bail, Result};
use cloudhealth_api::DEFAULT_ENDPOINT;

pub const API_KEY_VAR: &str = "CLOUDHEALTH_API_KEY";
pub const ENDPOINT_VAR: &str = "CLOUDHEALTH_API_URL";

#[derive(Debug, PartialEq, Eq)]
pub struct Config {
    pub api_key: String,
    pub endpoint: String,
}

impl Config {
    /// Resolves settings from the given flags and the process environment.
    pub fn resolve(api_key: Option<&str>, endpoint: Option<&str>) -> Result<Self> {
        Self::from_sources(api_key, endpoint, |name| std::env::var(name).ok())
    }

    fn from_sources(
        api_key: Option<&str>,
        endpoint: Option<&str>,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self> {
        let api_key = match api_key.map(str::to_string).or_else(|| env(API_KEY_VAR)) {
            Some(key) if !key.trim().is_empty() => key,
            _ => bail!("No API key given: pass --api-key or set {}", API_KEY_VAR),
        };
        let endpoint = endpoint
            .map(str::to_string)
            .or_else(|| env(ENDPOINT_VAR))
            .filter(|e| !e.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());
        Ok(Self { api_key, endpoint })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env_with(vars: &'static [(&'static str, &'static str)]) -> impl Fn(&str) -> Option<String> {
        move |name| {
            vars.iter()
                .find(|(k, _)| *k == name)
                .map(|(_, v)| v.to_string())
        }
    }

    #[test]
    fn flags_win_over_environment() {
        let env = env_with(&[(API_KEY_VAR, "env-key"), (ENDPOINT_VAR, "https://env.test/")]);
        let config =
            Config::from_sources(Some("flag-key"), Some("https://flag.test/"), env).unwrap();
        assert_eq!(config.api_key, "flag-key");
        assert_eq!(config.endpoint, "https://flag.test/");
    }

    #[test]
    fn environment_fills_missing_flags() {
        let env = env_with(&[(API_KEY_VAR, "env-key")]);
        let config = Config::from_sources(None, None, env).unwrap();
        assert_eq!(config.api_key, "env-key");
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
    }

    #[test]
    fn missing_key_is_an_error() {
        let err = Config::from_sources(None, None, env_with(&[])).unwrap_err();
        assert!(err.to_string().contains(API_KEY_VAR));

        let env = env_with(&[(API_KEY_VAR, "  ")]);
        assert!(Config::from_sources(None, None, env).is_err());
    }
}
