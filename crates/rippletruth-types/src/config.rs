// ─────────────────────────────────────────────────────────────────────
// RippleTruth — Kernel Configuration
// ─────────────────────────────────────────────────────────────────────

use serde::{Deserialize, Serialize};

use crate::error::{RippleError, RippleResult};

/// Runtime configuration for the RippleTruth kernel.
///
/// Scoring formulas and keyword tables are fixed (see `rippletruth_core::tables`);
/// this carries only collaborator plumbing and stage toggles.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RippleConfig {
    /// Run the fact-consistency sub-module.
    /// Default: true.
    pub enable_fact_stack: bool,

    /// Run the linguistic force scorer and append its interpretation paragraph.
    /// Default: true.
    pub enable_linguistic_force: bool,

    /// HTTP timeout for URL ingestion, in seconds.
    /// Default: 10.
    pub fetch_timeout_secs: u64,

    /// User agent sent with URL fetches.
    pub user_agent: String,

    /// Paragraphs shorter than this (chars) are dropped during HTML extraction.
    /// Default: 40.
    pub min_paragraph_chars: usize,

    /// Chat-completions endpoint base URL.
    pub llm_base_url: String,

    /// Model used for optional enhancement.
    /// Default: "gpt-4o-mini".
    pub llm_model: String,

    /// HTTP timeout for the enhancement call, in seconds.
    /// Default: 30.
    pub llm_timeout_secs: u64,

    /// Completion budget for the enhancement call.
    /// Default: 600.
    pub llm_max_tokens: u32,

    /// Sampling temperature for the enhancement call.
    /// Default: 0.4.
    pub llm_temperature: f64,
}

impl Default for RippleConfig {
    fn default() -> Self {
        Self {
            enable_fact_stack: true,
            enable_linguistic_force: true,
            fetch_timeout_secs: 10,
            user_agent: "Mozilla/5.0 (compatible; RippleTruth/1.0)".to_string(),
            min_paragraph_chars: 40,
            llm_base_url: "https://api.openai.com".to_string(),
            llm_model: "gpt-4o-mini".to_string(),
            llm_timeout_secs: 30,
            llm_max_tokens: 600,
            llm_temperature: 0.4,
        }
    }
}

impl RippleConfig {
    /// Validate configuration parameters.
    pub fn validate(&self) -> RippleResult<()> {
        if self.fetch_timeout_secs == 0 {
            return Err(RippleError::Config(
                "fetch_timeout_secs must be > 0".to_string(),
            ));
        }
        if self.llm_timeout_secs == 0 {
            return Err(RippleError::Config(
                "llm_timeout_secs must be > 0".to_string(),
            ));
        }
        if self.llm_max_tokens == 0 {
            return Err(RippleError::Config(
                "llm_max_tokens must be > 0".to_string(),
            ));
        }
        if !(0.0..=2.0).contains(&self.llm_temperature) {
            return Err(RippleError::Config(format!(
                "llm_temperature must be in [0, 2], got {}",
                self.llm_temperature
            )));
        }
        if self.llm_model.trim().is_empty() {
            return Err(RippleError::Config("llm_model must not be empty".to_string()));
        }
        if !(self.llm_base_url.starts_with("http://") || self.llm_base_url.starts_with("https://"))
        {
            return Err(RippleError::Config(format!(
                "llm_base_url must be an http(s) URL, got {:?}",
                self.llm_base_url
            )));
        }
        if self.user_agent.trim().is_empty() {
            return Err(RippleError::Config("user_agent must not be empty".to_string()));
        }
        Ok(())
    }

    /// Load from JSON string. Missing fields take their defaults.
    pub fn from_json(json: &str) -> RippleResult<Self> {
        serde_json::from_str(json)
            .map_err(|e| RippleError::Config(format!("JSON parse error: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(RippleConfig::default().validate().is_ok());
    }

    #[test]
    fn test_zero_fetch_timeout_rejected() {
        let cfg = RippleConfig {
            fetch_timeout_secs: 0,
            ..Default::default()
        };
        assert!(matches!(cfg.validate(), Err(RippleError::Config(_))));
    }

    #[test]
    fn test_temperature_out_of_range() {
        let cfg = RippleConfig {
            llm_temperature: 3.5,
            ..Default::default()
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn test_bad_base_url() {
        let cfg = RippleConfig {
            llm_base_url: "ftp://example.org".into(),
            ..Default::default()
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn test_from_json_partial() {
        let cfg = RippleConfig::from_json(r#"{"enable_fact_stack": false, "llm_max_tokens": 200}"#)
            .unwrap();
        assert!(!cfg.enable_fact_stack);
        assert_eq!(cfg.llm_max_tokens, 200);
        assert_eq!(cfg.fetch_timeout_secs, 10);
    }

    #[test]
    fn test_from_json_garbage() {
        assert!(RippleConfig::from_json("{not json").is_err());
    }
}
