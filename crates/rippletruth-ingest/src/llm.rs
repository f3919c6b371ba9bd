// ─────────────────────────────────────────────────────────────────────
// RippleTruth — Language-Model Enhancement
// ─────────────────────────────────────────────────────────────────────
//! Optional post-analysis expansion through an OpenAI-compatible chat
//! completions endpoint.
//!
//! Enhancement is advisory. It never raises: a missing key yields a
//! disabled notice without touching the network, and every transport,
//! HTTP or decoding failure yields an inline `[AI enhancement failed: …]`
//! string that the report carries in place of the expansion.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use reqwest::blocking::Client;
use rippletruth_types::{IntentionMetrics, RippleConfig, RippleError, RippleResult};
use serde::{Deserialize, Serialize};

pub const DISABLED_NOTICE: &str = "⚠️ No API key provided — AI enhancements disabled.";

const SYSTEM_PROMPT: &str = "You are a professional analyst specializing in narrative dynamics, \
                             information influence, and intention mapping. Write clearly, \
                             factually, and without bias.";

/// Enhancement flavour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EnhanceMode {
    /// Human-style intelligence summary.
    #[default]
    Summary,
    /// Neutral counter-narrative.
    Counter,
    /// Multi-paragraph analytical expansion.
    Expand,
    /// Short executive summary.
    Brief,
}

impl EnhanceMode {
    pub const ALL: [EnhanceMode; 4] = [
        EnhanceMode::Summary,
        EnhanceMode::Counter,
        EnhanceMode::Expand,
        EnhanceMode::Brief,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            EnhanceMode::Summary => "summary",
            EnhanceMode::Counter => "counter",
            EnhanceMode::Expand => "expand",
            EnhanceMode::Brief => "brief",
        }
    }

    fn instruction(self) -> &'static str {
        match self {
            EnhanceMode::Summary => {
                "You are a senior narrative intelligence analyst. Write a clear, concise, \
                 human-readable intelligence summary of the following message. Explain the \
                 narrative function, likely intent, audience impact, and why the message matters."
            }
            EnhanceMode::Counter => {
                "You are an expert in counter-messaging. Write a factual, non-emotional \
                 counter-narrative that neutralizes manipulative or misleading implications in \
                 the following message. Do not mock or attack the author — just provide clarity."
            }
            EnhanceMode::Expand => {
                "Expand the following message into a 3–4 paragraph intelligence brief. Cover \
                 narrative structure, psychological framing, intent signals, emotional load, \
                 influence pathways, and overall risk profile."
            }
            EnhanceMode::Brief => {
                "Condense the following into a tight 4–5 sentence executive summary suitable \
                 for a security or intelligence decision-maker."
            }
        }
    }

    /// User prompt for `text`, with the computed metrics as context.
    pub fn prompt(self, text: &str, metrics: &IntentionMetrics) -> String {
        format!(
            "{}\n\nComputed intention metrics: FILS {:.4}, UCIP {:.4}, TTCF {:.4}, \
             Drift {:.4}, RippleScore {:.4}.\n\nMessage:\n{text}",
            self.instruction(),
            metrics.fils,
            metrics.ucip,
            metrics.ttcf,
            metrics.drift,
            metrics.ripple_score,
        )
    }
}

impl fmt::Display for EnhanceMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EnhanceMode {
    type Err = RippleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_lowercase();
        EnhanceMode::ALL
            .into_iter()
            .find(|m| m.as_str() == lowered)
            .ok_or_else(|| {
                RippleError::Validation(format!(
                    "unknown enhancement mode '{s}' (expected summary, counter, expand or brief)"
                ))
            })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub max_tokens: u32,
    pub temperature: f64,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

/// Trait for chat-completion transports.
pub trait ChatBackend: Send + Sync {
    fn complete(&self, request: &ChatRequest, api_key: &str) -> RippleResult<String>;
}

/// OpenAI-compatible `/v1/chat/completions` client.
pub struct OpenAiChat {
    client: Client,
    endpoint: String,
}

impl OpenAiChat {
    pub fn new(config: &RippleConfig) -> RippleResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.llm_timeout_secs))
            .build()
            .map_err(|e| RippleError::Enhancement(e.to_string()))?;
        Ok(Self {
            client,
            endpoint: format!(
                "{}/v1/chat/completions",
                config.llm_base_url.trim_end_matches('/')
            ),
        })
    }
}

impl ChatBackend for OpenAiChat {
    fn complete(&self, request: &ChatRequest, api_key: &str) -> RippleResult<String> {
        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(api_key)
            .json(request)
            .send()
            .map_err(|e| RippleError::Enhancement(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(RippleError::Enhancement(format!("HTTP {status}: {body}")));
        }

        let parsed: ChatResponse = response
            .json()
            .map_err(|e| RippleError::Enhancement(format!("decoding response: {e}")))?;
        parsed
            .choices
            .into_iter()
            .next()
            .map(|c| c.message.content.trim().to_string())
            .filter(|c| !c.is_empty())
            .ok_or_else(|| RippleError::Enhancement("empty completion".to_string()))
    }
}

/// Mode-driven enhancer over a [`ChatBackend`].
pub struct LlmEnhancer {
    backend: Box<dyn ChatBackend>,
    model: String,
    max_tokens: u32,
    temperature: f64,
}

impl LlmEnhancer {
    pub fn new(backend: impl ChatBackend + 'static, config: &RippleConfig) -> Self {
        Self {
            backend: Box::new(backend),
            model: config.llm_model.clone(),
            max_tokens: config.llm_max_tokens,
            temperature: config.llm_temperature,
        }
    }

    /// Enhancer wired to the OpenAI-compatible endpoint in `config`.
    pub fn from_config(config: &RippleConfig) -> RippleResult<Self> {
        Ok(Self::new(OpenAiChat::new(config)?, config))
    }

    pub fn request(
        &self,
        text: &str,
        metrics: &IntentionMetrics,
        mode: EnhanceMode,
    ) -> ChatRequest {
        ChatRequest {
            model: self.model.clone(),
            messages: vec![
                ChatMessage {
                    role: "system".to_string(),
                    content: SYSTEM_PROMPT.to_string(),
                },
                ChatMessage {
                    role: "user".to_string(),
                    content: mode.prompt(text, metrics),
                },
            ],
            max_tokens: self.max_tokens,
            temperature: self.temperature,
        }
    }

    /// Expand `text` in the given mode. Never fails; see module docs.
    pub fn enhance(
        &self,
        text: &str,
        metrics: &IntentionMetrics,
        mode: EnhanceMode,
        api_key: Option<&str>,
    ) -> String {
        let Some(key) = usable_key(api_key) else {
            log::info!("enhance: no usable API key, skipping");
            return DISABLED_NOTICE.to_string();
        };

        let request = self.request(text, metrics, mode);
        match self.backend.complete(&request, key) {
            Ok(content) => content,
            Err(e) => {
                log::warn!("enhance: {mode} failed: {e}");
                let detail = match e {
                    RippleError::Enhancement(msg) => msg,
                    other => other.to_string(),
                };
                format!("[AI enhancement failed: {detail}]")
            }
        }
    }
}

/// Trimmed key, or `None` when absent, blank or containing whitespace.
fn usable_key(api_key: Option<&str>) -> Option<&str> {
    let key = api_key?.trim();
    if key.is_empty() || key.chars().any(char::is_whitespace) {
        None
    } else {
        Some(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn metrics() -> IntentionMetrics {
        IntentionMetrics {
            fils: 0.5,
            ucip: 0.4,
            ttcf: 0.1,
            drift: 0.3,
            ripple_score: 0.35,
        }
    }

    struct Canned {
        calls: Arc<AtomicUsize>,
        reply: Result<String, String>,
    }

    impl ChatBackend for Canned {
        fn complete(&self, request: &ChatRequest, _api_key: &str) -> RippleResult<String> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            assert_eq!(request.messages.len(), 2);
            self.reply.clone().map_err(RippleError::Enhancement)
        }
    }

    fn enhancer(reply: Result<String, String>) -> (LlmEnhancer, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        let backend = Canned {
            calls: Arc::clone(&calls),
            reply,
        };
        (LlmEnhancer::new(backend, &RippleConfig::default()), calls)
    }

    #[test]
    fn test_missing_key_skips_network() {
        let (e, calls) = enhancer(Ok("unused".into()));
        for key in [None, Some("   "), Some("sk bad key")] {
            let out = e.enhance("text", &metrics(), EnhanceMode::Summary, key);
            assert_eq!(out, DISABLED_NOTICE);
        }
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_success_returns_content() {
        let (e, calls) = enhancer(Ok("A concise brief.".into()));
        let out = e.enhance("text", &metrics(), EnhanceMode::Brief, Some(" sk-test "));
        assert_eq!(out, "A concise brief.");
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_failure_is_inline_warning() {
        let (e, _) = enhancer(Err("HTTP 401".into()));
        let out = e.enhance("text", &metrics(), EnhanceMode::Counter, Some("sk-test"));
        assert_eq!(out, "[AI enhancement failed: HTTP 401]");
    }

    #[test]
    fn test_mode_parsing() {
        assert_eq!("Expand".parse::<EnhanceMode>().unwrap(), EnhanceMode::Expand);
        assert_eq!(" brief ".parse::<EnhanceMode>().unwrap(), EnhanceMode::Brief);
        assert!(matches!(
            "poem".parse::<EnhanceMode>(),
            Err(RippleError::Validation(_))
        ));
    }

    #[test]
    fn test_request_shape() {
        let (e, _) = enhancer(Ok(String::new()));
        let req = e.request("The vote is today.", &metrics(), EnhanceMode::Summary);
        assert_eq!(req.model, "gpt-4o-mini");
        assert_eq!(req.max_tokens, 600);
        assert_eq!(req.messages[0].role, "system");
        let user = &req.messages[1].content;
        assert!(user.starts_with("You are a senior narrative intelligence analyst."));
        assert!(user.contains("FILS 0.5000"));
        assert!(user.ends_with("Message:\nThe vote is today."));
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["temperature"], 0.4);
    }
}
