//! Hugging Face Inference API client for event summaries.
//!
//! Tries a fixed list of hosted models in priority order and applies quality
//! gating to whatever comes back. Every failure mode (missing key, transport,
//! bad status, junk text) resolves to `None` so callers fall through to the
//! deterministic builder.

use std::sync::OnceLock;
use std::time::Duration;

use regex::Regex;
use serde::Serialize;
use serde_json::Value;

use crate::classify::Classification;
use crate::compose::MAX_SUMMARY_CHARS;
use crate::timefmt::{format_event_full, parse_start_time, UNSPECIFIED_TIME};
use crate::types::EventDescriptor;
use crate::util::{collapse_whitespace, ensure_terminal_punctuation, truncate_with_ellipsis};

const HF_INFERENCE_BASE: &str = "https://api-inference.huggingface.co/models";

/// Hosted models tried in order; the first usable response wins.
pub const CANDIDATE_MODELS: &[&str] = &[
    "facebook/bart-large-cnn",
    "microsoft/DialoGPT-medium",
    "google/flan-t5-base",
];

/// Generated text at or below this many characters is discarded as junk.
pub const MIN_GENERATED_CHARS: usize = 20;

/// Environment variable holding the API key.
pub const API_KEY_ENV: &str = "HUGGINGFACE_API_KEY";

/// Template value shipped in sample configs; treated the same as no key.
const API_KEY_PLACEHOLDER: &str = "your_huggingface_api_key_here";

/// Per-candidate request timeout. Candidates run sequentially, so this
/// bounds total pipeline latency at roughly timeout x candidate count.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(20);

#[derive(Debug, thiserror::Error)]
pub enum HuggingFaceError {
    #[error("HTTP: {0}")]
    Http(#[from] reqwest::Error),
    #[error("API error {0}")]
    ApiStatus(reqwest::StatusCode),
    #[error("No generated text in response")]
    MissingText,
    #[error("Generated text below quality threshold")]
    QualityGate,
}

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    inputs: &'a str,
    parameters: GenerateParameters,
}

#[derive(Debug, Serialize)]
struct GenerateParameters {
    max_length: u32,
    min_length: u32,
    do_sample: bool,
    temperature: f32,
    top_p: f32,
}

impl Default for GenerateParameters {
    fn default() -> Self {
        Self {
            max_length: 150,
            min_length: 30,
            do_sample: true,
            temperature: 0.7,
            top_p: 0.9,
        }
    }
}

pub struct HuggingFaceClient {
    client: reqwest::Client,
    api_key: String,
}

impl HuggingFaceClient {
    pub fn new(api_key: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key: api_key.to_string(),
        }
    }

    /// Build a client from [`API_KEY_ENV`]. An unset, empty, or placeholder
    /// key means no remote backend is configured.
    pub fn from_env() -> Option<Self> {
        let Ok(key) = std::env::var(API_KEY_ENV) else {
            log::debug!("{} not set, remote summaries disabled", API_KEY_ENV);
            return None;
        };
        if key.is_empty() || key == API_KEY_PLACEHOLDER {
            log::debug!("{} is empty or a placeholder, remote summaries disabled", API_KEY_ENV);
            return None;
        }
        Some(Self::new(&key))
    }

    /// Ask the candidate models for a one-line event summary.
    ///
    /// Candidates are tried sequentially; a transport error, bad status, or
    /// quality-gate rejection advances to the next one. `None` means every
    /// candidate was exhausted.
    pub async fn summarize(
        &self,
        event: &EventDescriptor,
        classification: &Classification,
    ) -> Option<String> {
        let prompt = build_prompt(event, classification);

        for model in CANDIDATE_MODELS {
            log::debug!("requesting summary for {:?} from {}", event.title, model);
            match self.query_model(model, &prompt).await {
                Ok(summary) => {
                    log::info!("model {} produced a summary for {:?}", model, event.title);
                    return Some(summary);
                }
                Err(err) => {
                    log::warn!("model {} failed for {:?}: {}", model, event.title, err);
                }
            }
        }

        None
    }

    /// One request against one model, with the full quality gate applied.
    async fn query_model(&self, model: &str, prompt: &str) -> Result<String, HuggingFaceError> {
        let body = GenerateRequest {
            inputs: prompt,
            parameters: GenerateParameters::default(),
        };

        let resp = self
            .client
            .post(format!("{}/{}", HF_INFERENCE_BASE, model))
            .bearer_auth(&self.api_key)
            .timeout(REQUEST_TIMEOUT)
            .json(&body)
            .send()
            .await?;

        if !resp.status().is_success() {
            return Err(HuggingFaceError::ApiStatus(resp.status()));
        }

        let json: Value = resp.json().await?;
        let raw = extract_generated_text(&json).ok_or(HuggingFaceError::MissingText)?;
        if raw.chars().count() <= MIN_GENERATED_CHARS {
            return Err(HuggingFaceError::QualityGate);
        }

        clean_summary(&raw).ok_or(HuggingFaceError::QualityGate)
    }
}

/// Compose the model prompt. Birthdays get extra framing so generative
/// models lean celebratory instead of clinical.
fn build_prompt(event: &EventDescriptor, classification: &Classification) -> String {
    let formatted = parse_start_time(&event.start_time)
        .map(|dt| format_event_full(&dt))
        .unwrap_or_else(|| UNSPECIFIED_TIME.to_string());

    if classification.is_birthday {
        let description = if event.description.is_empty() {
            "Birthday celebration"
        } else {
            &event.description
        };
        format!(
            "Birthday Event: {}\nDate: {}\nDescription: {}\nContext: This is a birthday celebration that requires special attention and preparation.",
            event.title, formatted, description
        )
    } else {
        let description = if event.description.is_empty() {
            "No additional details provided"
        } else {
            &event.description
        };
        format!(
            "Event: {}\nDate: {}\nDescription: {}",
            event.title, formatted, description
        )
    }
}

/// A string field that is present and non-empty after trimming.
fn non_empty_str(obj: &Value, key: &str) -> Option<String> {
    obj.get(key)
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// Pull generated text out of a response, tolerating the two shapes the
/// inference API produces: a single-element array of objects, or a bare
/// object. Either shape carries `summary_text` or `generated_text`.
fn extract_generated_text(value: &Value) -> Option<String> {
    let obj = if value.is_array() {
        value.get(0)?
    } else {
        value
    };
    non_empty_str(obj, "summary_text").or_else(|| non_empty_str(obj, "generated_text"))
}

fn re_label_prefix() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)^(summary:|event:|description:|birthday event:)").unwrap())
}

/// Normalize raw model output into a presentable one-liner.
///
/// Strips a single leading label prefix, collapses whitespace, caps length
/// with an ellipsis, and guarantees terminal punctuation. Returns `None`
/// when the cleaned text is too short or has no word boundary.
fn clean_summary(raw: &str) -> Option<String> {
    let stripped = re_label_prefix().replace(raw, "");
    let cleaned = collapse_whitespace(stripped.trim());
    let cleaned = truncate_with_ellipsis(&cleaned, MAX_SUMMARY_CHARS);

    if cleaned.chars().count() < MIN_GENERATED_CHARS || !cleaned.contains(' ') {
        return None;
    }

    Some(ensure_terminal_punctuation(&cleaned))
}
