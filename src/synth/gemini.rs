use std::time::Duration;

use serde_json::json;

use crate::config::model::LogoConfig;
use crate::foundation::error::{LogoError, LogoResult};
use crate::synth::{VariationSynthesizer, parse_config, parse_variations};

const GEMINI_MODEL: &str = "gemini-2.5-flash";
const API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// Gemini-backed [`VariationSynthesizer`].
///
/// Requests declare a structured JSON response schema mirroring the LogoConfig
/// wire shape, so the model answers with machine-parseable configs; those still
/// cross the normal validation boundary before being trusted.
#[derive(Debug)]
pub struct GeminiSynthesizer {
    client: reqwest::blocking::Client,
    api_key: String,
    endpoint: String,
}

impl GeminiSynthesizer {
    /// Build a client from the `GEMINI_API_KEY` environment variable. A missing
    /// key fails here, before any network IO.
    pub fn from_env() -> LogoResult<Self> {
        let api_key = std::env::var("GEMINI_API_KEY")
            .map_err(|_| LogoError::synthesizer_unavailable("GEMINI_API_KEY is not set"))?;
        Self::new(api_key)
    }

    pub fn new(api_key: String) -> LogoResult<Self> {
        if api_key.trim().is_empty() {
            return Err(LogoError::synthesizer_unavailable("API key is empty"));
        }
        let client = reqwest::blocking::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| {
                LogoError::synthesizer_unavailable(format!("failed to build HTTP client: {e}"))
            })?;
        Ok(Self {
            client,
            api_key,
            endpoint: format!("{API_BASE}/{GEMINI_MODEL}:generateContent"),
        })
    }

    /// Issue one generateContent call and return the model's JSON payload.
    #[tracing::instrument(skip(self, prompt, response_schema))]
    fn generate(
        &self,
        prompt: String,
        response_schema: serde_json::Value,
    ) -> LogoResult<serde_json::Value> {
        let body = json!({
            "contents": [{ "parts": [{ "text": prompt }] }],
            "generationConfig": {
                "responseMimeType": "application/json",
                "responseSchema": response_schema,
            },
        });

        let response = self
            .client
            .post(&self.endpoint)
            .query(&[("key", self.api_key.as_str())])
            .json(&body)
            .send()
            .map_err(|e| LogoError::synthesizer_request_failed(format!("request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(LogoError::synthesizer_request_failed(format!(
                "backend returned {status}"
            )));
        }

        let envelope: serde_json::Value = response.json().map_err(|e| {
            LogoError::synthesizer_request_failed(format!("malformed response body: {e}"))
        })?;

        let text = envelope
            .pointer("/candidates/0/content/parts/0/text")
            .and_then(serde_json::Value::as_str)
            .ok_or_else(|| {
                LogoError::synthesizer_request_failed("response carries no generated text")
            })?;

        serde_json::from_str(text).map_err(|e| {
            LogoError::synthesizer_request_failed(format!("generated text is not JSON: {e}"))
        })
    }
}

impl VariationSynthesizer for GeminiSynthesizer {
    fn modify(&self, current: &LogoConfig, intent: &str) -> LogoResult<LogoConfig> {
        let current_json = serde_json::to_string(current)
            .map_err(|e| LogoError::synthesizer_request_failed(format!("serialize config: {e}")))?;

        let prompt = format!(
            "Current Logo Configuration: {current_json}.\n\
             User Request: \"{intent}\".\n\n\
             Instructions:\n\
             1. Update the logo configuration JSON based on the user's request.\n\
             2. \"skew...\" values are in degrees (e.g. -12 for italic/right lean).\n\
             3. \"xOffset...\" values determine horizontal position relative to center.\n\
             4. \"fontSize...\" determines size.\n\
             5. Keep the existing text structure unless asked to change text.",
        );

        let value = self.generate(prompt, config_schema())?;
        parse_config(&value)
    }

    fn propose_variations(
        &self,
        current: &LogoConfig,
        intent: &str,
        count: usize,
    ) -> LogoResult<Vec<LogoConfig>> {
        let current_json = serde_json::to_string(current)
            .map_err(|e| LogoError::synthesizer_request_failed(format!("serialize config: {e}")))?;

        let prompt = format!(
            "Current Logo Configuration: {current_json}.\n\
             User Request: \"{intent}\".\n\n\
             Instructions:\n\
             1. Generate exactly {count} DISTINCT variations.\n\
             2. Vary the fonts, offsets, skews, and sizes to create different layouts.\n\
             3. Ensure \"xOffset\" values are adjusted if \"fontSize\" changes to prevent overlapping.",
        );

        let schema = json!({
            "type": "OBJECT",
            "properties": { "variations": { "type": "ARRAY", "items": config_schema() } },
        });

        let value = self.generate(prompt, schema)?;
        parse_variations(&value, count)
    }
}

/// Response schema for one flat LogoConfig, declared the way the Gemini API
/// expects (uppercase type names).
fn config_schema() -> serde_json::Value {
    let mut properties = serde_json::Map::new();
    for key in [
        "textMain",
        "textSecondary",
        "textTagline",
        "colorMain",
        "colorMainRest",
        "colorSecondary",
        "colorTagline",
        "bgColor",
        "fontFamily",
    ] {
        properties.insert(key.to_string(), json!({ "type": "STRING" }));
    }
    for key in [
        "fontSizeMainFirst",
        "skewMainFirst",
        "xOffsetMainFirst",
        "fontSizeMainRest",
        "skewMainRest",
        "xOffsetMainRest",
        "letterSpacingMainRest",
        "fontSizeSecondary",
        "skewSecondary",
        "xOffsetSecondary",
        "fontSizeTagline",
        "taglineOffset",
        "letterSpacingTagline",
        "skewTagline",
    ] {
        properties.insert(key.to_string(), json!({ "type": "NUMBER" }));
    }

    json!({
        "type": "OBJECT",
        "properties": properties,
        "required": [
            "textMain", "textSecondary", "textTagline", "colorMain", "colorMainRest",
            "colorSecondary", "colorTagline", "bgColor", "fontFamily",
            "fontSizeMainFirst", "skewMainFirst", "xOffsetMainFirst",
            "fontSizeMainRest", "skewMainRest", "xOffsetMainRest",
            "fontSizeSecondary", "skewSecondary", "xOffsetSecondary",
            "fontSizeTagline", "taglineOffset", "skewTagline"
        ],
    })
}
