pub mod gemini;

use crate::config::model::LogoConfig;
use crate::foundation::error::{LogoError, LogoResult};

/// External AI-backed producer of new configs from free-text intent.
///
/// Implementations are untrusted: everything they return crosses the
/// [`parse_config`] / [`parse_variations`] validation boundary before the layout
/// engine ever sees it. Both operations are single-shot; callers surface any
/// failure as one error and keep their prior state.
pub trait VariationSynthesizer {
    /// Rewrite `current` according to `intent`.
    fn modify(&self, current: &LogoConfig, intent: &str) -> LogoResult<LogoConfig>;

    /// Propose up to `count` distinct alternatives to `current`.
    ///
    /// Fewer than `count` results is not an error; malformed entries are dropped,
    /// not propagated.
    fn propose_variations(
        &self,
        current: &LogoConfig,
        intent: &str,
        count: usize,
    ) -> LogoResult<Vec<LogoConfig>>;
}

/// Parse one synthesizer-produced config. Shape or invariant failures are
/// [`LogoError::SynthesizerRequestFailed`]; nothing malformed gets past here.
pub fn parse_config(value: &serde_json::Value) -> LogoResult<LogoConfig> {
    let config: LogoConfig = serde_json::from_value(value.clone())
        .map_err(|e| LogoError::synthesizer_request_failed(format!("malformed config: {e}")))?;
    config
        .validate()
        .map_err(|e| LogoError::synthesizer_request_failed(format!("invalid config: {e}")))?;
    Ok(config)
}

/// Parse a multi-variation response: either a bare array or an object wrapping
/// one under `"variations"`. Entries that fail to parse or validate are skipped
/// with a warning; the result is truncated to `count`. An empty result is valid.
pub fn parse_variations(value: &serde_json::Value, count: usize) -> LogoResult<Vec<LogoConfig>> {
    let entries = match value {
        serde_json::Value::Array(items) => items.as_slice(),
        serde_json::Value::Object(map) => match map.get("variations") {
            Some(serde_json::Value::Array(items)) => items.as_slice(),
            _ => {
                return Err(LogoError::synthesizer_request_failed(
                    "variations response is neither an array nor {\"variations\": [...]}",
                ));
            }
        },
        _ => {
            return Err(LogoError::synthesizer_request_failed(
                "variations response is neither an array nor an object",
            ));
        }
    };

    let mut out = Vec::new();
    for (index, entry) in entries.iter().enumerate() {
        match parse_config(entry) {
            Ok(config) => out.push(config),
            Err(e) => {
                tracing::warn!(index, error = %e, "skipping malformed variation entry");
            }
        }
        if out.len() == count {
            break;
        }
    }
    Ok(out)
}
