pub type LogoResult<T> = Result<T, LogoError>;

#[derive(thiserror::Error, Debug)]
pub enum LogoError {
    #[error("validation error: {0}")]
    Validation(String),

    #[error("invalid configuration file: {0}")]
    InvalidConfigFile(String),

    #[error("synthesizer unavailable: {0}")]
    SynthesizerUnavailable(String),

    #[error("synthesizer request failed: {0}")]
    SynthesizerRequestFailed(String),

    #[error("render backend unavailable: {0}")]
    RenderBackendUnavailable(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl LogoError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invalid_config_file(msg: impl Into<String>) -> Self {
        Self::InvalidConfigFile(msg.into())
    }

    pub fn synthesizer_unavailable(msg: impl Into<String>) -> Self {
        Self::SynthesizerUnavailable(msg.into())
    }

    pub fn synthesizer_request_failed(msg: impl Into<String>) -> Self {
        Self::SynthesizerRequestFailed(msg.into())
    }

    pub fn render_backend_unavailable(msg: impl Into<String>) -> Self {
        Self::RenderBackendUnavailable(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_prefixes_are_stable() {
        assert!(
            LogoError::validation("x")
                .to_string()
                .contains("validation error:")
        );
        assert!(
            LogoError::invalid_config_file("x")
                .to_string()
                .contains("invalid configuration file:")
        );
        assert!(
            LogoError::synthesizer_unavailable("x")
                .to_string()
                .contains("synthesizer unavailable:")
        );
        assert!(
            LogoError::synthesizer_request_failed("x")
                .to_string()
                .contains("synthesizer request failed:")
        );
        assert!(
            LogoError::render_backend_unavailable("x")
                .to_string()
                .contains("render backend unavailable:")
        );
    }

    #[test]
    fn other_preserves_source() {
        let base = std::io::Error::other("boom");
        let err = LogoError::Other(anyhow::Error::new(base));
        assert!(err.to_string().contains("boom"));
    }
}
