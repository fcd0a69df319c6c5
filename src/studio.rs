use crate::config::model::{ColorPalette, LogoConfig};
use crate::foundation::error::{LogoError, LogoResult};
use crate::synth::VariationSynthesizer;

/// Explicit editing-session state: the current dark config, the light palette it
/// pairs with, and the most recent variation proposals.
///
/// The rendering core stays stateless; `Studio` is the single owner of the
/// "current config" and every update is a whole-value replacement. Synthesizer
/// failures leave the state exactly as it was — there is no partial apply.
#[derive(Debug, Clone, PartialEq)]
pub struct Studio {
    pub config: LogoConfig,
    pub light_palette: ColorPalette,
    pub variations: Vec<LogoConfig>,
}

impl Default for Studio {
    fn default() -> Self {
        Self {
            config: LogoConfig::default(),
            light_palette: ColorPalette::light_default(),
            variations: Vec::new(),
        }
    }
}

impl Studio {
    pub fn new(config: LogoConfig, light_palette: ColorPalette) -> Self {
        Self {
            config,
            light_palette,
            variations: Vec::new(),
        }
    }

    /// The light variant: current structure with the light palette applied.
    pub fn light_config(&self) -> LogoConfig {
        self.config.with_palette(self.light_palette.clone())
    }

    /// Replace the current config with a synthesizer modification.
    #[tracing::instrument(skip(self, synth))]
    pub fn apply_modification(
        &mut self,
        synth: &dyn VariationSynthesizer,
        intent: &str,
    ) -> LogoResult<()> {
        let next = synth.modify(&self.config, intent)?;
        self.config = next;
        Ok(())
    }

    /// Replace the variation list with fresh proposals.
    #[tracing::instrument(skip(self, synth))]
    pub fn refresh_variations(
        &mut self,
        synth: &dyn VariationSynthesizer,
        intent: &str,
        count: usize,
    ) -> LogoResult<()> {
        let proposals = synth.propose_variations(&self.config, intent, count)?;
        self.variations = proposals;
        Ok(())
    }

    /// Promote one proposal to the current config.
    pub fn apply_variation(&mut self, index: usize) -> LogoResult<()> {
        let config = self
            .variations
            .get(index)
            .cloned()
            .ok_or_else(|| LogoError::validation(format!("no variation at index {index}")))?;
        self.config = config;
        Ok(())
    }

    /// Restore defaults and discard proposals.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
