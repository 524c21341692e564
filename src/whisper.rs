use crate::engine::Engine;
use crate::error::{Error, Result};
use std::ffi::c_int;
use whisper_rs::{
    FullParams, SamplingStrategy, WhisperContext, WhisperContextParameters, WhisperState,
};

pub const DEFAULT_MODEL: &str = "AI_SPK/whisper.cpp/models/ggml-base.bin";

#[derive(Debug, Clone)]
pub struct WhisperConfig {
    /// Path to a ggml model file.
    pub model: String,
    pub use_gpu: bool,
}

impl Default for WhisperConfig {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.into(),
            use_gpu: cfg!(any(feature = "cuda", feature = "metal")),
        }
    }
}

/// Owns the native whisper context and its decoding state. Both are freed on drop.
pub struct WhisperEngine {
    state: WhisperState,
    _ctx: WhisperContext,
}

impl WhisperEngine {
    pub fn new(config: WhisperConfig) -> Result<Self> {
        // Route whisper.cpp and ggml logs through tracing
        whisper_rs::install_whisper_tracing_trampoline();

        let mut params = WhisperContextParameters::default();
        params.use_gpu(config.use_gpu);

        let init_error = |reason: String| Error::EngineInit {
            model: config.model.clone(),
            reason,
        };
        let ctx = WhisperContext::new_with_params(&config.model, params)
            .map_err(|e| init_error(e.to_string()))?;
        let state = ctx
            .create_state()
            .map_err(|e| init_error(format!("failed to create state: {}", e)))?;

        Ok(Self { state, _ctx: ctx })
    }

    fn params<'a, 'b>() -> FullParams<'a, 'b> {
        let mut params = FullParams::new(SamplingStrategy::Greedy { best_of: 1 });
        params.set_print_progress(false);
        params.set_print_special(false);
        params.set_print_realtime(false);
        params.set_print_timestamps(false);
        params.set_translate(false);
        params.set_language(Some("auto"));
        // true would stop whisper right after detection, without decoding
        params.set_detect_language(false);
        params
    }
}

impl Engine for WhisperEngine {
    fn run_full(&mut self, samples: &[f32]) -> Result<()> {
        self.state
            .full(Self::params(), samples)
            .map_err(|e| Error::EngineRun(e.to_string()))?;
        Ok(())
    }

    fn segment_count(&self) -> Result<usize> {
        let count = self
            .state
            .full_n_segments()
            .map_err(|e| Error::EngineRun(e.to_string()))?;
        Ok(count.max(0) as usize)
    }

    fn segment_text(&self, index: usize) -> Result<String> {
        self.state
            .full_get_segment_text(index as c_int)
            .map_err(|e| Error::SegmentRead {
                index,
                reason: e.to_string(),
            })
    }

    fn detected_language(&self) -> Option<String> {
        let id = self.state.full_lang_id_from_state().ok()?;
        whisper_rs::get_lang_str(id).map(String::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_model_fails_to_init() {
        let dir = tempfile::tempdir().unwrap();
        let model = dir.path().join("ggml-missing.bin");
        let config = WhisperConfig {
            model: model.to_string_lossy().into_owned(),
            use_gpu: false,
        };

        match WhisperEngine::new(config) {
            Err(Error::EngineInit { model: reported, .. }) => {
                assert!(reported.ends_with("ggml-missing.bin"))
            }
            Err(other) => panic!("unexpected error: {other}"),
            Ok(_) => panic!("model should not load"),
        }
    }

    #[test]
    fn default_config_points_at_base_model() {
        let config = WhisperConfig::default();
        assert!(config.model.ends_with("ggml-base.bin"));
    }
}
