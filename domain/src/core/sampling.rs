//! Fixed sampling parameters sent with every request

use serde::Serialize;

/// Sampling parameters for reply generation (Value Object)
///
/// These are product constants and are not exposed through configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SamplingParams {
    pub temperature: f32,
    pub top_p: f32,
    pub top_k: u32,
}

impl SamplingParams {
    pub const HELP_DESK: SamplingParams = SamplingParams {
        temperature: 0.7,
        top_p: 0.95,
        top_k: 64,
    };
}

impl Default for SamplingParams {
    fn default() -> Self {
        Self::HELP_DESK
    }
}
