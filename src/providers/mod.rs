mod gemini;

pub use gemini::GeminiProvider;

use async_trait::async_trait;
use serde_json::Value;

use crate::error::CompanionError;
use crate::media::MediaPart;

/// Interface to the hosted generative model.
///
/// This is the only seam in the crate that performs network I/O, kept
/// behind a trait so retries, timeouts, or alternate providers can be
/// added later without touching the prompt builder or validator, and so
/// tests can substitute a stub.
#[async_trait]
pub trait GenerativeProvider: Send + Sync {
    /// Get the provider name (e.g., "gemini")
    fn provider_name(&self) -> &str;

    /// Send one prompt with optional ordered media attachments and a
    /// structured-output schema constraint; return the raw response text.
    ///
    /// A single attempt per call: failures surface immediately and are
    /// never retried here.
    async fn generate(
        &self,
        prompt: &str,
        media: &[MediaPart],
        schema: &Value,
    ) -> Result<String, CompanionError>;
}
