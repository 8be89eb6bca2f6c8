//! Speech-to-text and text-to-speech stubs
//!
//! Real recognizers and synthesizers are external collaborators reached over
//! HTTP; until one is wired in, both directions return fixed placeholder
//! payloads so the frontend audio path can be exercised end to end.

/// Placeholder transcription returned for every audio upload
pub const PLACEHOLDER_TRANSCRIPT: &str = "Hello, this is a dummy transcription.";

/// Placeholder audio payload returned for every synthesis request
pub const PLACEHOLDER_AUDIO: &[u8] = b"This is dummy audio content.";

/// Transcribes speech to text
#[derive(Debug, Clone, Copy, Default)]
pub struct SpeechToText;

impl SpeechToText {
    /// Transcribe audio bytes to text
    #[must_use]
    pub fn transcribe(&self, audio: &[u8]) -> String {
        tracing::info!(audio_bytes = audio.len(), "transcribing audio (stub)");
        PLACEHOLDER_TRANSCRIPT.to_string()
    }
}

/// Synthesizes speech from text
#[derive(Debug, Clone, Copy, Default)]
pub struct TextToSpeech;

impl TextToSpeech {
    /// Synthesize text into audio bytes (MP3 content type on the wire)
    #[must_use]
    pub fn synthesize(&self, text: &str) -> Vec<u8> {
        tracing::info!(chars = text.len(), "synthesizing speech (stub)");
        PLACEHOLDER_AUDIO.to_vec()
    }
}
