pub mod entity;
pub mod error;
pub mod language;
pub mod model;
pub mod service;

pub use entity::{MinimaxTtsEntity, TextToSpeechEntity};
pub use error::TtsServiceError;
pub use language::{resolve_language, DEFAULT_LANGUAGE, SUPPORTED_LANGUAGES};
pub use model::{
    DeviceInfo, EntitySummary, SynthesizeRequest, TtsAudio, TtsSynthesisResult, FORMAT_MP3,
};
pub use service::{TtsService, TtsServiceApi};
