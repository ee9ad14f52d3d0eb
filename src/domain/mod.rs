pub mod config_flow;
pub mod entry;
pub mod tts;
