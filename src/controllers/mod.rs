pub mod config_flow;
pub mod entries;
pub mod health;
pub mod tts;
