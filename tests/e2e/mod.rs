// End-to-end tests for the MiniMax TTS host
//
// Each test gets its own server bound to an ephemeral port and its own
// wiremock server standing in for the MiniMax API, so tests run in parallel
// without sharing entries, notifications or mocks.

mod test_config_flow;
mod test_entries;
mod test_health;
