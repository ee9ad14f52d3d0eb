use serde_json::{json, Value};
use std::time::Duration;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const T2A_PATH: &str = "/v1/t2a_v2";

/// Hex for the ASCII bytes of "hello"
pub const HELLO_HEX: &str = "68656c6c6f";

pub fn success_body(audio_hex: &str) -> Value {
    json!({
        "data": { "audio": audio_hex, "status": 2 },
        "extra_info": { "audio_format": "mp3", "audio_size": audio_hex.len() / 2 },
        "trace_id": "04ece790375f3ca2edbb44e8c4c200bf",
        "base_resp": { "status_code": 0, "status_msg": "success" }
    })
}

pub fn error_body(status_code: i64, status_msg: &str) -> Value {
    json!({
        "base_resp": { "status_code": status_code, "status_msg": status_msg }
    })
}

/// Answer every synthesis call with `body` and HTTP 200, expecting exactly `calls` requests
pub async fn mount_json(server: &MockServer, body: Value, calls: u64) {
    Mock::given(method("POST"))
        .and(path(T2A_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .expect(calls)
        .mount(server)
        .await;
}

pub async fn mount_status(server: &MockServer, status: u16, body: &str) {
    Mock::given(method("POST"))
        .and(path(T2A_PATH))
        .respond_with(ResponseTemplate::new(status).set_body_string(body))
        .expect(1)
        .mount(server)
        .await;
}

/// Respond only after `delay`, long enough to trip the client timeout
pub async fn mount_slow(server: &MockServer, delay: Duration) {
    Mock::given(method("POST"))
        .and(path(T2A_PATH))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(success_body(HELLO_HEX))
                .set_delay(delay),
        )
        .expect(1)
        .mount(server)
        .await;
}
