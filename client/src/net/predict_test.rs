use std::cell::Cell;

use futures::executor::block_on;
use predict::{RawResponse, ERROR_INDICATOR};

use super::*;

/// Transport that counts calls and returns a canned outcome.
struct StubTransport {
    status: u16,
    body: &'static str,
    fail: bool,
    calls: Cell<usize>,
}

impl StubTransport {
    fn ok(body: &'static str) -> Self {
        Self { status: 200, body, fail: false, calls: Cell::new(0) }
    }

    fn status(status: u16) -> Self {
        Self { status, body: "", fail: false, calls: Cell::new(0) }
    }

    fn down() -> Self {
        Self { status: 0, body: "", fail: true, calls: Cell::new(0) }
    }
}

impl Transport for StubTransport {
    async fn post_image(&self, _url: &str, _upload: ImageUpload) -> Result<RawResponse, PredictError> {
        self.calls.set(self.calls.get() + 1);
        if self.fail {
            return Err(PredictError::Transport("failed to fetch".to_owned()));
        }
        Ok(RawResponse { status: self.status, body: self.body.to_owned() })
    }
}

fn upload() -> Result<ImageUpload, PredictError> {
    Ok(ImageUpload::png(vec![0x89, b'P', b'N', b'G']))
}

#[test]
fn success_yields_label() {
    let transport = StubTransport::ok(r#"{"prediction": 7}"#);
    let prediction = block_on(run_submission(&transport, "u", upload()));
    assert_eq!(prediction.result_text(), "Prediction: 7");
    assert_eq!(transport.calls.get(), 1);
}

#[test]
fn network_failure_yields_indicator() {
    let transport = StubTransport::down();
    let prediction = block_on(run_submission(&transport, "u", upload()));
    assert_eq!(prediction, Prediction::Error);
    assert_eq!(prediction.to_string(), ERROR_INDICATOR);
}

#[test]
fn http_500_yields_indicator() {
    let transport = StubTransport::status(500);
    assert!(block_on(run_submission(&transport, "u", upload())).is_error());
}

#[test]
fn missing_field_yields_indicator() {
    let transport = StubTransport::ok("{}");
    assert!(block_on(run_submission(&transport, "u", upload())).is_error());
}

#[test]
fn export_failure_skips_request() {
    let transport = StubTransport::ok(r#"{"prediction": 1}"#);
    let failed = Err(PredictError::Transport("no canvas".to_owned()));
    assert!(block_on(run_submission(&transport, "u", failed)).is_error());
    assert_eq!(transport.calls.get(), 0);
}

#[test]
fn full_cycle_through_pad_state() {
    use crate::state::pad::PadState;

    let transport = StubTransport::ok(r#"{"prediction": 3}"#);
    let mut state = PadState::default();
    state.begin_submission();
    assert!(!state.can_submit());
    let prediction = block_on(run_submission(&transport, "u", upload()));
    state.finish_submission(prediction);
    assert!(state.can_submit());
    assert_eq!(state.result_text().as_deref(), Some("Prediction: 3"));
    state.clear();
    assert_eq!(state.result_text(), None);
}
