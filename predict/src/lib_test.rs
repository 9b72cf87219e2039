use std::cell::RefCell;

use canvas::geom::Point;
use futures::executor::block_on;

use super::*;

/// In-memory transport that records uploads and replays a canned outcome.
struct FakeTransport {
    outcome: RefCell<Option<Result<RawResponse, PredictError>>>,
    calls: RefCell<Vec<(String, ImageUpload)>>,
}

impl FakeTransport {
    fn responding(status: u16, body: &str) -> Self {
        Self::with(Ok(RawResponse { status, body: body.to_owned() }))
    }

    fn failing(message: &str) -> Self {
        Self::with(Err(PredictError::Transport(message.to_owned())))
    }

    fn with(outcome: Result<RawResponse, PredictError>) -> Self {
        Self {
            outcome: RefCell::new(Some(outcome)),
            calls: RefCell::new(Vec::new()),
        }
    }
}

impl Transport for FakeTransport {
    async fn post_image(&self, url: &str, upload: ImageUpload) -> Result<RawResponse, PredictError> {
        self.calls.borrow_mut().push((url.to_owned(), upload));
        self.outcome
            .borrow_mut()
            .take()
            .unwrap_or_else(|| Err(PredictError::Transport("called twice".to_owned())))
    }
}

fn ok(body: &str) -> RawResponse {
    RawResponse { status: 200, body: body.to_owned() }
}

fn shown(outcome: Result<String, PredictError>) -> String {
    Prediction::from_outcome(outcome).result_text()
}

// =============================================================
// parse_response
// =============================================================

#[test]
fn numeric_prediction_is_displayed_as_number() {
    assert_eq!(parse_response(&ok(r#"{"prediction": 7}"#)).expect("label"), "7");
}

#[test]
fn string_prediction_is_displayed_verbatim() {
    assert_eq!(parse_response(&ok(r#"{"prediction": "3"}"#)).expect("label"), "3");
}

#[test]
fn extra_fields_are_ignored() {
    let raw = ok(r#"{"prediction": 4, "confidence": 0.98}"#);
    assert_eq!(parse_response(&raw).expect("label"), "4");
}

#[test]
fn missing_prediction_is_error() {
    let err = parse_response(&ok("{}")).expect_err("missing");
    assert!(matches!(err, PredictError::MissingPrediction));
}

#[test]
fn null_prediction_is_missing() {
    let err = parse_response(&ok(r#"{"prediction": null}"#)).expect_err("null");
    assert!(matches!(err, PredictError::MissingPrediction));
}

#[test]
fn non_json_body_is_error() {
    let err = parse_response(&ok("<html>oops</html>")).expect_err("html");
    assert!(matches!(err, PredictError::InvalidJson(_)));
}

#[test]
fn non_object_body_is_error() {
    let err = parse_response(&ok("[7]")).expect_err("array");
    assert!(matches!(err, PredictError::InvalidJson(_)));
}

#[test]
fn scalar_body_is_error() {
    let err = parse_response(&ok("7")).expect_err("scalar");
    assert!(matches!(err, PredictError::InvalidJson(_)));
}

#[test]
fn integral_float_prediction_drops_fraction() {
    assert_eq!(parse_response(&ok(r#"{"prediction": 7.0}"#)).expect("label"), "7");
    assert_eq!(parse_response(&ok(r#"{"prediction": -2.0}"#)).expect("label"), "-2");
}

#[test]
fn fractional_float_prediction_keeps_fraction() {
    assert_eq!(parse_response(&ok(r#"{"prediction": 7.5}"#)).expect("label"), "7.5");
}

#[test]
fn non_scalar_prediction_is_unsupported() {
    for body in [r#"{"prediction": true}"#, r#"{"prediction": [7]}"#, r#"{"prediction": {"v": 7}}"#] {
        let err = parse_response(&ok(body)).expect_err(body);
        assert!(matches!(err, PredictError::UnsupportedPrediction(_)), "{body}: {err}");
    }
}

#[test]
fn server_error_status_is_error_even_with_valid_body() {
    let raw = RawResponse { status: 500, body: r#"{"prediction": 1}"#.to_owned() };
    let err = parse_response(&raw).expect_err("500");
    assert!(matches!(err, PredictError::Status(500)));
}

#[test]
fn success_range_is_2xx() {
    assert!(RawResponse { status: 200, body: String::new() }.is_success());
    assert!(RawResponse { status: 204, body: String::new() }.is_success());
    assert!(!RawResponse { status: 199, body: String::new() }.is_success());
    assert!(!RawResponse { status: 302, body: String::new() }.is_success());
    assert!(!RawResponse { status: 404, body: String::new() }.is_success());
}

// =============================================================
// ImageUpload
// =============================================================

#[test]
fn upload_uses_fixed_field_filename_and_type() {
    let upload = ImageUpload::png(vec![1, 2, 3]);
    assert_eq!(upload.field, "file");
    assert_eq!(upload.file_name, "digit.png");
    assert_eq!(upload.content_type, "image/png");
    assert_eq!(upload.bytes, vec![1, 2, 3]);
}

#[test]
fn upload_from_surface_is_png() {
    let upload = ImageUpload::from_surface(&RasterSurface::new()).expect("encode");
    assert_eq!(&upload.bytes[1..4], b"PNG");
}

// =============================================================
// recognize
// =============================================================

#[test]
fn recognize_posts_once_to_endpoint() {
    let transport = FakeTransport::responding(200, r#"{"prediction": 7}"#);
    let mut surface = RasterSurface::new();
    surface.begin_stroke(Point::new(140.0, 40.0));
    surface.extend_stroke(Point::new(140.0, 240.0));

    let label = block_on(recognize(&transport, "http://svc/predict", &surface)).expect("label");
    assert_eq!(label, "7");

    let calls = transport.calls.borrow();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].0, "http://svc/predict");
    assert_eq!(calls[0].1.field, FILE_FIELD);
    assert_eq!(calls[0].1.bytes, export::encode_png(&surface).expect("encode"));
}

#[test]
fn recognize_success_displays_prediction() {
    let transport = FakeTransport::responding(200, r#"{"prediction": 7}"#);
    let outcome = block_on(recognize(&transport, "u", &RasterSurface::new()));
    assert_eq!(shown(outcome), "Prediction: 7");
}

#[test]
fn recognize_network_failure_displays_indicator() {
    let transport = FakeTransport::failing("connection refused");
    let outcome = block_on(recognize(&transport, "u", &RasterSurface::new()));
    assert!(matches!(outcome, Err(PredictError::Transport(_))));
    assert_eq!(shown(outcome), "Prediction: Error in recognition");
}

#[test]
fn recognize_http_500_displays_indicator() {
    let transport = FakeTransport::responding(500, "internal error");
    let outcome = block_on(recognize(&transport, "u", &RasterSurface::new()));
    assert_eq!(shown(outcome), "Prediction: Error in recognition");
}

#[test]
fn recognize_missing_field_displays_indicator() {
    let transport = FakeTransport::responding(200, "{}");
    let outcome = block_on(recognize(&transport, "u", &RasterSurface::new()));
    assert_eq!(shown(outcome), "Prediction: Error in recognition");
}

#[test]
fn recognize_array_body_displays_indicator() {
    let transport = FakeTransport::responding(200, "[7]");
    let outcome = block_on(recognize(&transport, "u", &RasterSurface::new()));
    assert!(matches!(outcome, Err(PredictError::InvalidJson(_))));
    assert_eq!(shown(outcome), "Prediction: Error in recognition");
}

#[test]
fn submit_sends_upload_unchanged() {
    let transport = FakeTransport::responding(200, r#"{"prediction": "9"}"#);
    let upload = ImageUpload::png(vec![9, 9, 9]);
    let label = block_on(submit(&transport, "u", upload.clone())).expect("label");
    assert_eq!(label, "9");
    assert_eq!(transport.calls.borrow()[0].1, upload);
}

// =============================================================
// Prediction
// =============================================================

#[test]
fn prediction_display() {
    assert_eq!(Prediction::Label("5".to_owned()).to_string(), "5");
    assert_eq!(Prediction::Error.to_string(), ERROR_INDICATOR);
}

#[test]
fn from_outcome_collapses_every_error_kind() {
    let errors = [
        PredictError::Transport("x".to_owned()),
        PredictError::Status(503),
        PredictError::MissingPrediction,
        PredictError::UnsupportedPrediction("a boolean"),
    ];
    for err in errors {
        assert!(Prediction::from_outcome(Err(err)).is_error());
    }
}

#[test]
fn error_messages_name_the_cause() {
    assert_eq!(PredictError::Status(500).to_string(), "prediction service returned HTTP 500");
    assert_eq!(PredictError::MissingPrediction.to_string(), "response has no `prediction` field");
    assert_eq!(
        PredictError::UnsupportedPrediction("an array").to_string(),
        "`prediction` is an array, expected a number or string"
    );
}
