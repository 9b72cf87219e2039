//! Prediction service contract and the single-shot recognition flow.
//!
//! This crate owns everything both front ends (browser and CLI) agree on: the
//! multipart upload shape, the JSON response schema, the error taxonomy, and
//! the mapping from an outcome to the text shown to the user. The actual HTTP
//! call sits behind [`Transport`] so each front end plugs in its own client.
//!
//! ERROR HANDLING
//! ==============
//! Encode, transport, status, and parse failures are distinct [`PredictError`]
//! variants for logging, but [`Prediction::from_outcome`] collapses all of
//! them into [`Prediction::Error`], which renders as a fixed indicator.

#[cfg(test)]
#[path = "lib_test.rs"]
mod lib_test;

use std::fmt;
use std::future::Future;

use canvas::export::{self, ExportError, PNG_CONTENT_TYPE};
use canvas::surface::RasterSurface;
use serde_json::{Map, Number, Value};

/// Multipart field name carrying the image.
pub const FILE_FIELD: &str = "file";

/// Filename attached to the image part.
pub const FILE_NAME: &str = "digit.png";

/// Text shown in place of a label when recognition fails for any reason.
pub const ERROR_INDICATOR: &str = "Error in recognition";

/// Error produced while recognizing a drawing.
#[derive(Debug, thiserror::Error)]
pub enum PredictError {
    /// The surface could not be encoded.
    #[error("image export failed: {0}")]
    Encode(#[from] ExportError),
    /// The request never completed (DNS, connect, CORS, body read, ...).
    #[error("transport failed: {0}")]
    Transport(String),
    /// The service answered with a non-success status.
    #[error("prediction service returned HTTP {0}")]
    Status(u16),
    /// The body was not JSON of the expected shape.
    #[error("invalid response body: {0}")]
    InvalidJson(#[from] serde_json::Error),
    /// The body parsed but carried no `prediction`.
    #[error("response has no `prediction` field")]
    MissingPrediction,
    /// `prediction` was present but neither a number nor a string.
    #[error("`prediction` is {0}, expected a number or string")]
    UnsupportedPrediction(&'static str),
}

/// A PNG ready to be sent as the multipart file part.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageUpload {
    /// Multipart field name.
    pub field: &'static str,
    /// Part filename.
    pub file_name: &'static str,
    /// Part content type.
    pub content_type: &'static str,
    /// Encoded image bytes.
    pub bytes: Vec<u8>,
}

impl ImageUpload {
    /// Wrap PNG bytes with the fixed field name, filename, and content type.
    #[must_use]
    pub fn png(bytes: Vec<u8>) -> Self {
        Self {
            field: FILE_FIELD,
            file_name: FILE_NAME,
            content_type: PNG_CONTENT_TYPE,
            bytes,
        }
    }

    /// Encode `surface` and wrap it.
    ///
    /// # Errors
    ///
    /// Returns [`PredictError::Encode`] if PNG encoding fails.
    pub fn from_surface(surface: &RasterSurface) -> Result<Self, PredictError> {
        Ok(Self::png(export::encode_png(surface)?))
    }
}

/// Status and body text of a completed HTTP exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends one multipart POST. Implementations must not retry.
pub trait Transport {
    /// POST `upload` to `url` as `multipart/form-data` and return the raw
    /// status and body. Only failures to complete the exchange are errors;
    /// non-success statuses are returned as responses.
    fn post_image(&self, url: &str, upload: ImageUpload) -> impl Future<Output = Result<RawResponse, PredictError>>;
}

/// Extract the label from a raw response.
///
/// Strings are taken verbatim. Numbers use their JSON text, except that
/// integral floats drop the fraction, so `7`, `7.0` and `"7"` all display as
/// `7`. A `null` prediction counts as missing.
///
/// # Errors
///
/// Returns [`PredictError::Status`] for non-2xx responses,
/// [`PredictError::InvalidJson`] when the body is not a JSON object,
/// [`PredictError::MissingPrediction`] when the field is absent or null, and
/// [`PredictError::UnsupportedPrediction`] for booleans, arrays, and objects.
pub fn parse_response(raw: &RawResponse) -> Result<String, PredictError> {
    if !raw.is_success() {
        return Err(PredictError::Status(raw.status));
    }
    let mut body: Map<String, Value> = serde_json::from_str(&raw.body)?;
    match body.remove("prediction") {
        None | Some(Value::Null) => Err(PredictError::MissingPrediction),
        Some(Value::String(label)) => Ok(label),
        Some(Value::Number(n)) => Ok(number_text(&n)),
        Some(Value::Bool(_)) => Err(PredictError::UnsupportedPrediction("a boolean")),
        Some(Value::Array(_)) => Err(PredictError::UnsupportedPrediction("an array")),
        Some(Value::Object(_)) => Err(PredictError::UnsupportedPrediction("an object")),
    }
}

// Above 2^53 floats stop being exact integers; keep serde_json's text there.
const MAX_EXACT_FLOAT: f64 = 9_007_199_254_740_992.0;

fn number_text(n: &Number) -> String {
    match n.as_f64() {
        Some(f) if n.is_f64() && f.fract() == 0.0 && f.abs() < MAX_EXACT_FLOAT => format!("{f:.0}"),
        _ => n.to_string(),
    }
}

/// Encode `surface`, send it once, and return the predicted label.
///
/// # Errors
///
/// Any [`PredictError`]: encoding, transport, status, or parse failure.
pub async fn recognize<T: Transport>(transport: &T, url: &str, surface: &RasterSurface) -> Result<String, PredictError> {
    let upload = ImageUpload::from_surface(surface)?;
    submit(transport, url, upload).await
}

/// Send an already-encoded image once and return the predicted label.
///
/// # Errors
///
/// Transport, status, or parse failure.
pub async fn submit<T: Transport>(transport: &T, url: &str, upload: ImageUpload) -> Result<String, PredictError> {
    let raw = transport.post_image(url, upload).await?;
    parse_response(&raw)
}

/// What the result area shows once a submission finished.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Prediction {
    /// Label returned by the service, displayed as-is.
    Label(String),
    /// Any failure; displayed as [`ERROR_INDICATOR`].
    Error,
}

impl Prediction {
    /// Collapse an outcome into a display value, logging the failure cause.
    #[must_use]
    pub fn from_outcome(outcome: Result<String, PredictError>) -> Self {
        match outcome {
            Ok(label) => {
                log::debug!("prediction: {label}");
                Self::Label(label)
            }
            Err(e) => {
                log::error!("recognition failed: {e}");
                Self::Error
            }
        }
    }

    #[must_use]
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error)
    }

    /// Result-area text, e.g. `Prediction: 7`.
    #[must_use]
    pub fn result_text(&self) -> String {
        format!("Prediction: {self}")
    }
}

impl fmt::Display for Prediction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Label(label) => f.write_str(label),
            Self::Error => f.write_str(ERROR_INDICATOR),
        }
    }
}
