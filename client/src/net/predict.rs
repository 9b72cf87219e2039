//! Prediction requests from the browser.
//!
//! Client-side (csr): multipart POST via `gloo-net` with a `FormData` body.
//! The submission runner is generic over [`Transport`] so the flow is
//! testable natively.
//!
//! ERROR HANDLING
//! ==============
//! Every failure ends as [`Prediction::Error`]; the cause is logged by
//! [`Prediction::from_outcome`] and never reaches the view.

#[cfg(test)]
#[path = "predict_test.rs"]
mod predict_test;

use predict::{ImageUpload, PredictError, Prediction, Transport};

/// Send a prepared upload once and collapse the outcome for display.
///
/// `upload` is the export result; an export failure skips the request and is
/// reported like any other failure.
pub async fn run_submission<T: Transport>(
    transport: &T,
    url: &str,
    upload: Result<ImageUpload, PredictError>,
) -> Prediction {
    let outcome = match upload {
        Ok(upload) => predict::submit(transport, url, upload).await,
        Err(e) => Err(e),
    };
    Prediction::from_outcome(outcome)
}

/// [`Transport`] backed by the browser's `fetch`.
#[cfg(feature = "csr")]
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserTransport;

#[cfg(feature = "csr")]
impl BrowserTransport {
    fn form_data(upload: &ImageUpload) -> Result<web_sys::FormData, PredictError> {
        let bytes = js_sys::Uint8Array::from(upload.bytes.as_slice());
        let parts = js_sys::Array::of1(&bytes);
        let options = web_sys::BlobPropertyBag::new();
        options.set_type(upload.content_type);
        let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &options).map_err(js_error)?;
        let form = web_sys::FormData::new().map_err(js_error)?;
        form.append_with_blob_and_filename(upload.field, &blob, upload.file_name)
            .map_err(js_error)?;
        Ok(form)
    }
}

#[cfg(feature = "csr")]
impl Transport for BrowserTransport {
    async fn post_image(&self, url: &str, upload: ImageUpload) -> Result<predict::RawResponse, PredictError> {
        let form = Self::form_data(&upload)?;
        let resp = gloo_net::http::Request::post(url)
            .body(form)
            .map_err(|e| PredictError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| PredictError::Transport(e.to_string()))?;
        let status = resp.status();
        let body = resp
            .text()
            .await
            .map_err(|e| PredictError::Transport(e.to_string()))?;
        Ok(predict::RawResponse { status, body })
    }
}

#[cfg(feature = "csr")]
fn js_error(value: wasm_bindgen::JsValue) -> PredictError {
    PredictError::Transport(format!("{value:?}"))
}
