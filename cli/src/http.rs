//! Native [`Transport`] over `reqwest`.

#[cfg(test)]
#[path = "http_test.rs"]
mod http_test;

use predict::{ImageUpload, PredictError, RawResponse, Transport};
use reqwest::multipart::{Form, Part};

/// Multipart POST via a shared `reqwest::Client`. Uses the client's default
/// timeouts and never retries.
#[derive(Debug, Clone, Default)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn transport_error(error: reqwest::Error) -> PredictError {
    PredictError::Transport(error.to_string())
}

impl Transport for ReqwestTransport {
    async fn post_image(&self, url: &str, upload: ImageUpload) -> Result<RawResponse, PredictError> {
        let part = Part::bytes(upload.bytes)
            .file_name(upload.file_name)
            .mime_str(upload.content_type)
            .map_err(transport_error)?;
        let form = Form::new().part(upload.field, part);

        tracing::debug!(%url, "posting image");
        let response = self
            .client
            .post(url)
            .multipart(form)
            .send()
            .await
            .map_err(transport_error)?;
        let status = response.status().as_u16();
        let body = response.text().await.map_err(transport_error)?;
        tracing::debug!(status, bytes = body.len(), "prediction response");
        Ok(RawResponse { status, body })
    }
}
