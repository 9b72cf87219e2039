//! Build-time configuration.
//!
//! The prediction endpoint is read from `DIGITPAD_API_URL` when the crate is
//! compiled. There is no runtime override.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Endpoint used when `DIGITPAD_API_URL` is unset or blank at build time.
pub const DEFAULT_API_URL: &str = "http://127.0.0.1:5000/predict";

/// The prediction endpoint baked into this build.
#[must_use]
pub fn api_url() -> &'static str {
    resolve_api_url(option_env!("DIGITPAD_API_URL"))
}

fn resolve_api_url(configured: Option<&'static str>) -> &'static str {
    configured
        .map(str::trim)
        .filter(|url| !url.is_empty())
        .unwrap_or(DEFAULT_API_URL)
}
