#[cfg(test)]
#[path = "pad_test.rs"]
mod pad_test;

use predict::Prediction;

/// Label on the submit button while idle.
pub const SUBMIT_LABEL: &str = "Recognize Digit";

/// Label on the submit button while a request is outstanding.
pub const LOADING_LABEL: &str = "Processing...";

/// Prediction and loading state for the drawing pad.
///
/// Provided as an `RwSignal` via context.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PadState {
    /// Last completed outcome; `None` until the first submission finishes or
    /// after the pad is cleared.
    pub prediction: Option<Prediction>,
    /// True only while a submission is outstanding.
    pub loading: bool,
}

impl PadState {
    /// Whether the submit control is enabled.
    #[must_use]
    pub fn can_submit(&self) -> bool {
        !self.loading
    }

    /// Mark a submission as outstanding. The previous prediction stays on
    /// screen until the new outcome replaces it.
    pub fn begin_submission(&mut self) {
        self.loading = true;
    }

    /// Record the outcome of the outstanding submission and re-enable the
    /// submit control.
    pub fn finish_submission(&mut self, prediction: Prediction) {
        self.prediction = Some(prediction);
        self.loading = false;
    }

    /// Drop the prediction. The loading flag is left as-is.
    pub fn clear(&mut self) {
        self.prediction = None;
    }

    #[must_use]
    pub fn submit_label(&self) -> &'static str {
        if self.loading { LOADING_LABEL } else { SUBMIT_LABEL }
    }

    /// Result-area text, present only when a prediction is.
    #[must_use]
    pub fn result_text(&self) -> Option<String> {
        self.prediction.as_ref().map(Prediction::result_text)
    }
}
