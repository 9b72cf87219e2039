//! Stroke scripts: a JSON description of strokes that can be replayed onto a
//! surface through the regular input path.
//!
//! ```json
//! { "strokes": [ [[60, 40], [140, 40], [90, 240]] ] }
//! ```
//!
//! Each stroke is a list of `[x, y]` canvas-local points. The first point is
//! the pointer-down, the rest are pointer-moves, and the stroke ends with a
//! pointer-up.

#[cfg(test)]
#[path = "script_test.rs"]
mod script_test;

use serde::{Deserialize, Serialize};

/// Error returned by [`StrokeScript::from_json`].
#[derive(Debug, thiserror::Error)]
pub enum ScriptError {
    #[error("invalid stroke script: {0}")]
    Json(#[from] serde_json::Error),
}

/// An ordered list of strokes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StrokeScript {
    pub strokes: Vec<Vec<[f64; 2]>>,
}

impl StrokeScript {
    /// Parse a script from JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`ScriptError::Json`] for malformed JSON or a shape mismatch.
    pub fn from_json(text: &str) -> Result<Self, ScriptError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Number of points across all strokes.
    #[must_use]
    pub fn point_count(&self) -> usize {
        self.strokes.iter().map(Vec::len).sum()
    }
}
