//! Networking modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `predict` posts the exported drawing to the prediction service and maps the
//! outcome into [`predict::Prediction`].

pub mod predict;
