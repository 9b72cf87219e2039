//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! Pointer state lives in the canvas engine; this module holds only what the
//! Leptos view reacts to: the prediction and the loading flag.

pub mod pad;
