//! UI components.
//!
//! SYSTEM CONTEXT
//! ==============
//! `DrawPad` hosts the canvas engine and the two controls, reading and writing
//! `PadState` from Leptos context.

pub mod draw_pad;
