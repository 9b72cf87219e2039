//! Raster drawing pad engine for digit sketches.
//!
//! This crate is compiled to WebAssembly and runs in the browser, and it also
//! builds natively for the CLI and tests. It owns the fixed-size pixel buffer
//! the user draws into, the pointer state machine that turns DOM events into
//! strokes, PNG export, and the blit that puts the buffer on screen. The host
//! Leptos layer only wires DOM events to the engine and submits the exported
//! image.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Top-level engine and testable [`engine::EngineCore`] |
//! | [`surface`] | RGBA raster buffer and stroke rasterization |
//! | [`input`] | Pointer payloads and the Idle/Drawing state machine |
//! | [`geom`] | Points and the client-to-local coordinate mapping |
//! | [`export`] | PNG encoding of the buffer |
//! | [`script`] | JSON stroke scripts replayed through the input path |
//! | [`render`] | Buffer-to-canvas blit |
//! | [`consts`] | Surface size and stroke style constants |

pub mod consts;
pub mod engine;
pub mod export;
pub mod geom;
pub mod input;
pub mod render;
pub mod script;
pub mod surface;
