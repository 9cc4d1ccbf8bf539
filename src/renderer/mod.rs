//! Rendering module
//!
//! `frame` builds a platform-independent draw list; `canvas` paints it onto
//! an HTML canvas in the browser.

#[cfg(target_arch = "wasm32")]
pub mod canvas;
pub mod frame;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasRenderer;
pub use frame::{DrawCircle, Frame, Overlay, Sprite};
