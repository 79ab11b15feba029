// ============================================================================
// SHOWCASE ENGINE - Interactive project monitors for the portfolio site
// ============================================================================
//
// Each showcase is a 3-D monitor cycling through a project's screenshots:
// hovering zooms the camera in and reveals prev/next arrows, clicking an
// arrow slides the screens. The controller (`carousel`) is host-agnostic;
// `web` binds it to Three.js and the DOM when built for wasm32.

pub mod camera;
pub mod carousel;
pub mod config;
pub mod error;
pub mod pick;
pub mod tween;

#[cfg(not(target_arch = "wasm32"))]
pub mod textures;

#[cfg(target_arch = "wasm32")]
mod web;

pub use carousel::{Carousel, Direction, Slot};
pub use config::{ShowcaseSpec, Tuning, parse_manifest};
pub use error::ShowcaseError;
