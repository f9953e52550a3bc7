//! Rendering module
//!
//! The scene is composed against the `DrawSurface` trait. Backends:
//! - `DrawList`: records commands (tests, debugging)
//! - `VertexBatch`: tessellated triangle list for GPU upload
//! - `platform::canvas::CanvasSurface`: browser Canvas 2D (wasm only)

pub mod batch;
pub mod color;
pub mod hud;
pub mod palette;
pub mod scene;
pub mod shapes;
pub mod surface;
pub mod vertex;

pub use batch::{TextRun, VertexBatch};
pub use color::Color;
pub use hud::{HudLayout, draw_hud};
pub use palette::{LevelPalette, palette};
pub use scene::render;
pub use surface::{DrawCommand, DrawList, DrawSurface, TextAlign};
pub use vertex::Vertex;
