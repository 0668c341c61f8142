//! Template rendering with element functions.
//!
//! [`Renderer`] wraps a MiniJinja environment whose templates can assemble
//! table markup with the same elements as the Rust API.

mod functions;
mod renderer;

pub use renderer::Renderer;
