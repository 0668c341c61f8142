//! Style system for named CSS aliases.
//!
//! This module provides the styling primitives elements render with:
//!
//! - [`StyleRegistry`]: A mapping from symbolic style names to literal CSS text
//! - [`StylesheetError`]: Errors from loading a stylesheet document
//! - [`shared`]: The process-wide registry read by [`Element::render`](crate::Element::render)
//!
//! Lookups never fail. A name with no mapping resolves to itself, so callers can
//! pass a named alias or an inline CSS declaration interchangeably.

mod error;
mod registry;
pub mod shared;

pub use error::StylesheetError;
pub use registry::StyleRegistry;
