//! Element composition.
//!
//! This module provides:
//!
//! - [`Element`]: Content plus an ordered style list, rendered as open tag, content and close tag
//! - [`Mount`]: The attribute-production hook a variant's capability fulfills
//! - [`CellSpan`]: The table-cell capability adding `colspan`/`rowspan`
//! - [`Variant`]: The type-level pairing of a tag name with a capability
//!
//! Variants are declared with [`variant!`](crate::variant). The tag name and the
//! capability are fixed by the type, so a `Td` can never lose its span handling
//! and a `Div` can never gain one.

mod cell;
#[allow(clippy::module_inception)]
mod element;
mod mount;
pub mod variants;

pub use cell::CellSpan;
pub use element::Element;
pub use mount::{Mount, NoAttributes};
pub use variants::Variant;
