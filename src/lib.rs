//! # Tagcraft - fluent HTML fragment assembly
//!
//! Tagcraft builds HTML fragments from typed elements. Each element owns its
//! content and an ordered list of style items, and renders to open tag,
//! content and close tag in one pass.
//!
//! ## Core Concepts
//!
//! - [`StyleRegistry`]: Named CSS aliases; unknown names resolve to themselves
//! - [`Element`]: Content plus styles, parameterized by a [`Variant`]
//! - [`CellSpan`]: The `colspan`/`rowspan` capability of `td` and `th`
//! - [`Renderer`]: MiniJinja templates with element functions
//!
//! ## Output format
//!
//! Attributes use single quotes. Styles are emitted as one `css` attribute
//! (not `style`) with resolved values joined by `;`, ahead of any span
//! attributes:
//!
//! ```rust
//! use tagcraft::{Element, StyleRegistry};
//! use tagcraft::variants::Td;
//!
//! let styles = StyleRegistry::new();
//! let cell = Element::<Td>::make(["x"])
//!     .style("unregistered-literal")
//!     .colspan(1)
//!     .rowspan(3);
//!
//! assert_eq!(
//!     cell.render_with(&styles),
//!     "<td css='unregistered-literal' colspan='1' rowspan='3'>x</td>"
//! );
//! ```
//!
//! Content is never escaped. Nested markup is rendered first and passed in
//! as content text.
//!
//! ## Shared registry
//!
//! [`Element::render`] resolves styles through a process-wide registry (see
//! [`style::shared`]). Populate it before rendering:
//!
//! ```rust
//! use tagcraft::{style, Element};
//! use tagcraft::variants::Div;
//!
//! style::shared::set_style("red", "color:red");
//! assert_eq!(Element::<Div>::make(["hi"]).style("red").render(), "<div css='color:red'>hi</div>");
//! ```

pub mod element;
pub mod render;
pub mod style;

pub use element::{variants, CellSpan, Element, Mount, NoAttributes, Variant};
pub use render::Renderer;
pub use style::{StyleRegistry, StylesheetError};
