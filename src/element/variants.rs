//! Declared element variants.
//!
//! A variant is a zero-sized marker type fixing the tag name and the
//! capability of [`Element`](crate::Element). Declare new ones with
//! [`variant!`](crate::variant):
//!
//! ```rust
//! use tagcraft::{variant, Element, StyleRegistry};
//!
//! variant!(
//!     /// `<section>`
//!     pub Section => "section"
//! );
//!
//! let section = Element::<Section>::make(["body"]);
//! assert_eq!(section.render_with(&StyleRegistry::new()), "<section>body</section>");
//! ```

use std::fmt::Debug;

use super::mount::Mount;

/// Type-level pairing of a tag name with a capability.
pub trait Variant {
    /// Tag name; must not be empty. [`variant!`](crate::variant) rejects an
    /// empty tag at compile time.
    const TAG: &'static str;

    /// State and attribute hook this variant carries.
    type Capability: Mount + Default + Clone + Debug + PartialEq + Eq;
}

/// Declares a marker type implementing [`Variant`].
///
/// The capability defaults to [`NoAttributes`](crate::NoAttributes). An empty
/// tag is rejected at compile time:
///
/// ```compile_fail
/// use tagcraft::variant;
///
/// variant!(Blank => "");
/// ```
#[macro_export]
macro_rules! variant {
    ($(#[$meta:meta])* $vis:vis $name:ident => $tag:literal) => {
        $crate::variant!($(#[$meta])* $vis $name => $tag, $crate::NoAttributes);
    };
    ($(#[$meta:meta])* $vis:vis $name:ident => $tag:literal, $capability:ty) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
        $vis struct $name;

        const _: () = assert!(!$tag.is_empty(), "variant tag must not be empty");

        impl $crate::Variant for $name {
            const TAG: &'static str = $tag;
            type Capability = $capability;
        }
    };
}

variant!(
    /// Generic block container, `<div>`.
    pub Div => "div"
);
variant!(
    /// Generic inline container, `<span>`.
    pub Span => "span"
);
variant!(
    /// Paragraph, `<p>`.
    pub P => "p"
);
variant!(
    /// Table, `<table>`.
    pub Table => "table"
);
variant!(
    /// Table row, `<tr>`.
    pub Tr => "tr"
);
variant!(
    /// Table data cell, `<td>`, with row and column spans.
    pub Td => "td", crate::CellSpan
);
variant!(
    /// Table header cell, `<th>`, with row and column spans.
    pub Th => "th", crate::CellSpan
);
