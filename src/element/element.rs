//! Element state and the open/content/close render algorithm.

use std::fmt;
use std::marker::PhantomData;

use super::mount::Mount;
use super::variants::Variant;
use crate::style::{shared, StyleRegistry};

/// A markup node under construction.
///
/// An element owns its content text and an ordered list of style items. Style
/// items are either names registered in a [`StyleRegistry`] or literal CSS
/// declarations; resolution happens at render time. Content is taken verbatim
/// and is not escaped, so nested markup is passed in pre-rendered.
///
/// Configuration calls consume and return the element so they chain.
///
/// # Example
///
/// ```rust
/// use tagcraft::{Element, StyleRegistry};
/// use tagcraft::variants::{Div, Td};
///
/// let styles = StyleRegistry::new().add("red", "color:red");
///
/// let div = Element::<Div>::make(["hi"]).style("red");
/// assert_eq!(div.render_with(&styles), "<div css='color:red'>hi</div>");
///
/// let cell = Element::<Td>::make(["x"]).colspan(2);
/// assert_eq!(cell.render_with(&styles), "<td colspan='2'>x</td>");
/// ```
pub struct Element<V: Variant> {
    pub(super) content: String,
    pub(super) styles: Vec<String>,
    pub(super) capability: V::Capability,
    variant: PhantomData<V>,
}

impl<V: Variant> Element<V> {
    /// Creates an element with empty content.
    pub fn new() -> Self {
        Self::with_content(String::new())
    }

    /// Creates an element whose content is the concatenation of `fragments`, in order.
    pub fn make<I, S>(fragments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let content = fragments
            .into_iter()
            .fold(String::new(), |mut acc, fragment| {
                acc.push_str(fragment.as_ref());
                acc
            });
        Self::with_content(content)
    }

    /// Creates an element with a single content fragment.
    pub fn with_content(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            styles: Vec::new(),
            capability: V::Capability::default(),
            variant: PhantomData,
        }
    }

    /// Appends a style name or literal declaration.
    pub fn style(mut self, item: impl Into<String>) -> Self {
        self.styles.push(item.into());
        self
    }

    /// Appends several style items in order.
    pub fn with_styles<I, S>(mut self, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.styles.extend(items.into_iter().map(Into::into));
        self
    }

    pub fn tag(&self) -> &'static str {
        V::TAG
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    /// Style items as given, unresolved.
    pub fn styles(&self) -> &[String] {
        &self.styles
    }

    pub fn capability(&self) -> &V::Capability {
        &self.capability
    }

    /// Builds the opening tag, resolving styles through `registry`.
    ///
    /// The `css` attribute comes first, followed by the capability's tokens.
    pub fn open_tag_with(&self, registry: &StyleRegistry) -> String {
        let mut attributes = Vec::new();

        let resolved = registry.resolve_all(&self.styles);
        if !resolved.is_empty() {
            attributes.push(format!("css='{}'", resolved.join(";")));
        }
        attributes.extend(self.capability.mount());

        if attributes.is_empty() {
            format!("<{}>", V::TAG)
        } else {
            format!("<{} {}>", V::TAG, attributes.join(" "))
        }
    }

    /// Builds the opening tag against the shared registry.
    pub fn open_tag(&self) -> String {
        shared::with_shared(|registry| self.open_tag_with(registry))
    }

    pub fn close_tag(&self) -> String {
        format!("</{}>", V::TAG)
    }

    /// Renders the element, resolving styles through `registry`.
    pub fn render_with(&self, registry: &StyleRegistry) -> String {
        let mut html = self.open_tag_with(registry);
        html.push_str(&self.content);
        html.push_str(&self.close_tag());
        html
    }

    /// Renders the element against the shared registry.
    pub fn render(&self) -> String {
        shared::with_shared(|registry| self.render_with(registry))
    }

    /// Same as [`render`](Self::render).
    pub fn html(&self) -> String {
        self.render()
    }
}

impl<V: Variant> Default for Element<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Variant> Clone for Element<V> {
    fn clone(&self) -> Self {
        Self {
            content: self.content.clone(),
            styles: self.styles.clone(),
            capability: self.capability.clone(),
            variant: PhantomData,
        }
    }
}

impl<V: Variant> fmt::Debug for Element<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Element")
            .field("tag", &V::TAG)
            .field("content", &self.content)
            .field("styles", &self.styles)
            .field("capability", &self.capability)
            .finish()
    }
}

impl<V: Variant> PartialEq for Element<V> {
    fn eq(&self, other: &Self) -> bool {
        self.content == other.content
            && self.styles == other.styles
            && self.capability == other.capability
    }
}

impl<V: Variant> Eq for Element<V> {}

/// Renders against the shared registry.
impl<V: Variant> fmt::Display for Element<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
