//! Attribute-production hook.

/// Produces the variant-specific attribute tokens of an opening tag.
///
/// Tokens are complete `name='value'` strings. They are emitted after the
/// `css` attribute, in the order returned.
pub trait Mount {
    fn mount(&self) -> Vec<String>;
}

/// Capability of plain elements: contributes no attributes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoAttributes;

impl Mount for NoAttributes {
    fn mount(&self) -> Vec<String> {
        Vec::new()
    }
}
