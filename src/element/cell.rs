//! Table-cell capability: row and column spans.

use super::element::Element;
use super::mount::Mount;
use super::variants::Variant;

/// Span state carried by `td` and `th` variants.
///
/// Both spans start unset. Only strictly positive values reach the output:
/// `0` and negative counts are stored but rendered exactly like an unset span.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CellSpan {
    colspan: Option<i64>,
    rowspan: Option<i64>,
}

impl CellSpan {
    pub fn colspan(&self) -> Option<i64> {
        self.colspan
    }

    pub fn rowspan(&self) -> Option<i64> {
        self.rowspan
    }
}

/// Emits `colspan` then `rowspan`, skipping any that is unset or not positive.
impl Mount for CellSpan {
    fn mount(&self) -> Vec<String> {
        [("colspan", self.colspan), ("rowspan", self.rowspan)]
            .into_iter()
            .filter_map(|(name, span)| match span {
                Some(n) if n > 0 => Some(format!("{name}='{n}'")),
                _ => None,
            })
            .collect()
    }
}

impl<V: Variant<Capability = CellSpan>> Element<V> {
    /// Sets the number of columns this cell spans.
    pub fn colspan(mut self, n: i64) -> Self {
        self.capability.colspan = Some(n);
        self
    }

    /// Sets the number of rows this cell spans.
    pub fn rowspan(mut self, n: i64) -> Self {
        self.capability.rowspan = Some(n);
        self
    }

    pub fn colspan_value(&self) -> Option<i64> {
        self.capability.colspan
    }

    pub fn rowspan_value(&self) -> Option<i64> {
        self.capability.rowspan
    }
}
