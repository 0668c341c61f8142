//! MiniJinja function and filter registration.

use std::sync::Arc;

use minijinja::value::{Kwargs, Value, ValueKind};
use minijinja::{Environment, Error};

use crate::element::{CellSpan, Element, Variant};
use crate::style::StyleRegistry;
use crate::variants::{Div, Span, Table, Td, Th, Tr, P};

/// Registers element functions and the `css` filter on a MiniJinja environment.
///
/// Every function takes one optional positional content value and a `style`
/// keyword (a string or a list of strings). Content that is a list is
/// concatenated in order, so `td(["a", b])` matches `make(["a", b])`; any
/// other value is used as its string form. `td` and `th` also take `colspan`
/// and `rowspan`.
pub(crate) fn register_functions(env: &mut Environment<'static>, styles: StyleRegistry) {
    let styles = Arc::new(styles);

    register_plain::<Div>(env, "div", &styles);
    register_plain::<Span>(env, "span", &styles);
    register_plain::<P>(env, "p", &styles);
    register_plain::<Table>(env, "table", &styles);
    register_plain::<Tr>(env, "tr", &styles);
    register_cell::<Td>(env, "td", &styles);
    register_cell::<Th>(env, "th", &styles);

    // {{ "muted" | css }} outputs the CSS text the name resolves to
    env.add_filter("css", move |expression: String| -> String {
        styles.resolve(&expression)
    });
}

fn register_plain<V>(
    env: &mut Environment<'static>,
    name: &'static str,
    styles: &Arc<StyleRegistry>,
)
where
    V: Variant + 'static,
{
    let styles = Arc::clone(styles);
    env.add_function(
        name,
        move |content: Option<Value>, kwargs: Kwargs| -> Result<Value, Error> {
            let element = configure::<V>(content, &kwargs)?;
            kwargs.assert_all_used()?;
            Ok(Value::from_safe_string(element.render_with(&styles)))
        },
    );
}

fn register_cell<V>(
    env: &mut Environment<'static>,
    name: &'static str,
    styles: &Arc<StyleRegistry>,
)
where
    V: Variant<Capability = CellSpan> + 'static,
{
    let styles = Arc::clone(styles);
    env.add_function(
        name,
        move |content: Option<Value>, kwargs: Kwargs| -> Result<Value, Error> {
            let mut element = configure::<V>(content, &kwargs)?;
            if let Some(n) = kwargs.get::<Option<i64>>("colspan")? {
                element = element.colspan(n);
            }
            if let Some(n) = kwargs.get::<Option<i64>>("rowspan")? {
                element = element.rowspan(n);
            }
            kwargs.assert_all_used()?;
            Ok(Value::from_safe_string(element.render_with(&styles)))
        },
    );
}

fn configure<V: Variant>(content: Option<Value>, kwargs: &Kwargs) -> Result<Element<V>, Error> {
    let element = match content {
        Some(value) if value.kind() == ValueKind::Seq => {
            Element::<V>::make(value.try_iter()?.map(|fragment| fragment.to_string()))
        }
        Some(value) if !value.is_undefined() && !value.is_none() => {
            Element::<V>::with_content(value.to_string())
        }
        _ => Element::<V>::new(),
    };

    match kwargs.get::<Option<Value>>("style")? {
        Some(style) => Ok(element.with_styles(style_items(&style)?)),
        None => Ok(element),
    }
}

fn style_items(value: &Value) -> Result<Vec<String>, Error> {
    if let Some(item) = value.as_str() {
        return Ok(vec![item.to_string()]);
    }
    Ok(value.try_iter()?.map(|item| item.to_string()).collect())
}
