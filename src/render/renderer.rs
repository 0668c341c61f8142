//! Template renderer with element functions.

use minijinja::{Environment, Error};
use serde::Serialize;

use super::functions::register_functions;
use crate::style::{shared, StyleRegistry};

/// A renderer whose templates can call element functions.
///
/// The registry is captured when the renderer is built; later changes to the
/// source registry are not seen.
///
/// # Example
///
/// ```rust
/// use tagcraft::{Renderer, StyleRegistry};
/// use serde::Serialize;
///
/// let styles = StyleRegistry::new().add("head", "font-weight:bold");
/// let mut renderer = Renderer::new(styles);
/// renderer
///     .add_template("row", r#"<tr>{{ th(label, style="head") }}{{ td(value, colspan=2) }}</tr>"#)
///     .unwrap();
///
/// #[derive(Serialize)]
/// struct Row { label: String, value: u32 }
///
/// let html = renderer.render("row", &Row { label: "Total".into(), value: 42 }).unwrap();
/// assert_eq!(
///     html,
///     "<tr><th css='font-weight:bold'>Total</th><td colspan='2'>42</td></tr>"
/// );
/// ```
pub struct Renderer {
    env: Environment<'static>,
}

impl Renderer {
    /// Creates a renderer resolving styles through `styles`.
    pub fn new(styles: StyleRegistry) -> Self {
        let mut env = Environment::new();
        register_functions(&mut env, styles);
        Self { env }
    }

    /// Creates a renderer from a snapshot of the shared registry.
    pub fn from_shared() -> Self {
        Self::new(shared::snapshot())
    }

    /// Registers a named template.
    ///
    /// The template is compiled immediately; errors are returned if syntax is invalid.
    pub fn add_template(&mut self, name: &str, source: &str) -> Result<(), Error> {
        self.env
            .add_template_owned(name.to_string(), source.to_string())
    }

    /// Renders a registered template with the given data.
    ///
    /// # Errors
    ///
    /// Returns an error if the template name is not found or rendering fails.
    pub fn render<T: Serialize>(&self, name: &str, data: &T) -> Result<String, Error> {
        let tmpl = self.env.get_template(name)?;
        tmpl.render(data)
    }

    /// Compiles and renders a one-off template.
    pub fn render_str<T: Serialize>(&self, source: &str, data: &T) -> Result<String, Error> {
        self.env.render_str(source, data)
    }
}
