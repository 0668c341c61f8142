//! End-to-end rendering scenarios against the shared style registry.
//!
//! Every test touching the shared registry is `#[serial]`.

use serial_test::serial;
use tagcraft::style::shared;
use tagcraft::variants::{Div, Span, Td, Th, Tr};
use tagcraft::{Element, StyleRegistry};

#[test]
#[serial]
fn test_named_style_on_div() {
    shared::install(StyleRegistry::new().add("red", "color:red"));

    let html = Element::<Div>::make(["hi"]).style("red").render();
    assert_eq!(html, "<div css='color:red'>hi</div>");
    shared::clear();
}

#[test]
#[serial]
fn test_colspan_without_styles() {
    shared::clear();
    assert_eq!(Element::<Td>::make(["x"]).colspan(2).render(), "<td colspan='2'>x</td>");
}

#[test]
#[serial]
fn test_zero_rowspan_renders_bare_cell() {
    // Known quirk: an explicit zero span is treated the same as no span.
    shared::clear();
    assert_eq!(Element::<Th>::new().rowspan(0).render(), "<th></th>");
}

#[test]
#[serial]
fn test_fragments_concatenate() {
    shared::clear();
    assert_eq!(Element::<Span>::make(["a", "b", "c"]).render(), "<span>abc</span>");
}

#[test]
#[serial]
fn test_literal_style_with_both_spans() {
    shared::clear();
    let html = Element::<Td>::make(["x"])
        .style("unregistered-literal")
        .colspan(1)
        .rowspan(3)
        .render();
    assert_eq!(
        html,
        "<td css='unregistered-literal' colspan='1' rowspan='3'>x</td>"
    );
}

#[test]
#[serial]
fn test_styles_resolve_at_render_time() {
    shared::clear();
    let div = Element::<Div>::make(["late"]).style("accent");
    assert_eq!(div.render(), "<div css='accent'>late</div>");

    shared::set_style("accent", "color:teal");
    assert_eq!(div.render(), "<div css='color:teal'>late</div>");
    shared::clear();
}

#[test]
#[serial]
fn test_open_and_close_tags_use_shared_registry() {
    shared::install(StyleRegistry::new().add("pad", "padding:4px"));
    let th = Element::<Th>::make(["h"]).style("pad").colspan(2);

    assert_eq!(th.open_tag(), "<th css='padding:4px' colspan='2'>");
    assert_eq!(th.close_tag(), "</th>");
    assert_eq!(th.html(), th.render());
    assert_eq!(th.to_string(), "<th css='padding:4px' colspan='2'>h</th>");
    shared::clear();
}

#[test]
#[serial]
fn test_design_system_from_yaml() {
    let stylesheet = "\
head: 'font-weight:bold;background:#eee'
num: 'text-align:right'
";
    shared::install(StyleRegistry::from_yaml(stylesheet).unwrap());

    let row = Element::<Tr>::make([
        Element::<Th>::make(["Total"]).style("head").render(),
        Element::<Td>::make(["42"]).with_styles(["num", "color:green"]).render(),
    ]);
    assert_eq!(
        row.render(),
        "<tr><th css='font-weight:bold;background:#eee'>Total</th>\
<td css='text-align:right;color:green'>42</td></tr>"
    );
    shared::clear();
}

#[test]
#[serial]
fn test_renderer_snapshots_shared_registry() {
    shared::install(StyleRegistry::new().add("red", "color:red"));
    let renderer = tagcraft::Renderer::from_shared();
    shared::clear();

    let html = renderer
        .render_str(r#"{{ td("x", style="red") }}"#, &serde_json::json!({}))
        .unwrap();
    assert_eq!(html, "<td css='color:red'>x</td>");
}
