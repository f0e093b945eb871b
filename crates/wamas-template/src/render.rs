//! Template rendering.
//!
//! Walks a compiled node tree against a scope and emits the output
//! document. Literal markup is reproduced as-is; evaluated expressions
//! are XML-escaped on the way out.

use chrono::NaiveDate;
use tracing::warn;
use wamas_grammar::UnitCodeMap;
use wamas_record::{Map, Value};

use crate::parser::{Element, Node};

/// The binding environment a template renders against.
///
/// Bindings are owned; a loop iteration clones the scope and adds its
/// loop variable, so sibling iterations never see each other's
/// bindings.
#[derive(Debug, Clone)]
pub struct Scope<'a> {
    vars: Map,
    units: &'a UnitCodeMap,
    today: NaiveDate,
}

impl<'a> Scope<'a> {
    /// New scope with no bindings. `today` is injected so rendered
    /// documents are reproducible.
    pub fn new(units: &'a UnitCodeMap, today: NaiveDate) -> Self {
        Self {
            vars: Map::new(),
            units,
            today,
        }
    }

    /// Bind a name at this scope.
    pub fn bind(&mut self, name: impl Into<String>, value: Value) {
        self.vars.insert(name, value);
    }

    /// Look up a bound name.
    pub fn binding(&self, name: &str) -> Option<&Value> {
        self.vars.get(name)
    }

    /// Child scope with one extra binding.
    pub fn child(&self, name: impl Into<String>, value: Value) -> Self {
        let mut child = self.clone();
        child.bind(name, value);
        child
    }

    /// The unit-code translation table.
    pub fn units(&self) -> &'a UnitCodeMap {
        self.units
    }

    /// The injected current date.
    pub fn today(&self) -> NaiveDate {
        self.today
    }
}

/// Escape character data for text content.
pub fn escape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(ch),
        }
    }
    out
}

fn escape_attr(text: &str) -> String {
    escape_text(text).replace('"', "&quot;")
}

pub(crate) fn render_nodes(nodes: &[Node], scope: &Scope<'_>) -> String {
    let mut out = String::new();
    for node in nodes {
        render_node(node, scope, &mut out);
    }
    out
}

fn render_node(node: &Node, scope: &Scope<'_>, out: &mut String) {
    match node {
        Node::Text(text) => out.push_str(&escape_text(text)),
        Node::Element(element) => render_element(element, scope, out),
    }
}

fn render_element(element: &Element, scope: &Scope<'_>, out: &mut String) {
    if let Some(cond) = &element.t_if {
        if !cond.eval(scope).is_truthy() {
            return;
        }
    }
    match &element.t_foreach {
        Some((source, var)) => {
            let collection = source.eval(scope);
            let items = match collection {
                Value::Missing => {
                    warn!(tag = element.tag, "loop source is unresolved, rendering zero items");
                    Vec::new()
                }
                // a single record repeats once, matching the collapsed
                // single-element shape of parsed documents
                Value::List(items) => items,
                other => vec![other],
            };
            for item in items {
                let child = scope.child(var.clone(), item);
                emit_element(element, &child, out);
            }
        }
        None => emit_element(element, scope, out),
    }
}

fn emit_element(element: &Element, scope: &Scope<'_>, out: &mut String) {
    out.push('<');
    out.push_str(&element.tag);
    for (key, val) in &element.attrs {
        out.push(' ');
        out.push_str(key);
        out.push_str("=\"");
        out.push_str(&escape_attr(val));
        out.push('"');
    }

    let content = match &element.t_esc {
        Some(expr) => Some(escape_text(&expr.eval(scope).to_text())),
        None => None,
    };

    match content {
        Some(text) => {
            out.push('>');
            out.push_str(&text);
            close_tag(&element.tag, out);
        }
        None if element.children.is_empty() => out.push_str("/>"),
        None => {
            out.push('>');
            for child in &element.children {
                render_node(child, scope, out);
            }
            close_tag(&element.tag, out);
        }
    }
}

fn close_tag(tag: &str, out: &mut String) {
    out.push_str("</");
    out.push_str(tag);
    out.push('>');
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::Template;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
    }

    fn reception_scope(units: &UnitCodeMap) -> Scope<'_> {
        let mut line1 = Map::new();
        line1.insert("IvWevp_WevPos", "1");
        line1.insert("IvWevp_LiefMngs_Mng", Value::Float(12.345));
        line1.insert("HostEinheit", "BOT");
        let mut line2 = Map::new();
        line2.insert("IvWevp_WevPos", "2");
        line2.insert("IvWevp_LiefMngs_Mng", Value::Float(5.0));
        line2.insert("HostEinheit", "");

        let mut record = Map::new();
        record.insert("IvWevk_WevId_WevNr", "WEV001");
        record.insert("IvWevk_FertZeit", "20240115103000");
        record.insert("lines", Value::List(vec![line1.into(), line2.into()]));

        let mut scope = Scope::new(units, today());
        scope.bind("record", record.into());
        scope.bind("extra", Value::Map(Map::new()));
        scope
    }

    #[test]
    fn test_esc_and_foreach() {
        let units = UnitCodeMap::standard();
        let scope = reception_scope(&units);
        let template = Template::parse(
            r#"<DespatchAdvice><cbc:ID t-esc="record.IvWevk_WevId_WevNr"/><cac:DespatchLine t-foreach="record.lines" t-as="line"><cbc:ID t-esc="line.IvWevp_WevPos"/></cac:DespatchLine></DespatchAdvice>"#,
        )
        .unwrap();
        let xml = template.render(&scope);
        assert_eq!(
            xml,
            "<DespatchAdvice><cbc:ID>WEV001</cbc:ID>\
             <cac:DespatchLine><cbc:ID>1</cbc:ID></cac:DespatchLine>\
             <cac:DespatchLine><cbc:ID>2</cbc:ID></cac:DespatchLine>\
             </DespatchAdvice>"
        );
    }

    #[test]
    fn test_missing_path_renders_empty() {
        let units = UnitCodeMap::standard();
        let scope = reception_scope(&units);
        let template = Template::parse(r#"<a t-esc="record.not_there"/>"#).unwrap();
        assert_eq!(template.render(&scope), "<a></a>");
    }

    #[test]
    fn test_missing_foreach_source_renders_zero_items() {
        let units = UnitCodeMap::standard();
        let scope = reception_scope(&units);
        let template =
            Template::parse(r#"<r><a t-foreach="record.not_there" t-as="x">text</a></r>"#)
                .unwrap();
        assert_eq!(template.render(&scope), "<r/>");
    }

    #[test]
    fn test_if_suppresses_falsy_subtree() {
        let units = UnitCodeMap::standard();
        let scope = reception_scope(&units);
        let template = Template::parse(
            r#"<r><a t-if="record.IvWevk_WevId_WevNr">yes</a><b t-if="record.nope">no</b></r>"#,
        )
        .unwrap();
        assert_eq!(template.render(&scope), "<r><a>yes</a></r>");
    }

    #[test]
    fn test_single_record_foreach_repeats_once() {
        let units = UnitCodeMap::standard();
        let mut record = Map::new();
        let mut only = Map::new();
        only.insert("id", "7");
        record.insert("lines", only);
        let mut scope = Scope::new(&units, today());
        scope.bind("record", record.into());
        let template =
            Template::parse(r#"<r t-foreach="record.lines" t-as="l"><i t-esc="l.id"/></r>"#)
                .unwrap();
        assert_eq!(template.render(&scope), "<r><i>7</i></r>");
    }

    #[test]
    fn test_output_is_escaped() {
        let units = UnitCodeMap::standard();
        let mut record = Map::new();
        record.insert("note", "Tom & Jerry <unfiltered>");
        let mut scope = Scope::new(&units, today());
        scope.bind("record", record.into());
        let template = Template::parse(r#"<a t-esc="record.note"/>"#).unwrap();
        assert_eq!(
            template.render(&scope),
            "<a>Tom &amp; Jerry &lt;unfiltered&gt;</a>"
        );
    }

    #[test]
    fn test_literal_markup_survives() {
        let units = UnitCodeMap::standard();
        let scope = reception_scope(&units);
        let template = Template::parse(
            r#"<DespatchAdvice xmlns:cbc="urn:cbc"><cbc:DespatchAdviceTypeCode listID="x">delivery</cbc:DespatchAdviceTypeCode></DespatchAdvice>"#,
        )
        .unwrap();
        assert_eq!(
            template.render(&scope),
            r#"<DespatchAdvice xmlns:cbc="urn:cbc"><cbc:DespatchAdviceTypeCode listID="x">delivery</cbc:DespatchAdviceTypeCode></DespatchAdvice>"#
        );
    }

    #[test]
    fn test_helper_inside_template() {
        let units = UnitCodeMap::standard();
        let scope = reception_scope(&units);
        let template = Template::parse(
            r#"<d><cbc:IssueDate t-esc="get_current_date()"/><t t-esc="get_time(record.IvWevk_FertZeit)"/></d>"#,
        )
        .unwrap();
        assert_eq!(
            template.render(&scope),
            "<d><cbc:IssueDate>2024-01-01</cbc:IssueDate><t>10:30:00</t></d>"
        );
    }
}
