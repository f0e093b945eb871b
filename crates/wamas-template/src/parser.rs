//! Template compilation.
//!
//! A template is parsed once into a node tree; the control attributes
//! (`t-if`, `t-foreach`, `t-as`, `t-esc`) come off their elements as
//! compiled expressions, every other attribute stays literal markup.

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use crate::expr::Expr;
use crate::render::Scope;
use crate::{Error, Result};

/// One node of a compiled template.
#[derive(Debug, Clone)]
pub enum Node {
    /// An element, possibly carrying directives.
    Element(Element),
    /// Literal character data between elements.
    Text(String),
}

/// A compiled template element.
#[derive(Debug, Clone)]
pub struct Element {
    pub tag: String,
    /// Literal attributes in document order.
    pub attrs: Vec<(String, String)>,
    /// Render the element only when truthy.
    pub t_if: Option<Expr>,
    /// Repeat the element per item, binding the loop variable.
    pub t_foreach: Option<(Expr, String)>,
    /// Replace content with the expression's escaped string form.
    pub t_esc: Option<Expr>,
    pub children: Vec<Node>,
}

impl Element {
    fn from_start(start: &BytesStart<'_>) -> Result<Self> {
        let tag = std::str::from_utf8(start.name().as_ref())?.to_owned();
        let mut attrs = Vec::new();
        let mut t_if = None;
        let mut t_foreach_expr = None;
        let mut t_as = None;
        let mut t_esc = None;

        for attr in start.attributes() {
            let attr = attr?;
            let key = std::str::from_utf8(attr.key.as_ref())?.to_owned();
            let val = attr.unescape_value()?.into_owned();
            match key.as_str() {
                "t-if" => t_if = Some(Expr::parse(&val)?),
                "t-foreach" => t_foreach_expr = Some(Expr::parse(&val)?),
                "t-as" => t_as = Some(val),
                "t-esc" => t_esc = Some(Expr::parse(&val)?),
                _ => attrs.push((key, val)),
            }
        }

        let t_foreach = match (t_foreach_expr, t_as) {
            (Some(expr), Some(name)) => Some((expr, name)),
            (Some(_), None) => return Err(Error::missing_loop_variable(&tag)),
            // a stray t-as without t-foreach is inert markup noise
            (None, _) => None,
        };

        Ok(Self {
            tag,
            attrs,
            t_if,
            t_foreach,
            t_esc,
            children: Vec::new(),
        })
    }
}

/// A compiled template, ready to render any number of times.
#[derive(Debug, Clone)]
pub struct Template {
    roots: Vec<Node>,
}

impl Template {
    /// Compile a template from its XML source.
    pub fn parse(source: &str) -> Result<Self> {
        let mut reader = Reader::from_str(source);
        let mut stack: Vec<Element> = Vec::new();
        let mut roots = Vec::new();

        loop {
            match reader.read_event()? {
                Event::Start(start) => stack.push(Element::from_start(&start)?),
                Event::Empty(start) => {
                    let element = Element::from_start(&start)?;
                    push_node(&mut stack, &mut roots, Node::Element(element));
                }
                Event::Text(text) => {
                    let text = text.unescape()?.into_owned();
                    if !text.is_empty() {
                        push_node(&mut stack, &mut roots, Node::Text(text));
                    }
                }
                Event::End(_) => {
                    if let Some(element) = stack.pop() {
                        push_node(&mut stack, &mut roots, Node::Element(element));
                    }
                }
                Event::Eof => break,
                Event::Decl(_) | Event::Comment(_) | Event::CData(_) | Event::PI(_)
                | Event::DocType(_) => {}
            }
        }
        Ok(Self { roots })
    }

    /// Root nodes in document order.
    pub fn roots(&self) -> &[Node] {
        &self.roots
    }

    /// Render against a scope. Rendering is total: unresolved paths
    /// come out as empty strings, unresolved loop sources as zero
    /// iterations.
    pub fn render(&self, scope: &Scope<'_>) -> String {
        crate::render::render_nodes(&self.roots, scope)
    }
}

fn push_node(stack: &mut [Element], roots: &mut Vec<Node>, node: Node) {
    match stack.last_mut() {
        Some(parent) => parent.children.push(node),
        None => roots.push(node),
    }
}
