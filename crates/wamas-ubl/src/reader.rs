//! XML to value tree conversion.
//!
//! The tree shape follows the conventions the encode tables are written
//! against: element children become map entries keyed by their qualified
//! tag name, attributes get an `@` prefix, text alongside attributes or
//! children lands under `#text`, and repeated sibling tags collapse into
//! a list. An element with nothing in it becomes the missing sentinel,
//! and an element with only text becomes that text directly.

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use wamas_record::{Map, Value};

use crate::Result;

struct Element {
    name: String,
    attributes: Map,
    children: Map,
    text: String,
}

impl Element {
    fn from_start(start: &BytesStart<'_>) -> Result<Self> {
        let name = std::str::from_utf8(start.name().as_ref())?.to_owned();
        let mut attributes = Map::new();
        for attr in start.attributes() {
            let attr = attr?;
            let key = format!("@{}", std::str::from_utf8(attr.key.as_ref())?);
            attributes.insert(key, Value::from(attr.unescape_value()?.into_owned()));
        }
        Ok(Self {
            name,
            attributes,
            children: Map::new(),
            text: String::new(),
        })
    }

    fn into_value(self) -> Value {
        let text = self.text.trim();
        if self.attributes.is_empty() && self.children.is_empty() {
            return if text.is_empty() {
                Value::Missing
            } else {
                Value::from(text)
            };
        }
        let mut map = self.attributes;
        if !text.is_empty() {
            map.insert("#text", Value::from(text));
        }
        for (key, value) in self.children.into_iter() {
            attach(&mut map, &key, value);
        }
        Value::Map(map)
    }
}

/// Add a child under its tag name; a repeated tag collapses into a list.
fn attach(map: &mut Map, name: &str, value: Value) {
    match map.get_mut(name) {
        Some(Value::List(items)) => items.push(value),
        Some(existing) => {
            let first = std::mem::replace(existing, Value::Missing);
            *existing = Value::List(vec![first, value]);
        }
        None => map.insert(name, value),
    }
}

/// Parse an XML document into a value tree rooted at a map keyed by the
/// document element's tag name.
pub fn parse_document(xml: &str) -> Result<Value> {
    let mut reader = Reader::from_str(xml);
    let mut stack: Vec<Element> = Vec::new();
    let mut root = Map::new();

    loop {
        match reader.read_event()? {
            Event::Start(start) => stack.push(Element::from_start(&start)?),
            Event::Empty(start) => {
                let element = Element::from_start(&start)?;
                place(&mut stack, &mut root, element);
            }
            Event::Text(text) => {
                if let Some(top) = stack.last_mut() {
                    top.text.push_str(&text.unescape()?);
                }
            }
            Event::CData(data) => {
                if let Some(top) = stack.last_mut() {
                    top.text.push_str(std::str::from_utf8(&data.into_inner())?);
                }
            }
            Event::End(_) => {
                if let Some(element) = stack.pop() {
                    place(&mut stack, &mut root, element);
                }
            }
            Event::Eof => break,
            Event::Decl(_) | Event::Comment(_) | Event::PI(_) | Event::DocType(_) => {}
        }
    }
    Ok(Value::Map(root))
}

fn place(stack: &mut [Element], root: &mut Map, element: Element) {
    let name = element.name.clone();
    let value = element.into_value();
    match stack.last_mut() {
        Some(parent) => attach_raw(&mut parent.children, &name, value),
        None => attach(root, &name, value),
    }
}

/// Children are collected under their tag in document order; lists are
/// only formed when the element closes, so duplicates are buffered here
/// as lists directly.
fn attach_raw(children: &mut Map, name: &str, value: Value) {
    attach(children, name, value);
}
