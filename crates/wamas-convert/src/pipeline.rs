//! Conversion entry points.
//!
//! A [`Converter`] owns the grammar registry, the unit-code table and
//! the parsed-template cache, and drives the three translation
//! directions: warehouse telegrams to UBL documents, UBL documents (or
//! flat records) to host telegrams, and host telegrams to the warehouse
//! confirmations they would produce.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::NaiveDateTime;
use dashmap::DashMap;
use tracing::{debug, warn};
use wamas_codec::{
    decode_stream, encode_line, format_value, remap_unit_code, resolve_value, EncodeContext,
    Repeat, SystemIds,
};
use wamas_grammar::{
    ConvertTable, DefaultFn, FieldSpec, FieldType, GrammarRegistry, UnitCodeMap,
    HOST_TO_WAREHOUSE_TYPES,
};
use wamas_record::{lookup, Map, Record, Value};
use wamas_template::{Scope, Template};

use crate::linker::{link_order_lines, link_picking};
use crate::numeric::coerce_registered_floats;
use crate::profiles::{
    child_parent_source, line_loop_path, match_profile, parent_key_fields, transcode_outputs,
    UblProfile, TRANSCODE_INPUT_TYPES,
};
use crate::{Error, Result};

const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;

/// Knobs shared by every conversion a [`Converter`] runs.
#[derive(Debug, Clone)]
pub struct ConvertOptions {
    /// Endpoint identifiers written into telegram headers.
    pub systems: SystemIds,
    /// Fixed clock. `None` takes the local time at conversion, set it
    /// for reproducible output.
    pub now: Option<NaiveDateTime>,
    /// Extra bindings exposed to templates under `extra`.
    pub extra: Map,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            systems: SystemIds::default(),
            now: None,
            extra: Map::new(),
        }
    }
}

/// The conversion engine.
///
/// Cheap to share behind a reference; template compilation happens once
/// per profile and is cached.
pub struct Converter {
    registry: GrammarRegistry,
    units: UnitCodeMap,
    options: ConvertOptions,
    templates: DashMap<&'static str, Arc<Template>>,
}

impl Converter {
    /// New converter over the standard grammars and unit codes.
    pub fn new(options: ConvertOptions) -> Self {
        Self {
            registry: GrammarRegistry::standard(),
            units: UnitCodeMap::standard(),
            options,
            templates: DashMap::new(),
        }
    }

    /// The grammar registry in use.
    pub fn registry(&self) -> &GrammarRegistry {
        &self.registry
    }

    /// The unit-code table in use.
    pub fn units(&self) -> &UnitCodeMap {
        &self.units
    }

    fn now(&self) -> NaiveDateTime {
        self.options
            .now
            .unwrap_or_else(|| chrono::Local::now().naive_local())
    }

    /// Decode a warehouse telegram stream into per-type record groups,
    /// with registered quantity fields coerced to decimals.
    pub fn telegram_to_records(&self, raw: &[u8]) -> Result<Vec<(String, Vec<Record>)>> {
        let stream = decode_stream(raw, &self.registry, None)?;
        let mut groups = stream.into_groups();
        for (_, records) in &mut groups {
            for record in records {
                coerce_registered_floats(record);
            }
        }
        Ok(groups)
    }

    /// Translate a warehouse telegram stream into UBL documents, one
    /// per order aggregate.
    pub fn telegram_to_documents(&self, raw: &[u8]) -> Result<Vec<String>> {
        let mut groups = self.telegram_to_records(raw)?;
        let types: Vec<&str> = {
            let mut t: Vec<&str> = groups.iter().map(|(g, _)| g.as_str()).collect();
            t.sort_unstable();
            t
        };
        let profile =
            match_profile(&types).ok_or_else(|| Error::no_matching_profile(&types))?;
        debug!(profile = profile.name, "matched conversion profile");

        let parents = take_group(&mut groups, profile.parent.0);
        let children = take_group(&mut groups, profile.child.0);
        let aggregates = match profile.package_type {
            Some(package_type) => {
                let packages = take_group(&mut groups, package_type);
                link_picking(&parents, &packages, &children)
            }
            None => link_order_lines(&parents, &children, profile.parent.1, profile.child.1),
        };

        let template = self.template(profile)?;
        let today = self.now().date();
        let mut documents = Vec::with_capacity(aggregates.len());
        for aggregate in aggregates {
            let mut scope = Scope::new(&self.units, today);
            scope.bind("record", Value::Map(aggregate));
            scope.bind("extra", Value::Map(self.options.extra.clone()));
            documents.push(format!("{XML_DECLARATION}\n{}", template.render(&scope)));
        }
        Ok(documents)
    }

    /// Render a caller-supplied template source against one record or
    /// aggregate, with the standard helpers and bindings in scope.
    pub fn render_template(&self, source: &str, record: &Value) -> Result<String> {
        let template = Template::parse(source)?;
        let mut scope = Scope::new(&self.units, self.now().date());
        scope.bind("record", record.clone());
        scope.bind("extra", Value::Map(self.options.extra.clone()));
        Ok(template.render(&scope))
    }

    /// Author host telegram lines of the requested types from a UBL
    /// document.
    pub fn ubl_to_telegram(&self, xml: &str, types: &[&str]) -> Result<String> {
        let tree = wamas_ubl::parse_document(xml)?;
        self.fields_to_telegram(&tree, types)
    }

    /// Author host telegram lines of the requested types from an
    /// already-parsed document tree.
    pub fn fields_to_telegram(&self, source: &Value, types: &[&str]) -> Result<String> {
        let requested = validate_host_types(types)?;
        self.author_lines(source, &requested)
    }

    /// Author host telegram lines of the requested types from a flat
    /// field record.
    pub fn record_to_telegram(&self, record: &Record, types: &[&str]) -> Result<String> {
        let requested = validate_host_types(types)?;
        let source = Value::Map(record.clone());
        self.author_lines(&source, &requested)
    }

    fn author_lines(&self, source: &Value, types: &[String]) -> Result<String> {
        let now = self.now();
        let mut line_index = 1;
        let mut lines = Vec::new();
        for ttype in types {
            let table = self.registry.convert_table(ttype)?;
            let loop_path = line_loop_path(table.telegram_type());
            let count = match loop_path {
                Some(path) => match lookup(source, path).ok().flatten() {
                    Some(Value::List(items)) => items.len(),
                    Some(value) if !value.is_missing() => 1,
                    _ => {
                        warn!(
                            telegram_type = %ttype,
                            path,
                            "loop source is absent, authoring zero lines"
                        );
                        0
                    }
                },
                None => 1,
            };
            for index in 0..count {
                let ctx = EncodeContext {
                    source,
                    line_index,
                    repeat: loop_path.map(|_| Repeat { count, index }),
                    systems: &self.options.systems,
                    units: &self.units,
                    now,
                };
                lines.push(encode_line(table, &ctx)?);
                line_index += 1;
            }
        }
        Ok(lines.join("\n"))
    }

    /// Transcode host telegrams into the warehouse confirmations they
    /// would produce, simulating the warehouse side.
    pub fn telegram_to_telegram(&self, raw: &[u8]) -> Result<String> {
        let stream = decode_stream(raw, &self.registry, Some(TRANSCODE_INPUT_TYPES))?;
        let now = self.now();
        let mut line_index = 1;
        let mut parent_ids: HashMap<&'static str, String> = HashMap::new();
        let mut lines = Vec::new();

        for (input_type, records) in stream.groups() {
            let outputs = transcode_outputs(input_type)
                .ok_or_else(|| Error::invalid_telegram_types(&[input_type.as_str()]))?;
            for output_type in outputs {
                let table = self.registry.convert_table(output_type)?;
                for record in records {
                    let source = Value::Map(record.clone());
                    let ctx = EncodeContext {
                        source: &source,
                        line_index,
                        repeat: None,
                        systems: &self.options.systems,
                        units: &self.units,
                        now,
                    };
                    lines.push(self.transcode_line(table, &ctx, &mut parent_ids)?);
                    line_index += 1;
                }
            }
        }
        Ok(lines.join("\n"))
    }

    /// Author one confirmation line from a decoded host record.
    ///
    /// Differs from plain encoding in two ways: parent-key fields read
    /// from and publish to the side table that links package lines to
    /// their package head, and wire-formatted values move through
    /// unchanged instead of being reinterpreted.
    fn transcode_line(
        &self,
        table: &ConvertTable,
        ctx: &EncodeContext<'_>,
        parent_ids: &mut HashMap<&'static str, String>,
    ) -> Result<String> {
        let ttype = table.telegram_type();
        let mut line = String::with_capacity(table.line_width());
        for field in table.fields() {
            let mut val = resolve_value(field, ctx);
            if val.is_empty() && field.default_fn == Some(DefaultFn::ParentId) {
                if let Some(key) = child_parent_source(ttype, field.name) {
                    if let Some(parent) = parent_ids.get(key) {
                        val.clone_from(parent);
                    }
                }
            }
            let formatted = if passes_through(field, &val) {
                pad_wire_value(&val, field)
            } else {
                let remapped = remap_unit_code(field.name, val, &self.units);
                format_value(&remapped, field)?
            };
            for key in parent_key_fields(ttype) {
                if *key == field.name {
                    parent_ids.insert(key, formatted.trim().to_owned());
                }
            }
            line.push_str(&formatted);
        }
        Ok(line)
    }

    fn template(&self, profile: &'static UblProfile) -> Result<Arc<Template>> {
        if let Some(cached) = self.templates.get(profile.name) {
            return Ok(Arc::clone(cached.value()));
        }
        let parsed = Arc::new(Template::parse(profile.template)?);
        self.templates.insert(profile.name, Arc::clone(&parsed));
        Ok(parsed)
    }
}

impl Default for Converter {
    fn default() -> Self {
        Self::new(ConvertOptions::default())
    }
}

fn take_group(groups: &mut [(String, Vec<Record>)], telegram_type: &str) -> Vec<Record> {
    groups
        .iter_mut()
        .find(|(g, _)| g == telegram_type)
        .map(|(_, records)| std::mem::take(records))
        .unwrap_or_default()
}

fn validate_host_types(types: &[&str]) -> Result<Vec<String>> {
    let requested: Vec<String> = types.iter().map(|t| t.to_ascii_uppercase()).collect();
    let invalid: Vec<&str> = requested
        .iter()
        .map(String::as_str)
        .filter(|t| !HOST_TO_WAREHOUSE_TYPES.contains(t))
        .collect();
    if invalid.is_empty() {
        Ok(requested)
    } else {
        Err(Error::invalid_telegram_types(&invalid))
    }
}

/// Whether a non-empty value already carries its wire formatting and
/// must not be reinterpreted by the field formatter.
fn passes_through(field: &FieldSpec, val: &str) -> bool {
    !val.is_empty()
        && field.default_fn.is_none()
        && !matches!(field.name, "Telheader_TelSeq" | "Telheader_AnlZeit")
        && matches!(
            field.ftype,
            FieldType::Float | FieldType::Int | FieldType::Date | FieldType::DateTime
        )
}

/// Pad an already wire-formatted value to its slot without touching the
/// digits.
fn pad_wire_value(val: &str, field: &FieldSpec) -> String {
    let width = field.width();
    let clipped: String = val.chars().take(width).collect();
    let len = clipped.chars().count();
    match field.ftype {
        FieldType::Int | FieldType::Float => format!("{}{clipped}", "0".repeat(width - len)),
        _ => format!("{clipped}{}", " ".repeat(width - len)),
    }
}
