//! Field model for the fixed-width telegram grammars

/// Wire type of a grammar field, deciding how a value is formatted into
/// its fixed-width slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    /// Left-justified, space-padded text
    Str,
    /// Right-justified, zero-padded integer
    Int,
    /// Digit string, integer part zero-padded to (width - dp), fraction
    /// right-padded to dp, no separator
    Float,
    /// `YYYYMMDD`
    Date,
    /// `YYYYMMDDHHMMSS`
    DateTime,
    /// Pass-through, `N` when empty
    Bool,
}

/// Where a field's value is looked up inside a source document tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourcePath {
    /// A single dotted path. May contain the `{idx}` repetition
    /// placeholder; the encoder substitutes the loop index when the
    /// repetition count is greater than one and strips the segment
    /// otherwise.
    One(&'static str),

    /// Several paths; the found values are joined with a single space.
    Join(&'static [&'static str]),

    /// Guarded alternatives: `(guard, value)` pairs, the value path of
    /// the first pair whose guard resolves truthy wins.
    Guarded(&'static [(&'static str, &'static str)]),
}

impl SourcePath {
    /// Every dotted path named by this source, guard paths included.
    pub fn paths(&self) -> Vec<&'static str> {
        match self {
            SourcePath::One(path) => vec![path],
            SourcePath::Join(paths) => paths.to_vec(),
            SourcePath::Guarded(pairs) => pairs.iter().flat_map(|&(g, v)| [g, v]).collect(),
        }
    }
}

/// Default functions a grammar field can name instead of a literal
/// default. Each is a pure function of the encoding context (line index,
/// injected clock, system identifiers, parent-key side table).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefaultFn {
    /// Sending system of a host-authored telegram (the ERP id).
    Source,
    /// Receiving system of a host-authored telegram (the warehouse id).
    Destination,
    /// Sending system of a warehouse response telegram.
    ResponseSource,
    /// Receiving system of a warehouse response telegram.
    ResponseDestination,
    /// Global 1-based output line counter.
    SequenceNumber,
    /// Telegram creation timestamp from the injected clock.
    CurrentDatetime,
    /// Key captured from an earlier package-head line of the same
    /// transcoding run.
    ParentId,
}

/// One entry of a convert table: the full description of a field when a
/// telegram line is being authored.
#[derive(Debug, Clone)]
pub struct FieldSpec {
    /// Field name; insertion order in the table is wire order.
    pub name: &'static str,
    /// Wire type.
    pub ftype: FieldType,
    /// Width in bytes. The sign only selects the layout direction in the
    /// source specs; the magnitude is the number of bytes.
    pub length: i32,
    /// Decimal places for float fields.
    pub dp: u8,
    /// Lookup into a source document tree.
    pub source: Option<SourcePath>,
    /// Flat lookup into a decoded record or field map.
    pub dict_key: Option<&'static str>,
    /// Literal default.
    pub default_value: Option<&'static str>,
    /// Default function, applied last.
    pub default_fn: Option<DefaultFn>,
}

impl FieldSpec {
    /// New field with no sources or defaults.
    pub fn new(name: &'static str, ftype: FieldType, length: i32) -> Self {
        Self {
            name,
            ftype,
            length,
            dp: 0,
            source: None,
            dict_key: None,
            default_value: None,
            default_fn: None,
        }
    }

    /// Set the decimal places.
    pub fn dp(mut self, dp: u8) -> Self {
        self.dp = dp;
        self
    }

    /// Source from a single dotted path.
    pub fn source(mut self, path: &'static str) -> Self {
        self.source = Some(SourcePath::One(path));
        self
    }

    /// Source from several paths joined with a space.
    pub fn source_join(mut self, paths: &'static [&'static str]) -> Self {
        self.source = Some(SourcePath::Join(paths));
        self
    }

    /// Source from guarded alternatives.
    pub fn source_guarded(mut self, pairs: &'static [(&'static str, &'static str)]) -> Self {
        self.source = Some(SourcePath::Guarded(pairs));
        self
    }

    /// Flat dict-key lookup.
    pub fn dict_key(mut self, key: &'static str) -> Self {
        self.dict_key = Some(key);
        self
    }

    /// Literal default value.
    pub fn default_value(mut self, val: &'static str) -> Self {
        self.default_value = Some(val);
        self
    }

    /// Default function.
    pub fn default_fn(mut self, func: DefaultFn) -> Self {
        self.default_fn = Some(func);
        self
    }

    /// Byte width of the field.
    pub fn width(&self) -> usize {
        self.length.unsigned_abs() as usize
    }

    /// Whether the field belongs to the 49-byte telegram header.
    pub fn is_header(&self) -> bool {
        is_header_field(self.name)
    }
}

/// Telegram header fields are shared by every telegram type and are
/// stripped from the simplified body views.
pub fn is_header_field(name: &str) -> bool {
    name.starts_with("Telheader_") || name == "Satzart"
}

/// One entry of a decode table: name and width only; decoding always
/// yields strings.
#[derive(Debug, Clone, Copy)]
pub struct DecodeField {
    /// Field name.
    pub name: &'static str,
    /// Width in bytes (sign as in [`FieldSpec::length`]).
    pub length: i32,
}

impl DecodeField {
    /// Byte width of the field.
    pub fn width(&self) -> usize {
        self.length.unsigned_abs() as usize
    }
}

/// The parsing view of a telegram type: ordered body fields and widths.
#[derive(Debug, Clone)]
pub struct DecodeTable {
    telegram_type: &'static str,
    fields: Vec<DecodeField>,
}

impl DecodeTable {
    /// Build a decode table from `(name, width)` pairs.
    pub fn new(telegram_type: &'static str, widths: &[(&'static str, i32)]) -> Self {
        Self {
            telegram_type,
            fields: widths
                .iter()
                .map(|&(name, length)| DecodeField { name, length })
                .collect(),
        }
    }

    /// Telegram type this table belongs to.
    pub fn telegram_type(&self) -> &'static str {
        self.telegram_type
    }

    /// Ordered fields.
    pub fn fields(&self) -> &[DecodeField] {
        &self.fields
    }

    /// Total width in bytes of a conforming body.
    pub fn body_width(&self) -> usize {
        self.fields.iter().map(DecodeField::width).sum()
    }
}

/// The authoring view of a telegram type: ordered full field specs,
/// header fields included inline.
#[derive(Debug, Clone)]
pub struct ConvertTable {
    telegram_type: &'static str,
    fields: Vec<FieldSpec>,
}

impl ConvertTable {
    /// Build a convert table from an ordered field list.
    pub fn new(telegram_type: &'static str, fields: Vec<FieldSpec>) -> Self {
        Self {
            telegram_type,
            fields,
        }
    }

    /// Telegram type this table belongs to.
    pub fn telegram_type(&self) -> &'static str {
        self.telegram_type
    }

    /// Ordered fields, header included.
    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    /// Width of the body (header fields excluded).
    pub fn body_width(&self) -> usize {
        self.fields
            .iter()
            .filter(|f| !f.is_header())
            .map(FieldSpec::width)
            .sum()
    }

    /// Width of a full line, header included.
    pub fn line_width(&self) -> usize {
        self.fields.iter().map(FieldSpec::width).sum()
    }

    /// Derive the parsing view: body fields with widths, header
    /// stripped.
    pub fn to_decode_table(&self) -> DecodeTable {
        DecodeTable {
            telegram_type: self.telegram_type,
            fields: self
                .fields
                .iter()
                .filter(|f| !f.is_header())
                .map(|f| DecodeField {
                    name: f.name,
                    length: f.length,
                })
                .collect(),
        }
    }
}
