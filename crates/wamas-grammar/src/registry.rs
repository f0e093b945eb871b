//! Telegram grammar registry and flow classification tables.

use std::collections::HashMap;

use crate::model::{ConvertTable, DecodeTable};
use crate::{tables, Error, Result};

/// System identifier of the warehouse side.
pub const SYSTEM_WAMAS: &str = "WAMAS";

/// System identifier of the host (ERP) side.
pub const SYSTEM_HOST: &str = "ODOO";

/// Byte width of the shared telegram header.
pub const TELEGRAM_HEADER_WIDTH: usize = 49;

/// Telegram types the host authors towards the warehouse.
pub const HOST_TO_WAREHOUSE_TYPES: &[&str] = &[
    "ART", "WEAK", "WEAP", "AUSK", "AUSP", "KRETK", "KRETP", "KST", "LST",
];

/// Telegram types dropped without complaint when seen in a warehouse
/// stream.
pub const IGNORED_TELEGRAM_TYPES: &[&str] = &["AUSPQ", "TOURQ", "TAUSPQ"];

/// Quantity fields that carry an implied decimal point on the wire,
/// with `(width, decimal places)`.
const FLOAT_FIELDS: &[(&str, (usize, u8))] = &[
    ("IvWevp_LiefMngs_Mng", (12, 3)),
    ("IvKretp_AnmMngs_Mng", (12, 3)),
    ("Mngs_Mng", (12, 3)),
    ("IvTek_GesGew", (12, 3)),
];

/// Width and decimal places of a known float field.
pub fn float_field(name: &str) -> Option<(usize, u8)> {
    FLOAT_FIELDS
        .iter()
        .find(|(field, _)| *field == name)
        .map(|&(_, layout)| layout)
}

/// Message flows keyed by the sorted set of telegram types present.
const FLOW_DETECTION: &[(&[&str], &str)] = &[
    (&["WEAK", "WEAP"], "Reception"),
    (&["WEAKQ", "WEAPQ"], "Reception"),
    (&["AUSK", "AUSP"], "Picking"),
    (&["AUSKQ", "WATEKQ", "WATEPQ"], "Picking"),
    (&["KRETK", "KRETP"], "Return"),
    (&["KRETKQ", "KRETPQ"], "Return"),
    (&["KSTAUS"], "Customer Delivery Preference"),
    (&["LST"], "Supplier"),
    (&["ART"], "Product"),
    (&["KST"], "Customer"),
];

/// Classify a message by the set of telegram types it contains.
///
/// The set must match a known flow exactly; a partial or mixed set is
/// not classified.
pub fn detect_flow<S: AsRef<str>>(types: &[S]) -> Option<&'static str> {
    let mut present: Vec<String> = types
        .iter()
        .map(|t| t.as_ref().to_ascii_uppercase())
        .collect();
    present.sort_unstable();
    present.dedup();
    FLOW_DETECTION
        .iter()
        .find(|(set, _)| set.len() == present.len() && set.iter().zip(&present).all(|(a, b)| a == b))
        .map(|&(_, flow)| flow)
}

/// Both views of one telegram type.
#[derive(Debug, Clone)]
pub struct TelegramGrammar {
    decode: DecodeTable,
    convert: ConvertTable,
}

impl TelegramGrammar {
    /// Parsing view.
    pub fn decode(&self) -> &DecodeTable {
        &self.decode
    }

    /// Authoring view.
    pub fn convert(&self) -> &ConvertTable {
        &self.convert
    }
}

/// All telegram grammars known to the translator, keyed by telegram
/// type. Lookups are case-insensitive.
#[derive(Debug, Clone)]
pub struct GrammarRegistry {
    grammars: HashMap<&'static str, TelegramGrammar>,
    header: DecodeTable,
}

impl GrammarRegistry {
    /// The full standard grammar set.
    pub fn standard() -> Self {
        let mut grammars = HashMap::new();

        // Warehouse confirmations keep a hand-maintained parsing view
        // next to the authoring view.
        for (decode, convert) in [
            (tables::auskq::decode(), tables::auskq::convert()),
            (tables::kretkq::decode(), tables::kretkq::convert()),
            (tables::kretpq::decode(), tables::kretpq::convert()),
            (tables::watekq::decode(), tables::watekq::convert()),
            (tables::watepq::decode(), tables::watepq::convert()),
            (tables::weakq::decode(), tables::weakq::convert()),
            (tables::weapq::decode(), tables::weapq::convert()),
        ] {
            grammars.insert(convert.telegram_type(), TelegramGrammar { decode, convert });
        }

        // Host-authored telegrams derive their parsing view.
        for convert in [
            tables::art::convert(),
            tables::ausk::convert(),
            tables::ausp::convert(),
            tables::kretk::convert(),
            tables::kretp::convert(),
            tables::kst::convert(),
            tables::lst::convert(),
            tables::weak::convert(),
            tables::weap::convert(),
        ] {
            grammars.insert(
                convert.telegram_type(),
                TelegramGrammar {
                    decode: convert.to_decode_table(),
                    convert,
                },
            );
        }

        Self {
            grammars,
            header: DecodeTable::new(
                "TELHEADER",
                &[
                    ("Telheader_Quelle", 10),
                    ("Telheader_Ziel", 10),
                    ("Telheader_TelSeq", 6),
                    ("Telheader_AnlZeit", 14),
                    ("Satzart", 9),
                ],
            ),
        }
    }

    fn get(&self, telegram_type: &str) -> Option<&TelegramGrammar> {
        self.grammars
            .get(telegram_type.to_ascii_uppercase().as_str())
    }

    /// Whether a telegram type is registered.
    pub fn contains(&self, telegram_type: &str) -> bool {
        self.get(telegram_type).is_some()
    }

    /// The shared header layout.
    pub fn header(&self) -> &DecodeTable {
        &self.header
    }

    /// Parsing view of a telegram type.
    pub fn decode_table(&self, telegram_type: &str) -> Result<&DecodeTable> {
        self.get(telegram_type)
            .map(TelegramGrammar::decode)
            .ok_or_else(|| Error::unknown_telegram_type(telegram_type))
    }

    /// Authoring view of a telegram type.
    pub fn convert_table(&self, telegram_type: &str) -> Result<&ConvertTable> {
        self.get(telegram_type)
            .map(TelegramGrammar::convert)
            .ok_or_else(|| Error::unknown_telegram_type(telegram_type))
    }

    /// Registered telegram types, sorted.
    pub fn telegram_types(&self) -> Vec<&'static str> {
        let mut types: Vec<&'static str> = self.grammars.keys().copied().collect();
        types.sort_unstable();
        types
    }
}

impl Default for GrammarRegistry {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_TYPES: &[&str] = &[
        "ART", "AUSK", "AUSKQ", "AUSP", "KRETK", "KRETKQ", "KRETP", "KRETPQ", "KST", "LST",
        "WATEKQ", "WATEPQ", "WEAK", "WEAKQ", "WEAP", "WEAPQ",
    ];

    #[test]
    fn test_standard_registers_all_types() {
        let registry = GrammarRegistry::standard();
        assert_eq!(registry.telegram_types(), ALL_TYPES);
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        let registry = GrammarRegistry::standard();
        assert!(registry.contains("weakq"));
        assert!(registry.decode_table("WeaKQ").is_ok());
    }

    #[test]
    fn test_unknown_type_is_an_error() {
        let registry = GrammarRegistry::standard();
        let err = registry.decode_table("XYZ").unwrap_err();
        assert!(err.to_string().contains("XYZ"));
    }

    #[test]
    fn test_header_width() {
        let registry = GrammarRegistry::standard();
        assert_eq!(registry.header().body_width(), TELEGRAM_HEADER_WIDTH);
    }

    #[test]
    fn test_body_widths() {
        let registry = GrammarRegistry::standard();
        let expected = [
            ("ART", 180),
            ("AUSK", 180),
            ("AUSKQ", 208),
            ("AUSP", 163),
            ("KRETK", 155),
            ("KRETKQ", 183),
            ("KRETP", 153),
            ("KRETPQ", 153),
            ("KST", 226),
            ("LST", 226),
            ("WATEKQ", 142),
            ("WATEPQ", 183),
            ("WEAK", 135),
            ("WEAKQ", 241),
            ("WEAP", 163),
            ("WEAPQ", 163),
        ];
        for (ttype, width) in expected {
            let table = registry.decode_table(ttype).unwrap();
            assert_eq!(table.body_width(), width, "{ttype}");
        }
    }

    #[test]
    fn test_decode_and_convert_views_agree() {
        let registry = GrammarRegistry::standard();
        for ttype in ALL_TYPES {
            let decode = registry.decode_table(ttype).unwrap();
            let derived = registry.convert_table(ttype).unwrap().to_decode_table();
            let names: Vec<&str> = decode.fields().iter().map(|f| f.name).collect();
            let derived_names: Vec<&str> = derived.fields().iter().map(|f| f.name).collect();
            assert_eq!(names, derived_names, "{ttype}");
            assert_eq!(decode.body_width(), derived.body_width(), "{ttype}");
        }
    }

    #[test]
    fn test_detect_flow() {
        assert_eq!(detect_flow(&["WEAKQ", "WEAPQ"]), Some("Reception"));
        assert_eq!(detect_flow(&["WEAPQ", "WEAKQ", "WEAPQ"]), Some("Reception"));
        assert_eq!(
            detect_flow(&["AUSKQ", "WATEKQ", "WATEPQ"]),
            Some("Picking")
        );
        assert_eq!(detect_flow(&["KRETK", "KRETP"]), Some("Return"));
        assert_eq!(detect_flow(&["ART"]), Some("Product"));
        assert_eq!(detect_flow(&["weak", "weap"]), Some("Reception"));
        assert_eq!(detect_flow(&["WEAKQ"]), None);
        assert_eq!(detect_flow(&["WEAKQ", "AUSKQ"]), None);
        assert_eq!(detect_flow::<&str>(&[]), None);
    }

    #[test]
    fn test_auskq_tour_field_reads_tour_key() {
        let registry = GrammarRegistry::standard();
        let table = registry.convert_table("AUSKQ").unwrap();
        let dict_key = |name: &str| {
            table
                .fields()
                .iter()
                .find(|f| f.name == name)
                .unwrap()
                .dict_key
        };
        // the tour number comes from the tour key, not the mandant key
        assert_eq!(
            dict_key("IvAusk_RahmenTourId_TourNr"),
            Some("RxAusk_RahmenTourId_TourNr")
        );
        assert_eq!(dict_key("IvAusk_AusId_Mand"), Some("RxAusk_AusId_Mand"));
    }

    #[test]
    fn test_float_field_lookup() {
        assert_eq!(float_field("Mngs_Mng"), Some((12, 3)));
        assert_eq!(float_field("IvTek_GesGew"), Some((12, 3)));
        assert_eq!(float_field("IvTek_TeId"), None);
    }
}
