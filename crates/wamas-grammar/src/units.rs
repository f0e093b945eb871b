//! Unit-of-measure code translation between WAMAS and UBL
//!
//! UBL quantities carry UN/ECE Recommendation 20 unit codes
//! (`DespatchLine/DeliveredQuantity[unitCode]`); WAMAS telegrams carry
//! house codes. The two directions are looked up in separate tables
//! because the mapping is not one-to-one (`C62` also folds to `BOT`).

/// Fields whose values pass through the unit-code translation.
pub const UNIT_CODE_FIELDS: &[&str] = &["HostEinheit"];

const WAMAS_TO_UBL: &[(&str, &str)] = &[
    ("BOT", "XBQ"),   // plastic bottle
    ("BOUT", "XBQ"),  // plastic bottle
    ("BOITE", "XBX"), // box
    ("LITRE", "LTR"), // litre
    ("PET", "XBO"),   // glass bottle
    ("TETRA", "X4B"), // tetra pack
];

const UBL_TO_WAMAS: &[(&str, &str)] = &[
    ("XBQ", "BOT"),
    ("XBX", "BOITE"),
    ("LTR", "LITRE"),
    ("XBO", "PET"),
    ("X4B", "TETRA"),
    ("C62", "BOT"), // unit
];

/// Immutable unit-code translation table, built once and shared by
/// reference with the encoder and the template engine.
#[derive(Debug, Clone)]
pub struct UnitCodeMap {
    to_ubl: &'static [(&'static str, &'static str)],
    to_wamas: &'static [(&'static str, &'static str)],
}

impl UnitCodeMap {
    /// The standard table.
    pub fn standard() -> Self {
        Self {
            to_ubl: WAMAS_TO_UBL,
            to_wamas: UBL_TO_WAMAS,
        }
    }

    /// Translate a WAMAS house code to a UBL unit code.
    pub fn wamas_to_ubl(&self, code: &str) -> Option<&'static str> {
        lookup(self.to_ubl, code)
    }

    /// Translate a UBL unit code to a WAMAS house code.
    pub fn ubl_to_wamas(&self, code: &str) -> Option<&'static str> {
        lookup(self.to_wamas, code)
    }

    /// Whether the named field takes part in unit-code translation.
    pub fn applies_to(&self, field: &str) -> bool {
        UNIT_CODE_FIELDS.contains(&field)
    }
}

impl Default for UnitCodeMap {
    fn default() -> Self {
        Self::standard()
    }
}

fn lookup(table: &'static [(&'static str, &'static str)], code: &str) -> Option<&'static str> {
    table
        .iter()
        .find(|(from, _)| *from == code)
        .map(|&(_, to)| to)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_bot() {
        let units = UnitCodeMap::standard();
        let ubl = units.wamas_to_ubl("BOT").unwrap();
        assert_eq!(ubl, "XBQ");
        assert_eq!(units.ubl_to_wamas(ubl), Some("BOT"));
    }

    #[test]
    fn test_c62_folds_to_bot() {
        let units = UnitCodeMap::standard();
        assert_eq!(units.ubl_to_wamas("C62"), Some("BOT"));
    }

    #[test]
    fn test_unknown_codes_miss() {
        let units = UnitCodeMap::standard();
        assert_eq!(units.wamas_to_ubl("PALLET"), None);
        assert_eq!(units.ubl_to_wamas(""), None);
    }

    #[test]
    fn test_applies_to_unit_fields_only() {
        let units = UnitCodeMap::standard();
        assert!(units.applies_to("HostEinheit"));
        assert!(!units.applies_to("IvWevk_WevId_WevNr"));
    }
}
