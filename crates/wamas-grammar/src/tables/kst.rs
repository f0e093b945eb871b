//! KST: customer master data (host to warehouse)
//!
//! Authored from a flat partner record.

use crate::model::DefaultFn::{CurrentDatetime, Destination, SequenceNumber, Source};
use crate::model::FieldType::{DateTime, Int, Str};
use crate::model::{ConvertTable, FieldSpec};

pub(crate) fn convert() -> ConvertTable {
    ConvertTable::new(
        "KST",
        vec![
            FieldSpec::new("Telheader_Quelle", Str, 10).default_fn(Source),
            FieldSpec::new("Telheader_Ziel", Str, 10).default_fn(Destination),
            FieldSpec::new("Telheader_TelSeq", Int, 6).default_fn(SequenceNumber),
            FieldSpec::new("Telheader_AnlZeit", DateTime, 14).default_fn(CurrentDatetime),
            FieldSpec::new("Satzart", Str, 9).default_value("KST00045"),
            FieldSpec::new("KST_Mand", Str, 3).default_value("100"),
            FieldSpec::new("KST_KuNr", Str, 13).dict_key("ref"),
            FieldSpec::new("Name1", Str, 40).dict_key("name"),
            FieldSpec::new("Strasse", Str, 40).dict_key("street"),
            FieldSpec::new("Plz", Str, 10).dict_key("zip"),
            FieldSpec::new("Ort", Str, 40).dict_key("city"),
            FieldSpec::new("LandKz", Str, 3).dict_key("country_code"),
            FieldSpec::new("Info2Wamas", Str, 77).dict_key("comment"),
        ],
    )
}
