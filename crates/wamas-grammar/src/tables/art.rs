//! ART: article master data (host to warehouse)
//!
//! Authored from a flat product record, not from a UBL tree.

use crate::model::DefaultFn::{CurrentDatetime, Destination, SequenceNumber, Source};
use crate::model::FieldType::{Bool, Date, DateTime, Float, Int, Str};
use crate::model::{ConvertTable, FieldSpec};

pub(crate) fn convert() -> ConvertTable {
    ConvertTable::new(
        "ART",
        vec![
            FieldSpec::new("Telheader_Quelle", Str, 10).default_fn(Source),
            FieldSpec::new("Telheader_Ziel", Str, 10).default_fn(Destination),
            FieldSpec::new("Telheader_TelSeq", Int, 6).default_fn(SequenceNumber),
            FieldSpec::new("Telheader_AnlZeit", DateTime, 14).default_fn(CurrentDatetime),
            FieldSpec::new("Satzart", Str, 9).default_value("ART00046"),
            FieldSpec::new("ArtId_Mand", Str, 3).default_value("100"),
            FieldSpec::new("ArtId_ArtNr", Str, 20).dict_key("default_code"),
            FieldSpec::new("HostEinheit", Str, 5).dict_key("uom"),
            FieldSpec::new("Bezeich", Str, 40).dict_key("name"),
            FieldSpec::new("ArtEan", Str, 14).dict_key("barcode"),
            FieldSpec::new("Gewicht", Float, 12).dp(3).dict_key("weight"),
            FieldSpec::new("MhdPflicht", Bool, 1).dict_key("use_expiration_date"),
            FieldSpec::new("EinfDat", Date, 8).dict_key("date_start"),
            FieldSpec::new("Info2Wamas", Str, 77).dict_key("description"),
        ],
    )
}
