//! WEAP: goods receipt announcement, order line (host to warehouse)
//!
//! Line fields resolve against the repeated `cac:DespatchLine` element, so
//! every per-line path carries the `{idx}` repetition placeholder.

use crate::model::DefaultFn::{CurrentDatetime, Destination, SequenceNumber, Source};
use crate::model::FieldType::{DateTime, Float, Int, Str};
use crate::model::{ConvertTable, FieldSpec};

pub(crate) fn convert() -> ConvertTable {
    ConvertTable::new(
        "WEAP",
        vec![
            FieldSpec::new("Telheader_Quelle", Str, 10).default_fn(Source),
            FieldSpec::new("Telheader_Ziel", Str, 10).default_fn(Destination),
            FieldSpec::new("Telheader_TelSeq", Int, 6).default_fn(SequenceNumber),
            FieldSpec::new("Telheader_AnlZeit", DateTime, 14).default_fn(CurrentDatetime),
            FieldSpec::new("Satzart", Str, 9).default_value("WEAP0050"),
            FieldSpec::new("RxWeap_WeaId_Mand", Str, 3).default_value("100"),
            FieldSpec::new("RxWeap_WeaId_WeaNr", Str, 20).source("DespatchAdvice.cbc:ID"),
            FieldSpec::new("RxWeap_WeaPos", Int, 6)
                .source("DespatchAdvice.cac:DespatchLine.{idx}.cbc:ID"),
            FieldSpec::new("RxWeap_ArtId_ArtNr", Str, 20).source_guarded(&[
                (
                    "DespatchAdvice.cac:DespatchLine.{idx}.cac:Item.cac:SellersItemIdentification.cbc:ID",
                    "DespatchAdvice.cac:DespatchLine.{idx}.cac:Item.cac:SellersItemIdentification.cbc:ID",
                ),
                (
                    "DespatchAdvice.cac:DespatchLine.{idx}.cac:Item.cac:StandardItemIdentification.cbc:ID",
                    "DespatchAdvice.cac:DespatchLine.{idx}.cac:Item.cac:StandardItemIdentification.cbc:ID",
                ),
            ]),
            FieldSpec::new("RxWeap_LiefMngs_Mng", Float, 12)
                .dp(3)
                .source("DespatchAdvice.cac:DespatchLine.{idx}.cbc:DeliveredQuantity.#text"),
            FieldSpec::new("HostEinheit", Str, 5)
                .source("DespatchAdvice.cac:DespatchLine.{idx}.cbc:DeliveredQuantity.@unitCode"),
            FieldSpec::new("RxWeap_MId_Charge", Str, 20).source(
                "DespatchAdvice.cac:DespatchLine.{idx}.cac:Item.cac:ItemInstance.cac:LotIdentification.cbc:LotNumberID",
            ),
            FieldSpec::new("RxWeap_Info2Wamas", Str, 77)
                .source("DespatchAdvice.cac:DespatchLine.{idx}.cbc:Note"),
        ],
    )
}
