//! KRETP: customer return announcement, return line (host to warehouse)

use crate::model::DefaultFn::{CurrentDatetime, Destination, SequenceNumber, Source};
use crate::model::FieldType::{DateTime, Float, Int, Str};
use crate::model::{ConvertTable, FieldSpec};

pub(crate) fn convert() -> ConvertTable {
    ConvertTable::new(
        "KRETP",
        vec![
            FieldSpec::new("Telheader_Quelle", Str, 10).default_fn(Source),
            FieldSpec::new("Telheader_Ziel", Str, 10).default_fn(Destination),
            FieldSpec::new("Telheader_TelSeq", Int, 6).default_fn(SequenceNumber),
            FieldSpec::new("Telheader_AnlZeit", DateTime, 14).default_fn(CurrentDatetime),
            FieldSpec::new("Satzart", Str, 9).default_value("KRETP050"),
            FieldSpec::new("RxKretp_KretId_Mand", Str, 3).default_value("100"),
            FieldSpec::new("RxKretp_KretId_KretNr", Str, 20).source("DespatchAdvice.cbc:ID"),
            FieldSpec::new("RxKretp_KretPos", Int, 6)
                .source("DespatchAdvice.cac:DespatchLine.{idx}.cbc:ID"),
            FieldSpec::new("RxKretp_ArtId_ArtNr", Str, 20).source_guarded(&[
                (
                    "DespatchAdvice.cac:DespatchLine.{idx}.cac:Item.cac:SellersItemIdentification.cbc:ID",
                    "DespatchAdvice.cac:DespatchLine.{idx}.cac:Item.cac:SellersItemIdentification.cbc:ID",
                ),
                (
                    "DespatchAdvice.cac:DespatchLine.{idx}.cac:Item.cac:StandardItemIdentification.cbc:ID",
                    "DespatchAdvice.cac:DespatchLine.{idx}.cac:Item.cac:StandardItemIdentification.cbc:ID",
                ),
            ]),
            FieldSpec::new("RxKretp_AnmMngs_Mng", Float, 12)
                .dp(3)
                .source("DespatchAdvice.cac:DespatchLine.{idx}.cbc:DeliveredQuantity.#text"),
            FieldSpec::new("HostEinheit", Str, 5)
                .source("DespatchAdvice.cac:DespatchLine.{idx}.cbc:DeliveredQuantity.@unitCode"),
            FieldSpec::new("RxKretp_Grund", Str, 10).default_value("RETOUR"),
            FieldSpec::new("RxKretp_Info2Wamas", Str, 77)
                .source("DespatchAdvice.cac:DespatchLine.{idx}.cbc:Note"),
        ],
    )
}
