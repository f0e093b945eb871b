//! AUSP: customer order, order line (host to warehouse)

use crate::model::DefaultFn::{CurrentDatetime, Destination, SequenceNumber, Source};
use crate::model::FieldType::{DateTime, Float, Int, Str};
use crate::model::{ConvertTable, FieldSpec};

pub(crate) fn convert() -> ConvertTable {
    ConvertTable::new(
        "AUSP",
        vec![
            FieldSpec::new("Telheader_Quelle", Str, 10).default_fn(Source),
            FieldSpec::new("Telheader_Ziel", Str, 10).default_fn(Destination),
            FieldSpec::new("Telheader_TelSeq", Int, 6).default_fn(SequenceNumber),
            FieldSpec::new("Telheader_AnlZeit", DateTime, 14).default_fn(CurrentDatetime),
            FieldSpec::new("Satzart", Str, 9).default_value("AUSP0051"),
            FieldSpec::new("RxAusp_AusId_Mand", Str, 3).default_value("100"),
            FieldSpec::new("RxAusp_AusId_AusNr", Str, 20).source("DespatchAdvice.cbc:ID"),
            FieldSpec::new("RxAusp_AusPos", Int, 6)
                .source("DespatchAdvice.cac:DespatchLine.{idx}.cbc:ID"),
            FieldSpec::new("RxAusp_ArtId_ArtNr", Str, 20).source_guarded(&[
                (
                    "DespatchAdvice.cac:DespatchLine.{idx}.cac:Item.cac:SellersItemIdentification.cbc:ID",
                    "DespatchAdvice.cac:DespatchLine.{idx}.cac:Item.cac:SellersItemIdentification.cbc:ID",
                ),
                (
                    "DespatchAdvice.cac:DespatchLine.{idx}.cac:Item.cac:StandardItemIdentification.cbc:ID",
                    "DespatchAdvice.cac:DespatchLine.{idx}.cac:Item.cac:StandardItemIdentification.cbc:ID",
                ),
            ]),
            FieldSpec::new("RxAusp_Mngs_Mng", Float, 12)
                .dp(3)
                .source("DespatchAdvice.cac:DespatchLine.{idx}.cbc:DeliveredQuantity.#text"),
            FieldSpec::new("HostEinheit", Str, 5)
                .source("DespatchAdvice.cac:DespatchLine.{idx}.cbc:DeliveredQuantity.@unitCode"),
            FieldSpec::new("RxAusp_MId_Charge", Str, 20).source(
                "DespatchAdvice.cac:DespatchLine.{idx}.cac:Item.cac:ItemInstance.cac:LotIdentification.cbc:LotNumberID",
            ),
            FieldSpec::new("RxAusp_Info2Wamas", Str, 77)
                .source("DespatchAdvice.cac:DespatchLine.{idx}.cbc:Note"),
        ],
    )
}
