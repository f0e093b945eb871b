//! AUSK: customer order, order head (host to warehouse)

use crate::model::DefaultFn::{CurrentDatetime, Destination, SequenceNumber, Source};
use crate::model::FieldType::{DateTime, Int, Str};
use crate::model::{ConvertTable, FieldSpec};

pub(crate) fn convert() -> ConvertTable {
    ConvertTable::new(
        "AUSK",
        vec![
            FieldSpec::new("Telheader_Quelle", Str, 10).default_fn(Source),
            FieldSpec::new("Telheader_Ziel", Str, 10).default_fn(Destination),
            FieldSpec::new("Telheader_TelSeq", Int, 6).default_fn(SequenceNumber),
            FieldSpec::new("Telheader_AnlZeit", DateTime, 14).default_fn(CurrentDatetime),
            FieldSpec::new("Satzart", Str, 9).default_value("AUSK0051"),
            FieldSpec::new("RxAusk_AusId_Mand", Str, 3).default_value("100"),
            FieldSpec::new("RxAusk_AusId_AusNr", Str, 20).source("DespatchAdvice.cbc:ID"),
            FieldSpec::new("RxAusk_AusId_HostAusKz", Str, 5).default_value("AUS"),
            FieldSpec::new("RxAusk_ExtRef", Str, 20)
                .source("DespatchAdvice.cac:OrderReference.cbc:ID"),
            FieldSpec::new("RxAusk_KST_Mand", Str, 3).default_value("100"),
            FieldSpec::new("RxAusk_KST_KuNr", Str, 13).source(
                "DespatchAdvice.cac:DeliveryCustomerParty.cac:Party.cac:PartyIdentification.cbc:ID",
            ),
            FieldSpec::new("RxAusk_LiefTerm", DateTime, 14)
                .source_join(&["DespatchAdvice.cbc:IssueDate", "DespatchAdvice.cbc:IssueTime"]),
            FieldSpec::new("RxAusk_RahmenTourId_TourNr", Str, 20)
                .source("DespatchAdvice.cac:Shipment.cbc:ID"),
            FieldSpec::new("RxAusk_RahmenTourId_HostTourKz", Str, 5).default_value("TOUR"),
            FieldSpec::new("RxAusk_Info2Wamas", Str, 77).source("DespatchAdvice.cbc:Note"),
        ],
    )
}
