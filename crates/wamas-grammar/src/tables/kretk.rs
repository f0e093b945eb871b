//! KRETK: customer return announcement, return head (host to warehouse)

use crate::model::DefaultFn::{CurrentDatetime, Destination, SequenceNumber, Source};
use crate::model::FieldType::{DateTime, Int, Str};
use crate::model::{ConvertTable, FieldSpec};

pub(crate) fn convert() -> ConvertTable {
    ConvertTable::new(
        "KRETK",
        vec![
            FieldSpec::new("Telheader_Quelle", Str, 10).default_fn(Source),
            FieldSpec::new("Telheader_Ziel", Str, 10).default_fn(Destination),
            FieldSpec::new("Telheader_TelSeq", Int, 6).default_fn(SequenceNumber),
            FieldSpec::new("Telheader_AnlZeit", DateTime, 14).default_fn(CurrentDatetime),
            FieldSpec::new("Satzart", Str, 9).default_value("KRETK050"),
            FieldSpec::new("RxKretk_KretId_Mand", Str, 3).default_value("100"),
            FieldSpec::new("RxKretk_KretId_KretNr", Str, 20).source("DespatchAdvice.cbc:ID"),
            FieldSpec::new("RxKretk_KretId_HostKretKz", Str, 5).default_value("KRET"),
            FieldSpec::new("RxKretk_ExtRef", Str, 20)
                .source("DespatchAdvice.cac:OrderReference.cbc:ID"),
            FieldSpec::new("RxKretk_KST_Mand", Str, 3).default_value("100"),
            FieldSpec::new("RxKretk_KST_KuNr", Str, 13).source(
                "DespatchAdvice.cac:DeliveryCustomerParty.cac:Party.cac:PartyIdentification.cbc:ID",
            ),
            FieldSpec::new("RxKretk_LiefTerm", DateTime, 14)
                .source_join(&["DespatchAdvice.cbc:IssueDate", "DespatchAdvice.cbc:IssueTime"]),
            FieldSpec::new("RxKretk_Info2Wamas", Str, 77).source("DespatchAdvice.cbc:Note"),
        ],
    )
}
