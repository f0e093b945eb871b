//! WEAK: goods receipt announcement, order head (host to warehouse)

use crate::model::DefaultFn::{CurrentDatetime, Destination, SequenceNumber, Source};
use crate::model::FieldType::{DateTime, Int, Str};
use crate::model::{ConvertTable, FieldSpec};

pub(crate) fn convert() -> ConvertTable {
    ConvertTable::new(
        "WEAK",
        vec![
            FieldSpec::new("Telheader_Quelle", Str, 10).default_fn(Source),
            FieldSpec::new("Telheader_Ziel", Str, 10).default_fn(Destination),
            FieldSpec::new("Telheader_TelSeq", Int, 6).default_fn(SequenceNumber),
            FieldSpec::new("Telheader_AnlZeit", DateTime, 14).default_fn(CurrentDatetime),
            FieldSpec::new("Satzart", Str, 9).default_value("WEAK0050"),
            FieldSpec::new("RxWeak_WeaId_Mand", Str, 3).default_value("100"),
            FieldSpec::new("RxWeak_WeaId_WeaNr", Str, 20).source("DespatchAdvice.cbc:ID"),
            FieldSpec::new("RxWeak_WeaId_HostWeaKz", Str, 5).default_value("WEA"),
            FieldSpec::new("RxWeak_LiefTerm", DateTime, 14)
                .source_join(&["DespatchAdvice.cbc:IssueDate", "DespatchAdvice.cbc:IssueTime"]),
            FieldSpec::new("RxWeak_LST_Mand", Str, 3).default_value("100"),
            FieldSpec::new("RxWeak_LST_LiefNr", Str, 13).source(
                "DespatchAdvice.cac:DespatchSupplierParty.cac:Party.cac:PartyIdentification.cbc:ID",
            ),
            FieldSpec::new("RxWeak_Info2Wamas", Str, 77).source("DespatchAdvice.cbc:Note"),
        ],
    )
}
