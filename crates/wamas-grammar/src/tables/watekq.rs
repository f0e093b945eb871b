//! WATEKQ: outbound transport unit (package head, warehouse to host)

use crate::model::DefaultFn::{CurrentDatetime, SequenceNumber};
use crate::model::FieldType::{DateTime, Float, Int, Str};
use crate::model::{ConvertTable, DecodeTable, FieldSpec};

pub(crate) fn decode() -> DecodeTable {
    DecodeTable::new(
        "WATEKQ",
        &[
            ("IvTek_TeId", 20),
            ("IvTek_AusId_Mand", 3),
            ("IvTek_AusId_AusNr", 20),
            ("IvTek_TeArt", 10),
            ("IvTek_GesGew", 12),
            ("IvTek_Info2Host", 77),
        ],
    )
}

pub(crate) fn convert() -> ConvertTable {
    ConvertTable::new(
        "WATEKQ",
        vec![
            FieldSpec::new("Telheader_Quelle", Str, 10).default_value("WAMAS"),
            FieldSpec::new("Telheader_Ziel", Str, 10).default_value("SYSLOG"),
            FieldSpec::new("Telheader_TelSeq", Int, 6).default_fn(SequenceNumber),
            FieldSpec::new("Telheader_AnlZeit", DateTime, 14).default_fn(CurrentDatetime),
            FieldSpec::new("Satzart", Str, 9).default_value("WATEKQ052"),
            FieldSpec::new("IvTek_TeId", Str, 20).dict_key("RxAusk_AusId_AusNr"),
            FieldSpec::new("IvTek_AusId_Mand", Str, 3).dict_key("RxAusk_AusId_Mand"),
            FieldSpec::new("IvTek_AusId_AusNr", Str, 20).dict_key("RxAusk_AusId_AusNr"),
            FieldSpec::new("IvTek_TeArt", Str, 10).default_value("EUR"),
            FieldSpec::new("IvTek_GesGew", Float, 12).dp(3),
            FieldSpec::new("IvTek_Info2Host", Str, 77),
        ],
    )
}
