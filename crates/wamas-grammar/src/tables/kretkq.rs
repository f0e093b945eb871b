//! KRETKQ: customer return confirmation, return head (warehouse to host)

use crate::model::DefaultFn::{CurrentDatetime, SequenceNumber};
use crate::model::FieldType::{DateTime, Int, Str};
use crate::model::{ConvertTable, DecodeTable, FieldSpec};

pub(crate) fn decode() -> DecodeTable {
    DecodeTable::new(
        "KRETKQ",
        &[
            ("IvKretk_KretId_Mand", 3),
            ("IvKretk_KretId_KretNr", 20),
            ("IvKretk_KretId_HostKretKz", 5),
            ("IvKretk_ExtRef", 20),
            ("IvKretk_KST_Mand", 3),
            ("IvKretk_KST_KuNr", 13),
            ("IvKretk_LiefTerm", 14),
            ("IvKretk_StartZeit", 14),
            ("IvKretk_FertZeit", 14),
            ("IvKretk_Info2Host", 77),
        ],
    )
}

pub(crate) fn convert() -> ConvertTable {
    ConvertTable::new(
        "KRETKQ",
        vec![
            FieldSpec::new("Telheader_Quelle", Str, 10).default_value("WAMAS"),
            FieldSpec::new("Telheader_Ziel", Str, 10).default_value("SYSLOG"),
            FieldSpec::new("Telheader_TelSeq", Int, 6).default_fn(SequenceNumber),
            FieldSpec::new("Telheader_AnlZeit", DateTime, 14).default_fn(CurrentDatetime),
            FieldSpec::new("Satzart", Str, 9).default_value("KRETKQ050"),
            FieldSpec::new("IvKretk_KretId_Mand", Str, 3).dict_key("RxKretk_KretId_Mand"),
            FieldSpec::new("IvKretk_KretId_KretNr", Str, 20).dict_key("RxKretk_KretId_KretNr"),
            FieldSpec::new("IvKretk_KretId_HostKretKz", Str, 5)
                .dict_key("RxKretk_KretId_HostKretKz"),
            FieldSpec::new("IvKretk_ExtRef", Str, 20).dict_key("RxKretk_ExtRef"),
            FieldSpec::new("IvKretk_KST_Mand", Str, 3).dict_key("RxKretk_KST_Mand"),
            FieldSpec::new("IvKretk_KST_KuNr", Str, 13).dict_key("RxKretk_KST_KuNr"),
            FieldSpec::new("IvKretk_LiefTerm", DateTime, 14).dict_key("RxKretk_LiefTerm"),
            FieldSpec::new("IvKretk_StartZeit", DateTime, 14),
            FieldSpec::new("IvKretk_FertZeit", DateTime, 14),
            FieldSpec::new("IvKretk_Info2Host", Str, 77),
        ],
    )
}
