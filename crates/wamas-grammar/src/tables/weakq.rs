//! WEAKQ: goods receipt confirmation, order head (warehouse to host)

use crate::model::DefaultFn::{CurrentDatetime, ResponseDestination, ResponseSource, SequenceNumber};
use crate::model::FieldType::{DateTime, Int, Str};
use crate::model::{ConvertTable, DecodeTable, FieldSpec};

pub(crate) fn decode() -> DecodeTable {
    DecodeTable::new(
        "WEAKQ",
        &[
            ("IvWevk_WevId_Mand", 3),
            ("IvWevk_WevId_WevNr", 20),
            ("HostWeaKz", 5),
            ("IvWevk_LiefTerm", 14),
            ("IvWevk_LkwFahrer", 40),
            ("IvWevk_LkwKz", 10),
            ("IvWevk_EinfahrtZeit", 14),
            ("IvWevk_StartZeit", 14),
            ("IvWevk_FertZeit", 14),
            ("IvWevk_AnmZeit", 14),
            ("IvWevk_Info2Host", 77),
            ("LST_Mand", 3),
            ("LST_LiefNr", 13),
        ],
    )
}

pub(crate) fn convert() -> ConvertTable {
    ConvertTable::new(
        "WEAKQ",
        vec![
            FieldSpec::new("Telheader_Quelle", Str, 10).default_fn(ResponseSource),
            FieldSpec::new("Telheader_Ziel", Str, 10).default_fn(ResponseDestination),
            FieldSpec::new("Telheader_TelSeq", Int, 6).default_fn(SequenceNumber),
            FieldSpec::new("Telheader_AnlZeit", DateTime, 14).default_fn(CurrentDatetime),
            FieldSpec::new("Satzart", Str, 9).default_value("WEAKQ0051"),
            FieldSpec::new("IvWevk_WevId_Mand", Str, 3).dict_key("RxWeak_WeaId_Mand"),
            FieldSpec::new("IvWevk_WevId_WevNr", Str, 20).dict_key("RxWeak_WeaId_WeaNr"),
            FieldSpec::new("HostWeaKz", Str, 5).dict_key("RxWeak_WeaId_HostWeaKz"),
            FieldSpec::new("IvWevk_LiefTerm", DateTime, 14).default_value("19700101010000"),
            FieldSpec::new("IvWevk_LkwFahrer", Str, 40),
            FieldSpec::new("IvWevk_LkwKz", Str, 10),
            FieldSpec::new("IvWevk_EinfahrtZeit", DateTime, 14).default_value("19700101010000"),
            FieldSpec::new("IvWevk_StartZeit", DateTime, 14),
            FieldSpec::new("IvWevk_FertZeit", DateTime, 14).default_fn(CurrentDatetime),
            FieldSpec::new("IvWevk_AnmZeit", DateTime, 14),
            FieldSpec::new("IvWevk_Info2Host", Str, 77),
            FieldSpec::new("LST_Mand", Str, 3).dict_key("RxWeak_LST_Mand"),
            FieldSpec::new("LST_LiefNr", Str, 13).dict_key("RxWeak_LST_LiefNr"),
        ],
    )
}
