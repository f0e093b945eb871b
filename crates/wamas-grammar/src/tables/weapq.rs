//! WEAPQ: goods receipt confirmation, receipt line (warehouse to host)

use crate::model::DefaultFn::{CurrentDatetime, ResponseDestination, ResponseSource, SequenceNumber};
use crate::model::FieldType::{DateTime, Float, Int, Str};
use crate::model::{ConvertTable, DecodeTable, FieldSpec};

pub(crate) fn decode() -> DecodeTable {
    DecodeTable::new(
        "WEAPQ",
        &[
            ("IvWevp_WevId_Mand", 3),
            ("IvWevp_WevId_WevNr", 20),
            ("IvWevp_WevPos", 6),
            ("IvWevp_ArtId_ArtNr", 20),
            ("IvWevp_LiefMngs_Mng", 12),
            ("HostEinheit", 5),
            ("IvWevp_MId_Charge", 20),
            ("IvWevp_Info2Host", 77),
        ],
    )
}

pub(crate) fn convert() -> ConvertTable {
    ConvertTable::new(
        "WEAPQ",
        vec![
            FieldSpec::new("Telheader_Quelle", Str, 10).default_fn(ResponseSource),
            FieldSpec::new("Telheader_Ziel", Str, 10).default_fn(ResponseDestination),
            FieldSpec::new("Telheader_TelSeq", Int, 6).default_fn(SequenceNumber),
            FieldSpec::new("Telheader_AnlZeit", DateTime, 14).default_fn(CurrentDatetime),
            FieldSpec::new("Satzart", Str, 9).default_value("WEAPQ0051"),
            FieldSpec::new("IvWevp_WevId_Mand", Str, 3).dict_key("RxWeap_WeaId_Mand"),
            FieldSpec::new("IvWevp_WevId_WevNr", Str, 20).dict_key("RxWeap_WeaId_WeaNr"),
            FieldSpec::new("IvWevp_WevPos", Int, 6).dict_key("RxWeap_WeaPos"),
            FieldSpec::new("IvWevp_ArtId_ArtNr", Str, 20).dict_key("RxWeap_ArtId_ArtNr"),
            FieldSpec::new("IvWevp_LiefMngs_Mng", Float, 12)
                .dp(3)
                .dict_key("RxWeap_LiefMngs_Mng"),
            FieldSpec::new("HostEinheit", Str, 5).dict_key("HostEinheit"),
            FieldSpec::new("IvWevp_MId_Charge", Str, 20).dict_key("RxWeap_MId_Charge"),
            FieldSpec::new("IvWevp_Info2Host", Str, 77),
        ],
    )
}
