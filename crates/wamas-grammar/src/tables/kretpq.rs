//! KRETPQ: customer return confirmation, return line (warehouse to host)

use crate::model::DefaultFn::{CurrentDatetime, SequenceNumber};
use crate::model::FieldType::{DateTime, Float, Int, Str};
use crate::model::{ConvertTable, DecodeTable, FieldSpec};

pub(crate) fn decode() -> DecodeTable {
    DecodeTable::new(
        "KRETPQ",
        &[
            ("IvKretp_KretId_Mand", 3),
            ("IvKretp_KretId_KretNr", 20),
            ("IvKretp_KretPos", 6),
            ("IvKretp_ArtId_ArtNr", 20),
            ("IvKretp_AnmMngs_Mng", 12),
            ("HostEinheit", 5),
            ("IvKretp_Grund", 10),
            ("IvKretp_Info2Host", 77),
        ],
    )
}

pub(crate) fn convert() -> ConvertTable {
    ConvertTable::new(
        "KRETPQ",
        vec![
            FieldSpec::new("Telheader_Quelle", Str, 10).default_value("WAMAS"),
            FieldSpec::new("Telheader_Ziel", Str, 10).default_value("SYSLOG"),
            FieldSpec::new("Telheader_TelSeq", Int, 6).default_fn(SequenceNumber),
            FieldSpec::new("Telheader_AnlZeit", DateTime, 14).default_fn(CurrentDatetime),
            FieldSpec::new("Satzart", Str, 9).default_value("KRETPQ050"),
            FieldSpec::new("IvKretp_KretId_Mand", Str, 3).dict_key("RxKretp_KretId_Mand"),
            FieldSpec::new("IvKretp_KretId_KretNr", Str, 20).dict_key("RxKretp_KretId_KretNr"),
            FieldSpec::new("IvKretp_KretPos", Int, 6).dict_key("RxKretp_KretPos"),
            FieldSpec::new("IvKretp_ArtId_ArtNr", Str, 20).dict_key("RxKretp_ArtId_ArtNr"),
            FieldSpec::new("IvKretp_AnmMngs_Mng", Float, 12)
                .dp(3)
                .dict_key("RxKretp_AnmMngs_Mng"),
            FieldSpec::new("HostEinheit", Str, 5).dict_key("HostEinheit"),
            FieldSpec::new("IvKretp_Grund", Str, 10).dict_key("RxKretp_Grund"),
            FieldSpec::new("IvKretp_Info2Host", Str, 77),
        ],
    )
}
