//! WATEPQ: outbound transport unit content (package line, warehouse to host)
//!
//! The charge field leads the body on purpose: the splice repair for
//! weirdly encoded lines re-pads the first space-delimited token to the
//! width of the first field.

use crate::model::DefaultFn::{CurrentDatetime, ParentId, SequenceNumber};
use crate::model::FieldType::{DateTime, Float, Int, Str};
use crate::model::{ConvertTable, DecodeTable, FieldSpec};

pub(crate) fn decode() -> DecodeTable {
    DecodeTable::new(
        "WATEPQ",
        &[
            ("IvTep_MId_Charge", 20),
            ("IvTep_TeId", 20),
            ("IvTep_AusId_Mand", 3),
            ("IvTep_AusId_AusNr", 20),
            ("IvTep_AusPos", 6),
            ("IvTep_ArtId_ArtNr", 20),
            ("Mngs_Mng", 12),
            ("HostEinheit", 5),
            ("IvTep_Info2Host", 77),
        ],
    )
}

pub(crate) fn convert() -> ConvertTable {
    ConvertTable::new(
        "WATEPQ",
        vec![
            FieldSpec::new("Telheader_Quelle", Str, 10).default_value("WAMAS"),
            FieldSpec::new("Telheader_Ziel", Str, 10).default_value("SYSLOG"),
            FieldSpec::new("Telheader_TelSeq", Int, 6).default_fn(SequenceNumber),
            FieldSpec::new("Telheader_AnlZeit", DateTime, 14).default_fn(CurrentDatetime),
            FieldSpec::new("Satzart", Str, 9).default_value("WATEPQ052"),
            FieldSpec::new("IvTep_MId_Charge", Str, 20).dict_key("RxAusp_MId_Charge"),
            FieldSpec::new("IvTep_TeId", Str, 20).default_fn(ParentId),
            FieldSpec::new("IvTep_AusId_Mand", Str, 3).dict_key("RxAusp_AusId_Mand"),
            FieldSpec::new("IvTep_AusId_AusNr", Str, 20).dict_key("RxAusp_AusId_AusNr"),
            FieldSpec::new("IvTep_AusPos", Int, 6).dict_key("RxAusp_AusPos"),
            FieldSpec::new("IvTep_ArtId_ArtNr", Str, 20).dict_key("RxAusp_ArtId_ArtNr"),
            FieldSpec::new("Mngs_Mng", Float, 12).dp(3).dict_key("RxAusp_Mngs_Mng"),
            FieldSpec::new("HostEinheit", Str, 5).dict_key("HostEinheit"),
            FieldSpec::new("IvTep_Info2Host", Str, 77),
        ],
    )
}
