//! AUSKQ: picking order confirmation, order head (warehouse to host)

use crate::model::DefaultFn::{CurrentDatetime, SequenceNumber};
use crate::model::FieldType::{DateTime, Int, Str};
use crate::model::{ConvertTable, DecodeTable, FieldSpec};

pub(crate) fn decode() -> DecodeTable {
    DecodeTable::new(
        "AUSKQ",
        &[
            ("IvAusk_AusId_Mand", 3),
            ("IvAusk_AusId_AusNr", 20),
            ("IvAusk_AusId_HostAusKz", 5),
            ("IvAusk_ExtRef", 20),
            ("IvAusk_KST_Mand", 3),
            ("IvAusk_KST_KuNr", 13),
            ("IvAusk_LiefTerm", 14),
            ("IvAusk_StartZeit", 14),
            ("IvAusk_FertZeit", 14),
            ("IvAusk_RahmenTourId_TourNr", 20),
            ("IvAusk_RahmenTourId_HostTourKz", 5),
            ("IvAusk_Info2Host", 77),
        ],
    )
}

pub(crate) fn convert() -> ConvertTable {
    ConvertTable::new(
        "AUSKQ",
        vec![
            FieldSpec::new("Telheader_Quelle", Str, 10).default_value("WAMAS"),
            FieldSpec::new("Telheader_Ziel", Str, 10).default_value("SYSLOG"),
            FieldSpec::new("Telheader_TelSeq", Int, 6).default_fn(SequenceNumber),
            FieldSpec::new("Telheader_AnlZeit", DateTime, 14).default_fn(CurrentDatetime),
            FieldSpec::new("Satzart", Str, 9).default_value("AUSKQ0052"),
            FieldSpec::new("IvAusk_AusId_Mand", Str, 3).dict_key("RxAusk_AusId_Mand"),
            FieldSpec::new("IvAusk_AusId_AusNr", Str, 20).dict_key("RxAusk_AusId_AusNr"),
            FieldSpec::new("IvAusk_AusId_HostAusKz", Str, 5).dict_key("RxAusk_AusId_HostAusKz"),
            FieldSpec::new("IvAusk_ExtRef", Str, 20).dict_key("RxAusk_ExtRef"),
            FieldSpec::new("IvAusk_KST_Mand", Str, 3).dict_key("RxAusk_KST_Mand"),
            FieldSpec::new("IvAusk_KST_KuNr", Str, 13).dict_key("RxAusk_KST_KuNr"),
            FieldSpec::new("IvAusk_LiefTerm", DateTime, 14).dict_key("RxAusk_LiefTerm"),
            FieldSpec::new("IvAusk_StartZeit", DateTime, 14),
            FieldSpec::new("IvAusk_FertZeit", DateTime, 14),
            FieldSpec::new("IvAusk_RahmenTourId_TourNr", Str, 20)
                .dict_key("RxAusk_RahmenTourId_TourNr"),
            FieldSpec::new("IvAusk_RahmenTourId_HostTourKz", Str, 5)
                .dict_key("RxAusk_RahmenTourId_HostTourKz"),
            FieldSpec::new("IvAusk_Info2Host", Str, 77),
        ],
    )
}
