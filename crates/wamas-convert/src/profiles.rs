//! Static conversion profiles.
//!
//! The sorted set of telegram types observed in a stream selects the
//! UBL document family, its template and the key fields to link on.
//! The transcoding tables map each host-side telegram type to the
//! warehouse confirmations it simulates.

/// One decode-to-UBL conversion profile.
#[derive(Debug)]
pub struct UblProfile {
    /// Profile identifier, also the template cache key.
    pub name: &'static str,
    /// Sorted telegram-type combination this profile matches.
    pub types: &'static [&'static str],
    /// Embedded template source.
    pub template: &'static str,
    /// Parent telegram type and its primary-key field.
    pub parent: (&'static str, &'static str),
    /// Child telegram type and its foreign-key field.
    pub child: (&'static str, &'static str),
    /// Transport-unit telegram type, for three-level linking.
    pub package_type: Option<&'static str>,
}

/// The registered profiles.
pub const UBL_PROFILES: &[UblProfile] = &[
    UblProfile {
        name: "reception_wea",
        types: &["WEAKQ", "WEAPQ"],
        template: include_str!("../templates/reception_wea.xml"),
        parent: ("WEAKQ", "IvWevk_WevId_WevNr"),
        child: ("WEAPQ", "IvWevp_WevId_WevNr"),
        package_type: None,
    },
    UblProfile {
        name: "reception_kret",
        types: &["KRETKQ", "KRETPQ"],
        template: include_str!("../templates/reception_kret.xml"),
        parent: ("KRETKQ", "IvKretk_KretId_KretNr"),
        child: ("KRETPQ", "IvKretp_KretId_KretNr"),
        package_type: None,
    },
    UblProfile {
        name: "picking",
        types: &["AUSKQ", "WATEKQ", "WATEPQ"],
        template: include_str!("../templates/picking.xml"),
        parent: ("AUSKQ", "IvAusk_AusId_AusNr"),
        child: ("WATEPQ", "IvTep_AusId_AusNr"),
        package_type: Some("WATEKQ"),
    },
];

/// Find the profile whose type combination matches the observed set
/// exactly (case-insensitive, order-free).
pub fn match_profile<S: AsRef<str>>(types: &[S]) -> Option<&'static UblProfile> {
    let mut present: Vec<String> = types
        .iter()
        .map(|t| t.as_ref().to_ascii_uppercase())
        .collect();
    present.sort_unstable();
    present.dedup();
    UBL_PROFILES.iter().find(|profile| {
        profile.types.len() == present.len()
            && profile.types.iter().zip(&present).all(|(a, b)| a == b)
    })
}

/// Host-side telegram types the transcoder accepts as input. Exactly
/// the types with a registered conversion below.
pub const TRANSCODE_INPUT_TYPES: &[&str] =
    &["AUSK", "AUSP", "KRETK", "KRETP", "WEAK", "WEAP"];

const TRANSCODE_OUTPUTS: &[(&str, &[&str])] = &[
    ("AUSK", &["AUSKQ", "WATEKQ"]),
    ("AUSP", &["WATEPQ"]),
    ("KRETK", &["KRETKQ"]),
    ("KRETP", &["KRETPQ"]),
    ("WEAK", &["WEAKQ"]),
    ("WEAP", &["WEAPQ"]),
];

/// Warehouse confirmations simulated for one host-side telegram type.
pub fn transcode_outputs(telegram_type: &str) -> Option<&'static [&'static str]> {
    TRANSCODE_OUTPUTS
        .iter()
        .find(|(t, _)| *t == telegram_type)
        .map(|&(_, outs)| outs)
}

/// Fields whose serialized value is published to the parent-id side
/// table after a line of the given type is encoded.
const PARENT_KEY_FIELDS: &[(&str, &[&str])] = &[("WATEKQ", &["IvTek_TeId"])];

/// Side-table fields published by a telegram type.
pub fn parent_key_fields(telegram_type: &str) -> &'static [&'static str] {
    PARENT_KEY_FIELDS
        .iter()
        .find(|(t, _)| *t == telegram_type)
        .map_or(&[], |&(_, fields)| fields)
}

/// Foreign-key fields that consume a published parent id:
/// `(telegram type, field, side-table key)`.
const CHILD_KEY_FIELDS: &[(&str, &str, &str)] =
    &[("WATEPQ", "IvTep_TeId", "IvTek_TeId")];

/// Side-table key a foreign-key field reads its value from.
pub fn child_parent_source(telegram_type: &str, field: &str) -> Option<&'static str> {
    CHILD_KEY_FIELDS
        .iter()
        .find(|(t, f, _)| *t == telegram_type && *f == field)
        .map(|&(_, _, source)| source)
}

/// Dotted path of the repeated document element a line-level telegram
/// type iterates when authoring from a UBL tree.
const LINE_LOOP_PATHS: &[(&str, &str)] = &[
    ("WEAP", "DespatchAdvice.cac:DespatchLine"),
    ("AUSP", "DespatchAdvice.cac:DespatchLine"),
    ("KRETP", "DespatchAdvice.cac:DespatchLine"),
];

/// Loop path for a telegram type, if it is line-level.
pub fn line_loop_path(telegram_type: &str) -> Option<&'static str> {
    LINE_LOOP_PATHS
        .iter()
        .find(|(t, _)| *t == telegram_type)
        .map(|&(_, path)| path)
}
