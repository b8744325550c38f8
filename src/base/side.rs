/// Which party's guest list a gift record belongs to.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    serde::Serialize,
    serde::Deserialize,
    strum::EnumString,
    strum::Display,
    strum::AsRefStr,
    strum::VariantNames,
)]
#[serde(rename_all = "lowercase")]
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
pub enum Side {
    Bride,
    Groom,
}

impl Side {
    pub fn label(self) -> &'static str {
        match self {
            Side::Bride => "신부측",
            Side::Groom => "신랑측",
        }
    }
}
