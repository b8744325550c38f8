/// Relationship between the user and a guest.
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
pub enum Relation {
    Friend,
    Company,
    Family,
    Acquaintance,
    Neighbor,
    Other,
}

impl Relation {
    pub fn label(self) -> &'static str {
        match self {
            Relation::Friend => "친구",
            Relation::Company => "회사",
            Relation::Family => "가족",
            Relation::Acquaintance => "지인",
            Relation::Neighbor => "이웃",
            Relation::Other => "기타",
        }
    }
}
