/// How a gift was paid.
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
#[serde(rename_all = "kebab-case")]
#[strum(ascii_case_insensitive, serialize_all = "kebab-case")]
pub enum Method {
    Cash,
    Transfer,
    Card,
    PayApp,
    Other,
}

impl Method {
    pub fn label(self) -> &'static str {
        match self {
            Method::Cash => "현금",
            Method::Transfer => "계좌이체",
            Method::Card => "카드",
            Method::PayApp => "간편결제",
            Method::Other => "기타",
        }
    }
}
