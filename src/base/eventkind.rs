/// Occasion an event is held for.
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
    strum::IntoStaticStr,
    strum::VariantNames,
)]
#[serde(rename_all = "kebab-case")]
#[strum(ascii_case_insensitive, serialize_all = "kebab-case")]
pub enum EventKind {
    Wedding,
    Condolence,
    FirstBirthday,
    Birthday,
    Other,
}

impl EventKind {
    /// Label used in exported spreadsheets.
    pub fn label(self) -> &'static str {
        match self {
            EventKind::Wedding => "결혼식",
            EventKind::Condolence => "조의",
            EventKind::FirstBirthday => "돌잔치",
            EventKind::Birthday => "생일",
            EventKind::Other => "기타",
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use strum::VariantNames;

    use super::*;

    #[rstest]
    #[case("wedding", EventKind::Wedding)]
    #[case("Condolence", EventKind::Condolence)]
    #[case("first-birthday", EventKind::FirstBirthday)]
    #[case("BIRTHDAY", EventKind::Birthday)]
    #[case("other", EventKind::Other)]
    fn test_from_str(#[case] s: &str, #[case] want: EventKind) {
        assert_eq!(s.parse::<EventKind>().unwrap(), want)
    }

    #[test]
    fn test_variant_names_match_serde() {
        for name in EventKind::VARIANTS {
            let kind = name.parse::<EventKind>().unwrap();
            assert_eq!(serde_json::to_string(&kind).unwrap(), format!("\"{}\"", name));
        }
    }
}
