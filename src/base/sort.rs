use crate::base;

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    serde::Serialize,
    serde::Deserialize,
    strum::EnumString,
    strum::Display,
    strum::VariantNames,
)]
#[serde(rename_all = "lowercase")]
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
pub enum SortKey {
    Name,
    Amount,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize, strum::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum SortOrder {
    #[strum(serialize = "ascending")]
    Asc,
    #[strum(serialize = "descending")]
    Desc,
}

/// Display ordering of a filtered view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Sort {
    pub key: SortKey,
    pub order: SortOrder,
}

impl Sort {
    /// Returns a sorted copy of `view`. Records comparing equal keep their
    /// relative order.
    pub fn sorted<'r>(&self, view: &[&'r base::GiftRecord]) -> Vec<&'r base::GiftRecord> {
        let mut out = view.to_vec();
        out.sort_by(|a, b| {
            let ord = match self.key {
                SortKey::Name => a.name().cmp(b.name()),
                SortKey::Amount => a.amount().cmp(&b.amount()),
            };
            match self.order {
                SortOrder::Asc => ord,
                SortOrder::Desc => ord.reverse(),
            }
        });
        out
    }
}

impl std::fmt::Display for Sort {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.key, self.order)
    }
}
