use crate::base;

/// Conjunction of the text, relation and payment method predicates applied to
/// an event's gift records.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Filter {
    /// Case-insensitive substring of the name or memo. Blank matches all.
    pub query: String,
    /// Exact relation to keep. `None` keeps every record.
    pub relation: Option<base::Relation>,
    /// Exact payment method to keep. `None` keeps every record.
    pub method: Option<base::Method>,
}

impl Filter {
    pub fn is_empty(&self) -> bool {
        self.query.trim().is_empty() && self.relation.is_none() && self.method.is_none()
    }

    pub fn matches(&self, r: &base::GiftRecord) -> bool {
        self.matches_query(r)
            && self.relation.is_none_or(|x| r.relation() == Some(x))
            && self.method.is_none_or(|x| r.method() == Some(x))
    }

    fn matches_query(&self, r: &base::GiftRecord) -> bool {
        let query = self.query.trim();
        if query.is_empty() {
            return true;
        }
        let query = query.to_lowercase();
        r.name().to_lowercase().contains(&query) || r.memo().to_lowercase().contains(&query)
    }

    /// Returns the records satisfying every predicate, in input order.
    pub fn apply<'r, I>(&self, records: I) -> Vec<&'r base::GiftRecord>
    where
        I: IntoIterator<Item = &'r base::GiftRecord>,
    {
        records.into_iter().filter(|r| self.matches(r)).collect()
    }
}

impl std::fmt::Display for Filter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_empty() {
            return f.write_str("none");
        }
        let mut parts = Vec::new();
        if !self.query.trim().is_empty() {
            parts.push(format!("query '{}'", self.query.trim()));
        }
        if let Some(relation) = self.relation {
            parts.push(format!("relation {}", relation));
        }
        if let Some(method) = self.method {
            parts.push(format!("method {}", method));
        }
        f.write_str(&parts.join(", "))
    }
}
