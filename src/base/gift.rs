use crate::base;

pub type GiftId = u64;

/// Companion count assumed for records that carry none.
pub const DEFAULT_COMPANIONS: u32 = 1;

/// One attendee's contribution to an event.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GiftRecord {
    id: GiftId,
    event_id: base::EventId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    side: Option<base::Side>,
    name: String,
    amount: base::Won,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    relation: Option<base::Relation>,
    // Records written before companions were tracked lack this field.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    companions: Option<u32>,
    #[serde(
        rename = "paymentMethod",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    method: Option<base::Method>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    memo: String,
    created_at: base::Timestamp,
}

/// Validated fields of a gift record which has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GiftDraft {
    pub event_id: base::EventId,
    pub side: Option<base::Side>,
    pub name: String,
    pub amount: base::Won,
    pub relation: Option<base::Relation>,
    pub companions: u32,
    pub method: Option<base::Method>,
    pub memo: String,
}

/// Partial update of a stored gift record. `None` leaves a field untouched;
/// `Some(None)` clears an optional field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GiftPatch {
    pub side: Option<Option<base::Side>>,
    pub name: Option<String>,
    pub amount: Option<base::Won>,
    pub relation: Option<Option<base::Relation>>,
    pub companions: Option<u32>,
    pub method: Option<Option<base::Method>>,
    pub memo: Option<String>,
}

impl GiftPatch {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

impl GiftRecord {
    pub fn new(id: GiftId, draft: GiftDraft, created_at: base::Timestamp) -> Self {
        Self {
            id,
            event_id: draft.event_id,
            side: draft.side,
            name: draft.name,
            amount: draft.amount,
            relation: draft.relation,
            companions: Some(draft.companions),
            method: draft.method,
            memo: draft.memo,
            created_at,
        }
    }

    pub fn id(&self) -> GiftId {
        self.id
    }

    pub fn event_id(&self) -> base::EventId {
        self.event_id
    }

    pub fn side(&self) -> Option<base::Side> {
        self.side
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn amount(&self) -> base::Won {
        self.amount
    }

    pub fn relation(&self) -> Option<base::Relation> {
        self.relation
    }

    /// Number of people accompanying the guest, defaulting to
    /// [`DEFAULT_COMPANIONS`] when the record does not say.
    pub fn companions(&self) -> u32 {
        self.companions.unwrap_or(DEFAULT_COMPANIONS)
    }

    pub fn method(&self) -> Option<base::Method> {
        self.method
    }

    pub fn memo(&self) -> &str {
        &self.memo
    }

    pub fn created_at(&self) -> base::Timestamp {
        self.created_at
    }

    pub fn apply(&mut self, patch: GiftPatch) {
        if let Some(side) = patch.side {
            self.side = side;
        }
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(amount) = patch.amount {
            self.amount = amount;
        }
        if let Some(relation) = patch.relation {
            self.relation = relation;
        }
        if let Some(companions) = patch.companions {
            self.companions = Some(companions);
        }
        if let Some(method) = patch.method {
            self.method = method;
        }
        if let Some(memo) = patch.memo {
            self.memo = memo;
        }
    }
}

impl base::jsonl::Keyed for GiftRecord {
    fn key(&self) -> u64 {
        self.id
    }
}

impl std::fmt::Display for GiftRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = serde_json::to_string(self).map_err(|_| std::fmt::Error)?;
        f.write_str(&s)
    }
}

impl std::str::FromStr for GiftRecord {
    type Err = serde_json::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        serde_json::from_str(s)
    }
}

impl TryFrom<&str> for GiftRecord {
    type Error = <Self as std::str::FromStr>::Err;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse::<Self>()
    }
}
