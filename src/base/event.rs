use crate::base;

pub type EventId = u64;

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    id: EventId,
    kind: base::EventKind,
    date: base::Date,
    location: String,
    host: String,
    created_at: base::Timestamp,
}

/// Validated fields of an event which has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventDraft {
    pub kind: base::EventKind,
    pub date: base::Date,
    pub location: String,
    pub host: String,
}

impl Event {
    pub fn new(id: EventId, draft: EventDraft, created_at: base::Timestamp) -> Self {
        Self {
            id,
            kind: draft.kind,
            date: draft.date,
            location: draft.location,
            host: draft.host,
            created_at,
        }
    }

    pub fn id(&self) -> EventId {
        self.id
    }

    pub fn kind(&self) -> base::EventKind {
        self.kind
    }

    pub fn date(&self) -> base::Date {
        self.date
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn created_at(&self) -> base::Timestamp {
        self.created_at
    }
}

impl base::jsonl::Keyed for Event {
    fn key(&self) -> u64 {
        self.id
    }
}

impl std::fmt::Display for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = serde_json::to_string(self).map_err(|_| std::fmt::Error)?;
        f.write_str(&s)
    }
}

impl std::str::FromStr for Event {
    type Err = serde_json::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        serde_json::from_str(s)
    }
}
