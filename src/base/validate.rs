//! Conversion of raw form input into store drafts and patches.
//!
//! Every offending field yields exactly one message, and all of them are
//! reported together so the user can correct the input in one pass.

use crate::base;

/// Input that clears an optional field when editing.
pub const CLEAR: &str = "none";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{field} {message}")]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationErrors(pub Vec<FieldError>);

impl std::error::Error for ValidationErrors {}

impl std::fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let msgs = self.0.iter().map(FieldError::to_string).collect::<Vec<_>>();
        f.write_str(&msgs.join("; "))
    }
}

/// Collects field errors while the fields of a form are checked one by one.
#[derive(Default)]
struct Checker(Vec<FieldError>);

impl Checker {
    fn check<T>(&mut self, field: &'static str, res: Result<T, String>) -> Option<T> {
        match res {
            Ok(x) => Some(x),
            Err(message) => {
                self.0.push(FieldError { field, message });
                None
            }
        }
    }

    fn finish<T>(self, value: Option<T>) -> Result<T, ValidationErrors> {
        match value {
            Some(x) if self.0.is_empty() => Ok(x),
            _ => Err(ValidationErrors(self.0)),
        }
    }
}

fn required(s: &str) -> Result<String, String> {
    match s.trim() {
        "" => Err("is required".to_string()),
        s => Ok(s.to_string()),
    }
}

fn amount(s: &str) -> Result<base::Won, String> {
    if s.trim().is_empty() {
        return Err("is required".to_string());
    }
    let won = s
        .parse::<base::Won>()
        .map_err(|_| "must be a whole number".to_string())?;
    if won < base::Won::MIN_GIFT {
        return Err(format!("must be at least {}", base::Won::MIN_GIFT));
    }
    if won > base::Won::MAX_GIFT {
        return Err(format!("must be at most {}", base::Won::MAX_GIFT));
    }
    Ok(won)
}

fn companions(s: Option<&str>) -> Result<u32, String> {
    match s.map(str::trim) {
        None | Some("") => Ok(base::gift::DEFAULT_COMPANIONS),
        Some(s) => s
            .parse::<u32>()
            .map_err(|_| "must be a whole number of 0 or more".to_string()),
    }
}

fn one_of<T>(s: &str) -> Result<T, String>
where
    T: std::str::FromStr + strum::VariantNames,
{
    s.parse::<T>()
        .map_err(|_| format!("must be one of {}", T::VARIANTS.join(", ")))
}

fn choice<T>(s: Option<&str>) -> Result<Option<T>, String>
where
    T: std::str::FromStr + strum::VariantNames,
{
    match s.map(str::trim) {
        None | Some("") => Ok(None),
        Some(s) => one_of(s).map(Some),
    }
}

/// Like [`choice`], but distinguishes "not given" (`None`) from "clear the
/// field" (`Some(None)`).
fn clearable_choice<T>(s: Option<&str>) -> Result<Option<Option<T>>, String>
where
    T: std::str::FromStr + strum::VariantNames,
{
    match s.map(str::trim) {
        None | Some("") => Ok(None),
        Some(s) if s.eq_ignore_ascii_case(CLEAR) => Ok(Some(None)),
        Some(s) => choice::<T>(Some(s)).map(Some),
    }
}

/// Raw event creation input.
#[derive(Debug, Clone, Copy, Default)]
pub struct EventForm<'a> {
    pub kind: &'a str,
    pub date: &'a str,
    pub location: &'a str,
    pub host: &'a str,
}

impl EventForm<'_> {
    pub fn validate(&self) -> Result<base::EventDraft, ValidationErrors> {
        let mut c = Checker::default();
        let kind = c.check(
            "type",
            required(self.kind).and_then(|s| one_of::<base::EventKind>(&s)),
        );
        let date = c.check(
            "date",
            required(self.date).and_then(|s| {
                s.parse::<base::Date>()
                    .map_err(|_| "must be a valid date formatted as yyyy-mm-dd".to_string())
            }),
        );
        let location = c.check("location", required(self.location));
        let host = c.check("host", required(self.host));
        let draft = match (kind, date, location, host) {
            (Some(kind), Some(date), Some(location), Some(host)) => Some(base::EventDraft {
                kind,
                date,
                location,
                host,
            }),
            _ => None,
        };
        c.finish(draft)
    }
}

/// Raw gift record input. Optional fields that are `None` or blank take their
/// defaults.
#[derive(Debug, Clone, Copy, Default)]
pub struct GiftForm<'a> {
    pub name: &'a str,
    pub amount: &'a str,
    pub companions: Option<&'a str>,
    pub relation: Option<&'a str>,
    pub method: Option<&'a str>,
    pub side: Option<&'a str>,
    pub memo: Option<&'a str>,
}

impl GiftForm<'_> {
    pub fn validate(&self, event_id: base::EventId) -> Result<base::GiftDraft, ValidationErrors> {
        let mut c = Checker::default();
        let name = c.check("name", required(self.name));
        let amount = c.check("amount", amount(self.amount));
        let companions = c.check("companions", companions(self.companions));
        let relation = c.check("relation", choice::<base::Relation>(self.relation));
        let method = c.check("method", choice::<base::Method>(self.method));
        let side = c.check("side", choice::<base::Side>(self.side));
        let draft = match (name, amount, companions, relation, method, side) {
            (Some(name), Some(amount), Some(companions), Some(relation), Some(method), Some(side)) => {
                Some(base::GiftDraft {
                    event_id,
                    side,
                    name,
                    amount,
                    relation,
                    companions,
                    method,
                    memo: self.memo.map(str::trim).unwrap_or_default().to_string(),
                })
            }
            _ => None,
        };
        c.finish(draft)
    }
}

/// Raw gift record edit input. `None` leaves a field unchanged; [`CLEAR`]
/// clears an optional field.
#[derive(Debug, Clone, Copy, Default)]
pub struct PatchForm<'a> {
    pub name: Option<&'a str>,
    pub amount: Option<&'a str>,
    pub companions: Option<&'a str>,
    pub relation: Option<&'a str>,
    pub method: Option<&'a str>,
    pub side: Option<&'a str>,
    pub memo: Option<&'a str>,
}

impl PatchForm<'_> {
    pub fn validate(&self) -> Result<base::GiftPatch, ValidationErrors> {
        let mut c = Checker::default();
        let patch = base::GiftPatch {
            name: self.name.and_then(|s| c.check("name", required(s))),
            amount: self.amount.and_then(|s| c.check("amount", amount(s))),
            companions: match self.companions {
                Some(s) if !s.trim().is_empty() => c.check("companions", companions(Some(s))),
                _ => None,
            },
            relation: c
                .check("relation", clearable_choice::<base::Relation>(self.relation))
                .flatten(),
            method: c
                .check("method", clearable_choice::<base::Method>(self.method))
                .flatten(),
            side: c
                .check("side", clearable_choice::<base::Side>(self.side))
                .flatten(),
            memo: self.memo.map(|s| match s.trim() {
                s if s.eq_ignore_ascii_case(CLEAR) => String::new(),
                s => s.to_string(),
            }),
        };
        c.finish(Some(patch))
    }
}
