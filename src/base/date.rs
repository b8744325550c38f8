/// Calendar date without time or timezone information, written as
/// `yyyy-mm-dd`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize,
)]
#[serde(try_from = "&str", into = "String")]
pub struct Date(time::Date);

impl std::fmt::Display for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let s = self
            .0
            .format(time::macros::format_description!("[year]-[month]-[day]"))
            .map_err(|_| std::fmt::Error)?;
        f.write_str(&s)
    }
}

impl From<Date> for String {
    fn from(value: Date) -> Self {
        value.to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("input is empty")]
    Empty,
    #[error("expected a date formatted as yyyy-mm-dd")]
    BadFormat(#[from] time::error::Parse),
}

impl std::str::FromStr for Date {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ParseError::Empty);
        }
        let inner = time::Date::parse(s, time::macros::format_description!("[year]-[month]-[day]"))?;
        Ok(Self(inner))
    }
}

impl TryFrom<&str> for Date {
    type Error = ParseError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse::<Self>()
    }
}
