/// Creation time of a stored object, serialized as RFC 3339.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, serde::Serialize, serde::Deserialize)]
pub struct Timestamp(#[serde(with = "time::serde::rfc3339")] time::OffsetDateTime);

impl Timestamp {
    /// Returns the current local time, falling back to UTC when the local
    /// offset cannot be determined.
    #[cfg(not(test))]
    pub fn now() -> Self {
        let now = time::OffsetDateTime::now_local().unwrap_or_else(|_| time::OffsetDateTime::now_utc());
        Self(now)
    }

    /// Returns the current local time.
    #[cfg(test)]
    pub fn now() -> Self {
        Self(time::macros::datetime!(2015-03-30 12:00 UTC))
    }
}
