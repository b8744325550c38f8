/// Objects identified by an integer key that is unique within their list.
pub trait Keyed {
    fn key(&self) -> u64;
}

/// Ordered collection persisted as one JSON object per line. Order is
/// insertion order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Jsonl<T>(Vec<T>);

impl<T> Default for Jsonl<T> {
    fn default() -> Self {
        Self(Vec::new())
    }
}

impl<T> Jsonl<T>
where
    T: Keyed,
{
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.0.iter()
    }

    /// Returns the key the next pushed object should carry. Keys start at 1
    /// and are never reused while larger keys remain.
    pub fn next_key(&self) -> u64 {
        self.0.iter().map(Keyed::key).max().unwrap_or_default() + 1
    }

    pub fn push(&mut self, obj: T) {
        self.0.push(obj);
    }

    pub fn get(&self, key: u64) -> Option<&T> {
        self.0.iter().find(|x| x.key() == key)
    }

    pub fn get_mut(&mut self, key: u64) -> Option<&mut T> {
        self.0.iter_mut().find(|x| x.key() == key)
    }

    /// Removes and returns the object with the given key, or returns `None`
    /// and leaves the list unmodified.
    pub fn remove(&mut self, key: u64) -> Option<T> {
        let i = self.0.iter().position(|x| x.key() == key)?;
        Some(self.0.remove(i))
    }
}

impl<T> FromIterator<T> for Jsonl<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<T> std::fmt::Display for Jsonl<T>
where
    T: std::fmt::Display,
{
    /// Writes a terminating newline.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for x in self.0.iter() {
            writeln!(f, "{}", x)?;
        }
        Ok(())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("invalid entry at line {line}")]
    Entry {
        line: usize,
        source: serde_json::Error,
    },
    #[error("duplicate id {key} at line {line}")]
    DuplicateKey { line: usize, key: u64 },
}

impl<T> std::str::FromStr for Jsonl<T>
where
    T: Keyed + std::str::FromStr<Err = serde_json::Error>,
{
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut list = Self::default();
        let mut keys = std::collections::HashSet::new();
        for (i, x) in s.lines().map(str::trim).enumerate() {
            if x.is_empty() {
                continue;
            }
            let obj = x.parse::<T>().map_err(|e| ParseError::Entry {
                line: i + 1,
                source: e,
            })?;
            if !keys.insert(obj.key()) {
                return Err(ParseError::DuplicateKey {
                    line: i + 1,
                    key: obj.key(),
                });
            }
            list.push(obj);
        }
        Ok(list)
    }
}

impl<T> TryFrom<&str> for Jsonl<T>
where
    T: Keyed + std::str::FromStr<Err = serde_json::Error>,
{
    type Error = ParseError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse::<Self>()
    }
}
