use crate::base::util;

/// Whole-won monetary quantity.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    derive_more::From,
    derive_more::Into,
    derive_more::Sum,
    derive_more::Add,
    serde::Serialize,
    serde::Deserialize,
)]
pub struct Won(pub i64);

impl Won {
    /// Smallest amount a gift record may carry.
    pub const MIN_GIFT: Self = Self(1);

    /// Largest amount a gift record may carry. Sums of up to millions of
    /// such gifts stay within `i64`, and every amount up to it is exact as
    /// an `f64` spreadsheet number.
    pub const MAX_GIFT: Self = Self(1_000_000_000_000);

    /// Adds, clamping at the bounds of `i64` instead of overflowing.
    pub fn saturating_add(self, rhs: Self) -> Self {
        Self(self.0.saturating_add(rhs.0))
    }

    /// Returns `won.to_string().len()` without actually building a string.
    pub fn charlen(self) -> usize {
        let mut len = util::count_digits(self.0.unsigned_abs());
        len += (len - 1) / 3; // commas
        if self.0 < 0 {
            len += 1; // sign
        }
        len
    }
}

impl std::fmt::Display for Won {
    /// Formats with thousands separators.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let digits = self.0.unsigned_abs().to_string();
        let mut s = String::with_capacity(self.charlen());
        if self.0 < 0 {
            s.push('-');
        }
        for (i, c) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                s.push(',');
            }
            s.push(c);
        }
        f.write_str(&s)
    }
}

impl std::str::FromStr for Won {
    type Err = std::num::ParseIntError;

    /// Parses a quantity which may contain comma thousands separators and
    /// surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().replace(',', "").parse::<i64>().map(Self)
    }
}

impl TryFrom<&str> for Won {
    type Error = <Self as std::str::FromStr>::Err;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse::<Self>()
    }
}
