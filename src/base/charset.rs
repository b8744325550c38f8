#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Charset {
    pub dash: char,
    pub rule: char,
    pub ellipsis: char,
    /// Marks the selected event.
    pub pointer: char,
    pub color: bool,
}

impl Default for Charset {
    /// Only ASCII characters. No color.
    fn default() -> Self {
        Self {
            dash: '-',
            rule: '=',
            ellipsis: '~',
            pointer: '*',
            color: false,
        }
    }
}

impl Charset {
    pub fn with_unicode(self) -> Self {
        Self {
            dash: '\u{2500}',
            rule: '\u{2550}',
            ellipsis: '\u{2026}',
            pointer: '\u{25b6}',
            ..self
        }
    }

    pub fn with_color(self) -> Self {
        Self {
            color: true,
            ..self
        }
    }
}
