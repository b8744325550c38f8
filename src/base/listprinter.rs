use crate::base;

pub struct Config {
    pub charset: base::Charset,
    pub records: Vec<base::GiftRecord>,
    /// Lines wider than this many terminal columns are clipped before
    /// postprocessing.
    pub max_width: Option<usize>,
    /// Additional transformations to apply to a record's line. If not `None`,
    /// this is called once for each record in `records`.
    #[allow(clippy::type_complexity)]
    pub line_postprocessor: Option<
        Box<
            dyn Fn(
                &Self,
                &base::GiftRecord,
                // Record's line, in the format
                //  {id} -- {amount} {name} x{companions} [{tags}]: {memo}
                // where the tags and memo parts are omitted when empty.
                String,
            ) -> String,
        >,
    >,
}

impl Eq for Config {}
impl PartialEq for Config {
    fn eq(&self, other: &Self) -> bool {
        self.charset == other.charset
            && self.records == other.records
            && self.max_width == other.max_width
            // Functions cannot be compared, only their presence.
            && self.line_postprocessor.is_some() == other.line_postprocessor.is_some()
    }
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("charset", &self.charset)
            .field("records", &self.records)
            .field("max_width", &self.max_width)
            .field(
                "line_postprocessor",
                &self.line_postprocessor.as_ref().map(|b| b as *const _),
            )
            .finish()
    }
}

impl Config {
    fn alignment_charlen(&self) -> usize {
        self.records
            .iter()
            .map(|r| {
                base::util::count_digits(r.id())
                    + base::util::BOUNDING_SPACES_COUNT
                    + base::util::MIN_DASHES_COUNT
                    + r.amount().charlen()
            })
            .max()
            .unwrap_or_default()
    }

    fn line(&self, r: &base::GiftRecord, alignment_charlen: usize) -> String {
        let dash_count = alignment_charlen
            - base::util::count_digits(r.id())
            - base::util::BOUNDING_SPACES_COUNT
            - r.amount().charlen();
        let mut s = r.id().to_string();
        s.push(' ');
        for _ in 0..dash_count {
            s.push(self.charset.dash);
        }
        s.push(' ');
        s.push_str(&r.amount().to_string());
        s.push(' ');
        s.push_str(r.name());
        s.push_str(&format!(" x{}", r.companions()));

        let tags = [
            r.relation().map(|x| x.to_string()),
            r.method().map(|x| x.to_string()),
            r.side().map(|x| x.to_string()),
        ]
        .into_iter()
        .flatten()
        .collect::<Vec<_>>();
        if !tags.is_empty() {
            s.push_str(&format!(" [{}]", tags.join(", ")));
        }
        if !r.memo().is_empty() {
            s.push_str(": ");
            s.push_str(r.memo());
        }

        if let Some(width) = self.max_width {
            s = base::util::clip(&s, width, self.charset.ellipsis);
        }
        match self.line_postprocessor {
            Some(ref lpp) => lpp(self, r, s),
            None => s,
        }
    }
}

impl std::fmt::Display for Config {
    /// Writes a terminating newline.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let alignment_charlen = self.alignment_charlen();
        for r in self.records.iter() {
            writeln!(f, "{}", self.line(r, alignment_charlen))?;
        }
        Ok(())
    }
}
