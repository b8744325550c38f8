use crate::base;

pub struct Summaryprinter<'a> {
    charset: &'a base::Charset,
    /// Groups of label-value rows, separated by a rule when printed.
    sections: Vec<Vec<(String, String)>>,
    alignment_charlen: usize,
}

#[derive(Debug, PartialEq, Eq)]
pub struct Config {
    pub charset: base::Charset,
    pub summary: base::Summary,
}

impl Config {
    pub fn to_summaryprinter(&'_ self) -> Summaryprinter<'_> {
        let s = &self.summary;
        let mut sections = vec![vec![
            ("Total".to_string(), s.total_amount.to_string()),
            ("Guests".to_string(), s.total_count.to_string()),
            ("Companions".to_string(), s.total_companions.to_string()),
            ("People".to_string(), s.total_people.to_string()),
        ]];
        let by_relation = s
            .by_relation
            .iter()
            .map(|(relation, amount)| (relation.to_string(), amount.to_string()))
            .collect::<Vec<_>>();
        let by_method = s
            .by_method
            .iter()
            .map(|(method, amount)| (method.to_string(), amount.to_string()))
            .collect::<Vec<_>>();
        sections.extend([by_relation, by_method].into_iter().filter(|x| !x.is_empty()));

        let alignment_charlen = sections
            .iter()
            .flatten()
            .map(|(label, value)| {
                label.len()
                    + base::util::BOUNDING_SPACES_COUNT
                    + base::util::MIN_DASHES_COUNT
                    + value.len()
            })
            .max()
            .unwrap_or_default();

        Summaryprinter {
            charset: &self.charset,
            sections,
            alignment_charlen,
        }
    }
}

impl Summaryprinter<'_> {
    fn draw(&self, w: &mut impl std::fmt::Write, (label, value): &(String, String)) -> std::fmt::Result {
        let dash_count =
            self.alignment_charlen - label.len() - base::util::BOUNDING_SPACES_COUNT - value.len();
        w.write_str(label)?;
        w.write_char(' ')?;
        for _ in 0..dash_count {
            w.write_char(self.charset.dash)?;
        }
        w.write_char(' ')?;
        writeln!(w, "{}", value)
    }
}

impl std::fmt::Display for Summaryprinter<'_> {
    /// Writes a terminating newline.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use std::fmt::Write;
        for (i, section) in self.sections.iter().enumerate() {
            if i > 0 {
                for _ in 0..self.alignment_charlen {
                    f.write_char(self.charset.rule)?;
                }
                f.write_char('\n')?;
            }
            section.iter().try_for_each(|row| self.draw(f, row))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use indoc::indoc;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(
        "",
        indoc!("
            Total ------- 0
            Guests ------ 0
            Companions -- 0
            People ------ 0
        ")
    )]
    #[case(
        r#"
            {"id":1,"eventId":1,"name":"a","amount":50000,"companions":1,"createdAt":"2015-03-30T12:00:00Z"}
            {"id":2,"eventId":1,"name":"b","amount":100000,"companions":2,"createdAt":"2015-03-30T12:00:00Z"}
            {"id":3,"eventId":1,"name":"c","amount":30000,"companions":1,"createdAt":"2015-03-30T12:00:00Z"}
        "#,
        indoc!("
            Total -- 180,000
            Guests ------- 3
            Companions --- 4
            People ------- 4
        ")
    )]
    #[case(
        r#"
            {"id":1,"eventId":1,"name":"a","amount":50000,"relation":"friend","paymentMethod":"cash","createdAt":"2015-03-30T12:00:00Z"}
            {"id":2,"eventId":1,"name":"b","amount":1000000,"relation":"family","paymentMethod":"pay-app","createdAt":"2015-03-30T12:00:00Z"}
        "#,
        indoc!("
            Total ---- 1,050,000
            Guests ----------- 2
            Companions ------- 2
            People ----------- 2
            ====================
            friend ------ 50,000
            family --- 1,000,000
            ====================
            cash -------- 50,000
            pay-app -- 1,000,000
        ")
    )]
    fn test_to_string(#[case] gl: base::Giftlist, #[case] want: &str) {
        let config = Config {
            charset: base::Charset::default(),
            summary: base::Summary::of(gl.iter()),
        };
        assert_eq!(config.to_summaryprinter().to_string(), want)
    }
}
