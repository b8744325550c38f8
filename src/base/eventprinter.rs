use crate::base;

/// Listing of events with their record totals. The selected event is marked
/// with the charset's pointer.
#[derive(Debug, PartialEq, Eq)]
pub struct Config {
    pub charset: base::Charset,
    pub selected: Option<base::EventId>,
    pub events: Vec<(base::Event, base::Summary)>,
}

impl std::fmt::Display for Config {
    /// Writes a terminating newline.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let id_width = self
            .events
            .iter()
            .map(|(e, _)| base::util::count_digits(e.id()))
            .max()
            .unwrap_or_default();
        for (event, summary) in self.events.iter() {
            let is_selected = self.selected == Some(event.id());
            let marker = if is_selected { self.charset.pointer } else { ' ' };
            let dash_count =
                id_width - base::util::count_digits(event.id()) + base::util::MIN_DASHES_COUNT;
            let dashes = std::iter::repeat_n(self.charset.dash, dash_count).collect::<String>();
            let mut line = format!(
                "{} {} {} {} {} at {}, hosted by {} ({} gifts, {})",
                marker,
                event.id(),
                dashes,
                event.date(),
                event.kind(),
                event.location(),
                event.host(),
                summary.total_count,
                summary.total_amount,
            );
            if is_selected && self.charset.color {
                line = colored::Colorize::bold(line.as_str()).to_string();
            }
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}
