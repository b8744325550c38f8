use crate::base;

pub fn charset_from_config(config: &base::Config) -> base::Charset {
    let mut charset = base::Charset::default();
    if config.use_unicode_symbols {
        charset = charset.with_unicode()
    }
    if config.use_colored_output {
        charset = charset.with_color()
    }
    charset
}

/// Returns the selected event, failing if nothing is selected or the selected
/// event no longer exists.
pub fn selected_event<'s>(
    store: &'s base::Store,
    view: &base::ViewState,
) -> anyhow::Result<&'s base::Event> {
    match view.selected(store) {
        Some(event) => Ok(event),
        None => anyhow::bail!("no event selected"),
    }
}

/// Returns the records of `event` that pass the persisted filter, in store
/// order.
pub fn filtered_records<'s>(
    store: &'s base::Store,
    view: &base::ViewState,
    event: &base::Event,
) -> Vec<&'s base::GiftRecord> {
    view.filter.apply(store.list_records(event.id()))
}

/// Width that printed lines are clipped to. Unbounded in tests, so that
/// output does not depend on the terminal running them.
pub fn max_width() -> Option<usize> {
    if cfg!(test) {
        return None;
    }
    terminal_size::terminal_size().map(|(w, _)| usize::from(w.0))
}

pub fn gift_list(config: &base::Config, records: Vec<base::GiftRecord>) -> base::listprinter::Config {
    base::listprinter::Config {
        charset: charset_from_config(config),
        records,
        max_width: max_width(),
        line_postprocessor: None,
    }
}

/// Returns a line postprocessor which appends ` <- [{tag}]` to the line of the
/// record with the given id.
#[allow(clippy::type_complexity)]
pub fn tag_record(
    id: base::GiftId,
    tag: &'static str,
    color: colored::Color,
) -> Box<dyn Fn(&base::listprinter::Config, &base::GiftRecord, String) -> String> {
    Box::new(
        move |config: &base::listprinter::Config, r: &base::GiftRecord, mut line: String| -> String {
            if r.id() != id {
                return line;
            }
            let mut msg = format!(" <- [{}]", tag);
            if config.charset.color {
                msg = colored::Colorize::color(msg.as_str(), color).to_string();
            }
            line.push_str(&msg);
            line
        },
    )
}

/// Parses a choice given on the command line, where 'none' stands for no
/// value.
pub fn parse_clearable<T>(field: &str, s: &str) -> anyhow::Result<Option<T>>
where
    T: std::str::FromStr + strum::VariantNames,
{
    let s = s.trim();
    if s.eq_ignore_ascii_case(base::validate::CLEAR) {
        return Ok(None);
    }
    match s.parse::<T>() {
        Ok(x) => Ok(Some(x)),
        Err(_) => anyhow::bail!(
            "{} must be one of {}, {}",
            field,
            T::VARIANTS.join(", "),
            base::validate::CLEAR
        ),
    }
}
