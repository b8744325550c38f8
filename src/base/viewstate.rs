use crate::base;

/// Presentation state kept between invocations: which event is selected and
/// how its records are filtered and ordered for display.
#[derive(Debug, Clone, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ViewState {
    pub selected_event: Option<base::EventId>,
    pub filter: base::Filter,
    pub sort: Option<base::Sort>,
}

impl ViewState {
    /// Returns the selected event, or `None` if nothing is selected or the
    /// selected event no longer exists.
    pub fn selected<'s>(&self, store: &'s base::Store) -> Option<&'s base::Event> {
        self.selected_event.and_then(|id| store.event(id))
    }
}

impl std::fmt::Display for ViewState {
    /// Writes a terminating newline.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = serde_json::to_string_pretty(self).map_err(|_| std::fmt::Error)?;
        writeln!(f, "{}", s)
    }
}

impl std::str::FromStr for ViewState {
    type Err = serde_json::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        serde_json::from_str(s)
    }
}

impl TryFrom<&str> for ViewState {
    type Error = <Self as std::str::FromStr>::Err;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse::<Self>()
    }
}
