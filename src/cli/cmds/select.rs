use anyhow::Context;

use crate::base;
use crate::cli;

/// Select the event that other commands work on
#[derive(clap::Parser)]
pub struct Select {
    /// Event id as shown by 'events'
    id: base::EventId,
}

impl Select {
    pub fn run(
        self,
        store: &base::Store,
        mut view: base::ViewState,
        fs: &base::Fs,
    ) -> anyhow::Result<cli::Output> {
        let Some(event) = store.event(self.id) else {
            anyhow::bail!("nonexistent event {}", self.id);
        };
        if view.selected_event != Some(self.id) {
            // Filters describe the records of one event.
            view.filter = base::Filter::default();
        }
        view.selected_event = Some(self.id);
        fs.write(&view).with_context(|| {
            format!(
                "failed to write '{}'",
                fs.path::<base::ViewState>().display()
            )
        })?;
        Ok(cli::Output::Str(format!(
            "Selected event {}: {} {} at {}",
            event.id(),
            event.date(),
            event.kind(),
            event.location()
        )))
    }
}
