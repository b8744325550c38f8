use anyhow::Context;

use crate::base;
use crate::cli;

/// Create an event and select it
#[derive(clap::Parser)]
pub struct New {
    /// Event type: wedding, condolence, first-birthday, birthday or other
    #[arg(value_name = "TYPE")]
    kind: String,

    /// Event date (yyyy-mm-dd)
    date: String,

    location: String,

    host: String,
}

impl New {
    pub fn run(
        self,
        store: &mut base::Store,
        mut view: base::ViewState,
        fs: &base::Fs,
    ) -> anyhow::Result<cli::Output> {
        let draft = base::validate::EventForm {
            kind: &self.kind,
            date: &self.date,
            location: &self.location,
            host: &self.host,
        }
        .validate()?;
        let id = store.create_event(draft)?;

        view.selected_event = Some(id);
        view.filter = base::Filter::default();
        fs.write(&view).with_context(|| {
            format!(
                "failed to write '{}'",
                fs.path::<base::ViewState>().display()
            )
        })?;

        Ok(cli::Output::Str(format!("Created and selected event {}", id)))
    }
}
