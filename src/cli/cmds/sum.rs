use crate::base;
use crate::cli;

/// View totals of the selected event's gift records
///
/// Totals cover the records passing the current filters.
#[derive(clap::Parser)]
pub struct Sum {}

impl Sum {
    pub fn run(
        &self,
        store: &base::Store,
        view: &base::ViewState,
        config: &base::Config,
    ) -> anyhow::Result<cli::Output> {
        let event = cli::util::selected_event(store, view)?;
        let records = cli::util::filtered_records(store, view, event);
        Ok(cli::Output::Summary(base::summaryprinter::Config {
            charset: cli::util::charset_from_config(config),
            summary: base::Summary::of(records),
        }))
    }
}
