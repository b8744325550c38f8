use crate::base;
use crate::cli;

/// View gift records of the selected event
///
/// Records are filtered and ordered as set by 'filter' and 'sort'.
#[derive(clap::Parser)]
pub struct View {}

impl View {
    pub fn run(
        &self,
        store: &base::Store,
        view: &base::ViewState,
        config: &base::Config,
    ) -> anyhow::Result<cli::Output> {
        let event = cli::util::selected_event(store, view)?;
        let mut records = cli::util::filtered_records(store, view, event);
        if let Some(sort) = view.sort {
            records = sort.sorted(&records);
        }
        let records = records.into_iter().cloned().collect();
        Ok(cli::Output::Gifts(cli::util::gift_list(config, records)))
    }
}
