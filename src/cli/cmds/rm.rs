use anyhow::Context;

use crate::base;
use crate::cli;

/// Remove a gift record
#[derive(clap::Parser)]
pub struct Rm {
    /// Gift record id as shown by 'view'
    id: base::GiftId,

    /// Execute the removal instead of displaying dry run changes
    #[arg(long)]
    confirm: bool,
}

impl Rm {
    pub fn run(self, store: &mut base::Store, config: &base::Config) -> anyhow::Result<cli::Output> {
        let Some(record) = store.record(self.id).cloned() else {
            anyhow::bail!("nonexistent gift record {}", self.id);
        };
        let event_id = record.event_id();

        let mut records = if self.confirm {
            let updates = store.subscribe(event_id);
            store.delete_record(self.id)?;
            updates
                .try_recv()
                .context("gift records were not refreshed")?
        } else {
            store
                .list_records(event_id)
                .into_iter()
                .filter(|r| r.id() != self.id)
                .cloned()
                .collect()
        };
        // Show the removed record in its place among the remaining ones.
        let at = records.partition_point(|r| r.id() < record.id());
        records.insert(at, record);

        let (tag, color) = if self.confirm {
            ("REMOVED", colored::Color::Red)
        } else {
            ("WOULD BE REMOVED", colored::Color::Yellow)
        };
        let mut list = cli::util::gift_list(config, records);
        list.line_postprocessor = Some(cli::util::tag_record(self.id, tag, color));
        Ok(cli::Output::Gifts(list))
    }
}
