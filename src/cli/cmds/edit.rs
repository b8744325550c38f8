use anyhow::Context;

use crate::base;
use crate::cli;

/// Edit fields of a gift record
///
/// Fields that are not given are left unchanged.
#[derive(clap::Parser)]
pub struct Edit {
    /// Gift record id as shown by 'view'
    id: base::GiftId,

    /// Guest name
    #[arg(long)]
    name: Option<String>,

    /// Amount in won, thousands separators allowed
    #[arg(long)]
    amount: Option<String>,

    #[command(flatten)]
    opts: cli::sharedopts::GiftOpts,
}

impl Edit {
    pub fn run(self, store: &mut base::Store, config: &base::Config) -> anyhow::Result<cli::Output> {
        let Some(event_id) = store.record(self.id).map(base::GiftRecord::event_id) else {
            anyhow::bail!("nonexistent gift record {}", self.id);
        };
        let patch = base::validate::PatchForm {
            name: self.name.as_deref(),
            amount: self.amount.as_deref(),
            companions: self.opts.companions.as_deref(),
            relation: self.opts.relation.as_deref(),
            method: self.opts.method.as_deref(),
            side: self.opts.side.as_deref(),
            memo: self.opts.memo.as_deref(),
        }
        .validate()?;
        if patch.is_empty() {
            anyhow::bail!("nothing to edit");
        }

        let updates = store.subscribe(event_id);
        store.update_record(self.id, patch)?;
        let records = updates
            .try_recv()
            .context("gift records were not refreshed")?;

        let mut list = cli::util::gift_list(config, records);
        list.line_postprocessor = Some(cli::util::tag_record(
            self.id,
            "UPDATED",
            colored::Color::Green,
        ));
        Ok(cli::Output::Gifts(list))
    }
}
