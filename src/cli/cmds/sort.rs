use anyhow::Context;

use crate::base;
use crate::cli;

/// Set, clear or show the display order of gift records
///
/// Without arguments, shows the current order. Ordering only affects 'view';
/// totals and exports keep the stored order.
#[derive(clap::Parser)]
pub struct Sort {
    /// Field to order by: name or amount
    key: Option<base::SortKey>,

    /// Order from largest to smallest
    #[arg(short, long, requires = "key")]
    desc: bool,

    /// Return to the stored order
    #[arg(long, conflicts_with_all = ["key", "desc"])]
    clear: bool,
}

impl Sort {
    pub fn run(self, mut view: base::ViewState, fs: &base::Fs) -> anyhow::Result<cli::Output> {
        let sort = match self.key {
            Some(key) => Some(base::Sort {
                key,
                order: if self.desc {
                    base::SortOrder::Desc
                } else {
                    base::SortOrder::Asc
                },
            }),
            None if self.clear => None,
            None => view.sort,
        };

        if sort != view.sort {
            view.sort = sort;
            fs.write(&view).with_context(|| {
                format!(
                    "failed to write '{}'",
                    fs.path::<base::ViewState>().display()
                )
            })?;
        }
        Ok(cli::Output::Str(match view.sort {
            Some(sort) => format!("Sort: {}", sort),
            None => "Sort: none".to_string(),
        }))
    }
}
