use anyhow::Context;

use crate::base;
use crate::cli;

/// Set, clear or show the filters applied to gift records
///
/// Without options, shows the current filters. A record is shown only if it
/// satisfies every filter.
#[derive(clap::Parser)]
pub struct Filter {
    /// Text to look for in names and memos, ignoring case
    ///
    /// An empty query matches every record.
    #[arg(short, long)]
    query: Option<String>,

    /// Relation to keep, or 'none' to keep every relation
    #[arg(short, long)]
    relation: Option<String>,

    /// Payment method to keep, or 'none' to keep every method
    #[arg(short = 'p', long, value_name = "METHOD")]
    method: Option<String>,

    /// Remove all filters
    #[arg(long, conflicts_with_all = ["query", "relation", "method"])]
    clear: bool,
}

impl Filter {
    pub fn run(self, mut view: base::ViewState, fs: &base::Fs) -> anyhow::Result<cli::Output> {
        let mut filter = if self.clear {
            base::Filter::default()
        } else {
            view.filter.clone()
        };
        if let Some(query) = self.query {
            filter.query = query.trim().to_string();
        }
        if let Some(s) = self.relation {
            filter.relation = cli::util::parse_clearable("relation", &s)?;
        }
        if let Some(s) = self.method {
            filter.method = cli::util::parse_clearable("method", &s)?;
        }

        if filter != view.filter {
            view.filter = filter;
            fs.write(&view).with_context(|| {
                format!(
                    "failed to write '{}'",
                    fs.path::<base::ViewState>().display()
                )
            })?;
        }
        Ok(cli::Output::Str(format!("Filter: {}", view.filter)))
    }
}
