use crate::base;
use crate::cli;

/// Export the selected event's gift records to a spreadsheet
///
/// Exports the records passing the current filters, in stored order. Does
/// nothing when no event is selected.
#[derive(clap::Parser)]
pub struct Export {
    /// Column layout, compact or detailed [default: from config]
    #[arg(short, long)]
    layout: Option<base::export::Layout>,

    /// File format, xlsx or csv [default: from config]
    #[arg(short, long)]
    format: Option<base::export::Format>,

    /// Only export records of this side, bride or groom
    #[arg(short, long)]
    side: Option<base::Side>,

    /// Directory to write the file to [default: repository directory]
    #[arg(short, long)]
    dir: Option<std::path::PathBuf>,
}

impl Export {
    pub fn run(
        self,
        store: &base::Store,
        view: &base::ViewState,
        config: &base::Config,
        fs: &base::Fs,
    ) -> anyhow::Result<cli::Output> {
        let event = view.selected(store);
        let records = event
            .map(|e| cli::util::filtered_records(store, view, e))
            .unwrap_or_default();
        let options = base::export::Options {
            layout: self.layout.unwrap_or(config.export_layout),
            format: self.format.unwrap_or(config.export_format),
            side: self.side,
        };
        let dir = match self.dir {
            Some(dir) => fs.dir().join(dir),
            None => fs.dir().to_path_buf(),
        };

        Ok(cli::Output::Str(
            match base::export::export(event, &records, options, &dir)? {
                Some(exported) => format!(
                    "Exported {} gift records to '{}'",
                    exported.rows,
                    exported.path.display()
                ),
                None => "No event selected, nothing exported.".to_string(),
            },
        ))
    }
}
