use anyhow::Context;

use crate::base;
use crate::cli;

/// Guest list and cash gift ledger
#[derive(clap::Parser)]
#[command(color = clap::ColorChoice::Never)]
pub struct Root {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand)]
enum Commands {
    Init(cli::cmds::init::Init),
    New(cli::cmds::new::New),
    Events(cli::cmds::events::Events),
    Select(cli::cmds::select::Select),
    Add(cli::cmds::add::Add),
    Edit(cli::cmds::edit::Edit),
    Rm(cli::cmds::rm::Rm),
    Filter(cli::cmds::filter::Filter),
    Sort(cli::cmds::sort::Sort),
    View(cli::cmds::view::View),
    Sum(cli::cmds::sum::Sum),
    Export(cli::cmds::export::Export),
}

impl Root {
    pub fn run(self, fs: &base::Fs) -> anyhow::Result<cli::Output> {
        if let Commands::Init(cmd) = self.command {
            return cmd.run(fs);
        }

        if !fs.is_repo() {
            anyhow::bail!("not a repository")
        }
        let config = fs
            .read::<base::Config>()
            .with_context(|| format!("failed to read '{}'", fs.path::<base::Config>().display()))?;
        let view = fs.read::<base::ViewState>().with_context(|| {
            format!(
                "failed to read '{}'",
                fs.path::<base::ViewState>().display()
            )
        })?;
        let mut store = base::Store::open(fs)?;

        match self.command {
            Commands::Init(_) => unreachable!(),
            Commands::New(cmd) => cmd.run(&mut store, view, fs),
            Commands::Events(cmd) => cmd.run(&store, &view, &config),
            Commands::Select(cmd) => cmd.run(&store, view, fs),
            Commands::Add(cmd) => cmd.run(&mut store, &view, &config),
            Commands::Edit(cmd) => cmd.run(&mut store, &config),
            Commands::Rm(cmd) => cmd.run(&mut store, &config),
            Commands::Filter(cmd) => cmd.run(view, fs),
            Commands::Sort(cmd) => cmd.run(view, fs),
            Commands::View(cmd) => cmd.run(&store, &view, &config),
            Commands::Sum(cmd) => cmd.run(&store, &view, &config),
            Commands::Export(cmd) => cmd.run(&store, &view, &config, fs),
        }
    }
}
