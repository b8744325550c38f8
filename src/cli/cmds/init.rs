use anyhow::Context;

use crate::base;
use crate::cli;

/// Initialize a gift book in the current directory
///
/// Existing events and gift records are left untouched.
#[derive(clap::Parser)]
pub struct Init {
    /// Restore an existing gift book's config to defaults
    #[arg(long)]
    reset_config: bool,

    /// Side given to new gift records when 'add' is run without '--side'
    #[arg(long, value_name = "SIDE")]
    default_side: Option<base::Side>,
}

fn initial_config() -> base::Config {
    base::Config {
        use_colored_output: true,
        use_unicode_symbols: true,
        ..Default::default()
    }
}

impl Init {
    pub fn run(&self, fs: &base::Fs) -> anyhow::Result<cli::Output> {
        let already_repo = fs.is_repo();
        let path = fs.path::<base::Config>();

        let mut config = if self.reset_config || !already_repo {
            initial_config()
        } else {
            fs.read::<base::Config>()
                .with_context(|| format!("failed to read '{}'", path.display()))?
        };
        if self.default_side.is_some() {
            config.default_side = self.default_side;
        }
        fs.write(&config)
            .with_context(|| format!("failed to write '{}'", path.display()))?;
        tracing::info!(path = %path.display(), reset = self.reset_config, "wrote config");

        let msg = match (already_repo, self.reset_config) {
            (false, _) => format!("Gift book initialized in '{}'", fs.dir().display()),
            (true, true) => "Gift book configuration reset to defaults.".to_string(),
            (true, false) => format!("Gift book reinitialized in '{}'", fs.dir().display()),
        };
        Ok(cli::Output::Str(msg))
    }
}
