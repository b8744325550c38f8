//! Subcommands operating on the gift book repository in the working directory.

mod cmds;
mod output;
mod sharedopts;
mod util;

#[cfg(test)]
mod testing;

pub use cmds::root::Root;
use output::Output;
