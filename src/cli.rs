use clap::Parser;
use std::path::PathBuf;

use crate::tree::TreeConfig;

const AFTER_HELP: &str = "\
Examples:
  dirtree .              Directories under the current directory
  dirtree ~/projects -f  Include files with their sizes

Logging:
  Set DIRTREE_LOG (e.g. DIRTREE_LOG=debug) to log walk details to stderr.";

#[derive(Parser, Debug, Clone)]
#[command(
    name = "dirtree",
    version,
    about = "Print a directory hierarchy as a tree",
    after_help = AFTER_HELP
)]
pub struct Args {
    /// Root directory to display
    pub path: PathBuf,

    /// Include regular files (with sizes) alongside directories
    #[arg(short = 'f', long = "files")]
    pub files: bool,
}

impl Args {
    /// Collection options derived from the arguments.
    pub fn tree_config(&self) -> TreeConfig {
        TreeConfig {
            include_files: self.files,
        }
    }
}
