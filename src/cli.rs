use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "rezip")]
#[command(version)]
#[command(about = "Pick zip entries by base name and rewrite filtered archives", long_about = None)]
#[command(after_help = "Examples:\n  \
  rezip data.zip notes.txt            stream notes.txt from data.zip to stdout\n  \
  rezip -l data.zip                   list indexed base names\n  \
  rezip -o subset.zip data.zip a b    write entries a and b into subset.zip")]
pub struct Cli {
    /// ZIP archive path
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Entry base names to pick (streamed to stdout unless -o is given)
    #[arg(value_name = "NAMES")]
    pub names: Vec<String>,

    /// List entries (short format)
    #[arg(short = 'l')]
    pub list: bool,

    /// List verbosely with sizes
    #[arg(short = 'v')]
    pub verbose: bool,

    /// Rezip the named entries into a new archive at this path
    #[arg(short = 'o', value_name = "OUT")]
    pub output: Option<PathBuf>,

    /// Quiet mode
    #[arg(short = 'q', action = clap::ArgAction::Count)]
    pub quiet: u8,
}

impl Cli {
    pub fn is_quiet(&self) -> bool {
        self.quiet > 0
    }
}
