use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[clap(author, version, about = "Counts the paths through a grid that visit every free cell exactly once.", long_about = None)]
pub struct Cli {
    /// Grid description to read; standard input when omitted
    pub input: Option<PathBuf>,

    /// Print nothing; the exit status reports success or failure.
    #[clap(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Print the grid, progress dots and search counters along with the count.
    #[clap(short, long)]
    pub verbose: bool,

    /// Skip the reachability check (slower, same result).
    #[clap(long)]
    pub no_prune: bool,

    /// Search the first steps from the start cell on separate threads.
    #[clap(long)]
    pub parallel: bool,
}

impl Cli {
    pub fn verbosity(&self) -> super::logger::Verbosity {
        use super::logger::Verbosity;
        if self.quiet {
            Verbosity::Quiet
        } else if self.verbose {
            Verbosity::Verbose
        } else {
            Verbosity::Normal
        }
    }
}
