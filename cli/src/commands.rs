use clap::Parser;
use contextlens_common::config::Config;

#[derive(Parser)]
#[command(name = "contextlens")]
#[command(version)]
#[command(about = "Decision support for prioritizing security effort by infrastructure abstraction. \
Interactive only: targets are entered at the prompt, and the flags below only change how output is displayed.")]
pub struct CommandLine {
    /// Print without ANSI colors
    #[arg(long)]
    pub no_color: bool,

    /// Show debug output, such as why a lookup failed
    #[arg(short, long)]
    pub verbose: bool,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn to_config(&self) -> Config {
        Config {
            no_color: self.no_color,
            verbose: self.verbose,
        }
    }
}
