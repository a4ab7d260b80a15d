mod commands;
mod guard;
mod terminal;

use std::io;

use commands::CommandLine;
use contextlens_common::config::Config;
use contextlens_core::analysis::Analyzer;
use contextlens_core::resolver::SystemResolver;
use contextlens_core::session::Session;
use guard::Shutdown;
use terminal::{logging, print, view::TerminalView};
use tracing::error;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();
    let cfg: Config = commands.to_config();

    logging::init(&cfg)?;
    print::initialize(&cfg);

    let outcome = guard::run_until_interrupted(|| {
        let stdin = io::stdin();
        let mut session = Session::new(
            stdin.lock(),
            TerminalView,
            Analyzer::new(SystemResolver),
        );
        session.run()
    })
    .await;

    match guard::shutdown_for(outcome) {
        Shutdown::Quiet => {}
        Shutdown::Graceful => print::graceful_exit(),
        Shutdown::Interrupted => {
            print::graceful_exit();
            // The session thread is still parked on stdin and would hold the runtime open.
            std::process::exit(0);
        }
        Shutdown::Failed(msg) => error!("{msg}"),
    }

    Ok(())
}
