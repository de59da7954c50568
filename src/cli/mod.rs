use anyhow::Result;

pub mod args;
mod commands;
mod exit_status;
mod report;

pub use args::{Arguments, Command};
pub use exit_status::ExitStatus;

pub fn run_cli(args: Arguments) -> Result<ExitStatus> {
    let Some(command) = args.command_or_help() else {
        return Ok(ExitStatus::Success);
    };

    match command {
        Command::Scan(cmd) => commands::scan::scan(cmd),
        Command::Prune(cmd) => commands::prune::prune(cmd),
        Command::Init => commands::init::init(),
    }
}
