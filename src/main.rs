//! # Command Line Interface
//!
//! The argument parser is in `cli.rs`, which is shared with the build script.
//! The subcommands are run from the `commands` module.

use env_logger;
use log::error;
use ti84kit::commands;
use ti84kit::commands::CommandError;

mod cli;

fn main() -> Result<(),Box<dyn std::error::Error>>
{
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).unwrap();

    let main_cmd = cli::build_cli();
    let matches = main_cmd.clone().get_matches();

    if let Some(cmd) = matches.subcommand_matches("detokenize") {
        return commands::detokenize::detokenize(cmd);
    }
    if let Some(cmd) = matches.subcommand_matches("stat") {
        return commands::stat::stat(cmd);
    }
    if let Some(cmd) = matches.subcommand_matches("unpack") {
        return commands::unpack::unpack(cmd);
    }
    if let Some(cmd) = matches.subcommand_matches("completions") {
        return commands::completions::generate(main_cmd,cmd);
    }

    error!("No subcommand was found, try `ti84kit --help`");
    return Err(Box::new(CommandError::InvalidCommand));
}
