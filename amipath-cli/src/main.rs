//! Main entry point for the amipath CLI.
//!
//! Parses, joins and resolves AmigaDOS-style paths. Path commands such as
//! `join` and `parent` work on their arguments alone; resolving commands
//! such as `volpath` and `cmdpaths` read volumes and assigns from
//! configuration files, `AMIPATH_*` environment variables and flags.

mod cli;
mod commands;
mod error;
mod utils;

use clap::Parser;
use cli::Cli;
use utils::GlobalOptions;

fn main() {
    let cli = Cli::parse();

    let _logger = amipath::init_logger(cli.verbose, cli.quiet);

    let global = GlobalOptions {
        verbose: cli.verbose,
        quiet: cli.quiet,
        json: cli.json,
        config: cli.config,
        config_dir: cli.config_dir,
        no_config_files: cli.no_config_files,
        volumes: cli.volumes,
        assigns: cli.assigns,
        cmd_path: cli.cmd_path,
        cur_dir: cli.cur_dir,
    };

    let result = match cli.command {
        cli::Command::Check(cmd) => cmd.execute(&global),
        cli::Command::Join(cmd) => cmd.execute(&global),
        cli::Command::Parent(cmd) => cmd.execute(&global),
        cli::Command::Names(cmd) => cmd.execute(&global),
        cli::Command::Abspath(cmd) => cmd.execute(&global),
        cli::Command::Volpath(cmd) => cmd.execute(&global),
        cli::Command::MapAssign(cmd) => cmd.execute(&global),
        cli::Command::Cmdpaths(cmd) => cmd.execute(&global),
        cli::Command::HostPath(cmd) => cmd.execute(&global),
        cli::Command::Validate(cmd) => cmd.execute(&global),
        cli::Command::Completions(cmd) => cmd.execute(&global),
    };

    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
