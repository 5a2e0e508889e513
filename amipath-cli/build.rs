//! Build script for amipath-cli.
//!
//! Generates the man page at build time using clap_mangen and places it
//! in OUT_DIR. Build scripts cannot depend on the crate being built, so
//! the command structure is declared here a second time.

use clap::{Arg, ArgAction, Command};
use clap_mangen::Man;
use std::fs;
use std::io;
use std::path::PathBuf;

/// Build the CLI command structure for man page generation.
///
/// Keep this in sync with src/cli.rs.
fn build_cli() -> Command {
    Command::new("amipath")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Parse, join and resolve AmigaDOS-style paths")
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose output")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Suppress non-essential output")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .help("Print results as JSON")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .help("Additional configuration file (highest file precedence)")
                .value_name("FILE")
                .global(true)
                .env("AMIPATH_CONFIG"),
        )
        .arg(
            Arg::new("config-dir")
                .long("config-dir")
                .help("Directory holding the user config.yaml")
                .value_name("DIR")
                .global(true)
                .env("AMIPATH_CONFIG_DIR"),
        )
        .arg(
            Arg::new("no-config-files")
                .long("no-config-files")
                .help("Do not read user or project configuration files")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("volume")
                .long("volume")
                .help("Define a volume (repeatable)")
                .value_name("NAME:DIR")
                .global(true)
                .action(ArgAction::Append),
        )
        .arg(
            Arg::new("assign")
                .long("assign")
                .help("Define an assign (repeatable)")
                .value_name("NAME:TARGET[,TARGET...]")
                .global(true)
                .action(ArgAction::Append),
        )
        .arg(
            Arg::new("cmd-path")
                .long("cmd-path")
                .help("Command search path")
                .value_name("PATH[,PATH...]")
                .global(true),
        )
        .arg(
            Arg::new("cur-dir")
                .long("cur-dir")
                .help("Current directory")
                .value_name("PATH")
                .global(true),
        )
        .subcommands(vec![
            Command::new("check").about("Classify paths and check their syntax and prefix"),
            Command::new("join").about("Join paths left to right"),
            Command::new("parent").about("Print the parent of a path"),
            Command::new("names").about("Print the names of a path's components"),
            Command::new("abspath").about("Make paths absolute against the current directory"),
            Command::new("volpath").about("Resolve paths to volume paths"),
            Command::new("map-assign").about("Replace an assign prefix by its targets"),
            Command::new("cmdpaths").about("List the candidate locations of a command"),
            Command::new("host-path").about("Map paths to host file system paths"),
            Command::new("validate").about("Validate configuration"),
            Command::new("completions").about("Generate shell completion scripts"),
        ])
}

fn main() -> io::Result<()> {
    let out_dir = std::env::var_os("OUT_DIR")
        .map(PathBuf::from)
        .ok_or_else(|| io::Error::other("OUT_DIR is not set"))?;
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir)?;

    let mut buffer = Vec::new();
    Man::new(build_cli()).render(&mut buffer)?;
    fs::write(man_dir.join("amipath.1"), buffer)?;

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
    Ok(())
}
