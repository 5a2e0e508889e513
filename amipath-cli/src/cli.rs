//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{
    AbspathCommand, CheckCommand, CmdpathsCommand, CompletionsCommand, HostPathCommand,
    JoinCommand, MapAssignCommand, NamesCommand, ParentCommand, ValidateCommand, VolpathCommand,
};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line tool for AmigaDOS-style path algebra.
#[derive(Parser)]
#[command(name = "amipath")]
#[command(
    version,
    about = "Parse, join and resolve AmigaDOS-style paths",
    long_about = None
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Additional configuration file (highest file precedence)
    #[arg(long, value_name = "FILE", global = true, env = "AMIPATH_CONFIG")]
    pub config: Option<PathBuf>,

    /// Directory holding the user config.yaml
    #[arg(long, value_name = "DIR", global = true, env = "AMIPATH_CONFIG_DIR")]
    pub config_dir: Option<PathBuf>,

    /// Do not read user or project configuration files
    #[arg(long, global = true)]
    pub no_config_files: bool,

    /// Define a volume (repeatable)
    #[arg(long = "volume", value_name = "NAME:DIR", global = true)]
    pub volumes: Vec<String>,

    /// Define an assign (repeatable)
    #[arg(long = "assign", value_name = "NAME:TARGET[,TARGET...]", global = true)]
    pub assigns: Vec<String>,

    /// Command search path
    #[arg(long, value_name = "PATH[,PATH...]", global = true)]
    pub cmd_path: Option<String>,

    /// Current directory
    #[arg(long, value_name = "PATH", global = true)]
    pub cur_dir: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Classify paths and check their syntax and prefix
    Check(CheckCommand),

    /// Join paths left to right
    Join(JoinCommand),

    /// Print the parent of a path
    Parent(ParentCommand),

    /// Print the names of a path's components
    Names(NamesCommand),

    /// Make paths absolute against the current directory
    Abspath(AbspathCommand),

    /// Resolve paths to volume paths
    Volpath(VolpathCommand),

    /// Replace an assign prefix by its targets
    MapAssign(MapAssignCommand),

    /// List the candidate locations of a command
    Cmdpaths(CmdpathsCommand),

    /// Map paths to host file system paths
    HostPath(HostPathCommand),

    /// Validate configuration
    Validate(ValidateCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),
}
