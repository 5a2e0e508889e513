//! CLI command implementations.
//!
//! Pure path commands work on their arguments alone:
//! - `check`: Classify paths and check their syntax
//! - `join`: Join paths left to right
//! - `parent`: Print the parent of a path
//! - `names`: Print the component names of a path
//!
//! Resolving commands build a path environment from configuration:
//! - `abspath`: Make paths absolute
//! - `volpath`: Resolve paths to volume paths
//! - `map_assign`: Replace an assign prefix by its targets
//! - `cmdpaths`: List the candidate locations of a command
//! - `host_path`: Map paths onto the host file system
//! - `validate`: Validate configuration
//!
//! `completions` generates shell completion scripts.

pub mod abspath;
pub mod check;
pub mod cmdpaths;
pub mod completions;
pub mod host_path;
pub mod join;
pub mod map_assign;
pub mod names;
pub mod parent;
pub mod validate;
pub mod volpath;

pub use abspath::AbspathCommand;
pub use check::CheckCommand;
pub use cmdpaths::CmdpathsCommand;
pub use completions::CompletionsCommand;
pub use host_path::HostPathCommand;
pub use join::JoinCommand;
pub use map_assign::MapAssignCommand;
pub use names::NamesCommand;
pub use parent::ParentCommand;
pub use validate::ValidateCommand;
pub use volpath::VolpathCommand;
