#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # amipath
//!
//! A library for parsing, joining and resolving AmigaDOS-style paths.
//!
//! Paths look like `prefix:dir/file`, where the prefix is a volume name
//! (`work:`) or an assign (`libs:`) that expands to one or more other
//! paths. Local paths (`/up`, `:root`, `plain`) are resolved against a
//! current directory.
//!
//! ## Core Types
//!
//! - [`AmiPath`] and [`PathKind`]: Path values and their classification
//! - [`NameResolver`] and [`PathContext`]: Pluggable naming environment
//! - [`NameTable`] and [`PathEnv`]: Ready-made environment built from
//!   volume and assign definitions
//! - [`Config`] and [`ConfigBuilder`]: YAML configuration
//! - [`Error`], [`PathError`] and [`Result`]: Error handling types
//! - [`Logger`] and [`LogLevel`]: Logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use amipath::{AmiPath, NameTable, PathEnv};
//! use std::sync::Arc;
//!
//! // Pure algebra needs no environment
//! let joined = AmiPath::new("work:src").join(&AmiPath::new("/doc")).unwrap();
//! assert_eq!(joined, AmiPath::new("work:doc"));
//!
//! // Resolution goes through names and a current directory
//! let names = NameTable::builder()
//!     .volume("dh0", "/amiga/dh0")
//!     .assign("libs", ["dh0:libs", "dh0:morelibs"])
//!     .build()
//!     .unwrap();
//! let env = Arc::new(PathEnv::new(Arc::new(names)));
//! assert_eq!(
//!     env.path("libs:mui").volpaths().unwrap(),
//!     [AmiPath::new("dh0:libs/mui"), AmiPath::new("dh0:morelibs/mui")]
//! );
//! ```

pub mod config;
pub mod error;
pub mod logging;
pub mod names;
pub mod output;
pub mod path;

// Re-export key types at crate root for convenience
pub use config::{Config, ConfigBuilder};
pub use error::{Error, PathError, PathErrorReason, Result};
pub use logging::{init_logger, resolve_log_level, LogLevel, Logger};
pub use names::{NameTable, NameTableBuilder, PathEnv};
pub use output::{OutputFormat, OutputFormatter};
pub use path::{AmiPath, NameResolver, PathContext, PathKind};
