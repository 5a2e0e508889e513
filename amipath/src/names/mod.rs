//! Concrete naming environment: volumes, assigns and a shell-like context.
//!
//! [`NameTable`] implements [`NameResolver`](crate::path::NameResolver) on
//! top of explicit volume and assign definitions. [`PathEnv`] implements
//! [`PathContext`](crate::path::PathContext) with a current directory and
//! a command search path, and can be built straight from a
//! [`Config`](crate::config::Config).

mod env;
mod table;

pub use env::{PathEnv, FALLBACK_CUR_DIR};
pub use table::{validate_assign_target, validate_name, NameTable, NameTableBuilder};
