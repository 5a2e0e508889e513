//! Command to classify and check paths.

use crate::error::CliError;
use crate::utils::{load_env, GlobalOptions};
use amipath::{AmiPath, PathEnv, PathError};
use clap::Args;
use std::sync::Arc;

/// Classify paths and check their syntax.
#[derive(Args)]
pub struct CheckCommand {
    /// Paths to check
    #[arg(value_name = "PATH", required = true)]
    pub paths: Vec<String>,

    /// Also check prefixes against the configured volumes and assigns
    #[arg(long)]
    pub names: bool,
}

struct Report {
    path: String,
    kind: &'static str,
    syntax_valid: bool,
    prefix: Option<String>,
    prefix_kind: Option<&'static str>,
}

impl Report {
    fn is_ok(&self) -> bool {
        self.syntax_valid && self.prefix_kind != Some("unknown")
    }

    fn verdict(&self) -> &'static str {
        if !self.syntax_valid {
            "invalid syntax"
        } else if self.prefix_kind == Some("unknown") {
            "unknown prefix"
        } else {
            "ok"
        }
    }
}

fn prefix_kind(path: &AmiPath) -> Result<&'static str, PathError> {
    let kind = if !path.is_prefix_valid()? {
        "unknown"
    } else if path.is_volume_path()? {
        "volume"
    } else if path.is_multi_assign_path()? {
        "multi-assign"
    } else {
        "assign"
    };
    Ok(kind)
}

impl CheckCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let env: Option<Arc<PathEnv>> = if self.names {
            Some(load_env(global)?)
        } else {
            None
        };

        let mut reports = Vec::with_capacity(self.paths.len());
        for text in &self.paths {
            let path = match &env {
                Some(env) => env.path(text),
                None => AmiPath::new(text.as_str()),
            };
            let syntax_valid = path.is_syntax_valid();
            let prefix_kind = match (&env, path.prefix()) {
                (Some(_), Some(_)) if syntax_valid => Some(prefix_kind(&path)?),
                _ => None,
            };
            reports.push(Report {
                path: text.clone(),
                kind: path.kind().as_str(),
                syntax_valid,
                prefix: path.prefix().map(String::from),
                prefix_kind,
            });
        }

        if global.json {
            let items: Vec<serde_json::Value> = reports
                .iter()
                .map(|r| {
                    serde_json::json!({
                        "path": r.path,
                        "kind": r.kind,
                        "syntax_valid": r.syntax_valid,
                        "prefix": r.prefix,
                        "prefix_kind": r.prefix_kind,
                        "ok": r.is_ok(),
                    })
                })
                .collect();
            let output = serde_json::to_string_pretty(&items)
                .map_err(|e| CliError::Io(std::io::Error::other(e)))?;
            println!("{output}");
        } else {
            for r in &reports {
                match r.prefix_kind {
                    Some(kind) => println!("{}\t{}\t{}\t{kind}", r.path, r.kind, r.verdict()),
                    None => println!("{}\t{}\t{}", r.path, r.kind, r.verdict()),
                }
            }
        }

        let failed = reports.iter().filter(|r| !r.is_ok()).count();
        if failed > 0 {
            return Err(CliError::SemanticFailure(format!(
                "{failed} of {} path(s) failed the check",
                reports.len()
            )));
        }
        Ok(())
    }
}
