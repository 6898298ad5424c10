use std::path::PathBuf;

use thiserror::Error;

pub mod group;
pub mod open;
pub mod results;

#[derive(Debug, Error)]
pub enum InputError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("group {group_name} not found under {}", results_dir.display())]
    GroupNotFound {
        group_name: String,
        results_dir: PathBuf,
    },
    #[error("parse error: {0}")]
    Parse(String),
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/tests.rs"]
mod tests;
