use std::fs;
use std::path::{Path, PathBuf};

use crate::input::InputError;
use crate::input::results::{TaskResult, load_task_result};

const RESULTS_FILE: &str = "results.json";
const RESULTS_FILE_GZ: &str = "results.json.gz";

/// A resolved group directory and the results files discovered beneath it,
/// one per task subdirectory. Enumeration order follows the directory
/// listing and is not guaranteed stable.
#[derive(Debug, Clone)]
pub struct GroupResult {
    pub group_dir: PathBuf,
    result_paths: Vec<PathBuf>,
}

impl GroupResult {
    pub fn resolve(results_dir: &Path, group_name: &str) -> Result<Self, InputError> {
        let group_dir = results_dir.join(group_name);
        if !group_dir.is_dir() {
            return Err(InputError::GroupNotFound {
                group_name: group_name.to_string(),
                results_dir: results_dir.to_path_buf(),
            });
        }

        let mut result_paths = Vec::new();
        for entry in fs::read_dir(&group_dir)? {
            let entry = entry?;
            let path = entry.path();
            if !path.is_dir() {
                continue;
            }
            match find_results_file(&path) {
                Some(results_path) => result_paths.push(results_path),
                None => tracing::warn!(
                    "task directory {} has no {}; skipping",
                    path.display(),
                    RESULTS_FILE
                ),
            }
        }

        tracing::info!(
            "discovered {} task results in {}",
            result_paths.len(),
            group_dir.display()
        );

        Ok(GroupResult {
            group_dir,
            result_paths,
        })
    }

    pub fn get_results(&self) -> Result<Vec<TaskResult>, InputError> {
        let mut out = Vec::with_capacity(self.result_paths.len());
        for path in &self.result_paths {
            out.push(load_task_result(path)?);
        }
        Ok(out)
    }

    pub fn len(&self) -> usize {
        self.result_paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.result_paths.is_empty()
    }
}

fn find_results_file(task_dir: &Path) -> Option<PathBuf> {
    for name in [RESULTS_FILE, RESULTS_FILE_GZ] {
        let path = task_dir.join(name);
        if path.exists() {
            return Some(path);
        }
    }
    None
}
