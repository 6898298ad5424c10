use std::path::Path;

use serde::Deserialize;

use crate::input::InputError;
use crate::input::open::open_maybe_gz;

/// One parsed results file. Results files carry additional run metadata the
/// aggregator does not consume; unknown fields are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct TaskResult {
    task_class: String,
    label: String,
    final_accuracy: f64,
}

impl TaskResult {
    pub fn class(&self) -> &str {
        &self.task_class
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Passed through as stored; the pipeline does not re-check the range.
    pub fn final_accuracy(&self) -> f64 {
        self.final_accuracy
    }
}

pub fn load_task_result(path: &Path) -> Result<TaskResult, InputError> {
    let reader = open_maybe_gz(path)?;
    serde_json::from_reader(reader)
        .map_err(|e| InputError::Parse(format!("{}: {e}", path.display())))
}
