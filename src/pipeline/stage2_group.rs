use std::collections::{BTreeMap, BTreeSet};

use crate::model::record::ResultRecord;

/// Per-class `(label, accuracy)` lists, keyed by task class in ascending
/// lexical order. The first key doubles as the reference class downstream.
#[derive(Debug, Clone, PartialEq)]
pub struct Stage2Output {
    pub grouped: BTreeMap<String, Vec<(String, f64)>>,
}

/// Caller must have sorted `records` by final accuracy descending; the
/// per-class filter is stable, so that order carries into each class list.
/// Every class present in the input appears as a key and labels are not
/// deduplicated.
pub fn run_stage2(records: &[ResultRecord]) -> Stage2Output {
    let task_classes: BTreeSet<&str> = records.iter().map(|r| r.task_class.as_str()).collect();

    let mut grouped = BTreeMap::new();
    for task_class in task_classes {
        let entries: Vec<(String, f64)> = records
            .iter()
            .filter(|r| r.task_class == task_class)
            .map(|r| (r.label.clone(), r.final_accuracy))
            .collect();
        grouped.insert(task_class.to_string(), entries);
    }

    Stage2Output { grouped }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage2_group.rs"]
mod tests;
