use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

use super::*;
use crate::input::group::GroupResult;
use crate::input::results::TaskResult;
use crate::model::record::ResultRecord;

static DIR_COUNTER: AtomicUsize = AtomicUsize::new(0);

fn make_temp_dir() -> PathBuf {
    let mut dir = std::env::temp_dir();
    let id = DIR_COUNTER.fetch_add(1, Ordering::SeqCst);
    dir.push(format!("fedbench_stage1_test_{}_{}", std::process::id(), id));
    fs::create_dir_all(&dir).unwrap();
    dir
}

fn write_task(group_dir: &Path, task: &str, class: &str, label: &str, accuracy: f64) {
    let dir = group_dir.join(task);
    fs::create_dir_all(&dir).unwrap();
    let contents = format!(
        r#"{{"task_class": "{class}", "label": "{label}", "final_accuracy": {accuracy}}}"#
    );
    fs::write(dir.join("results.json"), contents).unwrap();
}

#[test]
fn test_read_task_values_is_a_pure_projection() {
    let task: TaskResult = serde_json::from_str(
        r#"{"task_class": "VisionTask", "label": "cpp05", "final_accuracy": 0.87}"#,
    )
    .unwrap();

    let record = read_task_values(&task);
    assert_eq!(
        record,
        ResultRecord {
            task_class: "VisionTask".to_string(),
            label: "cpp05".to_string(),
            final_accuracy: 0.87,
        }
    );
}

#[test]
fn test_run_stage1_maps_reader_over_group() {
    let results_dir = make_temp_dir();
    let group_dir = results_dir.join("g1");
    fs::create_dir_all(&group_dir).unwrap();
    write_task(&group_dir, "task_a", "VisionTask", "cpp01", 0.92);
    write_task(&group_dir, "task_b", "LangTask", "cpp01", 0.64);

    let group = GroupResult::resolve(&results_dir, "g1").unwrap();
    let records = run_stage1(&group).unwrap();

    assert_eq!(records.len(), 2);
    let mut classes: Vec<&str> = records.iter().map(|r| r.task_class.as_str()).collect();
    classes.sort();
    assert_eq!(classes, vec!["LangTask", "VisionTask"]);
}

#[test]
fn test_run_stage1_empty_group_yields_no_records() {
    let results_dir = make_temp_dir();
    fs::create_dir_all(results_dir.join("g1")).unwrap();

    let group = GroupResult::resolve(&results_dir, "g1").unwrap();
    let records = run_stage1(&group).unwrap();
    assert!(records.is_empty());
}
