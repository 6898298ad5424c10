use crate::input::InputError;
use crate::input::group::GroupResult;
use crate::input::results::TaskResult;
use crate::model::record::ResultRecord;

/// Projects one task result into the record consumed by the grouping stages.
pub fn read_task_values(task_result: &TaskResult) -> ResultRecord {
    ResultRecord {
        task_class: task_result.class().to_string(),
        label: task_result.label().to_string(),
        final_accuracy: task_result.final_accuracy(),
    }
}

/// Reads every discovered results file of the group. Record order follows
/// the group's enumeration order; the pipeline sorts before grouping.
pub fn run_stage1(group: &GroupResult) -> Result<Vec<ResultRecord>, InputError> {
    let task_results = group.get_results()?;
    Ok(task_results.iter().map(read_task_values).collect())
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage1_collect.rs"]
mod tests;
