use crate::model::curve::{AxisTicks, Curve};
use crate::pipeline::AggregationError;
use crate::pipeline::stage2_group::Stage2Output;

#[derive(Debug, Clone, PartialEq)]
pub struct Stage3Output {
    pub curves: Vec<Curve>,
    pub xticks: AxisTicks,
}

/// Aligns every class to the reference class, the first mapping key, i.e.
/// the lexicographically smallest class name. Tick locations run `1..=K`
/// for the reference class's `K` entries and are shared by all curves.
/// Each class must match the reference entry count and label sequence
/// exactly. An empty mapping yields an empty curve list for the validator
/// to reject.
pub fn run_stage3(grouped: &Stage2Output) -> Result<Stage3Output, AggregationError> {
    let Some((reference, reference_entries)) = grouped.grouped.iter().next() else {
        return Ok(Stage3Output {
            curves: Vec::new(),
            xticks: AxisTicks::default(),
        });
    };

    let indices: Vec<u32> = (1..=reference_entries.len() as u32).collect();
    let labels: Vec<String> = reference_entries
        .iter()
        .map(|(label, _)| label.clone())
        .collect();

    let mut curves = Vec::with_capacity(grouped.grouped.len());
    for (task_class, entries) in &grouped.grouped {
        if entries.len() != reference_entries.len() {
            return Err(AggregationError::RaggedCurve {
                class: task_class.clone(),
                reference: reference.clone(),
                found: entries.len(),
                expected: reference_entries.len(),
            });
        }
        for (position, ((label, _), expected)) in entries.iter().zip(&labels).enumerate() {
            if label != expected {
                return Err(AggregationError::LabelMismatch {
                    class: task_class.clone(),
                    position,
                    found: label.clone(),
                    expected: expected.clone(),
                });
            }
        }
        curves.push(Curve {
            name: task_class.clone(),
            values: entries.iter().map(|(_, accuracy)| *accuracy).collect(),
            indices: indices.clone(),
        });
    }

    Ok(Stage3Output {
        curves,
        xticks: AxisTicks {
            locations: indices,
            labels,
        },
    })
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage3_align.rs"]
mod tests;
