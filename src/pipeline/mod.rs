use std::cmp::Ordering;

use thiserror::Error;

use crate::model::curve::{AxisTicks, Curve};
use crate::model::record::ResultRecord;
use crate::pipeline::stage2_group::run_stage2;
use crate::pipeline::stage3_align::run_stage3;
use crate::pipeline::stage4_validate::run_stage4;

pub mod stage1_collect;
pub mod stage2_group;
pub mod stage3_align;
pub mod stage4_validate;

#[derive(Debug, Error, PartialEq)]
pub enum AggregationError {
    #[error("No values for group found")]
    EmptyGroup,
    #[error("Expecting a list of two curves")]
    CurveCountMismatch { found: usize },
    #[error("class {class} has {found} entries, reference class {reference} has {expected}")]
    RaggedCurve {
        class: String,
        reference: String,
        found: usize,
        expected: usize,
    },
    #[error(
        "class {class} has label {found:?} at position {position}, reference label is {expected:?}"
    )]
    LabelMismatch {
        class: String,
        position: usize,
        found: String,
        expected: String,
    },
}

/// The validated renderer handoff: one curve per task class, all aligned to
/// the tick locations.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupDataset {
    pub curves: Vec<Curve>,
    pub xticks: AxisTicks,
}

/// Stable descending sort. Ties keep their input order, so the per-class
/// order produced by grouping is deterministic for a fixed input order.
pub fn sort_by_final_accuracy(records: &mut [ResultRecord]) {
    records.sort_by(|a, b| {
        b.final_accuracy
            .partial_cmp(&a.final_accuracy)
            .unwrap_or(Ordering::Equal)
    });
}

pub fn prepare_group_dataset(
    mut records: Vec<ResultRecord>,
) -> Result<GroupDataset, AggregationError> {
    sort_by_final_accuracy(&mut records);
    let grouped = run_stage2(&records);
    let aligned = run_stage3(&grouped)?;
    run_stage4(&aligned.curves)?;
    Ok(GroupDataset {
        curves: aligned.curves,
        xticks: aligned.xticks,
    })
}
