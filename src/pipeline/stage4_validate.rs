use crate::model::curve::Curve;
use crate::pipeline::AggregationError;

/// A group dataset always contrasts exactly two training modes; any other
/// curve count is a caller or configuration error, not a data error.
pub fn run_stage4(curves: &[Curve]) -> Result<(), AggregationError> {
    if curves.is_empty() {
        return Err(AggregationError::EmptyGroup);
    }
    if curves.len() != 2 {
        return Err(AggregationError::CurveCountMismatch {
            found: curves.len(),
        });
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage4_validate.rs"]
mod tests;
