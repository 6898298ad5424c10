use serde::Serialize;

/// One named, index-aligned accuracy series. `indices` is shared across all
/// curves of a dataset and runs `1..=K`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Curve {
    pub name: String,
    pub values: Vec<f64>,
    pub indices: Vec<u32>,
}

/// X-axis tick configuration derived from the reference class.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AxisTicks {
    pub locations: Vec<u32>,
    pub labels: Vec<String>,
}
