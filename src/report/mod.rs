use serde::Serialize;
use thiserror::Error;

use crate::model::curve::{AxisTicks, Curve};
use crate::pipeline::GroupDataset;

pub mod json;

const TITLE: &str = "Max achieved accuracy for unitary and federated learning";
const XLABEL: &str = "partitioning grade";
const YLABEL: &str = "accuracy";
const YLIM_MAX: f64 = 1.0;
const XLIM_MAX: f64 = 12.0;
const LEGEND_LOC: &str = "upper right";

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Everything the rendering collaborator needs for one comparison chart.
/// The presentation fields are pass-through configuration, not computed
/// values.
#[derive(Debug, Clone, Serialize)]
pub struct PlotRequest {
    pub title: String,
    pub xlabel: String,
    pub ylabel: String,
    pub fname: String,
    pub ylim_max: f64,
    pub xlim_max: f64,
    pub legend_loc: String,
    pub curves: Vec<Curve>,
    pub xticks: AxisTicks,
}

/// The rendering output is addressed purely by the group identifier.
pub fn plot_file_name(group_name: &str) -> String {
    format!("plot_{group_name}.png")
}

pub fn build_plot_request(group_name: &str, dataset: &GroupDataset) -> PlotRequest {
    PlotRequest {
        title: TITLE.to_string(),
        xlabel: XLABEL.to_string(),
        ylabel: YLABEL.to_string(),
        fname: plot_file_name(group_name),
        ylim_max: YLIM_MAX,
        xlim_max: XLIM_MAX,
        legend_loc: LEGEND_LOC.to_string(),
        curves: dataset.curves.clone(),
        xticks: dataset.xticks.clone(),
    }
}
