use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::report::{PlotRequest, ReportError};

pub fn render_plot_request(request: &PlotRequest) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(request)
}

/// Writes the request as `plot_<group>.json`, derived from the `fname` the
/// renderer will address its chart by. Returns the written path.
pub fn write_plot_request(request: &PlotRequest, out_dir: &Path) -> Result<PathBuf, ReportError> {
    fs::create_dir_all(out_dir)?;
    let stem = request
        .fname
        .strip_suffix(".png")
        .unwrap_or(&request.fname);
    let path = out_dir.join(format!("{stem}.json"));

    let mut file = BufWriter::new(File::create(&path)?);
    file.write_all(render_plot_request(request)?.as_bytes())?;
    file.write_all(b"\n")?;
    Ok(path)
}
