use anyhow::{Context, Result};

use std::{fmt::Display, fs, path::Path};

use crate::amount::Amount;

/// The summary of a single run.
///
/// To get the printable report text, use its [`Display`] implementation, or
/// [`format`]. To write the text to the results file, use [`save`].
#[derive(Debug)]
pub struct Report {
    pub catalogue: String,
    pub sales: String,
    pub total: Amount,
    /// Wall-clock seconds taken by the run.
    pub elapsed: f64,
}

impl Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Compute Sales - Results")?;
        writeln!(f, "{:-<22}", "")?;
        writeln!(f, "Catalogue file: {}", self.catalogue)?;
        writeln!(f, "Sales file: {}", self.sales)?;
        writeln!(f)?;
        writeln!(f, "TOTAL SALES: {}", self.total)?;
        writeln!(f)?;
        writeln!(f, "Elapsed time (s): {}", self.elapsed)?;
        Ok(())
    }
}

/// Returns the report text for a run over `catalogue` and `sales`.
///
/// The total is shown to 2 decimal places; the elapsed time is shown in
/// seconds at full precision.
#[must_use]
pub fn format(catalogue: &str, sales: &str, total: Amount, elapsed_seconds: f64) -> String {
    Report {
        catalogue: catalogue.to_string(),
        sales: sales.to_string(),
        total,
        elapsed: elapsed_seconds,
    }
    .to_string()
}

/// Writes `results` to `path` as UTF-8, replacing any existing contents.
///
/// # Errors
///
/// Returns any error from creating or writing the file.
pub fn save(path: impl AsRef<Path>, results: &str) -> Result<()> {
    let path = path.as_ref();
    fs::write(path, results)
        .with_context(|| format!("writing report to {}", path.display()))
}
