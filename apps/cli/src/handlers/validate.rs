use super::Outcome;
use anyhow::Result;
use std::io::Write;
use whub::domain::config::ExclusivityMode;
use whub::features::catalog::Catalog;

/// Validates `positions` and prints the report; an invalid selection is a failure.
///
/// # Errors
/// Returns an error if the output cannot be written.
pub fn validate(
    out: &mut impl Write,
    catalog: &Catalog,
    id: &str,
    positions: &[String],
    exclusivity: Option<ExclusivityMode>,
    json: bool,
) -> Result<Outcome> {
    let report = catalog.validate(id, positions, exclusivity);
    tracing::info!(
        product_type = id,
        selected = positions.len(),
        valid = report.is_valid,
        "Selection validated"
    );

    if json {
        serde_json::to_writer_pretty(&mut *out, &report)?;
        writeln!(out)?;
    } else {
        writeln!(out, "{}", if report.is_valid { "valid" } else { "invalid" })?;
        for error in &report.errors {
            writeln!(out, "error: {error}")?;
        }
        for warning in &report.warnings {
            writeln!(out, "warning: {warning}")?;
        }
    }

    Ok(if report.is_valid { Outcome::Success } else { Outcome::Failure })
}
