//! Read-only registry queries.

use super::{Outcome, join};
use anyhow::Result;
use serde_json::json;
use std::io::Write;
use whub::features::catalog::domain::{
    filter_positions_by_product_type, get_allowed_positions,
    get_position_constraint_info, get_product_type, get_product_type_options, is_position_allowed,
};
use whub::features::catalog::dto::ProductTypeResponse;

/// Prints every product type as `id  name`.
///
/// # Errors
/// Returns an error if the output cannot be written.
pub fn list_types(out: &mut impl Write, json: bool) -> Result<Outcome> {
    let options = get_product_type_options();

    if json {
        serde_json::to_writer_pretty(&mut *out, &options)?;
        writeln!(out)?;
    } else {
        let width = options.iter().map(|o| o.value.len()).max().unwrap_or_default();
        for option in &options {
            writeln!(out, "{:<width$}  {}", option.value, option.label)?;
        }
    }

    Ok(Outcome::Success)
}

/// Prints a product type. Unknown ids are a failure.
///
/// # Errors
/// Returns an error if the output cannot be written.
pub fn show(out: &mut impl Write, id: &str, json: bool) -> Result<Outcome> {
    let Some(product_type) = get_product_type(id) else {
        tracing::debug!(product_type = id, "Unknown product type requested");
        if json {
            writeln!(out, "{}", json!({ "error": format!("Unknown product type: {id}") }))?;
        } else {
            writeln!(out, "Unknown product type: {id}")?;
        }
        return Ok(Outcome::Failure);
    };

    if json {
        let value = ProductTypeResponse::from(product_type);
        serde_json::to_writer_pretty(&mut *out, &value)?;
        writeln!(out)?;
        return Ok(Outcome::Success);
    }

    writeln!(out, "{} ({})", product_type.name, product_type.id)?;
    writeln!(out, "{}", product_type.description)?;
    writeln!(out, "Allowed:   {}", product_type.allowed_positions.join(", "))?;
    if let Some(max) = product_type.max_positions() {
        writeln!(out, "Max:       {max}")?;
    }
    if let Some(required) = product_type.required_positions() {
        writeln!(out, "Required:  {}", required.join(", "))?;
    }
    if let Some(exclusive) = product_type.exclusive_positions() {
        writeln!(out, "Exclusive: {}", exclusive.join(", "))?;
    }

    Ok(Outcome::Success)
}

/// Prints the allowed positions, one per line (nothing for unknown ids).
///
/// # Errors
/// Returns an error if the output cannot be written.
pub fn positions(out: &mut impl Write, id: &str, json: bool) -> Result<Outcome> {
    let positions = get_allowed_positions(id);
    write_positions(out, positions.iter().copied(), json)?;
    Ok(Outcome::Success)
}

/// # Errors
/// Returns an error if the output cannot be written.
pub fn info(out: &mut impl Write, id: &str, json: bool) -> Result<Outcome> {
    let info = get_position_constraint_info(id);

    if json {
        serde_json::to_writer_pretty(&mut *out, &info)?;
        writeln!(out)?;
        return Ok(Outcome::Success);
    }

    let max = info.max_positions.map_or_else(|| "unlimited".to_owned(), |max| max.to_string());
    writeln!(out, "Max:      {max}")?;
    writeln!(out, "Required: {}", join(info.required_positions.as_deref().unwrap_or_default()))?;
    writeln!(out, "Allowed:  {}", join(&info.allowed_positions))?;

    Ok(Outcome::Success)
}

/// Prints `true` or `false`.
///
/// # Errors
/// Returns an error if the output cannot be written.
pub fn allowed(out: &mut impl Write, id: &str, position: &str, json: bool) -> Result<Outcome> {
    let allowed = is_position_allowed(id, position);

    if json {
        writeln!(out, "{}", json!({ "allowed": allowed }))?;
    } else {
        writeln!(out, "{allowed}")?;
    }

    Ok(Outcome::Success)
}

/// # Errors
/// Returns an error if the output cannot be written.
pub fn filter(out: &mut impl Write, id: &str, positions: &[String], json: bool) -> Result<Outcome> {
    let kept = filter_positions_by_product_type(positions, id);
    write_positions(out, kept.iter().map(String::as_str), json)?;
    Ok(Outcome::Success)
}

fn write_positions<'a>(
    out: &mut impl Write,
    positions: impl Iterator<Item = &'a str>,
    json: bool,
) -> Result<()> {
    if json {
        let positions: Vec<&str> = positions.collect();
        writeln!(out, "{}", serde_json::to_string(&positions)?)?;
    } else {
        for position in positions {
            writeln!(out, "{position}")?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(run: impl FnOnce(&mut Vec<u8>) -> Result<Outcome>) -> (Outcome, String) {
        let mut out = Vec::new();
        let outcome = run(&mut out).expect("write to memory");
        (outcome, String::from_utf8(out).expect("utf-8 output"))
    }

    #[test]
    fn types_are_aligned_in_registry_order() {
        let (outcome, text) = render(|out| list_types(out, false));
        assert_eq!(outcome, Outcome::Success);

        let first = text.lines().next().expect("at least one type");
        assert!(first.starts_with("t-shirt "));
        assert!(first.ends_with("T-Shirt"));
        assert_eq!(text.lines().count(), 10);
    }

    #[test]
    fn show_lists_only_present_constraints() {
        let (_, text) = render(|out| show(out, "poster", false));
        assert!(text.contains("Allowed:   Front"));
        assert!(!text.contains("Max:"));

        let (_, text) = render(|out| show(out, "mug", false));
        assert!(text.contains("Required:  Full Wrap"));
        assert!(text.contains("Exclusive: Full Wrap"));
    }

    #[test]
    fn show_json_matches_the_rest_shape() {
        let (outcome, text) = render(|out| show(out, "tote-bag", true));
        assert_eq!(outcome, Outcome::Success);

        let value: serde_json::Value = serde_json::from_str(&text).expect("json output");
        assert_eq!(value["id"], "tote-bag");
        assert_eq!(value["allowedPositions"], json!(["Front"]));
        assert_eq!(value["constraints"]["maxPositions"], 1);
        assert!(value["constraints"]["exclusivePositions"].is_null());
    }

    #[test]
    fn show_unknown_is_a_failure() {
        let (outcome, text) = render(|out| show(out, "spaceship", true));
        assert_eq!(outcome, Outcome::Failure);
        assert!(text.contains("Unknown product type: spaceship"));
    }

    #[test]
    fn info_text_marks_absent_rules() {
        let (_, text) = render(|out| info(out, "poster", false));
        assert!(text.contains("Max:      unlimited"));
        assert!(text.contains("Required: -"));
    }

    #[test]
    fn filter_prints_json_array() {
        let positions = vec!["Hood".to_owned(), "back".to_owned(), "Neck Label".to_owned()];
        let (_, text) = render(|out| filter(out, "hoodie", &positions, true));
        assert_eq!(text.trim(), r#"["Hood","back"]"#);
    }
}
