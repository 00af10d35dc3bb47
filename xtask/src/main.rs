//! Developer tasks (schema generation, report conformance, explain coverage).
//!
//! Keeping this separate avoids bloating the end-user CLI.

use anyhow::{Context, bail};
use schemars::schema_for;
use secctl_types::{EffectivenessStatus, IssueKind};
use std::fs;
use std::path::PathBuf;

/// Get the project root (parent of xtask directory).
fn project_root() -> anyhow::Result<PathBuf> {
    let manifest_dir = match std::env::var("CARGO_MANIFEST_DIR") {
        Ok(dir) => PathBuf::from(dir),
        Err(_) => std::env::current_dir().context("Cannot determine current directory")?,
    };

    // If we're in the xtask directory, go up one level
    if manifest_dir.ends_with("xtask")
        && let Some(parent) = manifest_dir.parent()
    {
        return Ok(parent.to_path_buf());
    }
    Ok(manifest_dir)
}

/// Get the schemas directory path.
fn schemas_dir() -> anyhow::Result<PathBuf> {
    Ok(project_root()?.join("schemas"))
}

/// Schema definition with its target filename.
struct SchemaSpec {
    filename: &'static str,
    generate: fn() -> schemars::Schema,
}

/// Generate the secctl report schema.
fn generate_report_schema() -> schemars::Schema {
    schema_for!(secctl_types::SecctlReport)
}

/// Generate the SecctlConfigV1 schema.
fn generate_config_schema() -> schemars::Schema {
    schema_for!(secctl_settings::SecctlConfigV1)
}

/// List of schemas to generate.
fn schema_specs() -> Vec<SchemaSpec> {
    vec![
        SchemaSpec {
            filename: "secctl.report.v1.json",
            generate: generate_report_schema,
        },
        SchemaSpec {
            filename: "secctl.config.v1.json",
            generate: generate_config_schema,
        },
    ]
}

/// Serialize a schema to pretty-printed JSON with trailing newline.
fn serialize_schema(schema: &schemars::Schema) -> anyhow::Result<String> {
    let mut json = serde_json::to_string_pretty(schema).context("Failed to serialize schema")?;
    json.push('\n');
    Ok(json)
}

/// Emit schemas to the schemas/ directory.
fn emit_schemas() -> anyhow::Result<()> {
    let dir = schemas_dir()?;

    if !dir.exists() {
        fs::create_dir_all(&dir).context("Failed to create schemas directory")?;
    }

    for spec in schema_specs() {
        let schema = (spec.generate)();
        let json = serialize_schema(&schema)?;
        let path = dir.join(spec.filename);

        fs::write(&path, &json)
            .with_context(|| format!("Failed to write schema to {}", path.display()))?;

        println!("Wrote {}", path.display());
    }

    println!("\nSchemas emitted successfully.");
    Ok(())
}

/// Validate that schemas in the repo match what would be generated.
fn validate_schemas() -> anyhow::Result<()> {
    let dir = schemas_dir()?;
    let mut missing = Vec::new();
    let mut mismatched = Vec::new();

    for spec in schema_specs() {
        let path = dir.join(spec.filename);

        if !path.exists() {
            missing.push(spec.filename);
            continue;
        }

        let schema = (spec.generate)();
        let expected = serialize_schema(&schema)?;
        let actual = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;

        if expected != actual {
            mismatched.push(spec.filename);
        }
    }

    if missing.is_empty() && mismatched.is_empty() {
        println!("All schemas are up to date.");
        return Ok(());
    }

    if !missing.is_empty() {
        eprintln!("Missing schemas:");
        for name in &missing {
            eprintln!("  - {}", name);
        }
    }
    if !mismatched.is_empty() {
        eprintln!("Schemas out of date:");
        for name in &mismatched {
            eprintln!("  - {}", name);
        }
    }
    eprintln!("\nRun `cargo xtask emit-schemas` to regenerate.");
    bail!("Schema validation failed")
}

fn print_help() {
    eprintln!("xtask commands:");
    eprintln!("  help              Show this message");
    eprintln!("  emit-schemas      Generate JSON schemas from Rust types to schemas/");
    eprintln!("  validate-schemas  Check if schemas/ matches generated output (for CI)");
    eprintln!("  print-schema-ids  Print known schema IDs");
    eprintln!("  conform           Validate a freshly produced report against the report schema");
    eprintln!("  explain-coverage  Validate all issue codes and statuses have explanations");
}

/// Token pattern for issue codes.
fn is_valid_token(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_lowercase() => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_')
}

/// `val-` followed by exactly six digits.
fn is_test_result_id(s: &str) -> bool {
    s.strip_prefix("val-")
        .is_some_and(|digits| digits.len() == 6 && digits.bytes().all(|b| b.is_ascii_digit()))
}

/// Report conformance.
///
/// This checks:
/// 1. Schema validation: a report from the built-in catalog validates against the generated schema
/// 2. Token hygiene: every issue code is a lowercase token
/// 3. Id hygiene: test result ids are `val-NNNNNN` and strictly increasing
/// 4. Arithmetic: `risk_remaining + effectiveness == 1` for every test result
fn conform() -> anyhow::Result<()> {
    let schema_value = serde_json::to_value(generate_report_schema())
        .context("Failed to convert report schema to JSON")?;
    let compiled = jsonschema::validator_for(&schema_value)
        .map_err(|e| anyhow::anyhow!("Failed to compile schema: {}", e))?;
    println!("✓ secctl.report.v1 schema compiles");

    let output = secctl_app::run_report(secctl_app::RunInput::default())
        .context("Failed to produce report")?;
    let bytes = secctl_app::serialize_report(&output.report)?;
    let value: serde_json::Value =
        serde_json::from_slice(&bytes).context("Failed to parse produced report")?;

    let mut errors: Vec<String> = compiled
        .iter_errors(&value)
        .map(|err| format!("schema validation: {}", err))
        .collect();

    if let Some(controls) = value.get("controls").and_then(|v| v.as_array()) {
        for (i, control) in controls.iter().enumerate() {
            let issues = control.get("issues").and_then(|v| v.as_array());
            for issue in issues.into_iter().flatten() {
                match issue.as_str() {
                    Some(code) if is_valid_token(code) => {}
                    _ => errors.push(format!("controls[{}]: issue {} is not a valid token", i, issue)),
                }
            }
        }
    }

    let mut last_id = String::new();
    for (i, test) in output.report.tests.iter().enumerate() {
        if !is_test_result_id(&test.id) {
            errors.push(format!("tests[{}].id '{}' is not val-NNNNNN", i, test.id));
        }
        if test.id <= last_id {
            errors.push(format!("tests[{}].id '{}' is not increasing", i, test.id));
        }
        last_id = test.id.clone();

        if (test.effectiveness + test.risk_remaining - 1.0).abs() > 1e-9 {
            errors.push(format!(
                "tests[{}]: risk_remaining {} does not complement effectiveness {}",
                i, test.risk_remaining, test.effectiveness
            ));
        }
    }

    if !errors.is_empty() {
        eprintln!("\nConformance errors:");
        for err in &errors {
            eprintln!("  - {}", err);
        }
        bail!("Conformance validation failed with {} errors", errors.len());
    }

    println!(
        "✓ report with {} controls and {} tests passes conformance checks",
        output.report.controls.len(),
        output.report.tests.len()
    );
    Ok(())
}

/// Validate that all issue codes and status labels have explanations.
fn explain_coverage() -> anyhow::Result<()> {
    let mut errors = Vec::new();

    let codes: Vec<&str> = IssueKind::ALL.iter().map(|k| k.code()).collect();
    let statuses: Vec<&str> = EffectivenessStatus::ALL.iter().map(|s| s.as_str()).collect();

    for identifier in codes.iter().chain(&statuses) {
        match secctl_types::lookup_explanation(identifier) {
            Some(exp) => {
                if exp.title.is_empty() {
                    errors.push(format!("'{}' has empty title", identifier));
                }
                if exp.description.is_empty() {
                    errors.push(format!("'{}' has empty description", identifier));
                }
                if exp.remediation.is_empty() {
                    errors.push(format!("'{}' has empty remediation", identifier));
                }
            }
            None => {
                errors.push(format!("'{}' has no explanation", identifier));
            }
        }
    }

    if errors.is_empty() {
        println!("✓ {} issue codes have explanations", codes.len());
        println!("✓ {} statuses have explanations", statuses.len());
        println!("\n✓ All explain coverage checks passed!");
        Ok(())
    } else {
        for error in &errors {
            eprintln!("  - {}", error);
        }
        bail!(
            "Explain coverage validation failed with {} errors",
            errors.len()
        )
    }
}

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let cmd = args.get(1).map(|s| s.as_str()).unwrap_or("help");

    match cmd {
        "help" | "--help" | "-h" => {
            print_help();
            Ok(())
        }
        "emit-schemas" => emit_schemas(),
        "validate-schemas" => validate_schemas(),
        "conform" => conform(),
        "explain-coverage" => explain_coverage(),
        "print-schema-ids" => {
            for spec in schema_specs() {
                let name = spec.filename.trim_end_matches(".json");
                println!("{}", name);
            }
            Ok(())
        }
        other => bail!("unknown xtask command: {other}\n\nRun `cargo xtask help` for usage."),
    }
    .context("xtask failed")
}
