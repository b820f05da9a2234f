//! Output formatting for CLI commands.

use serde::{Deserialize, Serialize};

use crate::cli::args::{LexnormArgs, OutputFormat};
use crate::error::Result;
use crate::spelling::suggest::Suggestion;

/// Result structure for CSV normalization.
#[derive(Debug, Serialize, Deserialize)]
pub struct NormalizeSummary {
    pub input: String,
    pub output: String,
    pub column: String,
    pub rows: usize,
    pub out_of_vocabulary: usize,
    pub with_negation: usize,
    pub with_temporal: usize,
    pub duration_ms: u64,
}

/// Spelling diagnostics for one word.
#[derive(Debug, Serialize, Deserialize)]
pub struct CorrectionReport {
    pub word: String,
    pub correction: String,
    pub accepted: bool,
    pub candidates: Vec<Suggestion>,
}

/// Spelling diagnostics for every requested word.
#[derive(Debug, Serialize, Deserialize)]
pub struct CorrectionReports {
    pub reports: Vec<CorrectionReport>,
}

/// Output a result in the specified format.
pub fn output_result<T: Serialize>(message: &str, result: &T, args: &LexnormArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => output_human(message, result, args),
        OutputFormat::Json => output_json(result, args),
    }
}

/// Output in human-readable format.
fn output_human<T: Serialize>(message: &str, result: &T, args: &LexnormArgs) -> Result<()> {
    if args.verbosity() > 0 {
        println!("{message}");
        println!();
    }

    let value = serde_json::to_value(result)?;

    match result {
        _ if std::any::type_name::<T>().contains("CorrectionReports") => {
            output_corrections_human(&value, args)
        }
        _ => output_generic_human(&value, args),
    }
}

/// Output spelling diagnostics in human format.
fn output_corrections_human(value: &serde_json::Value, _args: &LexnormArgs) -> Result<()> {
    let Some(reports) = value.get("reports").and_then(|r| r.as_array()) else {
        return Ok(());
    };

    for report in reports {
        let word = report.get("word").and_then(|w| w.as_str()).unwrap_or("");
        let correction = report
            .get("correction")
            .and_then(|c| c.as_str())
            .unwrap_or("");
        let accepted = report
            .get("accepted")
            .and_then(|a| a.as_bool())
            .unwrap_or(false);

        if accepted {
            println!("{word} -> {correction}");
        } else {
            println!("{word} -> {correction} (out of vocabulary)");
        }

        if let Some(candidates) = report.get("candidates").and_then(|c| c.as_array()) {
            for candidate in candidates {
                let term = candidate.get("term").and_then(|t| t.as_str()).unwrap_or("");
                let distance = candidate
                    .get("distance")
                    .and_then(|d| d.as_u64())
                    .unwrap_or(0);
                let frequency = candidate
                    .get("frequency")
                    .and_then(|f| f.as_u64())
                    .unwrap_or(0);
                println!("  {term} (distance {distance}, frequency {frequency})");
            }
        }
    }
    Ok(())
}

/// Output generic data in human format.
fn output_generic_human(value: &serde_json::Value, _args: &LexnormArgs) -> Result<()> {
    match value {
        serde_json::Value::Object(obj) => {
            for (key, val) in obj {
                let formatted_val = format_value(val);
                println!("{key}: {formatted_val}");
            }
        }
        _ => {
            let formatted_value = format_value(value);
            println!("{formatted_value}");
        }
    }
    Ok(())
}

/// Output in JSON format.
fn output_json<T: Serialize>(result: &T, args: &LexnormArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };

    println!("{json}");
    Ok(())
}

/// Format a JSON value for human display.
fn format_value(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Number(n) => n.to_string(),
        serde_json::Value::Bool(b) => b.to_string(),
        serde_json::Value::Array(arr) => {
            let formatted_values = arr.iter().map(format_value).collect::<Vec<_>>().join(", ");
            format!("[{formatted_values}]")
        }
        serde_json::Value::Object(_) => "[object]".to_string(),
        serde_json::Value::Null => "null".to_string(),
    }
}
