//! Output formatting for CLI commands.

use std::io;

use serde::{Deserialize, Serialize};

use crate::analysis::policy::NameKind;
use crate::cli::args::{NominaArgs, OutputFormat};
use crate::error::Result;
use crate::pairing::MatchPair;

/// Result structure for normalization.
#[derive(Debug, Serialize, Deserialize)]
pub struct NormalizeResult {
    pub input: String,
    pub kind: NameKind,
    pub pieces: Vec<String>,
}

/// Result structure for similarity scoring.
#[derive(Debug, Serialize, Deserialize)]
pub struct SimilarityResult {
    pub a: String,
    pub b: String,
    pub similarity: f64,
}

/// Result structure for pairing two name variants.
#[derive(Debug, Serialize, Deserialize)]
pub struct PairResult {
    pub name_pieces: Vec<String>,
    pub alt_pieces: Vec<String>,
    pub pairs: Vec<MatchPair>,
}

/// Result structure for bulk training-pair extraction.
#[derive(Debug, Serialize, Deserialize)]
pub struct PrepareResult {
    pub records: usize,
    pub pairs: usize,
    pub output: Option<String>,
    pub duration_ms: u64,
}

/// Output a result in the requested format.
pub fn output_result<T: Serialize>(message: &str, result: &T, args: &NominaArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => output_human(message, result, args),
        OutputFormat::Json => output_json(result, args),
        OutputFormat::Csv => output_csv(result),
    }
}

/// Output in human-readable format.
fn output_human<T: Serialize>(message: &str, result: &T, args: &NominaArgs) -> Result<()> {
    if args.verbosity() > 1 {
        println!("{message}");
        println!();
    }

    let value = serde_json::to_value(result)?;
    match value {
        serde_json::Value::Object(obj) => {
            for (key, val) in obj {
                println!("{key}: {}", format_value(&val));
            }
        }
        other => println!("{}", format_value(&other)),
    }
    Ok(())
}

/// Output in JSON format.
fn output_json<T: Serialize>(result: &T, args: &NominaArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };

    println!("{json}");
    Ok(())
}

/// Output a single object as key,value rows.
fn output_csv<T: Serialize>(result: &T) -> Result<()> {
    let value = serde_json::to_value(result)?;
    let mut writer = csv::Writer::from_writer(io::stdout());

    writer.write_record(["key", "value"])?;
    if let serde_json::Value::Object(obj) = value {
        for (key, val) in obj {
            writer.write_record([key, format_value(&val)])?;
        }
    }
    writer.flush()?;
    Ok(())
}

/// Format a JSON value for display.
pub fn format_value(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Number(n) => n.to_string(),
        serde_json::Value::Bool(b) => b.to_string(),
        serde_json::Value::Null => "-".to_string(),
        serde_json::Value::Array(arr) => {
            let items: Vec<String> = arr.iter().map(format_value).collect();
            format!("[{}]", items.join(", "))
        }
        serde_json::Value::Object(obj) => {
            let items: Vec<String> = obj
                .iter()
                .map(|(k, v)| format!("{k}={}", format_value(v)))
                .collect();
            format!("({})", items.join(" "))
        }
    }
}
