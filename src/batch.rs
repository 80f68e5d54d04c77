//! Bulk processing of name records.
//!
//! Normalization and pairing are pure functions of a single name, so a corpus
//! is processed one name (or one record) per unit of work on the rayon thread
//! pool. Output order always follows input order.
//!
//! Records come from CSV files with a header row:
//!
//! ```csv
//! name,alt_name,frequency
//! john smith,jan smythe,12
//! maria,marie,3
//! ```
//!
//! `frequency` is optional and defaults to 1. It is carried through to every
//! training pair of its record unchanged; aggregation is left to the caller.

use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::analysis::normalizer::Normalizer;
use crate::analysis::policy::NameKind;
use crate::error::Result;
use crate::pairing::match_name_pairs;

fn default_frequency() -> u64 {
    1
}

/// One observed (name, alternate name) co-occurrence.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameRecord {
    pub name: String,
    pub alt_name: String,
    #[serde(default = "default_frequency")]
    pub frequency: u64,
}

impl NameRecord {
    pub fn new<S: Into<String>>(name: S, alt_name: S, frequency: u64) -> Self {
        NameRecord {
            name: name.into(),
            alt_name: alt_name.into(),
            frequency,
        }
    }
}

/// An aligned (piece, alternate piece) training signal.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainingPair {
    pub name: String,
    pub alt_name: String,
    pub frequency: u64,
}

/// Normalize many names in parallel, preserving input order.
pub fn normalize_all<S>(normalizer: &Normalizer, names: &[S], kind: NameKind) -> Vec<Vec<String>>
where
    S: AsRef<str> + Sync,
{
    names
        .par_iter()
        .map(|name| normalizer.normalize(name.as_ref(), kind, false))
        .collect()
}

fn record_pairs(normalizer: &Normalizer, record: &NameRecord, kind: NameKind) -> Vec<TrainingPair> {
    let name_pieces = normalizer.normalize(&record.name, kind, false);
    let alt_pieces = normalizer.normalize(&record.alt_name, kind, false);

    if name_pieces.is_empty() || alt_pieces.is_empty() {
        log::warn!(
            "skipping record {:?} -> {:?}: no usable name pieces",
            record.name,
            record.alt_name
        );
        return Vec::new();
    }

    match_name_pairs(&name_pieces, &alt_pieces)
        .into_iter()
        .map(|(name, alt_name)| TrainingPair {
            name,
            alt_name,
            frequency: record.frequency,
        })
        .collect()
}

/// Normalize and pair every record, in parallel.
///
/// Records where either side normalizes to nothing contribute no pairs.
pub fn training_pairs(
    normalizer: &Normalizer,
    records: &[NameRecord],
    kind: NameKind,
) -> Vec<TrainingPair> {
    let per_record: Vec<Vec<TrainingPair>> = records
        .par_iter()
        .map(|record| record_pairs(normalizer, record, kind))
        .collect();

    let pairs: Vec<TrainingPair> = per_record.into_iter().flatten().collect();
    log::info!(
        "extracted {} training pairs from {} records",
        pairs.len(),
        records.len()
    );
    pairs
}

/// Read records from CSV, dropping rows with an empty name or alternate name.
pub fn read_records<R: Read>(reader: R) -> Result<Vec<NameRecord>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut records = Vec::new();
    for row in csv_reader.deserialize() {
        let record: NameRecord = row?;
        if record.name.is_empty() || record.alt_name.is_empty() {
            log::debug!("dropping incomplete record {record:?}");
            continue;
        }
        records.push(record);
    }
    Ok(records)
}

/// Read records from a CSV file.
pub fn read_records_from_path<P: AsRef<Path>>(path: P) -> Result<Vec<NameRecord>> {
    read_records(File::open(path)?)
}

/// Write training pairs as CSV with a header row.
pub fn write_pairs<W: Write>(writer: W, pairs: &[TrainingPair]) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for pair in pairs {
        csv_writer.serialize(pair)?;
    }
    csv_writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn normalizer() -> Normalizer {
        Normalizer::with_defaults().unwrap()
    }

    #[test]
    fn test_normalize_all_preserves_order() {
        let names = vec!["John Paul", "Василий", "", "j0hn"];
        let normalized = normalize_all(&normalizer(), &names, NameKind::GivenName);
        assert_eq!(
            normalized,
            vec![
                vec!["john".to_string(), "paul".to_string()],
                vec!["vasilii".to_string()],
                vec![],
                vec!["jhn".to_string()],
            ]
        );
    }

    #[test]
    fn test_training_pairs() {
        let records = vec![
            NameRecord::new("John Smith", "Jan Smythe Brown", 4),
            NameRecord::new("", "Nobody", 1),
            NameRecord::new("Maria", "Marie", 2),
        ];
        let pairs = training_pairs(&normalizer(), &records, NameKind::GivenName);
        assert_eq!(
            pairs,
            vec![
                TrainingPair {
                    name: "smith".to_string(),
                    alt_name: "smythe".to_string(),
                    frequency: 4,
                },
                TrainingPair {
                    name: "john".to_string(),
                    alt_name: "jan".to_string(),
                    frequency: 4,
                },
                TrainingPair {
                    name: "maria".to_string(),
                    alt_name: "marie".to_string(),
                    frequency: 2,
                },
            ]
        );
    }

    #[test]
    fn test_read_records() {
        let csv = "name,alt_name,frequency\njohn,jan,3\n,missing,1\nmaria, marie ,7\n";
        let records = read_records(csv.as_bytes()).unwrap();
        assert_eq!(
            records,
            vec![NameRecord::new("john", "jan", 3), NameRecord::new("maria", "marie", 7)]
        );
    }

    #[test]
    fn test_read_records_default_frequency() {
        let csv = "name,alt_name\njohn,jan\n";
        let records = read_records(csv.as_bytes()).unwrap();
        assert_eq!(records, vec![NameRecord::new("john", "jan", 1)]);
    }

    #[test]
    fn test_read_records_rejects_bad_frequency() {
        let csv = "name,alt_name,frequency\njohn,jan,many\n";
        assert!(read_records(csv.as_bytes()).is_err());
    }

    #[test]
    fn test_write_pairs() {
        let pairs = vec![TrainingPair {
            name: "john".to_string(),
            alt_name: "jan".to_string(),
            frequency: 2,
        }];
        let mut buffer = Vec::new();
        write_pairs(&mut buffer, &pairs).unwrap();
        assert_eq!(
            String::from_utf8(buffer).unwrap(),
            "name,alt_name,frequency\njohn,jan,2\n"
        );
    }
}
