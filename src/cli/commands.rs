//! Command implementations for the Nomina CLI.

use std::fs::File;
use std::io;
use std::time::Instant;

use crate::analysis::normalizer::Normalizer;
use crate::analysis::policy::NameKind;
use crate::batch;
use crate::cli::args::*;
use crate::cli::output::*;
use crate::error::Result;
use crate::pairing::match_name_pairs_scored;
use crate::similarity::similarity;
use crate::vocabulary::NameVocabulary;

/// Execute a CLI command.
pub fn execute_command(args: NominaArgs) -> Result<()> {
    match &args.command {
        Command::Normalize(normalize_args) => normalize_name(normalize_args, &args),
        Command::Similarity(similarity_args) => score_similarity(similarity_args, &args),
        Command::Pair(pair_args) => pair_names(pair_args, &args),
        Command::Prepare(prepare_args) => prepare_pairs(prepare_args, &args),
    }
}

/// Build the normalizer from the configured vocabulary.
fn load_normalizer(cli_args: &NominaArgs) -> Result<Normalizer> {
    let vocabulary = match &cli_args.vocabulary {
        Some(path) => {
            log::info!("loading vocabulary from {}", path.display());
            let loaded = NameVocabulary::from_path(path)?;
            if cli_args.extend_vocabulary {
                NameVocabulary::default().merged_with(&loaded)
            } else {
                loaded
            }
        }
        None => NameVocabulary::default(),
    };
    Normalizer::new(&vocabulary)
}

fn normalize_name(args: &NormalizeArgs, cli_args: &NominaArgs) -> Result<()> {
    let normalizer = load_normalizer(cli_args)?;
    let kind = NameKind::from_surname_flag(args.surname);
    let pieces = normalizer.normalize(&args.name, kind, args.preserve_wildcards);

    output_result(
        "Normalized name",
        &NormalizeResult {
            input: args.name.clone(),
            kind,
            pieces,
        },
        cli_args,
    )
}

fn score_similarity(args: &SimilarityArgs, cli_args: &NominaArgs) -> Result<()> {
    output_result(
        "Similarity",
        &SimilarityResult {
            a: args.a.clone(),
            b: args.b.clone(),
            similarity: similarity(&args.a, &args.b),
        },
        cli_args,
    )
}

fn pair_names(args: &PairArgs, cli_args: &NominaArgs) -> Result<()> {
    let normalizer = load_normalizer(cli_args)?;
    let kind = NameKind::from_surname_flag(args.surname);
    let name_pieces = normalizer.normalize(&args.name, kind, false);
    let alt_pieces = normalizer.normalize(&args.alt_name, kind, false);
    let pairs = match_name_pairs_scored(&name_pieces, &alt_pieces);

    output_result(
        "Name pairs",
        &PairResult {
            name_pieces,
            alt_pieces,
            pairs,
        },
        cli_args,
    )
}

fn prepare_pairs(args: &PrepareArgs, cli_args: &NominaArgs) -> Result<()> {
    let start = Instant::now();
    let normalizer = load_normalizer(cli_args)?;
    let kind = NameKind::from_surname_flag(args.surname);

    let records = batch::read_records_from_path(&args.input)?;
    log::info!("read {} records from {}", records.len(), args.input.display());

    let pairs = batch::training_pairs(&normalizer, &records, kind);

    match &args.output {
        Some(path) => batch::write_pairs(File::create(path)?, &pairs)?,
        None => {
            // Pairs themselves are the output; the summary goes to the log.
            batch::write_pairs(io::stdout().lock(), &pairs)?;
            log::info!("wrote {} pairs in {:?}", pairs.len(), start.elapsed());
            return Ok(());
        }
    }

    output_result(
        "Training pairs written",
        &PrepareResult {
            records: records.len(),
            pairs: pairs.len(),
            output: args.output.as_ref().map(|p| p.display().to_string()),
            duration_ms: start.elapsed().as_millis() as u64,
        },
        cli_args,
    )
}
