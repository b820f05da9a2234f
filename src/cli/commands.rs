//! Command implementations for the lexnorm CLI.

use std::fs::File;
use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

use anyhow::Context;
use csv::{Reader, ReaderBuilder, StringRecord, WriterBuilder};
use log::{debug, info};

use crate::analysis::morphology::DictionaryMorphAnalyzer;
use crate::cli::args::*;
use crate::cli::output::*;
use crate::config::ResourceConfig;
use crate::error::{LexnormError, Result};
use crate::pipeline::{AnswerRecord, OUTPUT_COLUMNS, Pipeline};
use crate::resources::ResourceStore;
use crate::spelling::corrector::SpellingCorrector;
use crate::spelling::dictionary::SpellingDictionary;

/// Execute a CLI command.
pub fn execute_command(args: LexnormArgs) -> Result<()> {
    match &args.command {
        Command::Normalize(normalize_args) => normalize_csv(normalize_args.clone(), &args),
        Command::Correct(correct_args) => correct_words(correct_args.clone(), &args),
        Command::Analyze(analyze_args) => analyze_answer(analyze_args.clone(), &args),
    }
}

/// Load the resource store and the lexicon analyzer named by `config`.
pub fn load_pipeline(config: &ResourceConfig) -> Result<Pipeline> {
    config.validate()?;
    let analyzer = DictionaryMorphAnalyzer::load_from_file(config.morphology_path()?)?;
    let store = ResourceStore::load(config, Arc::new(analyzer))?;
    Ok(Pipeline::new(Arc::new(store)))
}

/// Normalize the answer column of a CSV file.
fn normalize_csv(args: NormalizeArgs, cli_args: &LexnormArgs) -> Result<()> {
    if !args.delimiter.is_ascii() {
        return Err(LexnormError::config(format!(
            "delimiter '{}' is not an ASCII character",
            args.delimiter
        )));
    }
    let delimiter = args.delimiter as u8;
    let start = Instant::now();

    let mut reader = ReaderBuilder::new()
        .delimiter(delimiter)
        .from_path(&args.input)
        .map_err(|e| LexnormError::resource(&args.input, e.to_string()))?;
    let headers = reader.headers()?.clone();
    let column = find_column(&headers, &args.column)?;

    let config = args.resources.resolve()?;
    let pipeline = load_pipeline(&config)?;

    let rows = read_rows(&mut reader, &args.input)?;
    let answers: Vec<&str> = rows.iter().map(|row| row.get(column).unwrap_or("")).collect();
    info!("normalizing {} answers from {}", answers.len(), args.input.display());

    let records = if args.parallel {
        pipeline.derive_batch(&answers)
    } else {
        answers.iter().map(|answer| pipeline.derive(answer)).collect()
    };

    write_records(&args.output, delimiter, &headers, &rows, &records)?;

    let summary = NormalizeSummary {
        input: args.input.to_string_lossy().to_string(),
        output: args.output.to_string_lossy().to_string(),
        column: args.column.clone(),
        rows: records.len(),
        out_of_vocabulary: records.iter().map(|r| r.out_of_vocabulary).sum(),
        with_negation: records.iter().filter(|r| r.has_negation).count(),
        with_temporal: records.iter().filter(|r| r.has_temporal).count(),
        duration_ms: start.elapsed().as_millis() as u64,
    };
    output_result("Normalization completed", &summary, cli_args)
}

/// Position of `name` in the header row.
pub fn find_column(headers: &StringRecord, name: &str) -> Result<usize> {
    headers
        .iter()
        .position(|header| header == name)
        .ok_or_else(|| LexnormError::missing_column(name))
}

/// Read every data row, naming the file and line of the first bad one.
fn read_rows(reader: &mut Reader<File>, path: &Path) -> Result<Vec<StringRecord>> {
    let mut rows = Vec::new();
    for (index, row) in reader.records().enumerate() {
        let row =
            row.with_context(|| format!("reading {} at line {}", path.display(), index + 2))?;
        rows.push(row);
    }
    Ok(rows)
}

/// Write the input rows followed by the derived columns.
fn write_records(
    path: &Path,
    delimiter: u8,
    headers: &StringRecord,
    rows: &[StringRecord],
    records: &[AnswerRecord],
) -> Result<()> {
    let mut writer = WriterBuilder::new()
        .delimiter(delimiter)
        .from_path(path)
        .map_err(|e| LexnormError::resource(path, e.to_string()))?;

    let mut header = headers.clone();
    for name in OUTPUT_COLUMNS {
        header.push_field(name);
    }
    writer
        .write_record(&header)
        .with_context(|| format!("writing header to {}", path.display()))?;

    for (index, (row, record)) in rows.iter().zip(records).enumerate() {
        let mut out = row.clone();
        for value in record.output_values() {
            out.push_field(&value);
        }
        writer
            .write_record(&out)
            .with_context(|| format!("writing {} at line {}", path.display(), index + 2))?;
    }
    writer
        .flush()
        .with_context(|| format!("flushing {}", path.display()))?;

    debug!("wrote {} rows to {}", records.len(), path.display());
    Ok(())
}

/// Print corrections and candidates for words.
fn correct_words(args: CorrectArgs, cli_args: &LexnormArgs) -> Result<()> {
    let config = args.resources.resolve()?;
    config.spelling.validate()?;
    let dictionary = SpellingDictionary::load_from_frequency_file(config.dictionary_path()?)?;
    let corrector = SpellingCorrector::with_config(&dictionary, config.spelling.clone())?;

    let reports = args
        .words
        .iter()
        .map(|word| {
            let correction = corrector.correct(word);
            let mut candidates = corrector.lookup(word);
            if !args.all {
                candidates.truncate(1);
            }
            CorrectionReport {
                word: word.clone(),
                correction: correction.term,
                accepted: correction.accepted,
                candidates,
            }
        })
        .collect();

    output_result(
        "Spelling corrections",
        &CorrectionReports { reports },
        cli_args,
    )
}

/// Print the derived record of one answer.
fn analyze_answer(args: AnalyzeArgs, cli_args: &LexnormArgs) -> Result<()> {
    let config = args.resources.resolve()?;
    let pipeline = load_pipeline(&config)?;
    let record = pipeline.derive(&args.answer);
    output_result("Answer analysis", &record, cli_args)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;

    #[test]
    fn test_find_column() {
        let headers = StringRecord::from(vec!["id", "answer"]);
        assert_eq!(find_column(&headers, "answer").unwrap(), 1);
        assert!(matches!(
            find_column(&headers, "profession"),
            Err(LexnormError::Config(_))
        ));
    }

    #[test]
    fn test_read_rows_names_bad_line() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "id,answer").unwrap();
        writeln!(file, "1,врач").unwrap();
        writeln!(file, "2,повар,лишнее").unwrap();

        let mut reader = ReaderBuilder::new().from_path(file.path()).unwrap();
        reader.headers().unwrap();
        let err = read_rows(&mut reader, file.path()).unwrap_err();

        assert!(matches!(err, LexnormError::Anyhow(_)));
        assert!(err.to_string().contains("at line 3"));
    }
}
