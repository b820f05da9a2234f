use std::fs;
use std::path::{Path, PathBuf};

use clap::Parser;
use lexnorm::cli::args::LexnormArgs;
use lexnorm::cli::commands::execute_command;
use lexnorm::error::LexnormError;
use tempfile::TempDir;

fn write(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path
}

/// Resource files plus an input table in a fresh directory.
fn fixture() -> TempDir {
    let dir = TempDir::new().unwrap();
    write(
        dir.path(),
        "terms.txt",
        "электрик 5\nМенеджер 30\nпродажам 12\nинформационные 8\nтехнологии 9\nспециалист 40\n",
    );
    write(
        dir.path(),
        "abbreviation.csv",
        "abbreviation;meaning\nИТ;информационные технологии\n",
    );
    write(
        dir.path(),
        "lexicon.tsv",
        "электрик\tэлектрик\tNOUN\n\
         продажам\tпродажа\tNOUN,femn\n\
         информационные\tинформационный\tADJF\n\
         технологии\tтехнология\tNOUN\n\
         специалист\tспециалист\tNOUN\n",
    );
    write(
        dir.path(),
        "answers.csv",
        "id,answer\n1,элетрик\n2,Продажи | Менеджер по продажам\n3,\n4,ИТ специалист без опыта\n",
    );
    dir
}

fn resource_flags(dir: &Path) -> Vec<String> {
    vec![
        "--dictionary".to_string(),
        dir.join("terms.txt").display().to_string(),
        "--abbreviations".to_string(),
        dir.join("abbreviation.csv").display().to_string(),
        "--morphology".to_string(),
        dir.join("lexicon.tsv").display().to_string(),
    ]
}

fn normalize_args(dir: &Path, column: &str, parallel: bool) -> LexnormArgs {
    let mut argv = vec![
        "lexnorm".to_string(),
        "--quiet".to_string(),
        "normalize".to_string(),
        dir.join("answers.csv").display().to_string(),
        dir.join("out.csv").display().to_string(),
        "--column".to_string(),
        column.to_string(),
    ];
    if parallel {
        argv.push("--parallel".to_string());
    }
    argv.extend(resource_flags(dir));
    LexnormArgs::try_parse_from(argv).unwrap()
}

fn read_output(dir: &Path) -> Vec<Vec<String>> {
    let mut reader = csv::Reader::from_path(dir.join("out.csv")).unwrap();
    let mut rows = vec![reader.headers().unwrap().iter().map(String::from).collect()];
    for record in reader.records() {
        rows.push(record.unwrap().iter().map(String::from).collect());
    }
    rows
}

#[test]
fn test_normalize_writes_augmented_table() {
    let dir = fixture();
    execute_command(normalize_args(dir.path(), "answer", false)).unwrap();

    let rows = read_output(dir.path());
    assert_eq!(
        rows[0],
        vec![
            "id",
            "answer",
            "corrected",
            "n_out_of_vocab",
            "n_words",
            "n_verbs",
            "has_negative",
            "has_temporal",
            "tokenized",
            "normalized",
        ]
    );
    assert_eq!(rows.len(), 5);

    assert_eq!(rows[1][2], "электрик");
    assert_eq!(rows[1][3], "0");
    assert_eq!(rows[1][9], "электрик");

    assert_eq!(rows[2][1], "Продажи | Менеджер по продажам");
    assert_eq!(rows[2][2], "Менеджер по продажам");
    assert_eq!(rows[2][8], "менеджер по продажам");
    assert_eq!(rows[2][9], "продажа");

    assert_eq!(rows[3][4], "0");
    assert_eq!(rows[3][9], "");

    assert_eq!(rows[4][2], "информационные технологии специалист без опыта");
    assert_eq!(rows[4][6], "1");
    assert_eq!(rows[4][9], "информационный специалист технология");
}

#[test]
fn test_parallel_output_matches_sequential() {
    let dir = fixture();
    execute_command(normalize_args(dir.path(), "answer", false)).unwrap();
    let sequential = read_output(dir.path());

    execute_command(normalize_args(dir.path(), "answer", true)).unwrap();
    assert_eq!(read_output(dir.path()), sequential);
}

#[test]
fn test_missing_column_is_fatal() {
    let dir = fixture();
    let err = execute_command(normalize_args(dir.path(), "profession", false)).unwrap_err();
    assert!(matches!(err, LexnormError::Config(_)));
    assert!(!dir.path().join("out.csv").exists());
}

#[test]
fn test_missing_resource_is_fatal() {
    let dir = fixture();
    fs::remove_file(dir.path().join("lexicon.tsv")).unwrap();
    let err = execute_command(normalize_args(dir.path(), "answer", false)).unwrap_err();
    assert!(matches!(err, LexnormError::Resource { .. }));
    assert!(!dir.path().join("out.csv").exists());
}

#[test]
fn test_config_file() {
    let dir = fixture();
    let config = serde_json::json!({
        "dictionary_path": dir.path().join("terms.txt"),
        "abbreviations_path": dir.path().join("abbreviation.csv"),
        "morphology_path": dir.path().join("lexicon.tsv"),
    });
    let config_path = write(dir.path(), "lexnorm.json", &config.to_string());

    let args = LexnormArgs::try_parse_from([
        "lexnorm".to_string(),
        "--format".to_string(),
        "json".to_string(),
        "analyze".to_string(),
        "элетрик".to_string(),
        "--config".to_string(),
        config_path.display().to_string(),
    ])
    .unwrap();
    execute_command(args).unwrap();
}

#[test]
fn test_correct_command() {
    let dir = fixture();
    let mut argv = vec![
        "lexnorm".to_string(),
        "correct".to_string(),
        "элетрик".to_string(),
        "по".to_string(),
        "--all".to_string(),
    ];
    argv.extend(resource_flags(dir.path()));
    execute_command(LexnormArgs::try_parse_from(argv).unwrap()).unwrap();
}
