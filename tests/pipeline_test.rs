use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use lexnorm::abbreviation::AbbreviationMap;
use lexnorm::analysis::morphology::{
    DictionaryMorphAnalyzer, MorphAnalysis, MorphAnalyzer, tags,
};
use lexnorm::config::ResourceConfig;
use lexnorm::error::LexnormError;
use lexnorm::pipeline::Pipeline;
use lexnorm::resources::ResourceStore;
use lexnorm::spelling::corrector::SpellingCorrector;
use lexnorm::spelling::dictionary::{DictionaryEntry, SpellingDictionary};
use tempfile::TempDir;

/// Deterministic analyzer for the handful of words the scenarios use.
struct FixedAnalyzer;

impl MorphAnalyzer for FixedAnalyzer {
    fn analyze(&self, token: &str) -> Option<MorphAnalysis> {
        let analysis = match token {
            "информационные" => MorphAnalysis::new("информационный", [tags::ADJF]),
            "технологии" => MorphAnalysis::new("технология", [tags::NOUN]),
            "специалист" => MorphAnalysis::new("специалист", [tags::NOUN]),
            "электрик" => MorphAnalysis::new("электрик", [tags::NOUN]),
            "менеджер" => MorphAnalysis::new("менеджер", [tags::NOUN]),
            "продажам" => MorphAnalysis::new("продажа", [tags::NOUN]),
            "старший" => MorphAnalysis::new("старший", [tags::ADJF]),
            "работаю" => MorphAnalysis::new("работать", [tags::VERB]),
            "работать" => MorphAnalysis::new("работать", [tags::INFN]),
            "слесарь" => MorphAnalysis::new("слесарить", [tags::VERB]),
            _ => return None,
        };
        Some(analysis)
    }

    fn name(&self) -> &'static str {
        "fixed"
    }
}

fn store() -> ResourceStore {
    let dictionary = SpellingDictionary::from_entries([
        DictionaryEntry::new("электрик", 5),
        DictionaryEntry::new("специалист", 40),
        DictionaryEntry::new("информационные", 8),
        DictionaryEntry::new("технологии", 9),
        DictionaryEntry::new("Менеджер", 30),
        DictionaryEntry::new("продажам", 12),
        DictionaryEntry::new("Старший", 6),
        DictionaryEntry::new("работаю", 4),
        DictionaryEntry::new("работать", 4),
        DictionaryEntry::new("слесарь", 3),
        DictionaryEntry::new("сантехник", 0),
    ]);
    ResourceStore::builder(Arc::new(FixedAnalyzer))
        .dictionary(dictionary)
        .abbreviations(AbbreviationMap::from_pairs([(
            "ИТ",
            "информационные технологии",
        )]))
        .build()
        .unwrap()
}

fn pipeline() -> Pipeline {
    Pipeline::new(Arc::new(store()))
}

#[test]
fn test_misspelling_is_corrected() {
    let record = pipeline().derive("элетрик");
    assert_eq!(record.corrected, vec!["электрик"]);
    assert_eq!(record.out_of_vocabulary, 0);
    assert_eq!(record.normalized, vec!["электрик"]);
}

#[test]
fn test_abbreviation_is_expanded() {
    let record = pipeline().derive("ИТ специалист");
    assert_eq!(
        record.corrected,
        vec!["информационные", "технологии", "специалист"]
    );
    assert_eq!(record.word_count, 3);
    assert_eq!(
        record.normalized,
        vec!["информационный", "специалист", "технология"]
    );
}

#[test]
fn test_negation_flag() {
    let pipeline = pipeline();
    assert!(pipeline.derive("электрик без опыта").has_negation);
    assert!(!pipeline.derive("Старший электрик").has_negation);
}

#[test]
fn test_temporal_flag() {
    let pipeline = pipeline();
    assert!(pipeline.derive("был электрик").has_temporal);
    assert!(!pipeline.derive("электрик").has_temporal);
}

#[test]
fn test_category_value_is_selected() {
    let record = pipeline().derive("Продажи | Менеджер по продажам");
    assert_eq!(record.selected, "Менеджер по продажам");
    assert_eq!(record.corrected_text(), "Менеджер по продажам");
    assert_eq!(record.tokenized_text(), "менеджер по продажам");
    assert_eq!(record.normalized, vec!["продажа"]);
}

#[test]
fn test_sentinel_category_stays_joined() {
    let record = pipeline().derive("IT | Аналитик");
    assert_eq!(record.selected, "IT Аналитик");
    assert_eq!(record.word_count, 2);
}

#[test]
fn test_empty_answer() {
    let record = pipeline().derive("");
    assert_eq!(record.word_count, 0);
    assert_eq!(record.out_of_vocabulary, 0);
    assert!(record.tokens.is_empty());
    assert!(record.normalized.is_empty());
}

#[test]
fn test_short_words_are_out_of_vocabulary() {
    let record = pipeline().derive("ИП ООО");
    assert_eq!(record.corrected, vec!["ИП", "ООО"]);
    assert_eq!(record.out_of_vocabulary, 2);
}

#[test]
fn test_zero_frequency_match_is_out_of_vocabulary() {
    let record = pipeline().derive("сантехник");
    assert_eq!(record.corrected, vec!["сантехник"]);
    assert_eq!(record.out_of_vocabulary, 1);
}

#[test]
fn test_verb_count_honours_override() {
    let record = pipeline().derive("работаю слесарь хочу работать");
    assert_eq!(record.verb_count, 2);
    assert_eq!(record.normalized, vec!["слесарь"]);
}

#[test]
fn test_normalized_is_strictly_increasing() {
    let record = pipeline().derive("специалист ИТ специалист Старший электрик");
    assert!(record.normalized.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn test_derivation_is_deterministic() {
    let answers = vec![
        "элетрик",
        "ИТ специалист",
        "Продажи | Менеджер по продажам",
        "",
        "не работаю",
    ];
    let first = pipeline().derive_batch(&answers);
    let second = pipeline().derive_batch(&answers);
    assert_eq!(first, second);

    let sequential: Vec<_> = answers.iter().map(|a| pipeline().derive(a)).collect();
    assert_eq!(first, sequential);
}

#[test]
fn test_exact_terms_are_accepted() {
    let corrector = SpellingCorrector::new(&SpellingDictionary::from_entries([
        DictionaryEntry::new("электрик", 5),
        DictionaryEntry::new("инженер", 9),
    ]));
    for word in ["электрик", "инженер"] {
        let correction = corrector.correct(word);
        assert_eq!(correction.term, word);
        assert!(correction.accepted);
    }
}

fn write(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_store_from_resource_files() {
    let dir = TempDir::new().unwrap();
    let config = ResourceConfig {
        dictionary_path: Some(write(
            dir.path(),
            "terms.txt",
            "электрик 5\nспециалист 40\nинформационные 8\nтехнологии 9\n",
        )),
        abbreviations_path: Some(write(
            dir.path(),
            "abbreviation.csv",
            "abbreviation;meaning\nИТ;информационные технологии\n",
        )),
        extra_stopwords_path: Some(write(dir.path(), "extra.txt", "специалист\n")),
        ..Default::default()
    };
    let lexicon = write(
        dir.path(),
        "lexicon.tsv",
        "электрик\tэлектрик\tNOUN\nспециалист\tспециалист\tNOUN\nтехнологии\tтехнология\tNOUN\n",
    );
    let analyzer = DictionaryMorphAnalyzer::load_from_file(&lexicon).unwrap();

    let store = ResourceStore::load(&config, Arc::new(analyzer)).unwrap();
    let record = Pipeline::new(Arc::new(store)).derive("ИТ специалист");
    assert_eq!(record.normalized, vec!["технология"]);
}

#[test]
fn test_malformed_dictionary_row_is_reported() {
    let dir = TempDir::new().unwrap();
    let dictionary = write(dir.path(), "terms.txt", "электрик 5\nинженер много\n");
    let config = ResourceConfig {
        dictionary_path: Some(dictionary.clone()),
        abbreviations_path: Some(write(dir.path(), "abbr.csv", "abbreviation;meaning\n")),
        ..Default::default()
    };

    match ResourceStore::load(&config, Arc::new(FixedAnalyzer)) {
        Err(LexnormError::Dictionary { path, line, .. }) => {
            assert_eq!(path, dictionary);
            assert_eq!(line, 2);
        }
        other => panic!("expected dictionary error, got {other:?}"),
    }
}
