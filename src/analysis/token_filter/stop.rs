//! Stop filter implementation.
//!
//! This module provides a filter that removes stop words: high-frequency
//! function words and domain words that carry no information about a
//! respondent's profession. The stop set is the union of a base list and an
//! extra list; both ship with Russian defaults and both can be replaced.
//!
//! # Examples
//!
//! ```
//! use lexnorm::analysis::token_filter::Filter;
//! use lexnorm::analysis::token_filter::stop::StopFilter;
//! use lexnorm::analysis::token::Token;
//!
//! let filter = StopFilter::new();
//! let tokens = vec![
//!     Token::new("старший", 0),
//!     Token::new("менеджер", 1),
//!     Token::new("бухгалтер", 2),
//! ];
//!
//! let result: Vec<_> = filter.filter(Box::new(tokens.into_iter())).collect();
//!
//! // "менеджер" is in the default extra list
//! assert_eq!(result.len(), 2);
//! assert_eq!(result[1].text, "бухгалтер");
//! ```

use std::collections::HashSet;
use std::sync::Arc;

use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::Filter;

/// Default Russian stop words (function words).
pub const DEFAULT_RUSSIAN_STOP_WORDS: &[&str] = &[
    "и", "в", "во", "не", "что", "он", "на", "я", "с", "со", "как", "а", "то", "все", "она",
    "так", "его", "но", "да", "ты", "к", "у", "же", "вы", "за", "бы", "по", "только", "ее",
    "мне", "было", "вот", "от", "меня", "еще", "нет", "о", "из", "ему", "теперь", "когда",
    "даже", "ну", "вдруг", "ли", "если", "уже", "или", "ни", "быть", "был", "него", "до", "вас",
    "нибудь", "опять", "уж", "вам", "ведь", "там", "потом", "себя", "ничего", "ей", "может",
    "они", "тут", "где", "есть", "надо", "ней", "для", "мы", "тебя", "их", "чем", "была", "сам",
    "чтоб", "без", "будто", "чего", "раз", "тоже", "себе", "под", "будет", "ж", "тогда", "кто",
    "этот", "того", "потому", "этого", "какой", "совсем", "ним", "здесь", "этом", "один",
    "почти", "мой", "тем", "чтобы", "нее", "сейчас", "были", "куда", "зачем", "всех",
    "никогда", "можно", "при", "наконец", "два", "об", "другой", "хоть", "после", "над",
    "больше", "тот", "через", "эти", "нас", "про", "всего", "них", "какая", "много", "разве",
    "три", "эту", "моя", "впрочем", "хорошо", "свою", "этой", "перед", "иногда", "лучше",
    "чуть", "том", "нельзя", "такой", "им", "более", "всегда", "конечно", "всю", "между",
];

/// Default domain stop words: lemmas that describe a status or a workplace
/// rather than an occupation.
pub const DEFAULT_EXTRA_STOP_WORDS: &[&str] = &[
    "участок",
    "отдел",
    "группа",
    "другой",
    "работа",
    "госуправление",
    "менеджер",
    "посредничество",
    "школьник",
    "безработный",
    "студент",
    "студентка",
    "ученик",
    "ученица",
    "поиск",
    "учёба",
    "школа",
    "родитель",
    "шея",
    "курс",
    "стипендия",
    "мама",
    "пенсионер",
    "пенсия",
    "год",
    "класс",
    "маленький",
];

/// A filter that removes stop words from the token stream.
///
/// Membership is exact; tokens are expected to be lemmatized and lowercased
/// before reaching this filter.
#[derive(Clone, Debug)]
pub struct StopFilter {
    /// The set of stop words to remove
    stop_words: Arc<HashSet<String>>,
}

impl StopFilter {
    /// Create a stop filter with the default base and extra lists.
    pub fn new() -> Self {
        Self::from_words(
            DEFAULT_RUSSIAN_STOP_WORDS
                .iter()
                .chain(DEFAULT_EXTRA_STOP_WORDS.iter())
                .copied(),
        )
    }

    /// Create a new stop filter with custom stop words.
    pub fn with_stop_words(stop_words: HashSet<String>) -> Self {
        StopFilter {
            stop_words: Arc::new(stop_words),
        }
    }

    /// Create a new stop filter from a list of stop words.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let stop_words = words.into_iter().map(|s| s.into()).collect();
        Self::with_stop_words(stop_words)
    }

    /// Create a stop filter from the union of a base and an extra list.
    pub fn from_base_and_extra<I, J, S, T>(base: I, extra: J) -> Self
    where
        I: IntoIterator<Item = S>,
        J: IntoIterator<Item = T>,
        S: Into<String>,
        T: Into<String>,
    {
        let mut stop_words: HashSet<String> = base.into_iter().map(|s| s.into()).collect();
        stop_words.extend(extra.into_iter().map(|s| s.into()));
        Self::with_stop_words(stop_words)
    }

    /// Check if a word is a stop word.
    pub fn is_stop_word(&self, word: &str) -> bool {
        self.stop_words.contains(word)
    }

    /// Get the number of stop words.
    pub fn len(&self) -> usize {
        self.stop_words.len()
    }

    /// Check if the stop word set is empty.
    pub fn is_empty(&self) -> bool {
        self.stop_words.is_empty()
    }
}

impl Default for StopFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl Filter for StopFilter {
    fn filter<'a>(&'a self, tokens: TokenStream<'a>) -> TokenStream<'a> {
        Box::new(tokens.filter(move |token| !self.is_stop_word(&token.text)))
    }

    fn name(&self) -> &'static str {
        "stop"
    }
}
