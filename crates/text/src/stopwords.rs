use std::collections::HashSet;

/// Decides which tokens of a passage are not worth disambiguating
pub trait TokenFilter: Send + Sync {
    /// True for stopwords and punctuation-only tokens
    fn is_skippable(&self, token: &str) -> bool;
}

/// English function words (the NLTK `stopwords.words('english')` list).
pub const ENGLISH_STOPWORDS: &[&str] = &[
    "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "you're", "you've",
    "you'll", "you'd", "your", "yours", "yourself", "yourselves", "he", "him", "his", "himself",
    "she", "she's", "her", "hers", "herself", "it", "it's", "its", "itself", "they", "them",
    "their", "theirs", "themselves", "what", "which", "who", "whom", "this", "that", "that'll",
    "these", "those", "am", "is", "are", "was", "were", "be", "been", "being", "have", "has",
    "had", "having", "do", "does", "did", "doing", "a", "an", "the", "and", "but", "if", "or",
    "because", "as", "until", "while", "of", "at", "by", "for", "with", "about", "against",
    "between", "into", "through", "during", "before", "after", "above", "below", "to", "from",
    "up", "down", "in", "out", "on", "off", "over", "under", "again", "further", "then", "once",
    "here", "there", "when", "where", "why", "how", "all", "any", "both", "each", "few", "more",
    "most", "other", "some", "such", "no", "nor", "not", "only", "own", "same", "so", "than",
    "too", "very", "s", "t", "can", "will", "just", "don", "don't", "should", "should've", "now",
    "d", "ll", "m", "o", "re", "ve", "y", "ain", "aren", "aren't", "couldn", "couldn't", "didn",
    "didn't", "doesn", "doesn't", "hadn", "hadn't", "hasn", "hasn't", "haven", "haven't", "isn",
    "isn't", "ma", "mightn", "mightn't", "mustn", "mustn't", "needn", "needn't", "shan",
    "shan't", "shouldn", "shouldn't", "wasn", "wasn't", "weren", "weren't", "won", "won't",
    "wouldn", "wouldn't",
];

/// Stopword list plus a punctuation-only rule.
///
/// Stopword matching is exact: callers lower-case tokens before asking.
#[derive(Debug, Clone)]
pub struct StopwordFilter {
    stopwords: HashSet<String>,
}

impl StopwordFilter {
    /// Filter backed by [`ENGLISH_STOPWORDS`]
    pub fn english() -> Self {
        Self {
            stopwords: ENGLISH_STOPWORDS.iter().map(|w| (*w).to_string()).collect(),
        }
    }

    /// Filter with no stopwords; only punctuation is skipped
    pub fn punctuation_only() -> Self {
        Self {
            stopwords: HashSet::new(),
        }
    }

    /// Builder: add extra stopwords (lower-cased on insert)
    #[must_use]
    pub fn with_extra<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.stopwords
            .extend(words.into_iter().map(|w| w.as_ref().to_lowercase()));
        self
    }

    #[must_use]
    pub fn is_stopword(&self, token: &str) -> bool {
        self.stopwords.contains(token)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.stopwords.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stopwords.is_empty()
    }
}

impl Default for StopwordFilter {
    fn default() -> Self {
        Self::english()
    }
}

impl TokenFilter for StopwordFilter {
    fn is_skippable(&self, token: &str) -> bool {
        self.is_stopword(token) || is_punctuation(token)
    }
}

/// True when the token has no letters, digits or whitespace
#[must_use]
pub fn is_punctuation(token: &str) -> bool {
    token
        .chars()
        .all(|c| !c.is_alphanumeric() && !c.is_whitespace())
}
