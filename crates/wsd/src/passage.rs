use crate::config::{DisambiguatorConfig, ExecutionMode};
use crate::error::Result;
use crate::scorer::SenseScorer;
use crate::types::{Disambiguation, GlossedDisambiguation, PassageEntry};
use rayon::prelude::*;
use sense_lexicon::SenseInventory;
use sense_text::{
    SentenceSegmenter, StopwordFilter, TokenFilter, UnicodeSegmenter, UnicodeTokenizer,
    WordTokenizer,
};

/// Disambiguates every content word of a passage, sentence by sentence.
///
/// Each sentence is lower-cased and tokenized; tokens the filter marks as
/// skippable are dropped and never scored. Every retained token is scored
/// against the full, unfiltered sentence. Results come back grouped per
/// sentence in document order whatever the [`ExecutionMode`].
pub struct PassageDisambiguator<
    I,
    S = UnicodeSegmenter,
    T = UnicodeTokenizer,
    F = StopwordFilter,
> {
    scorer: SenseScorer<I, T>,
    segmenter: S,
    filter: F,
    config: DisambiguatorConfig,
}

impl<I: SenseInventory> PassageDisambiguator<I> {
    /// Disambiguator with the Unicode segmenter/tokenizer and English stopwords
    pub fn new(inventory: I, config: DisambiguatorConfig) -> Result<Self> {
        config.validate()?;

        // only the caller's passage is size-checked; lower-casing may grow it
        let tokenizer = UnicodeTokenizer::new();
        let segmenter = UnicodeSegmenter::new().with_max_input_bytes(config.max_input_bytes);
        let filter = StopwordFilter::english().with_extra(&config.extra_stopwords);

        Ok(Self {
            scorer: SenseScorer::with_tokenizer(inventory, tokenizer),
            segmenter,
            filter,
            config,
        })
    }
}

impl<I, S, T, F> PassageDisambiguator<I, S, T, F>
where
    I: SenseInventory,
    S: SentenceSegmenter,
    T: WordTokenizer,
    F: TokenFilter,
{
    /// Disambiguator over caller-supplied collaborators
    pub fn with_collaborators(
        scorer: SenseScorer<I, T>,
        segmenter: S,
        filter: F,
        config: DisambiguatorConfig,
    ) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            scorer,
            segmenter,
            filter,
            config,
        })
    }

    pub const fn scorer(&self) -> &SenseScorer<I, T> {
        &self.scorer
    }

    pub const fn config(&self) -> &DisambiguatorConfig {
        &self.config
    }

    /// One inner list per sentence; entries are glossed when `with_glosses`
    pub fn disambiguate_passage(
        &self,
        text: &str,
        with_glosses: bool,
    ) -> Result<Vec<Vec<PassageEntry>>> {
        let sentences = self.disambiguate_sentences(text)?;

        Ok(sentences
            .into_iter()
            .map(|results| {
                results
                    .into_iter()
                    .map(|result| {
                        if with_glosses {
                            PassageEntry::Glossed(GlossedDisambiguation::new(
                                result,
                                &self.config.unknown_gloss,
                            ))
                        } else {
                            PassageEntry::Plain(result)
                        }
                    })
                    .collect()
            })
            .collect())
    }

    /// Glossed results, one inner list per sentence
    pub fn disambiguate_sentences_with_glosses(
        &self,
        text: &str,
    ) -> Result<Vec<Vec<GlossedDisambiguation>>> {
        let sentences = self.disambiguate_sentences(text)?;
        let unknown = self.config.unknown_gloss.as_str();

        Ok(sentences
            .into_iter()
            .map(|results| {
                results
                    .into_iter()
                    .map(|result| GlossedDisambiguation::new(result, unknown))
                    .collect()
            })
            .collect())
    }

    /// Plain results, one inner list per sentence
    pub fn disambiguate_sentences(&self, text: &str) -> Result<Vec<Vec<Disambiguation>>> {
        let sentences = self.segmenter.split_sentences(text)?;
        log::debug!(
            "Passage: {} sentences, mode={:?}",
            sentences.len(),
            self.config.execution
        );

        let results = match self.config.execution {
            ExecutionMode::ParallelSentences => sentences
                .par_iter()
                .map(|sentence| self.disambiguate_sentence(sentence))
                .collect::<Result<Vec<_>>>()?,
            ExecutionMode::Sequential | ExecutionMode::ParallelTokens => sentences
                .iter()
                .map(|sentence| self.disambiguate_sentence(sentence))
                .collect::<Result<Vec<_>>>()?,
        };

        log::info!(
            "Disambiguated {} words across {} sentences",
            results.iter().map(Vec::len).sum::<usize>(),
            results.len()
        );
        Ok(results)
    }

    /// Results for the retained tokens of a single sentence
    pub fn disambiguate_sentence(&self, sentence: &str) -> Result<Vec<Disambiguation>> {
        let targets = self.content_tokens(sentence)?;

        match self.config.execution {
            ExecutionMode::ParallelTokens => targets
                .par_iter()
                .map(|token| self.scorer.disambiguate(token, sentence))
                .collect(),
            ExecutionMode::Sequential | ExecutionMode::ParallelSentences => targets
                .iter()
                .map(|token| self.scorer.disambiguate(token, sentence))
                .collect(),
        }
    }

    /// Lower-cased tokens of `sentence` that survive the filter, in order
    pub fn content_tokens(&self, sentence: &str) -> Result<Vec<String>> {
        let tokens = self.scorer.tokenizer().tokenize(&sentence.to_lowercase())?;
        Ok(tokens
            .into_iter()
            .filter(|token| !self.filter.is_skippable(token))
            .collect())
    }
}
