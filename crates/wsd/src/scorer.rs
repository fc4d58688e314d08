use crate::error::Result;
use crate::types::{Disambiguation, SenseScore};
use sense_lexicon::{Sense, SenseInventory};
use sense_text::{UnicodeTokenizer, WordTokenizer};
use std::collections::HashSet;

/// Simplified Lesk scorer.
///
/// Picks the candidate whose signature (definition plus examples) shares the
/// most distinct lower-cased tokens with the sentence. A later candidate only
/// wins on a strictly larger overlap, so ties and the all-zero case fall back
/// to the inventory's first sense.
pub struct SenseScorer<I, T = UnicodeTokenizer> {
    inventory: I,
    tokenizer: T,
}

impl<I: SenseInventory> SenseScorer<I> {
    /// Scorer with the default Unicode tokenizer
    pub fn new(inventory: I) -> Self {
        Self::with_tokenizer(inventory, UnicodeTokenizer::new())
    }
}

impl<I: SenseInventory, T: WordTokenizer> SenseScorer<I, T> {
    pub const fn with_tokenizer(inventory: I, tokenizer: T) -> Self {
        Self {
            inventory,
            tokenizer,
        }
    }

    pub const fn inventory(&self) -> &I {
        &self.inventory
    }

    pub const fn tokenizer(&self) -> &T {
        &self.tokenizer
    }

    /// Best sense for `word` in `sentence`, or the word itself if unknown
    pub fn disambiguate(&self, word: &str, sentence: &str) -> Result<Disambiguation> {
        let mut scores = self.score_candidates(word, sentence)?;
        if scores.is_empty() {
            log::debug!("No senses for '{word}', passing through");
            return Ok(Disambiguation::Unresolved(word.to_string()));
        }

        let mut best = 0;
        let mut max_overlap = 0;
        for (idx, score) in scores.iter().enumerate() {
            if score.overlap > max_overlap {
                max_overlap = score.overlap;
                best = idx;
            }
        }

        let chosen = scores.swap_remove(best);
        log::debug!(
            "'{word}' -> {} (overlap {max_overlap}, rank {})",
            chosen.sense.id,
            chosen.rank
        );
        Ok(Disambiguation::Resolved(chosen.sense))
    }

    /// Overlap of every candidate in inventory order; empty for unknown words
    pub fn score_candidates(&self, word: &str, sentence: &str) -> Result<Vec<SenseScore>> {
        let sentence = sentence.to_lowercase();

        let candidates = self.inventory.senses_for(word)?;
        if candidates.is_empty() {
            return Ok(Vec::new());
        }

        let context = self.token_set(&sentence)?;

        candidates
            .into_iter()
            .enumerate()
            .map(|(rank, sense)| -> Result<SenseScore> {
                let signature = self.signature(&sense)?;
                let overlap = signature.intersection(&context).count();
                Ok(SenseScore {
                    rank,
                    sense,
                    overlap,
                })
            })
            .collect()
    }

    /// Distinct lower-cased tokens of the definition and every example
    pub fn signature(&self, sense: &Sense) -> Result<HashSet<String>> {
        let mut signature = self.token_set(&sense.definition().to_lowercase())?;
        for example in sense.examples() {
            signature.extend(self.token_set(&example.to_lowercase())?);
        }
        Ok(signature)
    }

    fn token_set(&self, text: &str) -> Result<HashSet<String>> {
        Ok(self.tokenizer.tokenize(text)?.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;
    use sense_lexicon::MemoryInventory;

    fn bank_inventory() -> MemoryInventory {
        MemoryInventory::new()
            .with_sense(
                "bank",
                Sense::new(
                    "bank.n.01",
                    "sloping land beside a body of water such as a river",
                )
                .example("they pulled the canoe up on the bank")
                .example("he sat on the bank of the river and watched the water"),
            )
            .with_sense(
                "bank",
                Sense::new(
                    "depository_financial_institution.n.01",
                    "a financial institution that accepts deposits of money",
                )
                .example("he deposited money at the bank on friday"),
            )
    }

    fn resolved_id(result: &Disambiguation) -> &str {
        result.sense().map(Sense::id).expect("resolved")
    }

    #[test]
    fn financial_context_beats_default_sense() {
        let scorer = SenseScorer::new(bank_inventory());
        let result = scorer
            .disambiguate("bank", "I deposited money at the bank")
            .unwrap();
        assert_eq!(
            resolved_id(&result),
            "depository_financial_institution.n.01"
        );
    }

    #[test]
    fn unknown_word_passes_through() {
        let scorer = SenseScorer::new(bank_inventory());
        let result = scorer.disambiguate("xyzzy123", "I deposited money").unwrap();
        assert_eq!(result, Disambiguation::Unresolved("xyzzy123".to_string()));
    }

    #[test]
    fn zero_overlap_falls_back_to_first_candidate() {
        let inventory = MemoryInventory::new()
            .with_sense("spring", Sense::new("spring.n.01", "season of growth"))
            .with_sense("spring", Sense::new("spring.n.02", "a metal coil"));
        let scorer = SenseScorer::new(inventory);

        let result = scorer.disambiguate("spring", "zzz qqq").unwrap();
        assert_eq!(resolved_id(&result), "spring.n.01");

        let scores = scorer.score_candidates("spring", "zzz qqq").unwrap();
        assert!(scores.iter().all(|s| s.overlap == 0));
    }

    #[test]
    fn ties_keep_the_earlier_candidate() {
        let inventory = MemoryInventory::new()
            .with_sense("bass", Sense::new("bass.n.01", "low sound"))
            .with_sense("bass", Sense::new("bass.n.02", "sound fish"))
            .with_sense("bass", Sense::new("bass.n.03", "low fish"));
        let scorer = SenseScorer::new(inventory);

        // every candidate shares two tokens with the context
        let result = scorer.disambiguate("bass", "a low fish sound").unwrap();
        assert_eq!(resolved_id(&result), "bass.n.01");
    }

    #[test]
    fn overlap_counts_distinct_tokens_only() {
        let inventory = MemoryInventory::new()
            .with_sense("run", Sense::new("run.v.01", "move fast").example("fast fast fast"))
            .with_sense("run", Sense::new("run.v.02", "operate a machine or program"));
        let scorer = SenseScorer::new(inventory);

        let scores = scorer
            .score_candidates("run", "run the program fast fast on the machine")
            .unwrap();
        let overlaps: Vec<usize> = scores.iter().map(|s| s.overlap).collect();
        // run.v.01 shares {fast}, run.v.02 shares {machine, program}
        assert_eq!(overlaps, vec![1, 2]);
    }

    #[test]
    fn target_word_is_not_excluded_from_context() {
        let inventory = MemoryInventory::new()
            .with_sense("fly", Sense::new("fly.n.01", "two-winged insect"))
            .with_sense("fly", Sense::new("fly.v.01", "travel through the air").example("birds fly"));
        let scorer = SenseScorer::new(inventory);

        let scores = scorer.score_candidates("fly", "watch them fly").unwrap();
        assert_eq!(scores[1].overlap, 1);
        assert_eq!(resolved_id(&scorer.disambiguate("fly", "watch them fly").unwrap()), "fly.v.01");
    }

    #[test]
    fn signature_is_lowercased_union_of_gloss_and_examples() {
        let scorer = SenseScorer::new(MemoryInventory::new());
        let sense = Sense::new("x.n.01", "The River").example("river Bank");
        let signature = scorer.signature(&sense).unwrap();

        let mut tokens: Vec<_> = signature.into_iter().collect();
        tokens.sort();
        assert_eq!(tokens, vec!["bank", "river", "the"]);
    }

    #[test]
    fn scores_keep_inventory_rank() {
        let scorer = SenseScorer::new(bank_inventory());
        let scores = scorer
            .score_candidates("bank", "the river bank was muddy")
            .unwrap();
        let ranks: Vec<usize> = scores.iter().map(|s| s.rank).collect();
        assert_eq!(ranks, vec![0, 1]);
        assert!(scores[0].overlap > scores[1].overlap);
    }

    #[test]
    fn titlecase_letters_are_lowercased_before_scoring() {
        let inventory = MemoryInventory::new()
            .with_sense("w", Sense::new("w.n.01", "zzz"))
            .with_sense("w", Sense::new("w.n.02", "\u{1C6}x"));
        let scorer = SenseScorer::new(inventory);

        // U+01C5 is titlecase, not uppercase
        let titlecase = scorer.disambiguate("w", "\u{1C5}x").unwrap();
        let lowercase = scorer.disambiguate("w", "\u{1C6}x").unwrap();
        assert_eq!(resolved_id(&titlecase), "w.n.02");
        assert_eq!(titlecase, lowercase);
    }

    proptest! {
        #[test]
        fn proptest_scoring_ignores_sentence_case(sentence in "[A-Za-z\u{C0}-\u{D6}\u{D8}-\u{DE}\u{1C4}-\u{1CC} ]{0,48}") {
            let scorer = SenseScorer::new(bank_inventory());
            let upper = scorer.disambiguate("bank", &sentence).unwrap();
            let lower = scorer.disambiguate("bank", &sentence.to_lowercase()).unwrap();
            prop_assert_eq!(upper, lower);
        }

        #[test]
        fn proptest_disambiguation_is_deterministic(sentence in "[a-z .]{0,48}") {
            let scorer = SenseScorer::new(bank_inventory());
            let first = scorer.disambiguate("bank", &sentence).unwrap();
            let second = scorer.disambiguate("bank", &sentence).unwrap();
            prop_assert_eq!(first, second);
        }

        #[test]
        fn proptest_unknown_words_pass_through(word in "zz[a-z0-9]{1,10}", sentence in "[a-z ]{0,32}") {
            let scorer = SenseScorer::new(bank_inventory());
            let result = scorer.disambiguate(&word, &sentence).unwrap();
            prop_assert_eq!(result, Disambiguation::Unresolved(word));
        }
    }
}
