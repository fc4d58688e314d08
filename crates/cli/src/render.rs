use anyhow::Result;
use serde::Serialize;
use sense_wsd::{Disambiguation, PassageEntry, SenseScore};
use std::fmt::Write as _;

#[derive(Serialize)]
struct WordReport<'a> {
    word: &'a str,
    sentence: &'a str,
    result: &'a Disambiguation,
    gloss: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    candidates: Option<&'a [SenseScore]>,
}

/// One line per entry, a blank line between sentences
pub fn passage_text(sentences: &[Vec<PassageEntry>]) -> String {
    let mut out = String::new();
    for (idx, entries) in sentences.iter().enumerate() {
        if idx > 0 {
            out.push('\n');
        }
        for entry in entries {
            writeln!(out, "{entry}").ok();
        }
    }
    out
}

pub fn passage_json(sentences: &[Vec<PassageEntry>]) -> Result<String> {
    Ok(serde_json::to_string_pretty(sentences)?)
}

pub fn word_text(result: &Disambiguation, gloss: &str, scores: Option<&[SenseScore]>) -> String {
    let mut out = format!("{result} {gloss}\n");
    if let Some(scores) = scores {
        for score in scores {
            writeln!(
                out,
                "  #{:<2} {:<40} overlap={}",
                score.rank, score.sense.id, score.overlap
            )
            .ok();
        }
    }
    out
}

pub fn word_json(
    word: &str,
    sentence: &str,
    result: &Disambiguation,
    gloss: &str,
    scores: Option<&[SenseScore]>,
) -> Result<String> {
    let report = WordReport {
        word,
        sentence,
        result,
        gloss,
        candidates: scores,
    };
    Ok(serde_json::to_string_pretty(&report)?)
}
