//! Noun-phrase chunking over tagged tokens

use crate::nlp::backend::{PartOfSpeech, Token};
use std::ops::Range;

/// Noun chunks as token ranges: `(DET|NUM)* ADJ* (NOUN|PROPN)+ ADJ*`
pub fn noun_chunks(tokens: &[Token]) -> Vec<Range<usize>> {
    let pos_at = |k: usize| tokens.get(k).map(|t| t.pos);
    let mut chunks = Vec::new();
    let mut i = 0;

    while i < tokens.len() {
        let start = i;
        let mut j = i;

        while matches!(pos_at(j), Some(PartOfSpeech::Det | PartOfSpeech::Num)) {
            j += 1;
        }
        while pos_at(j) == Some(PartOfSpeech::Adj) {
            j += 1;
        }

        let head_start = j;
        while pos_at(j).is_some_and(|pos| pos.is_nominal()) {
            j += 1;
        }
        if j == head_start {
            i = start + 1;
            continue;
        }

        while pos_at(j) == Some(PartOfSpeech::Adj) {
            j += 1;
        }

        chunks.push(start..j);
        i = j;
    }

    chunks
}
