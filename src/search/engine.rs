use std::cmp::Ordering;
use std::collections::HashMap;

use crate::index::types::NewsIndex;
use crate::search::tokenizer::tokenize_query;

use super::types::RankedHit;

/// Ranks indexed documents against a free-text query.
///
/// Each document scores the sum over query tokens of
/// `term_frequency · ln(1 + N / document_frequency)`. Ties break by
/// ascending document id so repeated searches return an identical ranking.
/// At most `results` hits are returned, best first.
pub fn search(query: &str, index: &NewsIndex, results: usize) -> Vec<RankedHit> {
    let query_tokens = tokenize_query(query);
    let doc_count = index.doc_count();

    let mut doc_scores: HashMap<u32, f32> = HashMap::new();
    for token in query_tokens.iter() {
        if let Some(postings) = index.postings(token) {
            let idf = (1.0 + doc_count as f32 / postings.len() as f32).ln();
            for posting in postings {
                *doc_scores.entry(posting.doc_id).or_insert(0.0) +=
                    posting.term_frequency as f32 * idf;
            }
        }
    }

    let mut hits: Vec<RankedHit> = doc_scores
        .into_iter()
        .map(|(doc_id, score)| RankedHit { doc_id, score })
        .collect();

    hits.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(Ordering::Equal)
            .then(a.doc_id.cmp(&b.doc_id))
    });
    hits.truncate(results);

    hits
}

/// The relevance scores of a ranked hit list, in rank order.
///
/// This is the sequence the clustering subsystem partitions.
pub fn relevance_scores(hits: &[RankedHit]) -> Vec<f32> {
    hits.iter().map(|hit| hit.score).collect()
}
