use crate::core::dictionary::Dictionary;
use crate::core::sentence::Sentence;

/// Segmentation graph: for every start position, the ascending list of
/// *last-character* indices of dictionary words beginning there.
///
/// Storing the last-char index (not the exclusive end) is the convention
/// the route table depends on, so edges are only ever written and read
/// through `push_word` / `ends` to keep the off-by-one in one place.
/// Every position carries the trivial single-char edge, so the graph
/// covers the whole input even for out-of-vocabulary chars.
pub(crate) struct SegmentDag {
    edges: Vec<Vec<usize>>,
}

impl SegmentDag {
    /// O(len * max_len): probes every candidate span of length 2..=max_len.
    pub(crate) fn build(dict: &Dictionary, sentence: &Sentence<'_>) -> Self {
        let len = sentence.len();
        let mut dag = Self { edges: Vec::with_capacity(len) };
        for head in 0..len {
            dag.edges.push(vec![head]);
            let tail = head.saturating_add(dict.max_len()).min(len);
            for middle in head + 2..=tail {
                if dict.contains(sentence.slice(head, middle)) {
                    dag.push_word(head, middle);
                }
            }
        }
        dag
    }

    /// Register the word spanning `[head, end)` as an edge.
    fn push_word(&mut self, head: usize, end: usize) {
        self.edges[head].push(end - 1);
    }

    /// Last-char indices reachable from `head`, ascending. Never empty.
    pub(crate) fn ends(&self, head: usize) -> &[usize] {
        &self.edges[head]
    }
}

/// Backward Viterbi-style pass over the DAG.
///
/// `route[idx]` holds the best score from `idx` to the end and the chosen
/// last-char index. Score of taking word `[idx, x + 1)` is its relative
/// frequency times the best downstream score; unseen multi-char spans
/// score 0 and are dominated. Base case `route[len] = (1.0, len)`, the
/// multiplicative identity for the empty suffix.
///
/// Ties prefer the larger index, i.e. the longest word.
fn route(dict: &Dictionary, sentence: &Sentence<'_>, dag: &SegmentDag) -> Vec<(f64, usize)> {
    let len = sentence.len();
    let total = dict.total() as f64;
    let mut route = vec![(0.0, 0); len + 1];
    route[len] = (1.0, len);
    for idx in (0..len).rev() {
        let mut best: Option<(f64, usize)> = None;
        for &last in dag.ends(idx) {
            let word = sentence.slice(idx, last + 1);
            let score = dict.frequency(word) as f64 / total * route[last + 1].0;
            if best.map_or(true, |(top, _)| score >= top) {
                best = Some((score, last));
            }
        }
        // ends() always yields at least the single-char edge
        route[idx] = best.unwrap_or((0.0, idx));
    }
    route
}

/// Max-probability segmentation, one word per `next()` call.
///
/// Follows the recorded best choice from position 0 until the end of the
/// input; the route table is consumed by this walk and dropped with it.
pub struct MaxProbability<'t> {
    sentence: Sentence<'t>,
    choices: Vec<usize>,
    cursor: usize,
}

impl<'t> MaxProbability<'t> {
    pub(crate) fn new(dict: &Dictionary, sentence: Sentence<'t>) -> Self {
        let dag = SegmentDag::build(dict, &sentence);
        let choices = route(dict, &sentence, &dag)
            .into_iter()
            .map(|(_, last)| last)
            .collect();
        Self { sentence, choices, cursor: 0 }
    }
}

impl<'t> Iterator for MaxProbability<'t> {
    type Item = &'t str;

    fn next(&mut self) -> Option<&'t str> {
        if self.cursor >= self.sentence.len() {
            return None;
        }
        let end = self.choices[self.cursor] + 1;
        let word = self.sentence.slice(self.cursor, end);
        self.cursor = end;
        Some(word)
    }
}
