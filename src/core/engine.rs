use crate::core::dag::MaxProbability;
use crate::core::dictionary::{Dictionary, EmptyDictionary};
use crate::core::matcher::{self, ForwardLongest};
use crate::core::sentence::Sentence;
use std::collections::HashMap;

/// The segmentation engine: one immutable dictionary, four strategies.
///
/// The engine holds no other state, so a single instance can be shared by
/// reference across threads; every call is a pure function of the
/// dictionary and the input text.
pub struct SegmentEngine {
    dictionary: Dictionary,
}

impl SegmentEngine {
    pub fn new(dictionary: Dictionary) -> Self {
        Self { dictionary }
    }

    /// Build an engine straight from a word -> frequency map.
    pub fn from_entries(entries: HashMap<String, u64>) -> Result<Self, EmptyDictionary> {
        Ok(Self::new(Dictionary::new(entries)?))
    }

    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    /// Backward longest-match: scans right-to-left, preferring the longest
    /// dictionary word ending at the current boundary, single-char fallback
    /// otherwise. Words are returned in input order.
    pub fn segment_backward_longest<'t>(&self, text: &'t str) -> Vec<&'t str> {
        matcher::backward_longest(&self.dictionary, &Sentence::new(text))
    }

    /// Reverse longest-match. With the probe window clamped at the start of
    /// the input this is the same scan as `segment_backward_longest`; both
    /// entry points are kept since the two strategies are traditionally
    /// distinct.
    pub fn segment_reverse_longest<'t>(&self, text: &'t str) -> Vec<&'t str> {
        matcher::backward_longest(&self.dictionary, &Sentence::new(text))
    }

    /// Forward longest-match as a lazy iterator, one word per step.
    pub fn segment_forward_longest<'d, 't>(&'d self, text: &'t str) -> ForwardLongest<'d, 't> {
        ForwardLongest::new(&self.dictionary, Sentence::new(text))
    }

    /// Maximum-probability segmentation: builds the segmentation DAG, runs
    /// the backward DP pass, then lazily walks the recorded best path.
    /// Optimal under the product-of-relative-frequencies objective.
    pub fn segment_max_probability<'t>(&self, text: &'t str) -> MaxProbability<'t> {
        MaxProbability::new(&self.dictionary, Sentence::new(text))
    }
}
