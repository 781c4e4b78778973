use crate::core::dictionary::Dictionary;
use crate::core::sentence::Sentence;

/// Backward longest-match scan.
///
/// Walks right-to-left: at the current right boundary `tail`, probes left
/// boundaries from `tail - max_len` (clamped to 0) upward, so the longest
/// candidate is tried first. Only multi-char candidates are probed; when
/// none is in the dictionary the single char left of `tail` is emitted.
/// The fallback always succeeds, so concatenating the result reproduces
/// the input exactly. Words are discovered in reverse order and reversed
/// before return.
///
/// Both the backward and reverse longest-match entry points resolve to
/// this scan; see `SegmentEngine`.
pub(crate) fn backward_longest<'t>(dict: &Dictionary, sentence: &Sentence<'t>) -> Vec<&'t str> {
    let mut words = Vec::new();
    let mut tail = sentence.len();
    while tail > 0 {
        let head = tail.saturating_sub(dict.max_len());
        let mut matched = None;
        for middle in head..tail - 1 {
            let word = sentence.slice(middle, tail);
            if dict.contains(word) {
                matched = Some((middle, word));
                break;
            }
        }
        match matched {
            Some((middle, word)) => {
                words.push(word);
                tail = middle;
            }
            None => {
                words.push(sentence.slice(tail - 1, tail));
                tail -= 1;
            }
        }
    }
    words.reverse();
    words
}

/// Forward longest-match scan, one word per `next()` call.
///
/// At position `head`, probes right boundaries from `head + max_len`
/// (clamped to the sentence length) downward to `head + 2`, emitting the
/// longest dictionary word found, else the single char at `head`.
/// Restartable: calling the engine again with the same input yields the
/// same sequence.
pub struct ForwardLongest<'d, 't> {
    dict: &'d Dictionary,
    sentence: Sentence<'t>,
    head: usize,
}

impl<'d, 't> ForwardLongest<'d, 't> {
    pub(crate) fn new(dict: &'d Dictionary, sentence: Sentence<'t>) -> Self {
        Self { dict, sentence, head: 0 }
    }
}

impl<'d, 't> Iterator for ForwardLongest<'d, 't> {
    type Item = &'t str;

    fn next(&mut self) -> Option<&'t str> {
        let len = self.sentence.len();
        if self.head >= len {
            return None;
        }
        let tail = self.head.saturating_add(self.dict.max_len()).min(len);
        for middle in (self.head + 2..=tail).rev() {
            let word = self.sentence.slice(self.head, middle);
            if self.dict.contains(word) {
                self.head = middle;
                return Some(word);
            }
        }
        let word = self.sentence.slice(self.head, self.head + 1);
        self.head += 1;
        Some(word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn dict(pairs: &[(&str, u64)]) -> Dictionary {
        let entries: HashMap<String, u64> =
            pairs.iter().map(|&(w, f)| (w.to_string(), f)).collect();
        Dictionary::new(entries).unwrap()
    }

    #[test]
    fn test_backward_basic_split() {
        let dict = dict(&[("china", 1), ("vip", 1)]);
        let words = backward_longest(&dict, &Sentence::new("chinavip1"));
        assert_eq!(words, vec!["china", "vip", "1"]);
    }

    #[test]
    fn test_backward_word_at_start_with_max_len() {
        // A word as long as max_len sitting at position 0 must be found;
        // the left probe bound clamps at 0 instead of underflowing.
        let dict = dict(&[("china", 1)]);
        let words = backward_longest(&dict, &Sentence::new("china"));
        assert_eq!(words, vec!["china"]);
    }

    #[test]
    fn test_backward_round_trip_cjk() {
        let dict = dict(&[("研究", 5), ("生命", 10), ("起源", 8)]);
        let text = "研究生命的起源";
        let words = backward_longest(&dict, &Sentence::new(text));
        assert_eq!(words, vec!["研究", "生命", "的", "起源"]);
        assert_eq!(words.concat(), text);
    }

    #[test]
    fn test_backward_empty_input() {
        let dict = dict(&[("a", 1)]);
        assert!(backward_longest(&dict, &Sentence::new("")).is_empty());
    }

    #[test]
    fn test_forward_prefers_longest() {
        // Forward greedily takes 研究生, then falls back on 命.
        let dict = dict(&[("研究", 5), ("研究生", 4), ("生命", 10), ("起源", 8)]);
        let words: Vec<&str> =
            ForwardLongest::new(&dict, Sentence::new("研究生命的起源")).collect();
        assert_eq!(words, vec!["研究生", "命", "的", "起源"]);
    }

    #[test]
    fn test_forward_is_lazy_and_covers() {
        let dict = dict(&[("china", 1), ("vip", 1)]);
        let mut iter = ForwardLongest::new(&dict, Sentence::new("chinavip1"));
        assert_eq!(iter.next(), Some("china"));
        assert_eq!(iter.next(), Some("vip"));
        assert_eq!(iter.next(), Some("1"));
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn test_forward_no_match_is_all_single_chars() {
        let dict = dict(&[("zz", 1)]);
        let words: Vec<&str> = ForwardLongest::new(&dict, Sentence::new("abc")).collect();
        assert_eq!(words, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_greedy_longest_property() {
        // No emitted word can be extended by one char on the scan side and
        // still be a dictionary word within the max-length bound.
        let dict = dict(&[("ab", 1), ("abc", 1), ("cd", 1)]);
        let words: Vec<&str> = ForwardLongest::new(&dict, Sentence::new("abcd")).collect();
        assert_eq!(words, vec!["abc", "d"]);

        let words = backward_longest(&dict, &Sentence::new("abcd"));
        assert_eq!(words, vec!["ab", "cd"]);
    }
}
