//! Greedy longest-match parsing of a string against a mapping trie.

use super::tree::MapNode;

/// One converted chunk of the source string.
///
/// `start`/`end` are char offsets, half-open; consecutive spans partition the
/// input. `value: None` marks an undecided tail: the chunk could still
/// extend with more input and the caller declined to force a decision
/// (incremental IME-style typing, e.g. a trailing "ky").
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchSpan {
    pub start: usize,
    pub end: usize,
    pub value: Option<String>,
}

/// Walks `input` against `tree`: greedy, single pass, no backtracking.
///
/// At each node the effective terminal is the node's mapping value when one
/// exists (even the empty string), otherwise the raw consumed slice, which
/// is how unmapped input echoes through unchanged. A node without children
/// commits immediately; a next character that doesn't extend the current
/// subtree commits and restarts matching at that character. At end of input
/// the last chunk is committed when `convert_ending` is set or no extension
/// is possible; a committed empty terminal is dropped rather than emitted as
/// an empty trailing span.
pub fn apply_mapping(input: &str, tree: &MapNode, convert_ending: bool) -> Vec<MatchSpan> {
    let chars: Vec<char> = input.chars().collect();
    let mut spans = Vec::new();
    let mut start = 0;

    while start < chars.len() {
        let mut node = tree.child(chars[start]);
        let mut end = start + 1;
        loop {
            let has_children = node.is_some_and(MapNode::has_children);
            if !has_children {
                commit(&mut spans, &chars, start, end, node);
                break;
            }
            if end < chars.len() {
                match node.and_then(|n| n.child(chars[end])) {
                    Some(next) => {
                        node = Some(next);
                        end += 1;
                    }
                    None => {
                        commit(&mut spans, &chars, start, end, node);
                        break;
                    }
                }
                continue;
            }
            // End of input with continuations still possible.
            if convert_ending {
                commit(&mut spans, &chars, start, end, node);
            } else {
                spans.push(MatchSpan {
                    start,
                    end,
                    value: None,
                });
            }
            break;
        }
        start = end;
    }
    spans
}

fn commit(
    spans: &mut Vec<MatchSpan>,
    chars: &[char],
    start: usize,
    end: usize,
    node: Option<&MapNode>,
) {
    let value = match node.and_then(MapNode::value) {
        Some(v) => v.to_string(),
        None => chars[start..end].iter().collect(),
    };
    // A final empty terminal (e.g. a bare っ) contributes nothing; don't
    // leave an empty span dangling at the end of the result.
    if end == chars.len() && value.is_empty() {
        return;
    }
    spans.push(MatchSpan {
        start,
        end,
        value: Some(value),
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tree() -> MapNode {
        MapNode::from_pairs(&[
            ("ka", "か"),
            ("ki", "き"),
            ("kya", "きゃ"),
            ("n", "ん"),
            ("na", "な"),
        ])
    }

    fn values(spans: &[MatchSpan]) -> Vec<Option<String>> {
        spans.iter().map(|s| s.value.clone()).collect()
    }

    #[test]
    fn test_simple_longest_match() {
        let spans = apply_mapping("kakya", &tree(), true);
        assert_eq!(
            spans,
            vec![
                MatchSpan { start: 0, end: 2, value: Some("か".into()) },
                MatchSpan { start: 2, end: 5, value: Some("きゃ".into()) },
            ]
        );
    }

    #[test]
    fn test_spans_partition_input() {
        let spans = apply_mapping("kanzaki", &tree(), true);
        assert_eq!(spans.first().map(|s| s.start), Some(0));
        assert_eq!(spans.last().map(|s| s.end), Some(7));
        for pair in spans.windows(2) {
            assert_eq!(pair[0].end, pair[1].start);
        }
    }

    #[test]
    fn test_unmapped_echoes_raw() {
        let spans = apply_mapping("xka", &tree(), true);
        assert_eq!(
            values(&spans),
            vec![Some("x".to_string()), Some("か".to_string())]
        );
    }

    #[test]
    fn test_non_extending_char_commits_terminal() {
        // "nk" -> the n chunk cannot extend with k, commits ん, restarts at k
        let spans = apply_mapping("nka", &tree(), true);
        assert_eq!(
            values(&spans),
            vec![Some("ん".to_string()), Some("か".to_string())]
        );
    }

    #[test]
    fn test_undecided_tail() {
        let spans = apply_mapping("ky", &tree(), false);
        assert_eq!(
            spans,
            vec![MatchSpan { start: 0, end: 2, value: None }]
        );
    }

    #[test]
    fn test_forced_tail_resolves_to_raw() {
        // "ky" has no terminal of its own; forcing echoes the raw slice
        let spans = apply_mapping("ky", &tree(), true);
        assert_eq!(values(&spans), vec![Some("ky".to_string())]);
    }

    #[test]
    fn test_trailing_ambiguous_n() {
        // "n" could still become "na"; without convert_ending it stays open
        let spans = apply_mapping("kan", &tree(), false);
        assert_eq!(
            spans,
            vec![
                MatchSpan { start: 0, end: 2, value: Some("か".into()) },
                MatchSpan { start: 2, end: 3, value: None },
            ]
        );
        let spans = apply_mapping("kan", &tree(), true);
        assert_eq!(
            values(&spans),
            vec![Some("か".to_string()), Some("ん".to_string())]
        );
    }

    #[test]
    fn test_empty_terminal_dropped_at_end() {
        let mut t = tree();
        t.insert("q", "");
        let spans = apply_mapping("kaq", &t, true);
        assert_eq!(values(&spans), vec![Some("か".to_string())]);
        // mid-string the empty terminal still occupies its span
        let spans = apply_mapping("qka", &t, true);
        assert_eq!(
            values(&spans),
            vec![Some(String::new()), Some("か".to_string())]
        );
    }

    #[test]
    fn test_empty_input() {
        assert!(apply_mapping("", &tree(), true).is_empty());
    }
}
