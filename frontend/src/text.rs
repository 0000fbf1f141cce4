//! Text measurement helpers for the registration metadata editor and the
//! upload batch ordering.
//!
//! LINE counts a full-width character as two display units against its
//! title/description limits, so the live counters here do the same.

use std::cmp::Ordering;

/// Display units contributed by one character: 2 for full-width, 1 otherwise.
///
/// The full-width ranges cover CJK symbols and punctuation, hiragana and
/// katakana, CJK unified ideographs (including Extension A and the
/// compatibility block), and the full-width forms. Half-width katakana
/// (U+FF61..U+FF9F) deliberately counts as 1.
pub fn char_units(c: char) -> usize {
    match c {
        '\u{3000}'..='\u{303F}'   // CJK symbols and punctuation
        | '\u{3040}'..='\u{30FF}' // hiragana, katakana
        | '\u{3400}'..='\u{4DBF}' // CJK unified ideographs extension A
        | '\u{4E00}'..='\u{9FFF}' // CJK unified ideographs
        | '\u{F900}'..='\u{FAFF}' // CJK compatibility ideographs
        | '\u{FF00}'..='\u{FF60}' // full-width forms
        | '\u{FFE0}'..='\u{FFE6}' => 2, // full-width signs
        _ => 1,
    }
}

/// Full-width-aware count of a whole string.
pub fn display_count(s: &str) -> usize {
    s.chars().map(char_units).sum()
}

/// Visual state of a character counter relative to its budget.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CounterState {
    /// Below 90% of the budget
    Ok,
    /// From 90% up to and including the budget
    Warning,
    /// Past the budget (input still allowed, advisory only)
    Over,
}

impl CounterState {
    /// CSS class suffix for the counter element.
    pub fn css_class(self) -> &'static str {
        match self {
            CounterState::Ok => "counter-ok",
            CounterState::Warning => "counter-warning",
            CounterState::Over => "counter-over",
        }
    }
}

/// Classify a raw count against its budget.
pub fn classify_count(count: usize, max: usize) -> CounterState {
    if count > max {
        CounterState::Over
    } else if count * 10 >= max * 9 {
        CounterState::Warning
    } else {
        CounterState::Ok
    }
}

/// Numeric-aware filename comparison, so "2.png" sorts before "10.png".
///
/// Both names are split into alternating digit and non-digit chunks; digit
/// chunks compare by numeric value (leading zeros stripped), other chunks
/// compare lexicographically.
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    let mut ca = a.chars().peekable();
    let mut cb = b.chars().peekable();

    loop {
        match (ca.peek().copied(), cb.peek().copied()) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(x), Some(y)) => {
                if x.is_ascii_digit() && y.is_ascii_digit() {
                    let na = take_digits(&mut ca);
                    let nb = take_digits(&mut cb);
                    let cmp = compare_digit_runs(&na, &nb);
                    if cmp != Ordering::Equal {
                        return cmp;
                    }
                } else {
                    let cmp = x.cmp(&y);
                    if cmp != Ordering::Equal {
                        return cmp;
                    }
                    ca.next();
                    cb.next();
                }
            }
        }
    }
}

fn take_digits(chars: &mut std::iter::Peekable<std::str::Chars<'_>>) -> String {
    let mut run = String::new();
    while let Some(c) = chars.peek() {
        if c.is_ascii_digit() {
            run.push(*c);
            chars.next();
        } else {
            break;
        }
    }
    run
}

/// Compare two digit runs numerically without parsing into an integer,
/// so arbitrarily long runs cannot overflow.
fn compare_digit_runs(a: &str, b: &str) -> Ordering {
    let sa = a.trim_start_matches('0');
    let sb = b.trim_start_matches('0');
    sa.len()
        .cmp(&sb.len())
        .then_with(|| sa.cmp(sb))
        // "007" vs "7": equal values, keep a total order via run length
        .then_with(|| a.len().cmp(&b.len()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_counts_one_fullwidth_counts_two() {
        assert_eq!(display_count("A"), 1);
        assert_eq!(display_count("あ"), 2);
        assert_eq!(display_count("あA"), 3);
        assert_eq!(display_count("漢字"), 4);
        assert_eq!(display_count("ＡＢ"), 4); // full-width Latin
        assert_eq!(display_count("ｱ"), 1); // half-width katakana
        assert_eq!(display_count(""), 0);
    }

    #[test]
    fn counting_is_monotonic_in_length() {
        let s = "aあ1。Ｚｱ漢";
        let mut prev = 0;
        for (idx, _) in s.char_indices().skip(1) {
            let count = display_count(&s[..idx]);
            assert!(count > prev);
            prev = count;
        }
    }

    #[test]
    fn counter_classification_boundaries() {
        // Title budget is 40: 35 ok, 38 warning, 41 over.
        assert_eq!(classify_count(35, 40), CounterState::Ok);
        assert_eq!(classify_count(36, 40), CounterState::Warning);
        assert_eq!(classify_count(38, 40), CounterState::Warning);
        assert_eq!(classify_count(40, 40), CounterState::Warning);
        assert_eq!(classify_count(41, 40), CounterState::Over);
        assert_eq!(classify_count(0, 40), CounterState::Ok);
    }

    #[test]
    fn numeric_aware_ordering() {
        let mut names = vec!["10.png", "2.png", "1.png"];
        names.sort_by(|a, b| natural_cmp(a, b));
        assert_eq!(names, vec!["1.png", "2.png", "10.png"]);
    }

    #[test]
    fn mixed_chunks_and_leading_zeros() {
        assert_eq!(natural_cmp("stamp02.png", "stamp10.png"), Ordering::Less);
        assert_eq!(natural_cmp("stamp2.png", "stamp2.png"), Ordering::Equal);
        assert_eq!(natural_cmp("a2b10", "a2b9"), Ordering::Greater);
        // Equal numeric value still yields a stable total order.
        assert_eq!(natural_cmp("007", "7"), Ordering::Greater);
        assert_eq!(natural_cmp("img", "img2"), Ordering::Less);
    }
}
