//! The loose substring/word-overlap matcher connecting topics to interests.
//!
//! Intentionally high recall, low precision: it is used only for UI emphasis,
//! never for filtering content out, so false positives are acceptable. Every
//! panel that highlights interest matches goes through this one function.

/// True if, case-insensitively, the topic contains the preference or vice
/// versa, or any whitespace-delimited word of one appears inside the other.
#[must_use]
pub fn is_relevant(topic: &str, preference: &str) -> bool {
    let topic = topic.to_lowercase();
    let preference = preference.to_lowercase();
    if topic.is_empty() || preference.is_empty() {
        return false;
    }

    if topic.contains(&preference) || preference.contains(&topic) {
        return true;
    }

    topic.split_whitespace().any(|word| {
        preference.contains(word)
            || preference
                .split_whitespace()
                .any(|pref_word| word.contains(pref_word))
    })
}

/// The subset of `preferences` relevant to `topic`, in their original order.
#[must_use]
pub fn relevant_interests(topic: &str, preferences: &[String]) -> Vec<String> {
    preferences
        .iter()
        .filter(|preference| is_relevant(topic, preference))
        .cloned()
        .collect()
}

/// Wrap exact, case-insensitive whole-word occurrences of each term in
/// `**…**` so the markdown renderer emphasizes them.
///
/// Word boundaries are non-alphanumeric neighbors. Terms already inside an
/// emphasized span get doubled markers; that mirrors the source behavior and
/// is accepted as-is.
#[must_use]
pub fn emphasize_terms(text: &str, terms: &[String]) -> String {
    let mut output = text.to_string();
    for term in terms {
        let term = term.trim();
        if term.is_empty() {
            continue;
        }
        output = emphasize_term(&output, term);
    }
    output
}

fn emphasize_term(text: &str, term: &str) -> String {
    let lower_term = term.to_lowercase();
    if lower_term.is_empty() {
        return text.to_string();
    }

    // Scan char boundaries of the original string and case-fold windows in
    // place; lowercasing can change byte lengths, so offsets into a
    // lowercased copy would not be valid here.
    let mut output = String::with_capacity(text.len());
    let mut cursor = 0;
    while cursor < text.len() {
        if let Some(end) = match_end(text, cursor, &lower_term) {
            if is_word_boundary(text, cursor, end) {
                output.push_str("**");
                output.push_str(&text[cursor..end]);
                output.push_str("**");
                cursor = end;
                continue;
            }
        }
        let Some(ch) = text[cursor..].chars().next() else {
            break;
        };
        output.push(ch);
        cursor += ch.len_utf8();
    }
    output
}

/// If the text starting at `start` case-folds to `lower_term`, the byte
/// offset just past the match in the original string.
fn match_end(text: &str, start: usize, lower_term: &str) -> Option<usize> {
    let mut folded = String::with_capacity(lower_term.len());
    for (offset, ch) in text[start..].char_indices() {
        for lowered in ch.to_lowercase() {
            folded.push(lowered);
        }
        if folded.len() >= lower_term.len() {
            return (folded == lower_term).then_some(start + offset + ch.len_utf8());
        }
        if !lower_term.starts_with(folded.as_str()) {
            return None;
        }
    }
    None
}

fn is_word_boundary(text: &str, start: usize, end: usize) -> bool {
    let before_ok = text[..start]
        .chars()
        .next_back()
        .is_none_or(|c| !c.is_alphanumeric());
    let after_ok = text[end..].chars().next().is_none_or(|c| !c.is_alphanumeric());
    before_ok && after_ok
}
