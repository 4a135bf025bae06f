//! Approximate substring similarity.
//!
//! A pattern is compared against windows of the text with Levenshtein
//! distance. The score of a window is `edits / pattern_len + offset /
//! distance`, so a match further into the text costs more; similarity is
//! `1 - score`. Scanning stops once the offset alone reaches the best score.

/// Similarity in `0.0..=1.0` of `pattern` occurring approximately in `text`.
pub fn similarity(pattern: &str, text: &str, distance: usize) -> f64 {
    let pattern = pattern.to_lowercase();
    let text = text.to_lowercase();
    let distance = distance.max(1) as f64;

    let pattern_chars: Vec<char> = pattern.chars().collect();
    let m = pattern_chars.len();
    if m == 0 {
        return 1.0;
    }

    let text_chars: Vec<char> = text.chars().collect();
    let n = text_chars.len();
    if n == 0 {
        return 0.0;
    }

    // An exact hit only seeds the best score; a closer near-match may still beat it.
    let mut best = text
        .find(&pattern)
        .map(|byte_idx| text[..byte_idx].chars().count() as f64 / distance)
        .unwrap_or(f64::INFINITY);
    let min_len = m.saturating_sub(1).max(1);
    let last_start = n.saturating_sub(min_len);
    for start in 0..=last_start {
        let proximity = start as f64 / distance;
        if proximity >= best {
            break;
        }
        // Window lengths m-1..=m+1 absorb a single insertion or deletion.
        for len in [min_len, m, m + 1] {
            let end = (start + len).min(n);
            let window: String = text_chars[start..end].iter().collect();
            let edits = strsim::levenshtein(&window, &pattern) as f64;
            let score = edits / m as f64 + proximity;
            if score < best {
                best = score;
            }
        }
    }

    (1.0 - best).clamp(0.0, 1.0)
}
