//! Text normalization profiles.
//!
//! Two deterministic cleanup rules feed the pipeline, and they are not the
//! same rule:
//!
//! - The **training profile** keeps digits and a narrow punctuation set so
//!   skill-bearing tokens like `c++` or `ci/cd` survive vectorizer fitting,
//!   and strips URL-ish tokens first.
//! - The **inference profile** strips down to ASCII letters and spaces.
//!
//! The divergence is deliberate: the trained vocabulary was built against
//! the training profile, so unifying the two rules would silently change
//! model behavior relative to the persisted artifacts. Keep them distinct.

/// Punctuation characters preserved by the training profile.
const TRAINING_PUNCTUATION: &[char] = &['.', ',', '!', '?', '(', ')', '-', '+', '&', '/'];

/// Normalizes raw text with the training profile.
///
/// URL-ish content is removed first: within each whitespace-delimited word,
/// everything from the first `http` or `www` onward is dropped. Every
/// remaining character outside ASCII alphanumerics and the narrow
/// punctuation set becomes a space, whitespace runs collapse to single
/// spaces, and the result is lowercased and trimmed.
pub fn training(raw: &str) -> String {
    let mut kept = String::with_capacity(raw.len());
    for word in raw.split_whitespace() {
        let word = strip_url(word);
        if word.is_empty() {
            continue;
        }
        if !kept.is_empty() {
            kept.push(' ');
        }
        kept.push_str(word);
    }

    clean(&kept, |c| {
        c.is_ascii_alphanumeric() || TRAINING_PUNCTUATION.contains(&c)
    })
}

/// Normalizes raw text with the inference profile.
///
/// Every character outside ASCII letters becomes a space, whitespace runs
/// collapse to single spaces, and the result is lowercased and trimmed.
/// Digits and punctuation do not survive this profile.
pub fn inference(raw: &str) -> String {
    clean(raw, |c| c.is_ascii_alphabetic())
}

/// Truncates a word at the first URL marker (`http` or `www`).
fn strip_url(word: &str) -> &str {
    let cut = [word.find("http"), word.find("www")]
        .into_iter()
        .flatten()
        .min();
    match cut {
        Some(idx) => &word[..idx],
        None => word,
    }
}

/// Maps characters rejected by `keep` to spaces, collapses whitespace runs,
/// and lowercases. Leading and trailing whitespace never survives.
fn clean(input: &str, keep: impl Fn(char) -> bool) -> String {
    let mut out = String::with_capacity(input.len());
    let mut pending_space = false;

    for c in input.chars() {
        let c = if keep(c) { c } else { ' ' };
        if c.is_whitespace() {
            pending_space = !out.is_empty();
        } else {
            if pending_space {
                out.push(' ');
                pending_space = false;
            }
            out.push(c.to_ascii_lowercase());
        }
    }

    out
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn training_lowercases_and_collapses() {
        assert_eq!(
            training("Senior   Data\tScientist\n\nPython"),
            "senior data scientist python"
        );
    }

    #[test]
    fn training_keeps_digits_and_narrow_punctuation() {
        assert_eq!(training("C++ & CI/CD (5 yrs)"), "c++ & ci/cd (5 yrs)");
        assert_eq!(training("TCP-IP, v2.0!"), "tcp-ip, v2.0!");
    }

    #[test]
    fn training_replaces_other_characters_with_space() {
        assert_eq!(training("a#b$c"), "a b c");
        assert_eq!(training("hello@example [x]"), "hello example x");
    }

    #[test]
    fn training_strips_urls() {
        assert_eq!(
            training("see http://example.com/page for details"),
            "see for details"
        );
        assert_eq!(training("visit www.example.com today"), "visit today");
        assert_eq!(training("(ref:https://a.b/c)"), "(ref");
    }

    #[test]
    fn inference_letters_and_spaces_only() {
        assert_eq!(
            inference("Python 3.11 + SQL (2020)"),
            "python sql"
        );
        assert_eq!(inference("Data-Scientist"), "data scientist");
    }

    #[test]
    fn profiles_diverge_on_digits() {
        let raw = "worked 5 years on c++";
        assert_eq!(training(raw), "worked 5 years on c++");
        assert_eq!(inference(raw), "worked years on c");
    }

    #[test]
    fn empty_and_whitespace_input() {
        assert_eq!(training(""), "");
        assert_eq!(inference(""), "");
        assert_eq!(training("   \t\n "), "");
        assert_eq!(inference("   \t\n "), "");
    }

    #[test]
    fn normalization_is_idempotent() {
        let raw = "Senior C++ Engineer, 5+ yrs http://x.io";
        let once = training(raw);
        assert_eq!(training(&once), once);

        let once = inference(raw);
        assert_eq!(inference(&once), once);
    }

    #[test]
    fn non_ascii_becomes_space() {
        assert_eq!(training("café naïve"), "caf na ve");
        assert_eq!(inference("café"), "caf");
    }
}
