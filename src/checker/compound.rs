/// Compound-word fallback for tokens the base check rejects.
///
/// A hyphenated token is valid when every hyphen-separated part passes the
/// check; likewise for apostrophes. Hyphens take precedence: a token holding
/// both is only ever split on hyphens.
pub fn valid_by_composition<F>(word: &str, check: F) -> bool
where
    F: Fn(&str) -> bool,
{
    let joiner = if word.contains('-') {
        '-'
    } else if word.contains('\'') {
        '\''
    } else {
        return false;
    };

    word.split(joiner).all(check)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn known<'a>(parts: &'a [&'a str]) -> impl Fn(&str) -> bool + 'a {
        move |word| parts.contains(&word)
    }

    #[test]
    fn test_hyphen_compound_needs_every_part() {
        assert!(valid_by_composition("well-known", known(&["well", "known"])));
        assert!(!valid_by_composition("well-knwn", known(&["well", "known"])));
    }

    #[test]
    fn test_apostrophe_compound() {
        assert!(valid_by_composition("isn't", known(&["isn", "t"])));
        assert!(!valid_by_composition("isn't", known(&["isn"])));
    }

    #[test]
    fn test_hyphen_takes_precedence_over_apostrophe() {
        // Split on hyphens only: "don't" must pass as a whole part.
        assert!(valid_by_composition(
            "don't-stop",
            known(&["don't", "stop"])
        ));
        assert!(!valid_by_composition("don't-stop", known(&["don", "t", "stop"])));
    }

    #[test]
    fn test_plain_word_is_not_a_compound() {
        assert!(!valid_by_composition("plain", known(&["plain"])));
    }
}
