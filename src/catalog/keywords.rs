use once_cell::sync::Lazy;
use regex::Regex;

/// One word of a rule.
#[derive(Clone, Copy, Debug)]
enum Word {
    /// Matches anywhere in the query, `"subtract"` matches `"subtractor"`.
    Stem(&'static str),
    /// Matches a whole word only, `"or"` doesn't match `"generator"`.
    Whole(&'static str),
}
use Word::{Stem, Whole};

/// A rule matches when the query contains every word of one of its alternatives.
struct Rule {
    alternatives: &'static [&'static [Word]],
    key: &'static str,
}

const fn rule(alternatives: &'static [&'static [Word]], key: &'static str) -> Rule {
    Rule { alternatives, key }
}

// Earlier rules win, so more specific phrases come before the words they contain.
const RULES: &[Rule] = &[
    rule(&[&[Stem("multipl")]], "multiplier_2bit"),
    rule(&[&[Stem("full"), Stem("sub")]], "full_subtractor"),
    rule(&[&[Stem("subtract")]], "half_subtractor"),
    rule(&[&[Stem("full"), Stem("add")]], "full_adder"),
    rule(&[&[Stem("adder")]], "half_adder"),
    rule(&[&[Stem("mux")], &[Stem("multiplex")], &[Stem("74153")]], "mux_74153"),
    rule(&[&[Stem("decod")], &[Stem("74139")]], "decoder_74139"),
    rule(&[&[Stem("compar")], &[Stem("7485")]], "comparator_7485"),
    rule(&[&[Whole("jk")], &[Stem("7476")]], "jk_flip_flop"),
    rule(
        &[&[Stem("flip")], &[Stem("flop")], &[Stem("latch")], &[Stem("7474")]],
        "d_flip_flop",
    ),
    rule(&[&[Whole("xor"), Whole("nand")]], "xor_from_nand"),
    rule(&[&[Whole("xor")], &[Stem("exclusive")]], "xor_gate"),
    rule(&[&[Whole("nand")], &[Whole("and")]], "and_from_nand"),
    rule(&[&[Whole("nor")], &[Whole("or")]], "or_from_nor"),
    rule(&[&[Whole("not")], &[Stem("invert")]], "not_gate"),
];

static WORDS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[a-z0-9]+").expect("word regex is valid"));

/// Returns the catalog key best matching a free text `query`, if any.
///
/// Matching is case insensitive. Gate names must appear as words of their own, the
/// longer stems may appear anywhere: `"Full Adder"` and `"fulladder"` both give
/// `full_adder` but `"random number"` gives nothing.
pub fn match_keyword(query: &str) -> Option<&'static str> {
    let query = query.to_lowercase();
    let words: Vec<&str> = WORDS.find_iter(&query).map(|m| m.as_str()).collect();
    let found = |word: &Word| match *word {
        Stem(stem) => query.contains(stem),
        Whole(whole) => words.contains(&whole),
    };
    RULES
        .iter()
        .find(|rule| {
            rule.alternatives
                .iter()
                .any(|alternative| alternative.iter().all(found))
        })
        .map(|rule| rule.key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priority() {
        assert_eq!(match_keyword("NAND"), Some("and_from_nand"));
        assert_eq!(match_keyword("full adder"), Some("full_adder"));
        assert_eq!(match_keyword("an adder"), Some("half_adder"));
        assert_eq!(match_keyword("full subtractor"), Some("full_subtractor"));
        assert_eq!(match_keyword("subtractor"), Some("half_subtractor"));
        assert_eq!(match_keyword("xor out of nand gates"), Some("xor_from_nand"));
        assert_eq!(match_keyword("exclusive or"), Some("xor_gate"));
        assert_eq!(match_keyword("NOR"), Some("or_from_nor"));
        assert_eq!(match_keyword("inverter"), Some("not_gate"));
        assert_eq!(match_keyword("JK flip flop"), Some("jk_flip_flop"));
        assert_eq!(match_keyword("D flip flop"), Some("d_flip_flop"));
        assert_eq!(match_keyword("4 bit comparator"), Some("comparator_7485"));
        assert_eq!(match_keyword("74139 decoder"), Some("decoder_74139"));
        assert_eq!(match_keyword("2 bit multiplier"), Some("multiplier_2bit"));
        assert_eq!(match_keyword("fulladder"), Some("full_adder"));
    }

    #[test]
    fn test_gate_names_are_whole_words() {
        assert_eq!(match_keyword("an AND gate"), Some("and_from_nand"));
        assert_eq!(match_keyword("or gate"), Some("or_from_nor"));
        assert_eq!(match_keyword("a NOT gate"), Some("not_gate"));
        assert_eq!(match_keyword("XOR"), Some("xor_gate"));
        assert_eq!(match_keyword("xor, from nand"), Some("xor_from_nand"));
        assert_eq!(match_keyword("andor"), None);
    }

    #[test]
    fn test_no_match() {
        assert_eq!(match_keyword("traffic light"), None);
        assert_eq!(match_keyword(""), None);
        assert_eq!(match_keyword("priority encoder"), None);
        assert_eq!(match_keyword("parity generator"), None);
        assert_eq!(match_keyword("traffic light for a crosswalk"), None);
        assert_eq!(match_keyword("random number thing"), None);
        assert_eq!(match_keyword("nothing fancy, a 555 timer"), None);
    }

    #[test]
    fn test_every_key_exists() {
        for rule in RULES {
            assert!(super::super::get(rule.key).is_some(), "{}", rule.key);
        }
    }
}
