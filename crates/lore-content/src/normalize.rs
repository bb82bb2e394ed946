//! Two-space line break normalization
//!
//! Stored article text uses a double space where the author meant a line
//! break. The substitution is purely lexical: it has no idea of markdown
//! structure and will happily break inside code or link text. Renderers
//! downstream depend on exactly this behavior.

use std::borrow::Cow;

/// Replace two-space pairs with newlines
///
/// Each maximal run of `n` spaces becomes `n % 2` spaces followed by
/// `n / 2` newlines, so `"a  b"` gives `"a\nb"` and `"a   b"` gives
/// `"a \nb"`. A lone space is left alone. Text without any two-space run
/// is returned borrowed.
#[must_use]
pub fn normalize(raw: &str) -> Cow<'_, str> {
    if !raw.contains("  ") {
        return Cow::Borrowed(raw);
    }

    let mut out = String::with_capacity(raw.len());
    let mut run = 0usize;
    for ch in raw.chars() {
        if ch == ' ' {
            run += 1;
            continue;
        }
        flush_run(&mut out, run);
        run = 0;
        out.push(ch);
    }
    flush_run(&mut out, run);

    Cow::Owned(out)
}

fn flush_run(out: &mut String, run: usize) {
    if run % 2 == 1 {
        out.push(' ');
    }
    out.extend(std::iter::repeat('\n').take(run / 2));
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    #[test]
    fn two_spaces_become_newline() {
        assert_eq!(normalize("a  b"), "a\nb");
    }

    #[test]
    fn three_spaces_keep_one() {
        assert_eq!(normalize("a   b"), "a \nb");
    }

    #[test]
    fn four_spaces_become_two_newlines() {
        assert_eq!(normalize("a    b"), "a\n\nb");
    }

    #[test]
    fn single_spaces_untouched() {
        let text = "one two three";
        assert!(matches!(normalize(text), Cow::Borrowed(_)));
        assert_eq!(normalize(text), text);
    }

    #[test]
    fn empty_maps_to_empty() {
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn trailing_and_leading_runs() {
        assert_eq!(normalize("  # Title  "), "\n# Title\n");
    }

    #[test]
    fn splits_heading_markers_onto_lines() {
        assert_eq!(
            normalize("# Lore  ## Origins  Text here"),
            "# Lore\n## Origins\nText here"
        );
    }

    proptest! {
        #[test]
        fn prop_output_has_no_double_space(input in "[a-c #\n]{0,40}") {
            let out = normalize(&input);
            prop_assert!(!out.contains("  "));
        }

        #[test]
        fn prop_idempotent(input in "[a-c #\n]{0,40}") {
            let once = normalize(&input).into_owned();
            let twice = normalize(&once).into_owned();
            prop_assert_eq!(once, twice);
        }

        #[test]
        fn prop_unchanged_without_double_space(input in "[a-c\n]{0,10}( [a-c\n]{1,10}){0,4}") {
            prop_assert_eq!(normalize(&input), input.as_str());
        }

        #[test]
        fn prop_only_whitespace_changes(input in "[a-c #\n]{0,40}") {
            let strip = |s: &str| s.chars().filter(|c| *c != ' ' && *c != '\n').collect::<String>();
            let out = normalize(&input);
            prop_assert_eq!(strip(&out[..]), strip(input.as_str()));
        }

        #[test]
        fn prop_one_newline_per_pair(input in "[ab ]{0,40}") {
            let pairs: usize = input
                .split(|c: char| c != ' ')
                .map(|run| run.len() / 2)
                .sum();
            let newlines = normalize(&input).matches('\n').count();
            prop_assert_eq!(newlines, pairs);
        }
    }
}
