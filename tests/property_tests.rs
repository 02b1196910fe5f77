use markline::{convert_str, to_html, Options};
use proptest::prelude::*;

/// A line with none of the markers the converter reacts to.
fn plain_line() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 ,.!?]{1,40}"
}

fn item_text() -> impl Strategy<Value = String> {
    "[a-z]{1,12}"
}

/// Lines drawn from every construct, including blanks.
fn any_line() -> impl Strategy<Value = String> {
    prop_oneof![
        plain_line(),
        item_text().prop_map(|t| format!("- {t}")),
        item_text().prop_map(|t| format!("* {t}")),
        (1usize..=6, item_text()).prop_map(|(n, t)| format!("{} {t}", "#".repeat(n))),
        item_text().prop_map(|t| format!("**{t}** [[{t}]] (({t}))")),
        Just(String::new()),
    ]
}

fn document(lines: &[String]) -> String {
    lines.iter().map(|line| format!("{line}\n")).collect()
}

proptest! {
    #[test]
    fn plain_line_is_wrapped_once(line in plain_line()) {
        let html = to_html(&format!("{line}\n"));
        prop_assert_eq!(html, format!("<p>\n{line}\n</p>\n"));
    }

    #[test]
    fn plain_lines_share_one_paragraph(lines in prop::collection::vec(plain_line(), 1..8)) {
        let html = to_html(&document(&lines));
        prop_assert_eq!(html.matches("<p>").count(), 1);
        prop_assert_eq!(html.matches("<br/>").count(), lines.len() - 1);
        prop_assert!(html.ends_with("</p>\n"));
    }

    #[test]
    fn unordered_run_has_one_wrapper(items in prop::collection::vec(item_text(), 1..10)) {
        let lines: Vec<_> = items.iter().map(|t| format!("- {t}")).collect();
        let html = to_html(&document(&lines));

        let expected_items: String = items.iter().map(|t| format!("<li>{t}</li>\n")).collect();
        prop_assert_eq!(html, format!("<ul>\n{expected_items}</ul>\n"));
    }

    #[test]
    fn switching_lists_never_opens_paragraph(
        first in prop::collection::vec(item_text(), 1..5),
        second in prop::collection::vec(item_text(), 1..5),
    ) {
        let mut lines: Vec<_> = first.iter().map(|t| format!("- {t}")).collect();
        lines.extend(second.iter().map(|t| format!("* {t}")));
        let html = to_html(&document(&lines));

        prop_assert!(!html.contains("<p>"));
        prop_assert!(html.contains("</ul>\n<ol>\n"));
        prop_assert!(html.ends_with("</ol>\n"));
    }

    #[test]
    fn wrappers_are_balanced(lines in prop::collection::vec(any_line(), 0..30)) {
        let html = to_html(&document(&lines));
        for (open, close) in [("<ul>", "</ul>"), ("<ol>", "</ol>"), ("<p>", "</p>")] {
            prop_assert_eq!(html.matches(open).count(), html.matches(close).count());
        }
    }

    #[test]
    fn heading_converts_exactly(level in 1usize..=6, title in item_text()) {
        let html = to_html(&format!("{} {title}\n", "#".repeat(level)));
        prop_assert_eq!(html, format!("<h{level}>{title}</h{level}>\n"));
    }

    #[test]
    fn digest_replaces_span(text in "[a-zA-Z0-9 ]{1,20}") {
        let html = to_html(&format!("x [[{text}]] y\n"));
        let digest = format!("{:x}", md5::compute(text.as_bytes()));
        prop_assert_eq!(html, format!("<p>\nx {digest} y\n</p>\n"));
    }

    #[test]
    fn strip_removes_every_c(text in "[a-zA-Z]{1,20}") {
        let html = to_html(&format!("(({text}))\n"));
        prop_assert!(!html.contains(['c', 'C']));
    }

    #[test]
    fn streaming_matches_in_memory(lines in prop::collection::vec(any_line(), 0..20)) {
        let input = document(&lines);
        prop_assert_eq!(convert_str(&input, &Options::default()).unwrap(), to_html(&input));
    }
}
