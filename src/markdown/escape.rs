//! Escaping of topic text for Markdown output.

use aho_corasick::AhoCorasick;
use once_cell::sync::Lazy;

const TEXT_SPECIALS: [&str; 12] = ["\\", "`", "*", "_", "[", "]", "(", ")", "#", "<", ">", "|"];
const TEXT_REPLACEMENTS: [&str; 12] = [
    "\\\\", "\\`", "\\*", "\\_", "\\[", "\\]", "\\(", "\\)", "\\#", "\\<", "\\>", "\\|",
];

const URL_SPECIALS: [&str; 6] = ["\\", "(", ")", "<", ">", " "];
const URL_REPLACEMENTS: [&str; 6] = ["\\\\", "\\(", "\\)", "\\<", "\\>", "%20"];

// Static initialization: automata are built only once, thread-safe
static TEXT_ESCAPER: Lazy<AhoCorasick> = Lazy::new(|| {
    AhoCorasick::new(TEXT_SPECIALS).expect("Failed to build Markdown text escaper")
});

static URL_ESCAPER: Lazy<AhoCorasick> = Lazy::new(|| {
    AhoCorasick::new(URL_SPECIALS).expect("Failed to build Markdown URL escaper")
});

/// Escape inline text so it renders literally.
///
/// Line breaks are folded into single spaces so a title always stays on its
/// own Markdown line. A leading list marker is escaped as well, so a title
/// like `- x` or `1. x` stays text inside its list item.
///
/// # Examples
///
/// ```
/// use xmind2md::markdown::escape_text;
/// assert_eq!(escape_text("a_b (c)"), r"a\_b \(c\)");
/// assert_eq!(escape_text("two\nlines"), "two lines");
/// assert_eq!(escape_text("1. first"), r"1\. first");
/// ```
pub fn escape_text(text: &str) -> String {
    let folded = fold_lines(text);
    escape_list_marker(TEXT_ESCAPER.replace_all(&folded, &TEXT_REPLACEMENTS))
}

/// Escape a leading `-`/`+` bullet or `N.` ordered marker.
///
/// `*` and `N)` are already covered by the character escapes.
fn escape_list_marker(mut text: String) -> String {
    if text.starts_with(['-', '+']) {
        text.insert(0, '\\');
        return text;
    }
    let digits = text.bytes().take_while(u8::is_ascii_digit).count();
    // CommonMark ordered markers have at most nine digits and need a space after.
    if (1..=9).contains(&digits)
        && let Some(after) = text[digits..].strip_prefix('.')
        && (after.is_empty() || after.starts_with([' ', '\t']))
    {
        text.insert(digits, '\\');
    }
    text
}

/// Escape a URL for use as an inline link destination.
///
/// Backslash escapes keep parentheses and angle brackets from ending the
/// destination early; spaces are percent-encoded.
///
/// # Examples
///
/// ```
/// use xmind2md::markdown::escape_url;
/// assert_eq!(escape_url("https://en.wikipedia.org/wiki/Rust_(language)"),
///            r"https://en.wikipedia.org/wiki/Rust_\(language\)");
/// ```
pub fn escape_url(url: &str) -> String {
    let folded: String = url.chars().filter(|c| !c.is_control()).collect();
    URL_ESCAPER.replace_all(&folded, &URL_REPLACEMENTS)
}

/// Wrap text in a code span, widening the fence when the text has backticks.
///
/// # Examples
///
/// ```
/// use xmind2md::markdown::code_span;
/// assert_eq!(code_span("todo"), "`todo`");
/// assert_eq!(code_span("a`b"), "`` a`b ``");
/// ```
pub fn code_span(text: &str) -> String {
    let text = fold_lines(text);
    let longest_run = text
        .split(|c| c != '`')
        .map(str::len)
        .max()
        .unwrap_or(0);

    if longest_run == 0 {
        return format!("`{}`", text);
    }

    let fence = "`".repeat(longest_run + 1);
    format!("{fence} {text} {fence}")
}

fn fold_lines(text: &str) -> String {
    if !text.contains(['\n', '\r']) {
        return text.to_string();
    }
    text.split(['\n', '\r'])
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
