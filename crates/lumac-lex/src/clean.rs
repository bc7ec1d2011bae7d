//! Source-text normalization run once, before the scan loop ever starts:
//! stripping a byte-order mark, deleting carriage returns, trimming
//! trailing whitespace off every line, and — in literate mode — blanking
//! out the prose lines around the indented code.
//!
//! A file that happens to begin with whitespace gets a synthetic blank
//! line prepended ahead of it. The indentation engine assumes the first
//! line of input has no predecessor to compare indentation against; a
//! leading blank line (itself unindented) gives it one. [`Cleaned::line_shift`]
//! tells the caller how far to walk the reported start line back so
//! diagnostics still point at the real first line of the original source.

pub(crate) struct Cleaned {
    pub(crate) source: String,
    pub(crate) line_shift: i64,
}

pub(crate) fn clean(source: &str, literate: bool) -> Cleaned {
    let source = source.strip_prefix('\u{feff}').unwrap_or(source);
    let text = source.replace('\r', "");
    let text = if literate { strip_literate(&text) } else { text };

    let trimmed = text
        .split('\n')
        .map(|line| line.trim_end_matches([' ', '\t']))
        .collect::<Vec<_>>()
        .join("\n");

    if trimmed.starts_with(' ') || trimmed.starts_with('\t') {
        Cleaned {
            source: format!("\n{trimmed}"),
            line_shift: -1,
        }
    } else {
        Cleaned {
            source: trimmed,
            line_shift: 0,
        }
    }
}

/// Blanks every line not indented by at least four spaces or a tab,
/// leaving the line count untouched so downstream line numbers don't
/// shift. Turning what survives into an actual program is the parser's
/// job; this only decides what counts as code at all.
fn strip_literate(text: &str) -> String {
    text.split('\n')
        .map(|line| {
            if line.starts_with("    ") || line.starts_with('\t') {
                line
            } else {
                ""
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}
