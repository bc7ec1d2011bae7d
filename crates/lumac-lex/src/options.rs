//! Options the caller passes into [`crate::tokenize`].

/// Tuning knobs for a single lex pass.
///
/// Mirrors the external interface's input shape: a starting position (for
/// lexing a fragment that isn't at the top of a file — used internally for
/// interpolation, but also exposed so a caller embedding this lexer in a
/// larger pipeline can reuse it) plus the literate-mode switch.
///
/// `line`/`column` are 1-based here, matching every other line/column this
/// crate reports (`Cursor::new` starts at `(1, 1)`, not `(0, 0)`), rather
/// than the 0-based default a JS-flavored interface might use.
#[derive(Clone, Copy, Debug)]
pub struct LexOptions {
    /// 0-based line the first character of `source` should be reported at.
    pub line: u32,
    /// 0-based column the first character of `source` should be reported at.
    pub column: u32,
    /// When set, lines not indented by at least four spaces (or a tab) are
    /// blanked out as prose before the scan starts, leaving only the
    /// indented code to lex. Parsing the surrounding Markdown itself is
    /// out of scope — see `Non-goals` — this crate only decides what
    /// counts as code.
    pub literate: bool,
}

impl LexOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn at(mut self, line: u32, column: u32) -> Self {
        self.line = line;
        self.column = column;
        self
    }

    pub fn literate(mut self, literate: bool) -> Self {
        self.literate = literate;
        self
    }
}

impl Default for LexOptions {
    fn default() -> Self {
        Self {
            line: 1,
            column: 1,
            literate: false,
        }
    }
}
