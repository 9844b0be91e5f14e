//! Syntax highlighting for fenced code blocks.

use std::collections::HashMap;
use std::sync::LazyLock;

use syntect::html::{ClassStyle, ClassedHTMLGenerator};
use syntect::parsing::SyntaxSet;
use syntect::util::LinesWithEndings;

use crate::code_block::{CodeBlockProcessor, ProcessResult};
use crate::state::escape_html;

/// Bundled syntax definitions, loaded once per process.
static SYNTAXES: LazyLock<SyntaxSet> = LazyLock::new(SyntaxSet::load_defaults_newlines);

/// Class names are `hljs-` prefixed scope atoms (`hljs-keyword`, `hljs-string`).
const CLASS_STYLE: ClassStyle = ClassStyle::SpacedPrefixed { prefix: "hljs-" };

/// Code block processor that highlights fenced code with a known language.
///
/// Output is classed HTML; colors come from the site stylesheet:
///
/// ```html
/// <pre><code class="hljs language-rust"><span class="hljs-source hljs-rust">...</span></code></pre>
/// ```
///
/// Languages without a bundled syntax are passed through to the backend's
/// plain code block and recorded as warnings.
#[derive(Debug, Default)]
pub struct SyntaxHighlighter {
    warnings: Vec<String>,
}

impl SyntaxHighlighter {
    /// Create a new highlighter.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn highlight(language: &str, source: &str) -> Result<Option<String>, syntect::Error> {
        let Some(syntax) = SYNTAXES.find_syntax_by_token(language) else {
            return Ok(None);
        };

        let mut generator = ClassedHTMLGenerator::new_with_class_style(syntax, &SYNTAXES, CLASS_STYLE);
        for line in LinesWithEndings::from(source) {
            generator.parse_html_for_line_which_includes_newline(line)?;
        }
        Ok(Some(generator.finalize()))
    }
}

impl CodeBlockProcessor for SyntaxHighlighter {
    fn process(
        &mut self,
        language: &str,
        _attrs: &HashMap<String, String>,
        source: &str,
        index: usize,
    ) -> ProcessResult {
        match Self::highlight(language, source) {
            Ok(Some(html)) => ProcessResult::Inline(format!(
                r#"<pre><code class="hljs language-{}">{html}</code></pre>"#,
                escape_html(language)
            )),
            Ok(None) => {
                self.warnings.push(format!(
                    "code block {index}: no syntax highlighting for language '{language}'"
                ));
                ProcessResult::PassThrough
            }
            Err(e) => {
                self.warnings.push(format!(
                    "code block {index}: highlighting '{language}' failed: {e}"
                ));
                ProcessResult::PassThrough
            }
        }
    }

    fn warnings(&self) -> &[String] {
        &self.warnings
    }
}
