//! Markdown renderer for smu documentation pages.
//!
//! This crate provides a generic [`MarkdownRenderer`] that produces HTML
//! through the [`RenderBackend`] trait, plus the pieces of the page pipeline
//! that sit around it:
//!
//! - [`split_frontmatter`]: separates the leading YAML block from the body
//!   text so it never reaches the rendered output
//! - [`CodeBlockProcessor`]: hook for fenced code blocks, implemented by
//!   [`SyntaxHighlighter`]
//! - [`HtmlBackend`]: plain semantic HTML5 output
//!
//! # Example
//!
//! ```
//! use smu_docs_renderer::{HtmlBackend, MarkdownRenderer, SyntaxHighlighter, split_frontmatter};
//!
//! let source = "---\ntitle: Install\n---\n# Hello\n";
//! let mut renderer = MarkdownRenderer::<HtmlBackend>::new()
//!     .with_processor(SyntaxHighlighter::new());
//! let (frontmatter, body) = split_frontmatter(source);
//! let result = renderer.render(renderer.create_parser(body));
//!
//! assert!(frontmatter.is_some_and(|yaml| yaml.contains("title: Install")));
//! assert_eq!(result.html, "<h1>Hello</h1>");
//! ```

mod backend;
mod code_block;
mod frontmatter;
mod highlight;
mod html;
mod renderer;
mod state;

pub use backend::RenderBackend;
pub use code_block::{CodeBlockProcessor, ProcessResult};
pub use frontmatter::split_frontmatter;
pub use highlight::SyntaxHighlighter;
pub use html::HtmlBackend;
pub use renderer::{MarkdownRenderer, RenderResult};
pub use state::escape_html;
