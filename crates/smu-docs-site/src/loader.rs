//! Document loading pipeline.
//!
//! [`DocumentLoader`] resolves a slug to `<slug>.<extension>` in storage,
//! validates the frontmatter block and renders the body to HTML with
//! highlighted code blocks.

use std::sync::Arc;

use serde::Serialize;
use smu_docs_renderer::{HtmlBackend, MarkdownRenderer, SyntaxHighlighter, split_frontmatter};
use smu_docs_storage::{Storage, StorageError};

use crate::frontmatter::{Frontmatter, FrontmatterError};

/// Error loading a document.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// No document file exists for the slug.
    #[error("Document not found: {0}")]
    NotFound(String),
    /// The document exists but its frontmatter is invalid.
    #[error("Invalid frontmatter in {path}: {source}")]
    Frontmatter {
        /// Storage path of the document.
        path: String,
        /// What was wrong.
        #[source]
        source: FrontmatterError,
    },
    /// The document exists but could not be read.
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// A loaded documentation page.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ParsedDocument {
    /// Validated frontmatter.
    pub frontmatter: Frontmatter,
    /// File text exactly as stored, frontmatter included.
    pub raw: String,
    /// Rendered body HTML.
    pub content: String,
    /// Renderer warnings, e.g. code block languages without highlighting.
    #[serde(skip)]
    pub warnings: Vec<String>,
}

/// Loads documents from storage by slug.
pub struct DocumentLoader {
    storage: Arc<dyn Storage>,
    extension: String,
    highlight: bool,
}

impl DocumentLoader {
    /// Create a loader for documents with the given extension (without dot).
    ///
    /// Code highlighting is enabled.
    pub fn new(storage: Arc<dyn Storage>, extension: impl Into<String>) -> Self {
        Self {
            storage,
            extension: extension.into(),
            highlight: true,
        }
    }

    /// Enable or disable syntax highlighting of fenced code blocks.
    #[must_use]
    pub fn with_highlighting(mut self, enabled: bool) -> Self {
        self.highlight = enabled;
        self
    }

    /// Storage path holding the document for a slug.
    #[must_use]
    pub fn document_path(&self, slug: &str) -> String {
        format!("{slug}.{}", self.extension)
    }

    /// Load, validate and render the document for a slug.
    ///
    /// # Errors
    ///
    /// - [`LoadError::NotFound`] if no regular file exists for the slug,
    ///   including slugs that try to leave the documentation root
    /// - [`LoadError::Frontmatter`] if the frontmatter block is missing or invalid
    /// - [`LoadError::Storage`] if the file exists but cannot be read
    pub fn load(&self, slug: &str) -> Result<ParsedDocument, LoadError> {
        let path = self.document_path(slug);
        if !self.storage.is_file(&path) {
            tracing::debug!(slug, path = %path, "Document not found");
            return Err(LoadError::NotFound(path));
        }

        let raw = self.storage.read(&path)?;

        let (yaml, body) = split_frontmatter(&raw);
        let frontmatter = Frontmatter::from_yaml(yaml.as_deref()).map_err(|source| {
            tracing::error!(path = %path, error = %source, "Invalid frontmatter");
            LoadError::Frontmatter {
                path: path.clone(),
                source,
            }
        })?;

        let mut renderer = MarkdownRenderer::<HtmlBackend>::new();
        if self.highlight {
            renderer = renderer.with_processor(SyntaxHighlighter::new());
        }
        let result = renderer.render(renderer.create_parser(body));
        for warning in &result.warnings {
            tracing::warn!(path = %path, "{warning}");
        }
        tracing::debug!(path = %path, title = %frontmatter.title, "Loaded document");

        Ok(ParsedDocument {
            frontmatter,
            content: result.html,
            warnings: result.warnings,
            raw,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use pretty_assertions::assert_eq;
    use smu_docs_storage::{FsStorage, MockStorage};
    use tempfile::TempDir;

    use super::*;

    const INSTALL: &str = "---\ntitle: Install\n---\n# Hello\n";

    fn mock_loader(storage: MockStorage) -> DocumentLoader {
        DocumentLoader::new(Arc::new(storage), "md")
    }

    fn fs_loader(dir: &TempDir) -> DocumentLoader {
        DocumentLoader::new(Arc::new(FsStorage::new(dir.path().to_path_buf())), "md")
    }

    #[test]
    fn test_load_install_page() {
        let loader = mock_loader(MockStorage::new().with_file("guides/install.md", INSTALL));

        let doc = loader.load("guides/install").unwrap();

        assert_eq!(doc.frontmatter.title, "Install");
        assert_eq!(doc.raw, INSTALL);
        assert_eq!(doc.content, "<h1>Hello</h1>");
        assert!(doc.warnings.is_empty());
    }

    #[test]
    fn test_load_from_filesystem() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("guides")).unwrap();
        fs::write(dir.path().join("guides/install.md"), INSTALL).unwrap();

        let doc = fs_loader(&dir).load("guides/install").unwrap();

        assert_eq!(doc.frontmatter.title, "Install");
        assert_eq!(doc.raw, INSTALL);
        assert_eq!(doc.content, "<h1>Hello</h1>");
    }

    #[test]
    fn test_missing_document_is_not_found() {
        let loader = mock_loader(MockStorage::new().with_file("intro.md", INSTALL));

        let result = loader.load("guides/missing");

        assert!(matches!(result, Err(LoadError::NotFound(path)) if path == "guides/missing.md"));
    }

    #[test]
    fn test_directory_is_not_a_document() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("guides.md")).unwrap();

        let result = fs_loader(&dir).load("guides");

        assert!(matches!(result, Err(LoadError::NotFound(_))));
    }

    #[test]
    fn test_traversal_is_not_found() {
        let dir = TempDir::new().unwrap();
        let docs = dir.path().join("docs");
        fs::create_dir(&docs).unwrap();
        fs::write(dir.path().join("secret.md"), INSTALL).unwrap();
        let loader = DocumentLoader::new(Arc::new(FsStorage::new(docs)), "md");

        assert!(matches!(loader.load("../secret"), Err(LoadError::NotFound(_))));
        let absolute = dir.path().join("secret");
        assert!(matches!(
            loader.load(&absolute.to_string_lossy()),
            Err(LoadError::NotFound(_))
        ));
    }

    #[test]
    fn test_missing_title_is_frontmatter_error() {
        let loader = mock_loader(
            MockStorage::new().with_file("intro.md", "---\ndescription: Untitled\n---\n# Hi\n"),
        );

        let result = loader.load("intro");

        assert!(matches!(
            result,
            Err(LoadError::Frontmatter { ref path, source: FrontmatterError::MissingTitle })
                if path == "intro.md"
        ));
    }

    #[test]
    fn test_no_frontmatter_block_is_frontmatter_error() {
        let loader = mock_loader(MockStorage::new().with_file("intro.md", "# Hi\n"));

        let result = loader.load("intro");

        assert!(matches!(
            result,
            Err(LoadError::Frontmatter {
                source: FrontmatterError::Missing,
                ..
            })
        ));
    }

    #[test]
    fn test_later_dashed_block_is_body_content() {
        let source = "---\ntitle: Install\n---\nIntro\n\n---\nkey: v\n---\n\nAfter\n";
        let loader = mock_loader(MockStorage::new().with_file("install.md", source));

        let doc = loader.load("install").unwrap();

        assert_eq!(doc.frontmatter.title, "Install");
        assert!(doc.frontmatter.extra.is_empty());
        assert_eq!(
            doc.content,
            "<p>Intro</p><hr><h2>key: v</h2><p>After</p>"
        );
    }

    #[test]
    fn test_frontmatter_must_start_the_file() {
        let loader = mock_loader(
            MockStorage::new().with_file("install.md", "\n---\ntitle: Install\n---\n# Hello\n"),
        );

        let result = loader.load("install");

        assert!(matches!(
            result,
            Err(LoadError::Frontmatter {
                source: FrontmatterError::Missing,
                ..
            })
        ));
    }

    #[test]
    fn test_tables_are_rendered() {
        let source = "---\ntitle: Tools\n---\n| tool | kind |\n|---|---|\n| node | runtime |\n";
        let loader = mock_loader(MockStorage::new().with_file("tools.md", source));

        let doc = loader.load("tools").unwrap();

        assert!(doc.content.starts_with("<table><thead><tr><th>tool</th>"));
        assert!(doc.content.contains("<td>runtime</td>"));
    }

    #[test]
    fn test_code_block_is_highlighted() {
        let source = "---\ntitle: Install\n---\n```sh\nbrew install smu\n```\n";
        let loader = mock_loader(MockStorage::new().with_file("install.md", source));

        let doc = loader.load("install").unwrap();

        assert!(doc.content.starts_with(r#"<pre><code class="hljs language-sh">"#));
        assert!(doc.content.contains("brew"));
    }

    #[test]
    fn test_highlighting_disabled() {
        let source = "---\ntitle: Install\n---\n```sh\nbrew install smu\n```\n";
        let loader = mock_loader(MockStorage::new().with_file("install.md", source))
            .with_highlighting(false);

        let doc = loader.load("install").unwrap();

        assert_eq!(
            doc.content,
            "<pre><code class=\"language-sh\">brew install smu\n</code></pre>"
        );
    }

    #[test]
    fn test_unknown_language_warns() {
        let source = "---\ntitle: Install\n---\n```smu-config\nkey = 1\n```\n";
        let loader = mock_loader(MockStorage::new().with_file("install.md", source));

        let doc = loader.load("install").unwrap();

        assert_eq!(
            doc.content,
            "<pre><code class=\"language-smu-config\">key = 1\n</code></pre>"
        );
        assert_eq!(doc.warnings.len(), 1);
    }

    #[test]
    fn test_serialized_shape() {
        let loader = mock_loader(MockStorage::new().with_file("install.md", INSTALL));

        let json = serde_json::to_value(loader.load("install").unwrap()).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "frontmatter": {"title": "Install"},
                "raw": INSTALL,
                "content": "<h1>Hello</h1>"
            })
        );
    }
}
