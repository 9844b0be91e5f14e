//! Frontmatter block splitting.
//!
//! Frontmatter is a `---` delimited YAML block at the very first byte of a
//! document. [`split_frontmatter`] locates it with a metadata-aware parse and
//! hands back the body text that follows it, so callers can validate the
//! block before any body markup is produced. The body is then parsed without
//! metadata blocks, where a later `---` pair is an ordinary rule or heading.

use pulldown_cmark::{Event, MetadataBlockKind, Options, Parser, Tag, TagEnd};

/// Split the leading YAML frontmatter block from the body text.
///
/// Returns the raw YAML text of the block (`None` when the document does not
/// start with one) and the remaining source. A block preceded by anything,
/// even a blank line, is not frontmatter.
pub fn split_frontmatter(source: &str) -> (Option<String>, &str) {
    let mut events =
        Parser::new_ext(source, Options::ENABLE_YAML_STYLE_METADATA_BLOCKS).into_offset_iter();

    let block = match events.next() {
        Some((Event::Start(Tag::MetadataBlock(MetadataBlockKind::YamlStyle)), range))
            if range.start == 0 =>
        {
            range
        }
        _ => return (None, source),
    };

    let mut yaml = String::new();
    for (event, _) in events {
        match event {
            Event::End(TagEnd::MetadataBlock(_)) => break,
            Event::Text(text) => yaml.push_str(&text),
            _ => {}
        }
    }

    (Some(yaml), &source[block.end..])
}
