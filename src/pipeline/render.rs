//! Rendering of agent answers and their citation metadata.

use crate::core::models::SourceReference;

/// Renders the answer followed by a "Sources:" block listing every citation
/// in the order received. The header is emitted even when the list is empty.
#[must_use]
pub fn render_response(answer: &str, metadata: &[SourceReference]) -> String {
    let mut rendered = format!("{answer}\n\nSources:\n");
    for item in metadata {
        rendered.push_str(&format!(
            "- Location: {}, Page: {}, Score: {}\n",
            item.location, item.page_number, item.score
        ));
    }
    rendered
}

/// Finite, single-pass iterator over rendered text, one fragment per line
/// with the terminating line break retained.
///
/// Concatenating all fragments reproduces the rendered text exactly. The
/// text is fully rendered before the first fragment is requested; this
/// iterator only re-exposes it lazily and cannot be restarted.
pub struct RenderedLines {
    fragments: std::vec::IntoIter<String>,
}

impl RenderedLines {
    #[must_use]
    pub fn new(rendered: String) -> Self {
        let fragments: Vec<String> = rendered
            .split_inclusive('\n')
            .map(str::to_string)
            .collect();
        Self {
            fragments: fragments.into_iter(),
        }
    }
}

impl Iterator for RenderedLines {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        self.fragments.next()
    }
}
