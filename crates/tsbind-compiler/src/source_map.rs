//! Declaration documents of one generation run.
//!
//! Several documents feed one `Library`. Diagnostics keep a `SourceId` and are
//! resolved against the map only when printed.

#[cfg(test)]
#[path = "source_map_tests.rs"]
mod source_map_tests;

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub struct SourceId(pub(crate) u32);

/// Display name of text passed without a path.
const INLINE_NAME: &str = "<inline>";

#[derive(Clone, Debug)]
struct Document {
    path: Option<String>,
    text: String,
}

impl Document {
    fn view(&self, id: SourceId) -> Source<'_> {
        Source {
            id,
            path: self.path.as_deref(),
            text: &self.text,
        }
    }
}

/// Borrowed view of one document.
#[derive(Clone, Copy, Debug)]
pub struct Source<'s> {
    pub id: SourceId,
    path: Option<&'s str>,
    text: &'s str,
}

impl<'s> Source<'s> {
    pub fn as_str(&self) -> &'s str {
        self.text
    }

    /// The file path, or `<inline>`.
    pub fn display_name(&self) -> &'s str {
        self.path.unwrap_or(INLINE_NAME)
    }
}

#[derive(Clone, Debug, Default)]
pub struct SourceMap {
    documents: Vec<Document>,
}

impl SourceMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_inline(&mut self, text: &str) -> SourceId {
        self.push(None, text)
    }

    pub fn add_file(&mut self, path: &str, text: &str) -> SourceId {
        self.push(Some(path.to_owned()), text)
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Panics on an id issued by another map.
    pub fn get(&self, id: SourceId) -> Source<'_> {
        self.documents
            .get(id.0 as usize)
            .expect("invalid SourceId")
            .view(id)
    }

    /// Documents in the order they were added.
    pub fn iter(&self) -> impl Iterator<Item = Source<'_>> {
        self.documents
            .iter()
            .enumerate()
            .map(|(idx, document)| document.view(SourceId(idx as u32)))
    }

    fn push(&mut self, path: Option<String>, text: &str) -> SourceId {
        let id = SourceId(self.documents.len() as u32);
        self.documents.push(Document {
            path,
            text: text.to_owned(),
        });
        id
    }
}
