//! In-memory search index.

use async_trait::async_trait;
use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, RwLock};

use crate::uniqueness::{
    domain::{AttributeValue, RecordId, ScalarValue},
    ports::{ExistenceQuery, IndexQueryError, IndexQueryResult, SearchIndex},
};

/// Field values of one indexed record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IndexedDocument {
    fields: BTreeMap<String, Vec<ScalarValue>>,
}

impl IndexedDocument {
    /// Creates a document without fields.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a field, replacing earlier values. Unset values store no entry.
    #[must_use]
    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<AttributeValue>) -> Self {
        let values = match value.into() {
            AttributeValue::Null => Vec::new(),
            AttributeValue::Scalar(scalar) => vec![scalar],
            AttributeValue::Sequence(values) => values,
        };
        self.fields.insert(name.into(), values);
        self
    }

    /// Returns the values stored for `name`.
    #[must_use]
    pub fn field(&self, name: &str) -> &[ScalarValue] {
        self.fields.get(name).map(Vec::as_slice).unwrap_or_default()
    }

    fn matches(&self, query: &ExistenceQuery) -> bool {
        let in_scope = query.scope().is_none_or(|scope| {
            self.field(scope.field().as_str())
                .iter()
                .any(|model| model.as_text() == Some(scope.model().as_str()))
        });
        let values = self.field(query.field().as_str());
        in_scope
            && query
                .value()
                .map_or(values.is_empty(), |value| values.contains(value))
    }
}

/// Thread-safe in-memory search index.
///
/// Documents are keyed by record identity, which stands in for the
/// identity field of a real index. Matching is exact equality; no text
/// analysis is applied. A record is only visible once indexed, so callers
/// can reproduce index lag by validating before indexing.
#[derive(Debug, Clone, Default)]
pub struct InMemorySearchIndex {
    state: Arc<RwLock<InMemoryIndexState>>,
}

#[derive(Debug, Default)]
struct InMemoryIndexState {
    documents: HashMap<RecordId, IndexedDocument>,
}

impl InMemorySearchIndex {
    /// Creates an empty in-memory index.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Indexes `document` under `id`, replacing any previous version.
    ///
    /// # Errors
    ///
    /// Returns [`IndexQueryError::Backend`] when the index lock is poisoned.
    pub fn index_document(&self, id: RecordId, document: IndexedDocument) -> IndexQueryResult<()> {
        let mut state = self.state.write().map_err(|err| {
            IndexQueryError::backend(std::io::Error::other(err.to_string()))
        })?;
        state.documents.insert(id, document);
        Ok(())
    }

    /// Removes the document indexed under `id`.
    ///
    /// # Errors
    ///
    /// Returns [`IndexQueryError::Backend`] when the index lock is poisoned.
    pub fn remove(&self, id: &RecordId) -> IndexQueryResult<Option<IndexedDocument>> {
        let mut state = self.state.write().map_err(|err| {
            IndexQueryError::backend(std::io::Error::other(err.to_string()))
        })?;
        Ok(state.documents.remove(id))
    }

    /// Returns the number of indexed documents.
    ///
    /// # Errors
    ///
    /// Returns [`IndexQueryError::Backend`] when the index lock is poisoned.
    pub fn len(&self) -> IndexQueryResult<usize> {
        let state = self.state.read().map_err(|err| {
            IndexQueryError::backend(std::io::Error::other(err.to_string()))
        })?;
        Ok(state.documents.len())
    }

    /// Returns `true` when no document is indexed.
    ///
    /// # Errors
    ///
    /// Returns [`IndexQueryError::Backend`] when the index lock is poisoned.
    pub fn is_empty(&self) -> IndexQueryResult<bool> {
        self.len().map(|count| count == 0)
    }
}

#[async_trait]
impl SearchIndex for InMemorySearchIndex {
    async fn exists(&self, query: &ExistenceQuery) -> IndexQueryResult<bool> {
        let state = self.state.read().map_err(|err| {
            IndexQueryError::backend(std::io::Error::other(err.to_string()))
        })?;
        let excluded = query.excluded_id();
        Ok(state
            .documents
            .iter()
            .filter(|(id, _)| Some(*id) != excluded)
            .any(|(_, document)| document.matches(query)))
    }
}
