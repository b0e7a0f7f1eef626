use crate::types::ResolvedDefinition;

/// Best-effort definition lookup for a single headword.
#[async_trait::async_trait]
pub trait DefinitionProvider: Send + Sync {
    /// Resolve lexical data for a headword.
    ///
    /// Returns `None` when the word is unknown to the provider or the
    /// upstream response is unusable; a failed lookup never aborts the batch.
    async fn lookup(&self, word: &str) -> Option<ResolvedDefinition>;
}
