use anyhow::Context;
use chrono::Local;
use gloss_core::lookup::DefinitionProvider;
use gloss_core::store::WordStore;

/// One synchronization pass: query records with empty definitions, resolve
/// each headword against the dictionary, and write the results back.
///
/// A failed query aborts the pass. A failed lookup or update only skips the
/// record it belongs to.
pub async fn run(store: &dyn WordStore, provider: &dyn DefinitionProvider) -> anyhow::Result<()> {
    let words = store
        .pending_words()
        .await
        .context("Failed to query words with empty definitions")?;

    tracing::info!("Found {} words with empty definitions", words.len());

    for record in &words {
        tracing::info!("Processing word: {}", record.word);

        let Some(resolved) = provider.lookup(&record.word).await else {
            tracing::info!("No definition data found for {}, skipping update", record.word);
            continue;
        };

        let today = Local::now().date_naive();
        match store.fill_definition(record, &resolved, today).await {
            Ok(()) => tracing::info!("Updated word: {}", record.word),
            Err(e) => tracing::error!("Error processing page {}: {}", record.id, e),
        }
    }

    Ok(())
}
