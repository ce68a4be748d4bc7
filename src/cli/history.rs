use tracing::info;

use crate::api::{Backend, HistoryEntry, HttpBackend};
use crate::cli::HistoryArgs;
use crate::config::Config;
use crate::output;
use crate::session::{self, FileStore};

pub async fn execute(config: &Config, args: HistoryArgs) -> anyhow::Result<()> {
    let store = FileStore::new()?;
    let session = session::require(&store)?;

    let backend = HttpBackend::from_config(&config.api)?;
    info!("Fetching history for {}", session.username);
    let entries = backend.history(&session.username).await?;

    let entries = match &args.query {
        Some(query) => filter_entries(entries, query),
        None => entries,
    };

    print!("{}", output::render_history(&entries, args.full));
    Ok(())
}

/// Case-insensitive substring match on either summary field
fn filter_entries(entries: Vec<HistoryEntry>, query: &str) -> Vec<HistoryEntry> {
    let q = query.trim().to_lowercase();
    if q.is_empty() {
        return entries;
    }

    entries
        .into_iter()
        .filter(|e| {
            e.prompt_summary.to_lowercase().contains(&q)
                || e.response_summary.to_lowercase().contains(&q)
        })
        .collect()
}
