//! Sync run orchestration: load posted ids, fetch the feed, post what's new,
//! save the updated ids.

use anyhow::Context;
use reelpost_core::{AppConfig, ReviewRecord, RunSummary};
use reelpost_feed::{FeedClient, YearFilter};
use reelpost_plurk::PlurkClient;
use reelpost_store::{DedupStore, PostedIds};

/// Reviews whose id is not yet in `posted`, in feed order.
pub(crate) fn select_new_reviews(
    reviews: Vec<ReviewRecord>,
    posted: &PostedIds,
) -> Vec<ReviewRecord> {
    reviews
        .into_iter()
        .filter(|r| !posted.contains(&r.id))
        .collect()
}

/// Fetch the feed and return the reviews not posted yet, together with the
/// current id set.
async fn load_candidates(
    config: &AppConfig,
    store: &DedupStore,
) -> anyhow::Result<(Vec<ReviewRecord>, PostedIds)> {
    let posted = store.load();
    tracing::info!(count = posted.len(), "found previously posted reviews");

    let feed = FeedClient::new(config.request_timeout_secs, &config.user_agent)
        .context("failed to build feed client")?;
    let reviews = feed
        .fetch_reviews(
            &config.feed_url,
            YearFilter::from_flag(config.filter_current_year_only),
        )
        .await
        .with_context(|| format!("failed to fetch review feed {}", config.feed_url))?;

    let candidates = select_new_reviews(reviews, &posted);
    tracing::info!(count = candidates.len(), "found new reviews to post");
    Ok((candidates, posted))
}

/// Run one full sync.
///
/// Each new review is posted once, in feed order. A failed post is logged and
/// skipped; it is not recorded, so the next run will try it again. The id file
/// is written once at the end with every id that was posted successfully.
///
/// # Errors
///
/// Returns an error if the feed cannot be fetched or parsed, or if the id file
/// cannot be written. Individual post failures are not errors.
pub(crate) async fn run_sync(config: &AppConfig) -> anyhow::Result<RunSummary> {
    let store = DedupStore::new(config.data_file.clone());
    let (candidates, mut posted) = load_candidates(config, &store).await?;

    let plurk = PlurkClient::from_config(config).context("failed to build Plurk client")?;

    let mut newly_posted = Vec::new();
    for review in candidates {
        match plurk.publish(&review).await {
            Ok(_) => {
                posted.insert(review.id.clone());
                newly_posted.push(review);
            }
            Err(e) => {
                tracing::warn!(review_id = %review.id, title = %review.title, error = %e, "failed to post review");
            }
        }
    }

    store
        .save(&posted)
        .with_context(|| format!("failed to save {}", store.path().display()))?;

    tracing::info!(count = newly_posted.len(), "posted new reviews to Plurk");
    tracing::info!(count = posted.len(), "total posted reviews");

    Ok(RunSummary::new(newly_posted, posted.len()))
}

/// Like [`run_sync`] but posts nothing and leaves the id file untouched.
/// Every candidate is logged with the exact text that would be posted.
///
/// # Errors
///
/// Returns an error if the feed cannot be fetched or parsed.
pub(crate) async fn preview(config: &AppConfig) -> anyhow::Result<RunSummary> {
    let store = DedupStore::new(config.data_file.clone());
    let (candidates, posted) = load_candidates(config, &store).await?;

    let plurk = PlurkClient::from_config(config).context("failed to build Plurk client")?;
    for review in &candidates {
        tracing::info!(review_id = %review.id, content = %plurk.render(review), "[dry-run] would post");
    }

    let mut summary = RunSummary::new(candidates, posted.len());
    summary.dry_run = true;
    Ok(summary)
}

#[cfg(test)]
#[path = "pipeline_test.rs"]
mod tests;
