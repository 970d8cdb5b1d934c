use crate::log_debug;
use crate::modules::catalog::domain::Manga;
use crate::modules::reviews::domain::repositories::review_store::ReviewTransaction;
use crate::modules::reviews::domain::value_objects::{RatingChange, ScoreAggregate};
use crate::shared::errors::{AppError, AppResult};

/// Recompute a title's aggregate for `change` and write it through `tx`.
///
/// This is the only code path that writes `score`, `rating_total` and
/// `review_count`. `manga` must have been loaded with `lock_manga` in the
/// same transaction; on success it carries the new aggregate.
pub fn apply_rating_change(
    tx: &mut dyn ReviewTransaction,
    manga: &mut Manga,
    change: RatingChange,
) -> AppResult<()> {
    let current = ScoreAggregate::from(&*manga);
    if !current.is_consistent() {
        return Err(AppError::InternalError(format!(
            "Stored aggregate for title {} is inconsistent (total {}, count {})",
            manga.mal_id,
            current.rating_total(),
            current.review_count()
        )));
    }

    let Some(next) = current.apply(change)? else {
        log_debug!(
            "Rating {} on title {} leaves aggregate unchanged",
            change.label(),
            manga.mal_id
        );
        return Ok(());
    };

    tx.write_aggregate(manga.id, &next)?;
    next.write_to(manga);
    Ok(())
}
