use chrono::{DateTime, Utc};

use super::criteria::SortKey;
use super::Listable;

/// Missing timestamps sort as the Unix epoch.
fn created_at_or_epoch<T: Listable + ?Sized>(item: &T) -> DateTime<Utc> {
    item.created_at().unwrap_or(DateTime::UNIX_EPOCH)
}

/// Stable sort of the full filtered set.
pub fn sort_items<T: Listable>(items: &mut [&T], key: SortKey) {
    match key {
        SortKey::CreatedAt => {
            items.sort_by(|a, b| created_at_or_epoch(*b).cmp(&created_at_or_epoch(*a)));
        }
        // No favorite count is tracked per listing, so order is left as fetched.
        SortKey::Favorites => {
            tracing::debug!("favorites sort requested; keeping fetched order");
        }
    }
}
