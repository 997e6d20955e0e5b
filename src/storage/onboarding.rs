//! Persisted onboarding flags
//!
//! Two keys survive between sessions: a completion marker and the JSON list
//! of selected categories. Both are written once when onboarding completes
//! and read once at startup.

use super::error::{StorageError, StorageResult};
use super::local::LocalStore;
use crate::model::Category;

pub const ONBOARDING_KEY: &str = "glimmerly-onboarding";
pub const CATEGORIES_KEY: &str = "glimmerly-categories";

/// Value of `ONBOARDING_KEY` once onboarding is done
pub const ONBOARDING_COMPLETED: &str = "completed";

/// Read the saved category selection
///
/// Returns `None` unless the completion marker is set and a category list
/// is present. A present but unparseable list is reported as corrupt.
pub fn load_onboarding(store: &dyn LocalStore) -> StorageResult<Option<Vec<Category>>> {
    let marker = store.get_item(ONBOARDING_KEY)?;
    if marker.as_deref() != Some(ONBOARDING_COMPLETED) {
        return Ok(None);
    }

    let Some(raw) = store.get_item(CATEGORIES_KEY)? else {
        return Ok(None);
    };

    let categories: Vec<Category> =
        serde_json::from_str(&raw).map_err(|e| StorageError::Corrupt {
            key: CATEGORIES_KEY.to_string(),
            reason: e.to_string(),
        })?;

    Ok(Some(categories))
}

/// Persist both onboarding flags
pub fn save_onboarding(store: &mut dyn LocalStore, categories: &[Category]) -> StorageResult<()> {
    store.set_item(ONBOARDING_KEY, ONBOARDING_COMPLETED)?;
    store.set_item(CATEGORIES_KEY, &serde_json::to_string(categories)?)?;

    tracing::info!(categories = ?categories, "Saved onboarding preferences");
    Ok(())
}

/// Forget the saved onboarding so the next session starts from scratch
pub fn clear_onboarding(store: &mut dyn LocalStore) -> StorageResult<()> {
    store.remove_item(ONBOARDING_KEY)?;
    store.remove_item(CATEGORIES_KEY)?;
    Ok(())
}
