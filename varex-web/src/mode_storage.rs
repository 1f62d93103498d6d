//! `localStorage`-backed persistence for the display mode preference.

use varex_common::{DisplayMode, MODE_STORAGE_KEY};
use varex_ui::ModePersistence;

pub struct LocalStorageModePersistence;

impl ModePersistence for LocalStorageModePersistence {
    fn load(&self) -> Option<DisplayMode> {
        let storage = web_sys::window()?.local_storage().ok()??;
        let value = storage.get_item(MODE_STORAGE_KEY).ok()??;
        Some(DisplayMode::from_storage(&value))
    }

    fn store(&self, mode: DisplayMode) {
        let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten())
        else {
            return;
        };
        if storage.set_item(MODE_STORAGE_KEY, mode.storage_value()).is_err() {
            tracing::warn!("failed to persist display mode");
        }
    }
}
