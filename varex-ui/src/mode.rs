//! Display-mode settings service.
//!
//! The mode (default vs research) is process-wide configuration with
//! explicit get/set and change notification, injected rather than read
//! from ambient browser storage. The signal inside [`ModeService`] is the
//! notification: components reading it re-render when the mode changes.

use std::cell::Cell;
use std::rc::Rc;

use dioxus::prelude::*;

use varex_common::DisplayMode;

/// Persistence backend for the display mode preference.
///
/// The web shell stores it in `localStorage`; tests and tools without
/// browser storage use [`InMemoryModePersistence`].
pub trait ModePersistence {
    fn load(&self) -> Option<DisplayMode>;
    fn store(&self, mode: DisplayMode);
}

/// Keeps the mode for the lifetime of the process only.
#[derive(Default)]
pub struct InMemoryModePersistence {
    mode: Cell<Option<DisplayMode>>,
}

impl ModePersistence for InMemoryModePersistence {
    fn load(&self) -> Option<DisplayMode> {
        self.mode.get()
    }

    fn store(&self, mode: DisplayMode) {
        self.mode.set(Some(mode));
    }
}

/// Injected settings service for the display mode.
#[derive(Clone)]
pub struct ModeService {
    mode: Signal<DisplayMode>,
    persistence: Rc<dyn ModePersistence>,
}

impl ModeService {
    /// Current mode; subscribes the calling scope to changes.
    pub fn mode(&self) -> DisplayMode {
        (self.mode)()
    }

    pub fn set(&mut self, mode: DisplayMode) {
        self.persistence.store(mode);
        self.mode.set(mode);
    }

    pub fn toggle(&mut self) {
        let next = self.mode.peek().toggled();
        self.set(next);
    }
}

/// Hook: create the service once, seeded from the persisted preference.
pub fn use_mode_service(persistence: Rc<dyn ModePersistence>) -> ModeService {
    let seed = persistence.clone();
    let mode = use_signal(move || seed.load().unwrap_or_default());
    use_hook(move || ModeService { mode, persistence })
}
