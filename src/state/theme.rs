//! Light/dark theme with client-side persistence.
//!
//! `ThemeStore` is the only writer of the theme. It is held in a
//! `RwSignal` provided via context, so a toggle is visible to every bound
//! view in the same update. Persistence happens inside `toggle`, which runs
//! inside the signal update, so storage is written before subscribers
//! re-render.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use crate::util::storage::KeyValueStore;

/// Display theme.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// The value written to storage.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Parse a stored value. Anything other than `light` / `dark` is ignored.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    #[must_use]
    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }
}

/// Owner of the current theme and its persisted copy.
#[derive(Debug, Clone)]
pub struct ThemeStore<S> {
    theme: Theme,
    key: String,
    storage: S,
}

impl<S: KeyValueStore> ThemeStore<S> {
    /// Resolve the initial theme.
    ///
    /// Order: the value persisted under `key`, then the system
    /// "prefers dark" signal (`None` when the environment has none), then
    /// [`Theme::Light`]. Read failures fall through to the next source.
    pub fn load(storage: S, key: impl Into<String>, prefers_dark: Option<bool>) -> Self {
        let key = key.into();
        let persisted = match storage.get(&key) {
            Ok(Some(raw)) => {
                let parsed = Theme::parse(&raw);
                if parsed.is_none() {
                    log::warn!("ignoring unrecognized stored theme {raw:?}");
                }
                parsed
            }
            Ok(None) => None,
            Err(e) => {
                log::warn!("theme storage read failed, using defaults: {e}");
                None
            }
        };

        let theme = persisted
            .or_else(|| prefers_dark.map(|dark| if dark { Theme::Dark } else { Theme::Light }))
            .unwrap_or_default();
        log::debug!("initial theme: {}", theme.as_str());

        Self { theme, key, storage }
    }

    #[must_use]
    pub fn current_theme(&self) -> Theme {
        self.theme
    }

    /// Flip the theme and persist it. Returns the new theme.
    ///
    /// A failed write leaves the new theme in effect for this session only.
    pub fn toggle(&mut self) -> Theme {
        let next = self.theme.toggled();
        if let Err(e) = self.storage.set(&self.key, next.as_str()) {
            log::warn!("theme not persisted: {e}");
        }
        self.theme = next;
        log::debug!("theme toggled to {}", next.as_str());
        next
    }

    /// Give back the backing store, e.g. to rebuild a store from it.
    #[must_use]
    pub fn into_storage(self) -> S {
        self.storage
    }
}
