//! Light/dark appearance preference.
//!
//! DESIGN
//! ======
//! The stored preference is unknown until the browser store has been read at
//! mount, so the state carries an explicit `Unresolved` variant instead of
//! assuming light. Server rendering and the first hydrate pass both see
//! `Unresolved`, which keeps the two renders identical.
//!
//! Components receive a [`Theme`] handle through props; nothing reads the
//! preference from ambient context.

#[cfg(test)]
#[path = "appearance_test.rs"]
mod appearance_test;

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use leptos::prelude::*;
use serde::{Deserialize, Serialize};

use crate::util::preference::{PreferenceError, PreferenceStore, apply_to_document};

/// Visual mode of the UI.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Appearance {
    #[default]
    Light,
    Dark,
}

impl Appearance {
    /// The opposite appearance.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    #[must_use]
    pub fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }
}

impl fmt::Display for Appearance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Appearance {
    type Err = PreferenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(PreferenceError::Malformed(other.to_owned())),
        }
    }
}

/// Appearance as seen by a mounted component.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AppearanceState {
    /// The preference store has not been read yet.
    #[default]
    Unresolved,
    Resolved(Appearance),
}

/// Icon on the resolved appearance toggle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToggleIcon {
    /// Shown in dark mode; switches to light.
    Sun,
    /// Shown in light mode; switches to dark.
    Moon,
}

impl AppearanceState {
    /// Read the store once. An empty or failing store resolves to light.
    pub fn resolve(store: &dyn PreferenceStore) -> Self {
        match store.read() {
            Ok(Some(appearance)) => Self::Resolved(appearance),
            Ok(None) => Self::Resolved(Appearance::default()),
            Err(e) => {
                report_store_error("appearance read failed", &e);
                Self::Resolved(Appearance::default())
            }
        }
    }

    /// Flip the appearance and persist it. Write failures are logged and the
    /// in-memory state still flips. No-op while unresolved.
    #[must_use]
    pub fn toggle(self, store: &dyn PreferenceStore) -> Self {
        let Self::Resolved(current) = self else {
            return self;
        };
        let next = current.toggled();
        if let Err(e) = store.write(next) {
            report_store_error("appearance write failed", &e);
        }
        Self::Resolved(next)
    }

    #[must_use]
    pub fn appearance(self) -> Option<Appearance> {
        match self {
            Self::Unresolved => None,
            Self::Resolved(appearance) => Some(appearance),
        }
    }

    /// `None` until resolved; the toggle renders a fixed-size placeholder.
    #[must_use]
    pub fn icon(self) -> Option<ToggleIcon> {
        match self {
            Self::Unresolved => None,
            Self::Resolved(Appearance::Light) => Some(ToggleIcon::Moon),
            Self::Resolved(Appearance::Dark) => Some(ToggleIcon::Sun),
        }
    }
}

fn report_store_error(context: &str, err: &PreferenceError) {
    #[cfg(feature = "hydrate")]
    log::warn!("{context}: {err}");
    #[cfg(not(feature = "hydrate"))]
    let _ = (context, err);
}

/// Appearance signal plus the store it reads from and writes to.
///
/// `Copy`, so it can be handed to every component that needs it.
#[derive(Clone, Copy)]
pub struct Theme {
    pub state: RwSignal<AppearanceState>,
    store: StoredValue<Arc<dyn PreferenceStore>>,
}

impl Theme {
    pub fn new(store: Arc<dyn PreferenceStore>) -> Self {
        Self { state: RwSignal::new(AppearanceState::Unresolved), store: StoredValue::new(store) }
    }

    /// Read the store and apply the result to the document.
    pub fn resolve(&self) {
        let next = self.store.with_value(|store| AppearanceState::resolve(store.as_ref()));
        self.commit(next);
    }

    /// Flip the appearance, persist it, and apply it to the document.
    pub fn toggle(&self) {
        let current = self.state.get_untracked();
        let next = self.store.with_value(|store| current.toggle(store.as_ref()));
        self.commit(next);
    }

    fn commit(&self, next: AppearanceState) {
        if let Some(appearance) = next.appearance() {
            apply_to_document(appearance);
        }
        self.state.set(next);
    }
}
