//! Appearance preference persistence and document theming.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components never touch `localStorage` directly; they go through a
//! [`PreferenceStore`] held by the `Theme` handle. The browser store is
//! hydrate-only and reports "nothing stored" on the server so SSR stays
//! deterministic.
//!
//! TRADE-OFFS
//! ==========
//! Persistence is best-effort. Every failure surfaces as a
//! [`PreferenceError`] that callers absorb into the light default.

#[cfg(test)]
#[path = "preference_test.rs"]
mod preference_test;

use std::sync::Mutex;

use crate::state::appearance::Appearance;

/// `localStorage` key holding the JSON-encoded appearance.
pub const STORAGE_KEY: &str = "xevrion_appearance";

/// Errors produced by a preference store.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PreferenceError {
    /// No window or storage is reachable.
    #[error("preference store unavailable")]
    Unavailable,

    /// The stored text is not a known appearance.
    #[error("stored preference is malformed: {0}")]
    Malformed(String),

    /// The store rejected the write (quota, privacy mode).
    #[error("preference write failed: {0}")]
    WriteFailed(String),
}

/// Durable storage for the appearance choice.
pub trait PreferenceStore: Send + Sync {
    /// `Ok(None)` when nothing has been stored yet.
    fn read(&self) -> Result<Option<Appearance>, PreferenceError>;

    fn write(&self, appearance: Appearance) -> Result<(), PreferenceError>;
}

/// Encode an appearance for storage.
#[must_use]
pub fn encode(appearance: Appearance) -> String {
    serde_json::Value::from(appearance.as_str()).to_string()
}

/// Decode a stored value. Accepts the JSON form written by [`encode`] and the
/// bare `light`/`dark` text other tools write.
pub fn decode(raw: &str) -> Result<Appearance, PreferenceError> {
    serde_json::from_str::<Appearance>(raw).or_else(|_| raw.trim().parse::<Appearance>())
}

// =============================================================================
// BROWSER STORE
// =============================================================================

/// `localStorage`-backed store. Falls back to the system color scheme when
/// nothing has been stored.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorageStore;

impl PreferenceStore for LocalStorageStore {
    fn read(&self) -> Result<Option<Appearance>, PreferenceError> {
        #[cfg(feature = "hydrate")]
        {
            let window = web_sys::window().ok_or(PreferenceError::Unavailable)?;
            let storage = window
                .local_storage()
                .ok()
                .flatten()
                .ok_or(PreferenceError::Unavailable)?;

            if let Some(raw) = storage.get_item(STORAGE_KEY).map_err(|_| PreferenceError::Unavailable)? {
                return decode(&raw).map(Some);
            }

            let prefers_dark = window
                .match_media("(prefers-color-scheme: dark)")
                .ok()
                .flatten()
                .is_some_and(|mq| mq.matches());
            Ok(prefers_dark.then_some(Appearance::Dark))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Ok(None)
        }
    }

    fn write(&self, appearance: Appearance) -> Result<(), PreferenceError> {
        #[cfg(feature = "hydrate")]
        {
            let storage = web_sys::window()
                .and_then(|w| w.local_storage().ok().flatten())
                .ok_or(PreferenceError::Unavailable)?;
            storage
                .set_item(STORAGE_KEY, &encode(appearance))
                .map_err(|e| PreferenceError::WriteFailed(format!("{e:?}")))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = appearance;
            Ok(())
        }
    }
}

// =============================================================================
// IN-MEMORY STORE
// =============================================================================

/// Process-local store that records every write.
#[derive(Debug, Default)]
pub struct MemoryStore {
    value: Mutex<Option<Appearance>>,
    writes: Mutex<Vec<Appearance>>,
    failing: bool,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_value(appearance: Appearance) -> Self {
        Self { value: Mutex::new(Some(appearance)), ..Self::default() }
    }

    /// A store whose reads and writes always fail.
    #[must_use]
    pub fn failing() -> Self {
        Self { failing: true, ..Self::default() }
    }

    /// Current stored value.
    pub fn value(&self) -> Option<Appearance> {
        self.value.lock().map_or(None, |v| *v)
    }

    /// Every successful write, oldest first.
    pub fn writes(&self) -> Vec<Appearance> {
        self.writes.lock().map(|w| w.clone()).unwrap_or_default()
    }
}

impl PreferenceStore for MemoryStore {
    fn read(&self) -> Result<Option<Appearance>, PreferenceError> {
        if self.failing {
            return Err(PreferenceError::Unavailable);
        }
        let value = self.value.lock().map_err(|_| PreferenceError::Unavailable)?;
        Ok(*value)
    }

    fn write(&self, appearance: Appearance) -> Result<(), PreferenceError> {
        if self.failing {
            return Err(PreferenceError::WriteFailed("memory store is read-only".to_owned()));
        }
        *self.value.lock().map_err(|_| PreferenceError::Unavailable)? = Some(appearance);
        self.writes
            .lock()
            .map_err(|_| PreferenceError::Unavailable)?
            .push(appearance);
        Ok(())
    }
}

// =============================================================================
// DOCUMENT
// =============================================================================

/// What the `<html>` element should carry for an appearance.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DocumentTheme {
    pub dark_class: bool,
    pub color_scheme: &'static str,
}

impl From<Appearance> for DocumentTheme {
    fn from(appearance: Appearance) -> Self {
        Self { dark_class: appearance.is_dark(), color_scheme: appearance.as_str() }
    }
}

/// Toggle the `dark` class and the `color-scheme` property on `<html>`.
/// Other inline styles on the element are left alone.
pub fn apply_to_document(appearance: Appearance) {
    let theme = DocumentTheme::from(appearance);
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;

        if let Some(el) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|doc| doc.document_element())
        {
            let class_list = el.class_list();
            let _ = if theme.dark_class {
                class_list.add_1("dark")
            } else {
                class_list.remove_1("dark")
            };
            if let Some(html) = el.dyn_ref::<web_sys::HtmlElement>() {
                let _ = html.style().set_property("color-scheme", theme.color_scheme);
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = theme;
    }
}

/// Inline `<head>` script that applies the stored appearance before first
/// paint. Mirrors [`LocalStorageStore::read`] and [`decode`]: JSON or bare
/// text, unknown values count as light, nothing stored defers to the system
/// color scheme.
#[must_use]
pub fn theme_boot_script() -> String {
    format!(
        "(function(){{try{{\
var v=localStorage.getItem({key});\
var d;\
if(v===null){{d=window.matchMedia('(prefers-color-scheme: dark)').matches;}}\
else{{try{{v=JSON.parse(v);}}catch(e){{v=String(v).trim();}}d=v==='dark';}}\
var r=document.documentElement;\
if(d){{r.classList.add('dark');}}\
r.style.setProperty('color-scheme',d?'dark':'light');\
}}catch(e){{}}}})();",
        key = serde_json::Value::from(STORAGE_KEY)
    )
}
