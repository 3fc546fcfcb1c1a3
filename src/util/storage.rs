//! Durable client storage helpers.
//!
//! Thin wrappers over `window.localStorage`. Only the session record lives
//! there; everything else is refetched from the API. Requires a browser
//! environment; native builds read nothing and write nowhere.

/// Read a value from localStorage. Returns `None` outside the browser or
/// when the key is absent.
pub fn read(key: &str) -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let window = web_sys::window()?;
        if let Ok(Some(storage)) = window.local_storage() {
            return storage.get_item(key).ok().flatten();
        }
        None
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = key;
        None
    }
}

/// Write a value to localStorage. No-op outside the browser.
pub fn write(key: &str, value: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                let _ = storage.set_item(key, value);
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (key, value);
    }
}

/// Remove a key from localStorage. No-op outside the browser.
pub fn remove(key: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                let _ = storage.remove_item(key);
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = key;
    }
}
