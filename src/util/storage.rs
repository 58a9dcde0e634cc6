//! Browser localStorage access behind a narrow string interface.
//!
//! TRADE-OFFS
//! ==========
//! Storage is best-effort browser-only behavior; non-browser builds no-op
//! so rendering stays deterministic. Unit tests get a thread-local
//! in-memory map so session persistence is exercised for real.

#[cfg(all(not(feature = "hydrate"), test))]
mod mem {
    use std::cell::RefCell;
    use std::collections::HashMap;

    thread_local! {
        pub static STORE: RefCell<HashMap<String, String>> = RefCell::new(HashMap::new());
    }
}

/// Read a raw string value for `key`.
pub fn get_item(key: &str) -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
        storage.get_item(key).ok().flatten()
    }
    #[cfg(all(not(feature = "hydrate"), test))]
    {
        mem::STORE.with(|store| store.borrow().get(key).cloned())
    }
    #[cfg(all(not(feature = "hydrate"), not(test)))]
    {
        let _ = key;
        None
    }
}

/// Write a raw string value for `key`.
pub fn set_item(key: &str, value: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            let _ = storage.set_item(key, value);
        }
    }
    #[cfg(all(not(feature = "hydrate"), test))]
    {
        mem::STORE.with(|store| store.borrow_mut().insert(key.to_owned(), value.to_owned()));
    }
    #[cfg(all(not(feature = "hydrate"), not(test)))]
    {
        let _ = (key, value);
    }
}

/// Remove the value stored for `key`, if any.
pub fn remove_item(key: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            let _ = storage.remove_item(key);
        }
    }
    #[cfg(all(not(feature = "hydrate"), test))]
    {
        mem::STORE.with(|store| store.borrow_mut().remove(key));
    }
    #[cfg(all(not(feature = "hydrate"), not(test)))]
    {
        let _ = key;
    }
}
