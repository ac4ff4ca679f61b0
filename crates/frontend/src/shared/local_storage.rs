use web_sys::window;

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

/// Read a value from localStorage. `None` outside a browser.
pub fn read_item(key: &str) -> Option<String> {
    get_local_storage()?.get_item(key).ok()?
}

/// Remove values from localStorage
pub fn remove_items(keys: &[&str]) {
    if let Some(storage) = get_local_storage() {
        for key in keys {
            let _ = storage.remove_item(key);
        }
    }
}
