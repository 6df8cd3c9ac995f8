use gloo_console::error as console_error;
use gloo_storage::{LocalStorage, Storage};

use common::storage::KeyValueStore;

// localStorage behind the common KeyValueStore seam
//
// values are stored verbatim ("dark", "true") rather than json encoded, so they read the same
// from devtools and from older versions of the page.  gloo's raw() throws if the browser refuses
// access to localStorage (privacy modes, sandboxed frames), so availability is checked first and
// reported as an ordinary error
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

fn available() -> anyhow::Result<()> {
    web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .map(|_| ())
        .ok_or_else(|| anyhow::Error::msg("local storage unavailable"))
}

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> anyhow::Result<Option<String>> {
        available()?;

        LocalStorage::raw().get_item(key).map_err(|err| {
            console_error!(format!("Failed to fetch local storage {key}: {err:?}"));
            anyhow::Error::msg("Local storage failure, see console log")
        })
    }

    fn set(&mut self, key: &str, value: &str) -> anyhow::Result<()> {
        available()?;

        LocalStorage::raw().set_item(key, value).map_err(|err| {
            console_error!(format!("Failed to set local storage {key}: {err:?}"));
            anyhow::Error::msg("Local storage failure, see console log")
        })
    }
}
