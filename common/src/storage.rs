use std::collections::HashMap;

use anyhow::Result;

// durable key-value storage
//
// in the browser this is localStorage (see webapp/src/common/storage.rs), which can be disabled,
// full, or blocked by privacy settings.  callers are expected to log failures and carry on with
// their in-memory state rather than propagate them to the page
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>>;

    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

// in-memory store, used by tests and anywhere durable storage is unavailable
//
// `failing` makes every operation error, to exercise the degradation paths
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    items: HashMap<String, String>,
    failing: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        MemoryStore {
            items: HashMap::new(),
            failing: true,
        }
    }

    pub fn set_failing(&mut self, failing: bool) {
        self.failing = failing;
    }

    pub fn peek(&self, key: &str) -> Option<&str> {
        self.items.get(key).map(String::as_str)
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        if self.failing {
            return Err(anyhow::Error::msg(format!("storage unavailable reading {key}")));
        }

        Ok(self.items.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        if self.failing {
            return Err(anyhow::Error::msg(format!("storage unavailable writing {key}")));
        }

        self.items.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failing_store_errors_both_ways() {
        let mut store = MemoryStore::failing();

        assert!(store.get("k").is_err());
        assert!(store.set("k", "v").is_err());

        store.set_failing(false);
        store.set("k", "v").unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some("v"));
    }
}
