use std::collections::{BTreeMap, HashMap};

use crate::domain::models::ConfigValue;

/// Port for the application's configuration mapping.
///
/// The resolver only ever calls [`ConfigStore::set_default`], so any mapping
/// the host application owns can be plugged in by implementing `get` and
/// `set`. A key is *set* once it is present, even when its value is
/// [`ConfigValue::Null`].
///
/// # Examples
///
/// ```
/// use addon_config::{ConfigStore, ConfigValue};
/// use std::collections::BTreeMap;
///
/// let mut store: BTreeMap<String, ConfigValue> = BTreeMap::new();
/// store.set("SECRET_KEY", ConfigValue::from("explicit"));
///
/// assert!(!store.set_default("SECRET_KEY", ConfigValue::from("from-env")));
/// assert_eq!(store.get("SECRET_KEY"), Some(&ConfigValue::from("explicit")));
/// ```
pub trait ConfigStore {
    /// Current value of `key`, if set.
    fn get(&self, key: &str) -> Option<&ConfigValue>;

    /// Assign `key` unconditionally.
    fn set(&mut self, key: &str, value: ConfigValue);

    /// Whether `key` holds a value (including `Null`).
    fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Assign `key` only if it is currently unset.
    ///
    /// Returns `true` when the assignment took effect.
    fn set_default(&mut self, key: &str, value: ConfigValue) -> bool {
        if self.contains_key(key) {
            return false;
        }
        self.set(key, value);
        true
    }
}

impl ConfigStore for BTreeMap<String, ConfigValue> {
    fn get(&self, key: &str) -> Option<&ConfigValue> {
        Self::get(self, key)
    }

    fn set(&mut self, key: &str, value: ConfigValue) {
        self.insert(key.to_string(), value);
    }
}

impl<S: std::hash::BuildHasher> ConfigStore for HashMap<String, ConfigValue, S> {
    fn get(&self, key: &str) -> Option<&ConfigValue> {
        Self::get(self, key)
    }

    fn set(&mut self, key: &str, value: ConfigValue) {
        self.insert(key.to_string(), value);
    }
}
