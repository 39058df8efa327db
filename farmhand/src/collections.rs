use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt::{Debug, Formatter};
use std::ops::Deref;
use std::rc::Rc;

/// Immutable knowledge shared between the dictionary and domain objects.
pub struct Shared<T> {
    inner: Rc<T>,
}

impl<T: Debug> Debug for Shared<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Debug::fmt(self.deref(), f)
    }
}

impl<T> Clone for Shared<T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<T> Shared<T> {
    pub fn new(value: T) -> Self {
        Self {
            inner: Rc::new(value),
        }
    }
}

impl<T> Deref for Shared<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

pub struct Dictionary<K, T> {
    keys: BTreeMap<K, Shared<T>>,
    strings: BTreeMap<String, Shared<T>>,
}

impl<K, T> Default for Dictionary<K, T> {
    fn default() -> Self {
        Self {
            keys: BTreeMap::default(),
            strings: BTreeMap::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DictionaryError {
    KeyNotFound { key: String },
    NameNotFound { name: String },
}

impl<K, T> Dictionary<K, T>
where
    K: Debug + Ord + Copy,
{
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn insert(&mut self, key: K, name: String, kind: T) {
        let kind = Shared::new(kind);
        self.keys.insert(key, kind.clone());
        self.strings.insert(name, kind);
    }

    pub fn get(&self, key: K) -> Result<Shared<T>, DictionaryError> {
        self.keys
            .get(&key)
            .cloned()
            .ok_or(DictionaryError::KeyNotFound {
                key: format!("{:?}", key),
            })
    }

    pub fn find(&self, name: &str) -> Result<Shared<T>, DictionaryError> {
        self.strings
            .get(name)
            .cloned()
            .ok_or(DictionaryError::NameNotFound {
                name: name.to_string(),
            })
    }

    pub fn values(&self) -> impl Iterator<Item = &Shared<T>> {
        self.keys.values()
    }
}

#[derive(Debug, Default, Clone, Copy, Eq, Hash, PartialEq)]
pub struct Sequence {
    value: usize,
}

impl Sequence {
    pub fn one<C, T>(&mut self, constructor: C) -> T
    where
        C: Fn(usize) -> T,
    {
        self.value += 1;
        constructor(self.value)
    }

    pub fn register(&mut self, id: usize) {
        if id > self.value {
            self.value = id
        }
    }

    pub fn introduce(&self) -> Sequence {
        Sequence { value: self.value }
    }

    pub fn reset(&mut self) {
        self.value = 0;
    }
}
