//! Named key-value models with change notification.

use crate::error::{MvpError, StoreError};
use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;
use std::rc::Weak;

/// Storage behind a [`Model`].
///
/// Both operations fail with [`StoreError::NotImplemented`] unless the
/// store overrides them.
pub trait ModelStore<K, V> {
    fn load(&self, _id: &K) -> Result<Option<V>, StoreError> {
        Err(StoreError::NotImplemented { operation: "load" })
    }

    fn save(&mut self, _id: K, _value: V) -> Result<(), StoreError> {
        Err(StoreError::NotImplemented { operation: "save" })
    }
}

/// Transient in-memory store.
#[derive(Debug, Clone)]
pub struct DictStore<K, V> {
    data: HashMap<K, V>,
}

impl<K, V> Default for DictStore<K, V> {
    fn default() -> Self {
        Self {
            data: HashMap::new(),
        }
    }
}

impl<K, V> DictStore<K, V> {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<K: Eq + Hash, V: Clone> ModelStore<K, V> for DictStore<K, V> {
    fn load(&self, id: &K) -> Result<Option<V>, StoreError> {
        Ok(self.data.get(id).cloned())
    }

    fn save(&mut self, id: K, value: V) -> Result<(), StoreError> {
        self.data.insert(id, value);
        Ok(())
    }
}

/// Receives change notifications from the models it subscribed to.
pub trait ModelListener<K, V> {
    fn model_event(&self, model: &Model<K, V>, id: &K) -> Result<(), MvpError>;
}

pub struct Model<K, V> {
    name: String,
    store: RefCell<Box<dyn ModelStore<K, V>>>,
    subscribers: RefCell<Vec<Weak<dyn ModelListener<K, V>>>>,
}

impl<K, V> fmt::Debug for Model<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Model")
            .field("name", &self.name)
            .field("subscribers", &self.subscribers.borrow().len())
            .finish()
    }
}

impl<K, V> Model<K, V>
where
    K: Eq + Hash + 'static,
    V: Clone + 'static,
{
    /// Model backed by a fresh [`DictStore`].
    pub fn in_memory(name: impl Into<String>) -> Self {
        Self::new(name, DictStore::new())
    }
}

impl<K, V> Model<K, V> {
    pub fn new(name: impl Into<String>, store: impl ModelStore<K, V> + 'static) -> Self {
        Self {
            name: name.into(),
            store: RefCell::new(Box::new(store)),
            subscribers: RefCell::new(Vec::new()),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn subscribe(&self, listener: Weak<dyn ModelListener<K, V>>) {
        self.subscribers.borrow_mut().push(listener);
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.borrow().len()
    }

    /// Stored value for `id`, or `None` if it was never set.
    pub fn get(&self, id: &K) -> Result<Option<V>, MvpError> {
        self.store.borrow().load(id).map_err(|source| MvpError::Store {
            model: self.name.clone(),
            source,
        })
    }

    /// Store `value`, then notify every subscriber in subscription order.
    ///
    /// The store borrow is released before notifying, so subscribers read
    /// the new value and may call `set` again.
    pub fn set(&self, id: K, value: V) -> Result<(), MvpError>
    where
        K: Clone + fmt::Debug,
    {
        self.store
            .borrow_mut()
            .save(id.clone(), value)
            .map_err(|source| MvpError::Store {
                model: self.name.clone(),
                source,
            })?;
        tracing::debug!(model = %self.name, ?id, "model updated");

        let subscribers = self.subscribers.borrow().clone();
        for subscriber in subscribers.iter().filter_map(Weak::upgrade) {
            subscriber.model_event(self, &id)?;
        }
        Ok(())
    }
}
