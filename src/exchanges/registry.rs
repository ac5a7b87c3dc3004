use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::common::TickerError;
use crate::exchanges::{
    BitcoinAverage, Btc38, Btce, Bter, CoinMarketCap, ExchangeDescriptor, ExchangeId, Exmo, Korbit,
};

/// Lookup table mapping exchange ids to descriptors.
///
/// Entries are created once at startup and read on every request; the lock
/// exists to permit hot-swapping a descriptor (or substituting one in tests),
/// not for request-path mutation.
pub struct Registry {
    table: RwLock<HashMap<ExchangeId, Arc<dyn ExchangeDescriptor>>>,
}

impl Registry {
    /// Registry with every supported exchange registered.
    pub fn with_defaults() -> Self {
        let registry = Self::empty();
        registry.insert(Arc::new(Btce));
        registry.insert(Arc::new(Bter));
        registry.insert(Arc::new(Exmo));
        registry.insert(Arc::new(Korbit));
        registry.insert(Arc::new(Btc38));
        registry.insert(Arc::new(BitcoinAverage));
        registry.insert(Arc::new(CoinMarketCap));
        registry
    }

    pub fn empty() -> Self {
        Self {
            table: RwLock::new(HashMap::new()),
        }
    }

    pub fn lookup(&self, id: ExchangeId) -> Result<Arc<dyn ExchangeDescriptor>, TickerError> {
        self.table
            .read()
            .expect("registry lock poisoned")
            .get(&id)
            .cloned()
            .ok_or_else(|| TickerError::UnknownExchange(id.to_string()))
    }

    /// Register a descriptor under its own id, replacing any existing entry.
    pub fn insert(&self, descriptor: Arc<dyn ExchangeDescriptor>) {
        self.table
            .write()
            .expect("registry lock poisoned")
            .insert(descriptor.id(), descriptor);
    }

    pub fn remove(&self, id: ExchangeId) -> Option<Arc<dyn ExchangeDescriptor>> {
        self.table
            .write()
            .expect("registry lock poisoned")
            .remove(&id)
    }

    /// Ids of every registered exchange.
    pub fn ids(&self) -> Vec<ExchangeId> {
        let table = self.table.read().expect("registry lock poisoned");
        let mut ids: Vec<ExchangeId> = table.keys().copied().collect();
        ids.sort_by_key(|id| id.as_str());
        ids
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
