//! Manager registry keyed by record type identity.
//!
//! # Responsibility
//! - Hand out exactly one manager per record type, created on first lookup.
//!
//! # Invariants
//! - Repeated lookups for the same type return the same `Arc<Manager>`.
//! - Every manager handed out shares the registry's injected store handle.

use crate::manager::Manager;
use crate::record::RecordType;
use crate::store::StoreHandle;
use log::debug;
use std::any::TypeId;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

/// Lazily populated map from record type to its bound manager.
///
/// Record types never build managers themselves; they reach their manager
/// through a registry, usually via [`RecordType::manager`].
pub struct ManagerRegistry {
    handle: Arc<StoreHandle>,
    managers: Mutex<HashMap<TypeId, Arc<Manager>>>,
}

impl ManagerRegistry {
    /// Creates an empty registry around an injected store handle.
    pub fn new(handle: Arc<StoreHandle>) -> Self {
        Self {
            handle,
            managers: Mutex::new(HashMap::new()),
        }
    }

    /// Returns the manager bound to `T`, creating it on first lookup.
    pub fn manager_for<T: RecordType>(&self) -> Arc<Manager> {
        let mut managers = self.lock_managers();
        let manager = managers.entry(TypeId::of::<T>()).or_insert_with(|| {
            debug!(
                "event=manager_bind module=registry record={} table={}",
                T::type_name(),
                T::TABLE
            );
            Arc::new(Manager::bound::<T>(Arc::clone(&self.handle)))
        });
        Arc::clone(manager)
    }

    fn lock_managers(&self) -> MutexGuard<'_, HashMap<TypeId, Arc<Manager>>> {
        match self.managers.lock() {
            Ok(guard) => guard,
            // A poisoned lock still guards a structurally valid map.
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}
