use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// Almacenamiento clave/valor de texto (localStorage en el navegador)
pub trait KeyValueStore {
    fn get_item(&self, key: &str) -> Option<String>;
    fn set_item(&self, key: &str, value: &str) -> Result<(), String>;
    fn remove_item(&self, key: &str) -> Result<(), String>;
}

/// Almacenamiento en memoria. Los clones comparten los mismos datos,
/// lo que permite simular una recarga de página en los tests.
#[derive(Clone, Default)]
pub struct MemoryStore {
    items: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.items.borrow().contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.items.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.borrow().is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), String> {
        self.items.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), String> {
        self.items.borrow_mut().remove(key);
        Ok(())
    }
}

#[cfg(target_arch = "wasm32")]
pub use browser::BrowserStorage;

#[cfg(target_arch = "wasm32")]
mod browser {
    use gloo_storage::{LocalStorage, Storage};

    use super::KeyValueStore;

    /// localStorage del navegador
    #[derive(Clone, Copy, Default)]
    pub struct BrowserStorage;

    impl KeyValueStore for BrowserStorage {
        fn get_item(&self, key: &str) -> Option<String> {
            LocalStorage::raw().get_item(key).ok()?
        }

        fn set_item(&self, key: &str, value: &str) -> Result<(), String> {
            LocalStorage::raw()
                .set_item(key, value)
                .map_err(|_| "Error guardando en localStorage".to_string())
        }

        fn remove_item(&self, key: &str) -> Result<(), String> {
            LocalStorage::delete(key);
            Ok(())
        }
    }
}
