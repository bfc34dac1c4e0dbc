// ============================================================================
// REACTIVITY - Sistema de notificaciones/subscribers para reactividad
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

type Callback<T> = Rc<dyn Fn(&T)>;

/// Estado reactivo con sistema de notificaciones.
/// Los clones comparten valor y subscribers (se pasan a los closures del DOM).
pub struct ReactiveState<T> {
    value: Rc<RefCell<T>>,
    subscribers: Rc<RefCell<Vec<Callback<T>>>>,
}

impl<T> ReactiveState<T> {
    /// Crear nuevo estado reactivo
    pub fn new(value: T) -> Self {
        Self {
            value: Rc::new(RefCell::new(value)),
            subscribers: Rc::new(RefCell::new(Vec::new())),
        }
    }

    /// Leer el valor sin notificar
    pub fn with<R>(&self, reader: impl FnOnce(&T) -> R) -> R {
        reader(&self.value.borrow())
    }

    /// Actualizar valor usando closure y notificar.
    /// El borrow mutable termina antes de avisar a los subscribers.
    pub fn update<R>(&self, updater: impl FnOnce(&mut T) -> R) -> R {
        let result = updater(&mut self.value.borrow_mut());
        self.notify();
        result
    }

    /// Suscribirse a cambios
    pub fn subscribe<F>(&self, callback: F)
    where
        F: Fn(&T) + 'static,
    {
        self.subscribers.borrow_mut().push(Rc::new(callback));
    }

    /// Notificar a todos los subscribers
    pub fn notify(&self) {
        // Copia de la lista: un subscriber puede suscribir a otro
        let subscribers: Vec<Callback<T>> = self.subscribers.borrow().clone();
        let value = self.value.borrow();
        for callback in subscribers {
            callback(&value);
        }
    }
}

impl<T> Clone for ReactiveState<T> {
    fn clone(&self) -> Self {
        Self {
            value: self.value.clone(),
            subscribers: self.subscribers.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_update_notifies_all_clones() {
        let state = ReactiveState::new(0u32);
        let seen = Rc::new(Cell::new(0u32));
        {
            let seen = seen.clone();
            state.subscribe(move |value| seen.set(*value));
        }

        let handle = state.clone();
        let doubled = handle.update(|value| {
            *value += 21;
            *value * 2
        });

        assert_eq!(doubled, 42);
        assert_eq!(seen.get(), 21);
        assert_eq!(state.with(|value| *value), 21);
    }
}
