//! Observable state cells
//!
//! Workflow state (loading flags, generated content, error banners) lives in
//! `Signal` cells so the rendering layer can react to changes without the
//! workflows knowing anything about rendering. Backed by `tokio::sync::watch`:
//! writes are synchronous, readers may either poll with `get` or await
//! notifications through `subscribe`.

use tokio::sync::watch;

/// A reactive cell holding a single cloneable value
#[derive(Debug)]
pub struct Signal<T> {
    tx: watch::Sender<T>,
}

impl<T: Clone> Signal<T> {
    /// Create a new cell with an initial value
    pub fn new(initial: T) -> Self {
        let (tx, _rx) = watch::channel(initial);
        Self { tx }
    }

    /// Current value (cloned)
    pub fn get(&self) -> T {
        self.tx.borrow().clone()
    }

    /// Replace the value, notifying subscribers
    pub fn set(&self, value: T) {
        // send_replace never fails: the sender itself holds the channel open
        let _ = self.tx.send_replace(value);
    }

    /// Mutate the value in place, notifying subscribers
    pub fn update(&self, f: impl FnOnce(&mut T)) {
        self.tx.send_modify(f);
    }

    /// Subscribe to change notifications
    pub fn subscribe(&self) -> watch::Receiver<T> {
        self.tx.subscribe()
    }
}

impl<T: Clone> Clone for Signal<T> {
    fn clone(&self) -> Self {
        Self {
            tx: self.tx.clone(),
        }
    }
}

impl<T: Clone + Default> Default for Signal<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_and_get_round_trip() {
        let cell = Signal::new(0_u32);
        cell.set(7);
        assert_eq!(cell.get(), 7);
    }

    #[test]
    fn update_mutates_in_place() {
        let cell = Signal::new(vec![1, 2]);
        cell.update(|v| v.push(3));
        assert_eq!(cell.get(), vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn subscribers_observe_changes() {
        let cell = Signal::new(String::new());
        let mut rx = cell.subscribe();
        cell.set("ready".to_string());
        rx.changed().await.expect("sender still alive");
        assert_eq!(*rx.borrow(), "ready");
    }
}
