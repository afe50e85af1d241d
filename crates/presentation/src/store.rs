//! Single-owner state container with change notification.

use tokio::sync::watch;

/// Holds one state value and publishes every replacement to subscribers.
///
/// Transitions are expressed as `old -> new` functions, so a subscriber always
/// observes a complete snapshot. Two `update` calls never interleave.
pub struct StateStore<S> {
    tx: watch::Sender<S>,
}

impl<S> StateStore<S>
where
    S: Clone + Send + Sync + 'static,
{
    pub fn new(initial: S) -> Self {
        let (tx, _rx) = watch::channel(initial);
        Self { tx }
    }

    pub fn get(&self) -> S {
        self.tx.borrow().clone()
    }

    pub fn read<R>(&self, f: impl FnOnce(&S) -> R) -> R {
        f(&self.tx.borrow())
    }

    pub fn update(&self, transition: impl FnOnce(&S) -> S) {
        self.tx.send_modify(|state| {
            let next = transition(state);
            *state = next;
        });
    }

    /// Applies `transition` and reads the new value under the same lock, so no
    /// other update can land between the two.
    pub fn update_and_read<R>(
        &self,
        transition: impl FnOnce(&S) -> S,
        read: impl FnOnce(&S) -> R,
    ) -> R {
        let mut out = None;
        self.tx.send_modify(|state| {
            let next = transition(state);
            *state = next;
            out = Some(read(state));
        });
        match out {
            Some(value) => value,
            None => unreachable!("send_modify always runs its closure"),
        }
    }

    pub fn subscribe(&self) -> watch::Receiver<S> {
        self.tx.subscribe()
    }
}
