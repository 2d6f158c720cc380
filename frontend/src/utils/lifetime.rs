use std::{
    cell::{Cell, RefCell},
    future::Future,
    rc::Rc,
};

use futures::future::{AbortHandle, Abortable};

#[derive(Default)]
struct LifetimeInner {
    cancelled: Cell<bool>,
    next_id: Cell<u64>,
    in_flight: RefCell<Vec<(u64, AbortHandle)>>,
}

/// Cancellation scope for a view-model's async work.
///
/// Once cancelled, pending futures are aborted and any result that still
/// arrives is dropped instead of being written into signals of an unmounted view.
#[derive(Clone, Default)]
pub struct Lifetime {
    inner: Rc<LifetimeInner>,
}

impl Lifetime {
    pub fn new() -> Self {
        Self::default()
    }

    /// Scope cancelled when the current reactive owner is disposed.
    pub fn bound_to_owner() -> Self {
        let lifetime = Self::new();
        let guard = lifetime.clone();
        leptos::on_cleanup(move || guard.cancel());
        lifetime
    }

    pub fn is_cancelled(&self) -> bool {
        self.inner.cancelled.get()
    }

    pub fn cancel(&self) {
        if self.inner.cancelled.replace(true) {
            return;
        }
        for (_, handle) in self.inner.in_flight.borrow_mut().drain(..) {
            handle.abort();
        }
    }

    pub fn in_flight(&self) -> usize {
        self.inner.in_flight.borrow().len()
    }

    /// Runs `fut` inside the scope; `None` means the scope ended first.
    pub async fn run<F>(&self, fut: F) -> Option<F::Output>
    where
        F: Future,
    {
        if self.is_cancelled() {
            return None;
        }
        let (handle, registration) = AbortHandle::new_pair();
        let id = self.inner.next_id.get();
        self.inner.next_id.set(id + 1);
        self.inner.in_flight.borrow_mut().push((id, handle));

        let result = Abortable::new(fut, registration).await.ok();

        self.inner
            .in_flight
            .borrow_mut()
            .retain(|(pending, _)| *pending != id);
        if self.is_cancelled() {
            None
        } else {
            result
        }
    }

    pub fn spawn<F>(&self, fut: F)
    where
        F: Future<Output = ()> + 'static,
    {
        let scope = self.clone();
        leptos::spawn_local(async move {
            let _ = scope.run(fut).await;
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::{channel::oneshot, executor::block_on, join};

    #[test]
    fn completed_work_returns_output() {
        let lifetime = Lifetime::new();
        assert_eq!(block_on(lifetime.run(async { 7 })), Some(7));
        assert_eq!(lifetime.in_flight(), 0);
    }

    #[test]
    fn cancelled_scope_skips_new_work() {
        let lifetime = Lifetime::new();
        lifetime.cancel();
        assert!(lifetime.is_cancelled());
        assert_eq!(block_on(lifetime.run(async { 1 })), None);
    }

    #[test]
    fn cancel_aborts_pending_work() {
        let lifetime = Lifetime::new();
        let (tx, rx) = oneshot::channel::<u8>();
        let canceller = lifetime.clone();

        let (result, _) = block_on(async {
            join!(lifetime.run(async move { rx.await.ok() }), async move {
                canceller.cancel();
                let _ = tx.send(1);
            })
        });

        assert_eq!(result, None);
        assert_eq!(lifetime.in_flight(), 0);
    }
}
