use leptos::*;

pub const TOAST_DISMISS_MS: u32 = 3_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
}

/// Transient notifications shown in the top-right corner.
#[derive(Clone, Copy)]
pub struct ToastQueue {
    entries: RwSignal<Vec<Toast>>,
    next_id: StoredValue<u64>,
}

impl ToastQueue {
    pub fn new() -> Self {
        Self {
            entries: create_rw_signal(Vec::new()),
            next_id: store_value(1),
        }
    }

    pub fn success(&self, message: impl Into<String>) -> u64 {
        self.push(ToastKind::Success, message.into())
    }

    pub fn error(&self, message: impl Into<String>) -> u64 {
        self.push(ToastKind::Error, message.into())
    }

    pub fn dismiss(&self, id: u64) {
        self.entries.update(|entries| entries.retain(|toast| toast.id != id));
    }

    pub fn entries(&self) -> Signal<Vec<Toast>> {
        self.entries.into()
    }

    pub fn snapshot(&self) -> Vec<Toast> {
        self.entries.get_untracked()
    }

    fn push(&self, kind: ToastKind, message: String) -> u64 {
        let id = self.next_id.get_value();
        self.next_id.set_value(id + 1);
        match kind {
            ToastKind::Success => log::debug!("toast #{}: {}", id, message),
            ToastKind::Error => log::warn!("toast #{}: {}", id, message),
        }
        self.entries.update(|entries| entries.push(Toast { id, kind, message }));
        self.schedule_dismiss(id);
        id
    }

    #[cfg(target_arch = "wasm32")]
    fn schedule_dismiss(&self, id: u64) {
        let queue = *self;
        gloo_timers::callback::Timeout::new(TOAST_DISMISS_MS, move || queue.dismiss(id)).forget();
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn schedule_dismiss(&self, _id: u64) {}
}

impl Default for ToastQueue {
    fn default() -> Self {
        Self::new()
    }
}

pub fn provide_toasts() -> ToastQueue {
    let queue = ToastQueue::new();
    provide_context(queue);
    queue
}

pub fn use_toasts() -> ToastQueue {
    use_context::<ToastQueue>().unwrap_or_else(provide_toasts)
}
