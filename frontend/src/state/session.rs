use std::{cell::RefCell, rc::Rc};

use crate::{
    api::ApiError,
    utils::{navigation, storage},
};

pub const TOKEN_STORAGE_KEY: &str = "token";

/// Where the bearer token lives between page loads.
pub trait TokenStore {
    fn load(&self) -> Option<String>;
    fn save(&self, token: &str);
    fn remove(&self);
}

#[derive(Debug, Default, Clone, Copy)]
pub struct LocalStorageTokenStore;

impl TokenStore for LocalStorageTokenStore {
    fn load(&self) -> Option<String> {
        match storage::get_item(TOKEN_STORAGE_KEY) {
            Ok(token) => token,
            Err(err) => {
                log::warn!("Unable to read session token: {}", err);
                None
            }
        }
    }

    fn save(&self, token: &str) {
        if let Err(err) = storage::set_item(TOKEN_STORAGE_KEY, token) {
            log::error!("Unable to persist session token: {}", err);
        }
    }

    fn remove(&self) {
        if let Err(err) = storage::remove_item(TOKEN_STORAGE_KEY) {
            log::warn!("Unable to remove session token: {}", err);
        }
    }
}

#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    token: RefCell<Option<String>>,
}

impl MemoryTokenStore {
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: RefCell::new(Some(token.into())),
        }
    }
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> Option<String> {
        self.token.borrow().clone()
    }

    fn save(&self, token: &str) {
        *self.token.borrow_mut() = Some(token.to_string());
    }

    fn remove(&self) {
        self.token.borrow_mut().take();
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidationReason {
    Logout,
    Unauthorized,
}

impl InvalidationReason {
    /// Page the browser lands on once the session is gone.
    pub fn redirect_path(&self) -> &'static str {
        match self {
            InvalidationReason::Logout => "/",
            InvalidationReason::Unauthorized => "/login",
        }
    }
}

type InvalidateHook = Rc<dyn Fn(InvalidationReason)>;

struct SessionInner {
    store: Box<dyn TokenStore>,
    on_invalidate: RefCell<Option<InvalidateHook>>,
}

/// Shared handle to the current bearer token, handed to every view-model.
#[derive(Clone)]
pub struct Session {
    inner: Rc<SessionInner>,
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("has_token", &self.has_token())
            .finish()
    }
}

impl Session {
    pub fn new(store: impl TokenStore + 'static) -> Self {
        Self {
            inner: Rc::new(SessionInner {
                store: Box::new(store),
                on_invalidate: RefCell::new(None),
            }),
        }
    }

    /// Browser session backed by local storage; invalidation performs a full navigation.
    pub fn browser() -> Self {
        let session = Self::new(LocalStorageTokenStore);
        session.on_invalidate(|reason| navigation::navigate(reason.redirect_path()));
        session
    }

    pub fn in_memory(token: Option<&str>) -> Self {
        match token {
            Some(token) => Self::new(MemoryTokenStore::with_token(token)),
            None => Self::new(MemoryTokenStore::default()),
        }
    }

    pub fn token(&self) -> Option<String> {
        self.inner
            .store
            .load()
            .map(|token| token.trim().to_string())
            .filter(|token| !token.is_empty())
    }

    pub fn has_token(&self) -> bool {
        self.token().is_some()
    }

    pub fn require_token(&self) -> Result<String, ApiError> {
        self.token().ok_or_else(ApiError::missing_token)
    }

    pub fn store_token(&self, token: &str) {
        self.inner.store.save(token);
    }

    pub fn clear(&self) {
        self.inner.store.remove();
    }

    pub fn on_invalidate(&self, hook: impl Fn(InvalidationReason) + 'static) {
        *self.inner.on_invalidate.borrow_mut() = Some(Rc::new(hook));
    }

    /// Drops the token and notifies the registered hook.
    pub fn invalidate(&self, reason: InvalidationReason) {
        log::debug!("Session invalidated: {:?}", reason);
        self.clear();
        let hook = self.inner.on_invalidate.borrow().clone();
        if let Some(hook) = hook {
            hook(reason);
        }
    }

    pub fn logout(&self) {
        self.invalidate(InvalidationReason::Logout);
    }
}
