//! Session state: a role label plus an opaque auth token in client
//! storage. The token is never verified here; expiry only surfaces when a
//! backend call rejects it.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::domain::Role;

const ROLE_KEY: &str = "userRole";
const TOKEN_KEY: &str = "token";

/// Key-value store behind the session. The web build uses browser local
/// storage; everything else keeps an in-memory map.
pub trait SessionStore {
    fn read(&self, key: &str) -> Option<String>;
    fn write(&self, key: &str, value: &str);
    fn delete(&self, key: &str);
}

#[derive(Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl SessionStore for MemoryStore {
    fn read(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn write(&self, key: &str, value: &str) {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }

    fn delete(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}

#[cfg(target_arch = "wasm32")]
pub struct BrowserStore;

#[cfg(target_arch = "wasm32")]
impl BrowserStore {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window().and_then(|window| window.local_storage().ok().flatten())
    }
}

#[cfg(target_arch = "wasm32")]
impl SessionStore for BrowserStore {
    fn read(&self, key: &str) -> Option<String> {
        Self::storage().and_then(|storage| storage.get_item(key).ok().flatten())
    }

    fn write(&self, key: &str, value: &str) {
        if let Some(storage) = Self::storage() {
            if storage.set_item(key, value).is_err() {
                tracing::warn!(key, "local storage write failed");
            }
        }
    }

    fn delete(&self, key: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(key);
        }
    }
}

/// Accessor for the role/token pair. Cheap to clone; every clone shares
/// the same store.
#[derive(Clone)]
pub struct Session {
    store: Rc<dyn SessionStore>,
}

impl Session {
    pub fn new(store: Rc<dyn SessionStore>) -> Self {
        Self { store }
    }

    /// Store for the current platform: browser local storage on wasm, an
    /// in-memory map elsewhere.
    pub fn from_platform() -> Self {
        #[cfg(target_arch = "wasm32")]
        {
            Self::new(Rc::new(BrowserStore))
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            Self::new(Rc::new(MemoryStore::default()))
        }
    }

    pub fn role(&self) -> Option<Role> {
        self.store
            .read(ROLE_KEY)
            .and_then(|label| Role::from_label(&label))
    }

    pub fn token(&self) -> Option<String> {
        self.store.read(TOKEN_KEY).filter(|token| !token.is_empty())
    }

    /// Record a successful login.
    pub fn sign_in(&self, role: Role, token: &str) {
        self.store.write(ROLE_KEY, role.label());
        self.store.write(TOKEN_KEY, token);
    }

    /// Record a role choice that carries no credentials (the anonymous
    /// patient portal).
    pub fn select_role(&self, role: Role) {
        self.store.write(ROLE_KEY, role.label());
    }

    pub fn clear(&self) {
        self.store.delete(ROLE_KEY);
        self.store.delete(TOKEN_KEY);
    }

    /// Patient logout keeps the visitor on the public patient pages:
    /// token gone, role reset to the anonymous patient view.
    pub fn logout_patient(&self) {
        self.store.delete(TOKEN_KEY);
        self.store.write(ROLE_KEY, Role::Patient.label());
    }

    /// An authenticated role without a stored token is an invalid pair;
    /// the header clears it and sends the user back to the entry page.
    pub fn is_invalid(&self) -> bool {
        match self.role() {
            Some(role) => role.requires_token() && self.token().is_none(),
            None => false,
        }
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use wasm_bindgen_test::*;

    use super::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn browser_store_round_trip() {
        let store = BrowserStore;
        store.write("userRole", "admin");
        assert_eq!(store.read("userRole").as_deref(), Some("admin"));
        store.delete("userRole");
        assert_eq!(store.read("userRole"), None);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> Session {
        Session::new(Rc::new(MemoryStore::default()))
    }

    #[test]
    fn sign_in_stores_role_and_token() {
        let session = session();
        session.sign_in(Role::LoggedPatient, "tok-1");
        assert_eq!(session.role(), Some(Role::LoggedPatient));
        assert_eq!(session.token().as_deref(), Some("tok-1"));
    }

    #[test]
    fn clear_removes_both_entries() {
        let session = session();
        session.sign_in(Role::Admin, "tok-2");
        session.clear();
        assert_eq!(session.role(), None);
        assert_eq!(session.token(), None);
    }

    #[test]
    fn logout_patient_keeps_anonymous_role() {
        let session = session();
        session.sign_in(Role::LoggedPatient, "tok-3");
        session.logout_patient();
        assert_eq!(session.role(), Some(Role::Patient));
        assert_eq!(session.token(), None);
    }

    #[test]
    fn authenticated_role_without_token_is_invalid() {
        let session = session();
        session.select_role(Role::Admin);
        assert!(session.is_invalid());

        session.sign_in(Role::Admin, "tok-4");
        assert!(!session.is_invalid());
    }

    #[test]
    fn anonymous_patient_needs_no_token() {
        let session = session();
        session.select_role(Role::Patient);
        assert!(!session.is_invalid());
    }

    #[test]
    fn unknown_stored_label_reads_as_no_role() {
        let store = Rc::new(MemoryStore::default());
        store.write("userRole", "superuser");
        let session = Session::new(store);
        assert_eq!(session.role(), None);
        assert!(!session.is_invalid());
    }

    #[test]
    fn empty_token_counts_as_absent() {
        let store = Rc::new(MemoryStore::default());
        store.write("userRole", "doctor");
        store.write("token", "");
        let session = Session::new(store);
        assert!(session.is_invalid());
    }
}
