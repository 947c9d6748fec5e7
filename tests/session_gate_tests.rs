use std::rc::Rc;

use carebook::domain::Role;
use carebook::session::{MemoryStore, Session, SessionStore};

fn session_with_store() -> (Session, Rc<MemoryStore>) {
    let store = Rc::new(MemoryStore::default());
    (Session::new(store.clone()), store)
}

#[test]
fn login_then_logout_round_trip() {
    let (session, _) = session_with_store();

    session.sign_in(Role::LoggedPatient, "tok-abc");
    assert_eq!(session.role(), Some(Role::LoggedPatient));
    assert_eq!(session.token().as_deref(), Some("tok-abc"));
    assert!(!session.is_invalid());

    session.clear();
    assert_eq!(session.role(), None);
    assert_eq!(session.token(), None);
}

#[test]
fn patient_logout_downgrades_to_anonymous_browsing() {
    let (session, store) = session_with_store();

    session.sign_in(Role::LoggedPatient, "tok-abc");
    session.logout_patient();

    assert_eq!(session.role(), Some(Role::Patient));
    assert_eq!(session.token(), None);
    assert_eq!(store.read("userRole").as_deref(), Some("patient"));
    assert_eq!(store.read("token"), None);
    // The anonymous patient view is valid without credentials.
    assert!(!session.is_invalid());
}

#[test]
fn token_requiring_roles_are_invalid_without_one() {
    for role in [Role::Admin, Role::Doctor, Role::LoggedPatient] {
        let (session, _) = session_with_store();
        session.select_role(role);
        assert!(
            session.is_invalid(),
            "{role:?} without a token must trip the gate"
        );
    }
}

#[test]
fn gate_ignores_labels_it_cannot_parse() {
    let (session, store) = session_with_store();
    store.write("userRole", "receptionist");

    assert_eq!(session.role(), None);
    assert!(!session.is_invalid());
}

#[test]
fn clones_share_the_same_store() {
    let (session, _) = session_with_store();
    let other = session.clone();

    session.sign_in(Role::Admin, "tok-1");
    assert_eq!(other.role(), Some(Role::Admin));

    other.clear();
    assert_eq!(session.role(), None);
}
