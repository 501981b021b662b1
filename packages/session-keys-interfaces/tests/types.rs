use session_keys_interfaces::types::{FunctionSelector, SessionKey};
use soroban_sdk::{BytesN, Env, Symbol};

fn session_key(env: &Env, valid_after: u64, valid_until: u64, revoked: bool) -> SessionKey {
    SessionKey {
        key: BytesN::from_array(env, &[1; 32]),
        valid_after,
        valid_until,
        revoked,
    }
}

#[test]
fn session_window_bounds_are_exclusive() {
    let env = Env::default();
    let session = session_key(&env, 10, 20, false);

    assert!(!session.is_active(9));
    assert!(!session.is_active(10));
    assert!(session.is_active(11));
    assert!(session.is_active(19));
    assert!(!session.is_active(20));
    assert!(!session.is_active(21));
}

#[test]
fn revoked_session_is_never_active() {
    let env = Env::default();
    let session = session_key(&env, 10, 20, true);

    assert!(!session.is_active(15));
}

#[test]
fn allow_all_selector_permits_any_function() {
    let env = Env::default();

    assert!(FunctionSelector::AllowAll.permits(&Symbol::new(&env, "count")));
    assert!(FunctionSelector::AllowAll.permits(&Symbol::new(&env, "transfer")));
}

#[test]
fn function_selector_permits_only_its_function() {
    let env = Env::default();
    let selector = FunctionSelector::Function(Symbol::new(&env, "count"));

    assert!(selector.permits(&Symbol::new(&env, "count")));
    assert!(!selector.permits(&Symbol::new(&env, "transfer")));
}
