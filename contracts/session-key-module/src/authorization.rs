use session_keys_interfaces::session_key_module::SessionKeyError;
use session_keys_interfaces::types::{Call, UserOperation};
use session_keys_std::address::AddressExt;
use session_keys_std::ensure;
use session_keys_std::traits::ThenOk;
use soroban_sdk::{Address, BytesN, Env};

use crate::storage;

/// The whitelist row a call is checked against.
///
/// A wildcard call only matches the zero address row, a concrete call only
/// matches its own target.
pub fn effective_destination(env: &Env, call: &Call) -> Address {
    if call.allow_all_destinations {
        Address::zero(env)
    } else {
        call.target.clone()
    }
}

/// Decide whether `session_key` may run `call` on behalf of `wallet` right now.
pub fn authorize_call(
    env: &Env,
    wallet: &Address,
    session_key: &BytesN<32>,
    call: &Call,
) -> Result<(), SessionKeyError> {
    let session =
        storage::session(env, wallet, session_key).ok_or(SessionKeyError::GrantNotFound)?;

    session
        .is_active(env.ledger().timestamp())
        .then_ok((), SessionKeyError::SessionInactive)?;

    let destination = effective_destination(env, call);
    let selector = storage::whitelisted_selector(env, wallet, session_key, &destination)
        .ok_or(SessionKeyError::WhitelistMissing)?;

    selector
        .permits(&call.function)
        .then_ok((), SessionKeyError::SessionInactive)
}

/// Admission of an operation signed by a session key.
///
/// Only the signature and the grant's existence are checked here, the window
/// and the whitelist are enforced when the payload runs.
pub fn admit_user_op(
    env: &Env,
    wallet: &Address,
    op: &UserOperation,
    op_hash: &BytesN<32>,
) -> Result<(), SessionKeyError> {
    ensure!(op.sender == *wallet, SessionKeyError::AuthorizationDenied);
    ensure!(
        op.signature.signer == op.session_key,
        SessionKeyError::AuthorizationDenied
    );

    let session =
        storage::session(env, wallet, &op.session_key).ok_or(SessionKeyError::GrantNotFound)?;
    ensure!(!session.revoked, SessionKeyError::SessionInactive);

    // traps on an invalid signature
    env.crypto().ed25519_verify(
        &op.session_key,
        op_hash.as_ref(),
        &op.signature.signature,
    );

    Ok(())
}
