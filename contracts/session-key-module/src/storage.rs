use session_keys_interfaces::types::{FunctionSelector, SessionKey};
use session_keys_std::ttl::extend_persistent_ttl;
use soroban_sdk::{Address, BytesN, Env, Vec};

use crate::storage_types::{DataKey, SessionId, WhitelistId};

fn session_key_id(wallet: &Address, session_key: &BytesN<32>) -> DataKey {
    DataKey::Session(SessionId {
        wallet: wallet.clone(),
        session_key: session_key.clone(),
    })
}

fn whitelist_key(wallet: &Address, session_key: &BytesN<32>, destination: &Address) -> DataKey {
    DataKey::Whitelist(WhitelistId {
        wallet: wallet.clone(),
        session_key: session_key.clone(),
        destination: destination.clone(),
    })
}

/// Reading a grant keeps it alive, so a key that is in use outlives the
/// storage TTL of its last edit.
pub fn session(env: &Env, wallet: &Address, session_key: &BytesN<32>) -> Option<SessionKey> {
    let key = session_key_id(wallet, session_key);

    env.storage()
        .persistent()
        .get::<DataKey, SessionKey>(&key)
        .inspect(|_| extend_persistent_ttl(env, &key))
}

pub fn set_session(env: &Env, wallet: &Address, session: &SessionKey) {
    let key = session_key_id(wallet, &session.key);

    env.storage().persistent().set(&key, session);
    extend_persistent_ttl(env, &key);
}

pub fn whitelisted_selector(
    env: &Env,
    wallet: &Address,
    session_key: &BytesN<32>,
    destination: &Address,
) -> Option<FunctionSelector> {
    let key = whitelist_key(wallet, session_key, destination);

    env.storage()
        .persistent()
        .get::<DataKey, FunctionSelector>(&key)
        .inspect(|_| extend_persistent_ttl(env, &key))
}

pub fn set_whitelisted_selector(
    env: &Env,
    wallet: &Address,
    session_key: &BytesN<32>,
    destination: &Address,
    selector: &FunctionSelector,
) {
    let key = whitelist_key(wallet, session_key, destination);

    env.storage().persistent().set(&key, selector);
    extend_persistent_ttl(env, &key);
}

pub fn remove_whitelisted_selector(
    env: &Env,
    wallet: &Address,
    session_key: &BytesN<32>,
    destination: &Address,
) {
    env.storage()
        .persistent()
        .remove(&whitelist_key(wallet, session_key, destination));
}

/// Keys of the wallet's unrevoked grants, in the order they were added.
pub fn session_keys(env: &Env, wallet: &Address) -> Vec<BytesN<32>> {
    let key = DataKey::SessionKeys(wallet.clone());

    env.storage()
        .persistent()
        .get::<DataKey, Vec<BytesN<32>>>(&key)
        .map_or_else(
            || Vec::new(env),
            |keys| {
                extend_persistent_ttl(env, &key);
                keys
            },
        )
}

pub fn set_session_keys(env: &Env, wallet: &Address, keys: &Vec<BytesN<32>>) {
    let key = DataKey::SessionKeys(wallet.clone());

    if keys.is_empty() {
        env.storage().persistent().remove(&key);
        return;
    }

    env.storage().persistent().set(&key, keys);
    extend_persistent_ttl(env, &key);
}
