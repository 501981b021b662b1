use session_keys_interfaces::session_key_module::{SessionKeyError, SessionKeyModuleInterface};
use session_keys_interfaces::smart_wallet::SmartWalletClient;
use session_keys_interfaces::types::{
    AllowedDestination, Call, FunctionSelector, SessionKey, UserOperation,
};
use session_keys_std::ensure;
use session_keys_std::events::Event;
use session_keys_std::ttl::extend_instance_ttl;
use soroban_sdk::{contract, contractimpl, log, Address, BytesN, Env, Val, Vec};

use crate::authorization;
use crate::event::SessionKeyEvent;
use crate::storage;
use crate::storage_types::DataKey;

#[contract]
pub struct SessionKeyModule;

#[contractimpl]
impl SessionKeyModule {
    pub fn __constructor(env: Env, entry_point: Address) {
        env.storage()
            .instance()
            .set(&DataKey::EntryPoint, &entry_point);

        extend_instance_ttl(&env);
    }
}

#[contractimpl]
impl SessionKeyModuleInterface for SessionKeyModule {
    fn entry_point(env: Env) -> Address {
        env.storage()
            .instance()
            .get(&DataKey::EntryPoint)
            .expect("entry point not found")
    }

    fn add_session_key(
        env: Env,
        wallet: Address,
        session_key: BytesN<32>,
        valid_after: u64,
        valid_until: u64,
        destinations: Vec<AllowedDestination>,
    ) -> Result<(), SessionKeyError> {
        wallet.require_auth();

        ensure!(
            storage::session(&env, &wallet, &session_key).is_none(),
            SessionKeyError::GrantConflict
        );
        ensure!(
            valid_after > env.ledger().timestamp(),
            SessionKeyError::InvalidWindow
        );
        ensure!(valid_until > valid_after, SessionKeyError::InvalidWindow);
        ensure!(
            !destinations.is_empty(),
            SessionKeyError::EmptyDestinationSet
        );

        let session = SessionKey {
            key: session_key.clone(),
            valid_after,
            valid_until,
            revoked: false,
        };
        storage::set_session(&env, &wallet, &session);

        // a repeated destination overwrites the earlier row
        for AllowedDestination {
            destination,
            selector,
        } in destinations.iter()
        {
            storage::set_whitelisted_selector(&env, &wallet, &session_key, &destination, &selector);
        }

        let mut keys = storage::session_keys(&env, &wallet);
        keys.push_back(session_key.clone());
        storage::set_session_keys(&env, &wallet, &keys);

        extend_instance_ttl(&env);

        SessionKeyEvent::SessionKeyAdded {
            wallet,
            session_key,
            valid_after,
            valid_until,
            destinations,
        }
        .emit(&env);

        Ok(())
    }

    fn revoke_session(
        env: Env,
        wallet: Address,
        session_key: BytesN<32>,
    ) -> Result<(), SessionKeyError> {
        wallet.require_auth();

        let mut session = storage::session(&env, &wallet, &session_key)
            .ok_or(SessionKeyError::GrantNotFound)?;
        ensure!(!session.revoked, SessionKeyError::AlreadyRevoked);

        session.revoked = true;
        storage::set_session(&env, &wallet, &session);

        let mut keys = storage::session_keys(&env, &wallet);
        if let Some(index) = keys.first_index_of(&session_key) {
            keys.remove(index);
        }
        storage::set_session_keys(&env, &wallet, &keys);

        extend_instance_ttl(&env);

        SessionKeyEvent::SessionKeyRevoked {
            wallet,
            session_key,
        }
        .emit(&env);

        Ok(())
    }

    fn add_whitelist_destination(
        env: Env,
        wallet: Address,
        session_key: BytesN<32>,
        destination: Address,
        selector: FunctionSelector,
    ) -> Result<(), SessionKeyError> {
        wallet.require_auth();

        Self::ensure_unrevoked(&env, &wallet, &session_key)?;
        ensure!(
            storage::whitelisted_selector(&env, &wallet, &session_key, &destination).is_none(),
            SessionKeyError::WhitelistConflict
        );

        storage::set_whitelisted_selector(&env, &wallet, &session_key, &destination, &selector);

        extend_instance_ttl(&env);

        SessionKeyEvent::WhitelistedDestinationAdded {
            wallet,
            session_key,
            destination,
            selector,
        }
        .emit(&env);

        Ok(())
    }

    fn remove_whitelist_destination(
        env: Env,
        wallet: Address,
        session_key: BytesN<32>,
        destination: Address,
    ) -> Result<(), SessionKeyError> {
        wallet.require_auth();

        Self::ensure_unrevoked(&env, &wallet, &session_key)?;
        ensure!(
            storage::whitelisted_selector(&env, &wallet, &session_key, &destination).is_some(),
            SessionKeyError::WhitelistMissing
        );

        storage::remove_whitelisted_selector(&env, &wallet, &session_key, &destination);

        extend_instance_ttl(&env);

        SessionKeyEvent::WhitelistedDestinationRemoved {
            wallet,
            session_key,
            destination,
        }
        .emit(&env);

        Ok(())
    }

    fn session_key(env: Env, wallet: Address, session_key: BytesN<32>) -> Option<SessionKey> {
        storage::session(&env, &wallet, &session_key)
    }

    fn session_keys(env: Env, wallet: Address) -> Vec<SessionKey> {
        let mut sessions = Vec::new(&env);

        for key in storage::session_keys(&env, &wallet).iter() {
            if let Some(session) = storage::session(&env, &wallet, &key) {
                sessions.push_back(session);
            }
        }

        sessions
    }

    fn is_session_active(env: Env, wallet: Address, session_key: BytesN<32>) -> bool {
        storage::session(&env, &wallet, &session_key)
            .is_some_and(|session| session.is_active(env.ledger().timestamp()))
    }

    fn whitelisted_selector(
        env: Env,
        wallet: Address,
        session_key: BytesN<32>,
        destination: Address,
    ) -> Option<FunctionSelector> {
        storage::whitelisted_selector(&env, &wallet, &session_key, &destination)
    }

    fn is_whitelisted(
        env: Env,
        wallet: Address,
        session_key: BytesN<32>,
        destination: Address,
    ) -> bool {
        storage::whitelisted_selector(&env, &wallet, &session_key, &destination)
            .is_some()
    }

    fn execute_with_session_key(
        env: Env,
        wallet: Address,
        session_key: BytesN<32>,
        call: Call,
    ) -> Result<Val, SessionKeyError> {
        wallet.require_auth();

        Self::execute(&env, &wallet, &session_key, call)
    }

    fn validate_user_op(
        env: Env,
        wallet: Address,
        op: UserOperation,
        op_hash: BytesN<32>,
    ) -> Result<(), SessionKeyError> {
        wallet.require_auth();

        authorization::admit_user_op(&env, &wallet, &op, &op_hash)?;

        extend_instance_ttl(&env);

        Ok(())
    }

    fn execute_user_op(env: Env, op: UserOperation) -> Result<(), SessionKeyError> {
        Self::entry_point(env.clone()).require_auth();

        Self::execute(&env, &op.sender, &op.session_key, op.call)?;

        Ok(())
    }
}

impl SessionKeyModule {
    fn ensure_unrevoked(
        env: &Env,
        wallet: &Address,
        session_key: &BytesN<32>,
    ) -> Result<(), SessionKeyError> {
        let session =
            storage::session(env, wallet, session_key).ok_or(SessionKeyError::GrantNotFound)?;
        ensure!(!session.revoked, SessionKeyError::AlreadyRevoked);

        Ok(())
    }

    fn execute(
        env: &Env,
        wallet: &Address,
        session_key: &BytesN<32>,
        call: Call,
    ) -> Result<Val, SessionKeyError> {
        if let Err(err) = authorization::authorize_call(env, wallet, session_key, &call) {
            log!(env, "session call rejected: {}", err as u32);
            return Err(err);
        }

        let result = SmartWalletClient::new(env, wallet).execute_from_module(
            &env.current_contract_address(),
            &call.target,
            &call.function,
            &call.args,
        );

        extend_instance_ttl(env);

        Ok(result)
    }
}
