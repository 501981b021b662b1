use soroban_sdk::{contractclient, contracterror, Address, BytesN, Env, Val, Vec};

use crate::types::{AllowedDestination, Call, FunctionSelector, SessionKey, UserOperation};

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum SessionKeyError {
    /// Registry
    GrantConflict = 1,
    InvalidWindow = 2,
    EmptyDestinationSet = 3,
    GrantNotFound = 4,
    AlreadyRevoked = 5,
    WhitelistConflict = 6,
    /// No whitelist row for the destination, either when removing it or when
    /// a call is checked against it.
    WhitelistMissing = 7,
    /// Execution
    ///
    /// The grant is revoked or outside its window, or the stored selector does
    /// not permit the called function.
    SessionInactive = 8,
    /// Operation admission
    AuthorizationDenied = 9,
}

/// Interface for the session key module.
///
/// Every mutating function takes the wallet explicitly and requires its authorization.
#[contractclient(name = "SessionKeyModuleClient")]
pub trait SessionKeyModuleInterface {
    /// Returns the only entry point allowed to run user operations through this module.
    fn entry_point(env: Env) -> Address;

    /// Grants `session_key` authority over `wallet` between `valid_after` and `valid_until`
    /// (both exclusive), restricted to `destinations`.
    ///
    /// Fails if any grant, live or revoked, already exists for the key.
    fn add_session_key(
        env: Env,
        wallet: Address,
        session_key: BytesN<32>,
        valid_after: u64,
        valid_until: u64,
        destinations: Vec<AllowedDestination>,
    ) -> Result<(), SessionKeyError>;

    /// Permanently revokes a session key.
    fn revoke_session(
        env: Env,
        wallet: Address,
        session_key: BytesN<32>,
    ) -> Result<(), SessionKeyError>;

    fn add_whitelist_destination(
        env: Env,
        wallet: Address,
        session_key: BytesN<32>,
        destination: Address,
        selector: FunctionSelector,
    ) -> Result<(), SessionKeyError>;

    fn remove_whitelist_destination(
        env: Env,
        wallet: Address,
        session_key: BytesN<32>,
        destination: Address,
    ) -> Result<(), SessionKeyError>;

    /// Returns the grant of `session_key`, revoked grants included.
    fn session_key(env: Env, wallet: Address, session_key: BytesN<32>) -> Option<SessionKey>;

    /// Returns the unrevoked session keys of `wallet` in the order they were added.
    fn session_keys(env: Env, wallet: Address) -> Vec<SessionKey>;

    fn is_session_active(env: Env, wallet: Address, session_key: BytesN<32>) -> bool;

    fn whitelisted_selector(
        env: Env,
        wallet: Address,
        session_key: BytesN<32>,
        destination: Address,
    ) -> Option<FunctionSelector>;

    fn is_whitelisted(
        env: Env,
        wallet: Address,
        session_key: BytesN<32>,
        destination: Address,
    ) -> bool;

    /// Performs `call` from `wallet` if `session_key` is currently entitled to it.
    ///
    /// Requires the wallet's authorization.
    fn execute_with_session_key(
        env: Env,
        wallet: Address,
        session_key: BytesN<32>,
        call: Call,
    ) -> Result<Val, SessionKeyError>;

    /// Admits a user operation signed by one of the wallet's session keys.
    ///
    /// Called by the wallet while the entry point validates `op`.
    fn validate_user_op(
        env: Env,
        wallet: Address,
        op: UserOperation,
        op_hash: BytesN<32>,
    ) -> Result<(), SessionKeyError>;

    /// Runs the payload of an admitted user operation. Only callable by the entry point.
    fn execute_user_op(env: Env, op: UserOperation) -> Result<(), SessionKeyError>;
}
