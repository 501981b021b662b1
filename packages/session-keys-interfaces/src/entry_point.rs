use soroban_sdk::{contractclient, contracterror, BytesN, Env, Vec};

use crate::types::UserOperation;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum EntryPointError {
    EmptyOperations = 1,
    OperationRejected = 2,
}

/// Interface for the user operation entry point.
#[contractclient(name = "EntryPointClient")]
pub trait EntryPointInterface {
    /// Returns the hash an operation's signer has to sign.
    fn user_op_hash(env: Env, op: UserOperation) -> BytesN<32>;

    /// Validates every operation, then executes them one by one.
    ///
    /// A validation failure rejects the whole batch. An execution failure only
    /// marks its own operation as unsuccessful.
    fn handle_ops(env: Env, ops: Vec<UserOperation>) -> Result<(), EntryPointError>;
}
