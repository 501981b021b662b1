use soroban_sdk::{contractclient, contracterror, Address, BytesN, Env, Symbol, Val, Vec};

use crate::types::UserOperation;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum WalletError {
    InvalidNonce = 1,
    ModuleNotEnabled = 2,
    ModuleAlreadyEnabled = 3,
    InvalidSigner = 4,
    InvalidSender = 5,
    UnauthorizedContext = 6,
}

/// The capabilities a wallet exposes to its modules and to the entry point.
#[contractclient(name = "SmartWalletClient")]
pub trait SmartWalletInterface {
    fn is_module_enabled(env: Env, module: Address) -> bool;

    /// Invokes `function` on `target` as the wallet. Only callable by an enabled module.
    fn execute_from_module(
        env: Env,
        module: Address,
        target: Address,
        function: Symbol,
        args: Vec<Val>,
    ) -> Result<Val, WalletError>;

    /// Checks the signature and nonce of `op`. Only callable by the entry point.
    fn validate_user_op(env: Env, op: UserOperation, op_hash: BytesN<32>)
        -> Result<(), WalletError>;
}
