use core::fmt::Debug;

use session_keys_std::events::Event;
use soroban_sdk::{Address, BytesN, Env, IntoVal, Symbol, Topics, Val};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UserOperationEvent {
    pub op_hash: BytesN<32>,
    pub sender: Address,
    pub nonce: u64,
    /// Whether the payload ran, admission alone does not count.
    pub success: bool,
}

impl Event for UserOperationEvent {
    fn topics(&self, env: &Env) -> impl Topics + Debug {
        (
            Symbol::new(env, "user_operation"),
            self.op_hash.clone(),
            self.sender.clone(),
        )
    }

    fn data(&self, _env: &Env) -> impl IntoVal<Env, Val> + Debug {
        (self.nonce, self.success)
    }
}
