use session_keys_interfaces::entry_point::{EntryPointError, EntryPointInterface};
use session_keys_interfaces::session_key_module::SessionKeyModuleClient;
use session_keys_interfaces::smart_wallet::SmartWalletClient;
use session_keys_interfaces::types::UserOperation;
use session_keys_std::ensure;
use session_keys_std::events::Event;
use session_keys_std::ttl::extend_instance_ttl;
use soroban_sdk::xdr::ToXdr;
use soroban_sdk::{contract, contractimpl, log, BytesN, Env, Vec};

use crate::event::UserOperationEvent;

#[contract]
pub struct EntryPoint;

#[contractimpl]
impl EntryPointInterface for EntryPoint {
    fn user_op_hash(env: Env, op: UserOperation) -> BytesN<32> {
        let UserOperation {
            sender,
            nonce,
            executor,
            session_key,
            call,
            ..
        } = op;

        let preimage = (
            env.current_contract_address(),
            sender,
            nonce,
            executor,
            session_key,
            call,
        )
            .to_xdr(&env);

        env.crypto().sha256(&preimage).into()
    }

    fn handle_ops(env: Env, ops: Vec<UserOperation>) -> Result<(), EntryPointError> {
        ensure!(!ops.is_empty(), EntryPointError::EmptyOperations);

        let mut op_hashes = Vec::new(&env);

        for op in ops.iter() {
            let op_hash = Self::user_op_hash(env.clone(), op.clone());

            let validation =
                SmartWalletClient::new(&env, &op.sender).try_validate_user_op(&op, &op_hash);

            if !matches!(validation, Ok(Ok(()))) {
                log!(&env, "user operation rejected: {}", op.nonce);
                return Err(EntryPointError::OperationRejected);
            }

            op_hashes.push_back(op_hash);
        }

        for (op, op_hash) in ops.iter().zip(op_hashes.iter()) {
            // a failed payload is rolled back but still consumes the operation
            let execution =
                SessionKeyModuleClient::new(&env, &op.executor).try_execute_user_op(&op);

            UserOperationEvent {
                op_hash,
                sender: op.sender,
                nonce: op.nonce,
                success: matches!(execution, Ok(Ok(()))),
            }
            .emit(&env);
        }

        extend_instance_ttl(&env);

        Ok(())
    }
}
