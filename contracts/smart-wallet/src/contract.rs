use session_keys_interfaces::session_key_module::SessionKeyModuleClient;
use session_keys_interfaces::smart_wallet::{SmartWalletInterface, WalletError};
use session_keys_interfaces::types::{OpSignature, UserOperation};
use session_keys_std::ensure;
use session_keys_std::events::Event;
use session_keys_std::ttl::extend_instance_ttl;
use soroban_sdk::auth::{Context, ContractContext, CustomAccountInterface};
use soroban_sdk::crypto::Hash;
use soroban_sdk::{
    contract, contractimpl, Address, BytesN, Env, Symbol, TryFromVal, Val, Vec,
};

use crate::event::WalletEvent;
use crate::storage_types::DataKey;

/// The only module function a session key may sign for.
const SESSION_EXECUTION_FN: &str = "execute_with_session_key";

#[contract]
pub struct SmartWallet;

#[contractimpl]
impl SmartWallet {
    pub fn __constructor(env: Env, owner: BytesN<32>, entry_point: Address, modules: Vec<Address>) {
        let storage = env.storage().instance();

        storage.set(&DataKey::Owner, &owner);
        storage.set(&DataKey::EntryPoint, &entry_point);
        storage.set(&DataKey::Nonce, &0u64);

        for module in modules.iter() {
            storage.set(&DataKey::Module(module), &true);
        }

        extend_instance_ttl(&env);
    }

    /// Ed25519 public key that controls the wallet.
    pub fn owner(env: &Env) -> BytesN<32> {
        env.storage()
            .instance()
            .get(&DataKey::Owner)
            .expect("owner not found")
    }

    pub fn entry_point(env: &Env) -> Address {
        env.storage()
            .instance()
            .get(&DataKey::EntryPoint)
            .expect("entry point not found")
    }

    /// Nonce the next user operation has to carry.
    pub fn nonce(env: &Env) -> u64 {
        env.storage()
            .instance()
            .get(&DataKey::Nonce)
            .unwrap_or_default()
    }

    pub fn enable_module(env: Env, module: Address) -> Result<(), WalletError> {
        env.current_contract_address().require_auth();

        let key = DataKey::Module(module.clone());

        ensure!(
            !env.storage().instance().has(&key),
            WalletError::ModuleAlreadyEnabled
        );

        env.storage().instance().set(&key, &true);

        extend_instance_ttl(&env);

        WalletEvent::ModuleEnabled { module }.emit(&env);

        Ok(())
    }

    pub fn disable_module(env: Env, module: Address) -> Result<(), WalletError> {
        env.current_contract_address().require_auth();

        let key = DataKey::Module(module.clone());

        ensure!(
            env.storage().instance().has(&key),
            WalletError::ModuleNotEnabled
        );

        env.storage().instance().remove(&key);

        extend_instance_ttl(&env);

        WalletEvent::ModuleDisabled { module }.emit(&env);

        Ok(())
    }
}

#[contractimpl]
impl SmartWalletInterface for SmartWallet {
    fn is_module_enabled(env: Env, module: Address) -> bool {
        env.storage().instance().has(&DataKey::Module(module))
    }

    fn execute_from_module(
        env: Env,
        module: Address,
        target: Address,
        function: Symbol,
        args: Vec<Val>,
    ) -> Result<Val, WalletError> {
        module.require_auth();

        ensure!(
            Self::is_module_enabled(env.clone(), module.clone()),
            WalletError::ModuleNotEnabled
        );

        let result: Val = env.invoke_contract(&target, &function, args);

        extend_instance_ttl(&env);

        WalletEvent::ExecutionFromModuleSuccess {
            module,
            target,
            function,
        }
        .emit(&env);

        Ok(result)
    }

    fn validate_user_op(
        env: Env,
        op: UserOperation,
        op_hash: BytesN<32>,
    ) -> Result<(), WalletError> {
        Self::entry_point(&env).require_auth();

        ensure!(
            op.sender == env.current_contract_address(),
            WalletError::InvalidSender
        );

        let nonce = Self::nonce(&env);
        ensure!(op.nonce == nonce, WalletError::InvalidNonce);
        env.storage().instance().set(&DataKey::Nonce, &(nonce + 1));

        extend_instance_ttl(&env);

        let owner = Self::owner(&env);
        if op.signature.signer == owner {
            env.crypto()
                .ed25519_verify(&owner, op_hash.as_ref(), &op.signature.signature);

            return Ok(());
        }

        ensure!(
            op.signature.signer == op.session_key,
            WalletError::InvalidSigner
        );
        ensure!(
            Self::is_module_enabled(env.clone(), op.executor.clone()),
            WalletError::ModuleNotEnabled
        );

        // the module verifies the session key's signature and traps on failure
        SessionKeyModuleClient::new(&env, &op.executor).validate_user_op(
            &env.current_contract_address(),
            &op,
            &op_hash,
        );

        Ok(())
    }
}

#[contractimpl]
impl CustomAccountInterface for SmartWallet {
    type Signature = OpSignature;
    type Error = WalletError;

    /// Accepts the owner's signature for anything. Any other key may only sign
    /// for `execute_with_session_key` calls naming this wallet and itself on an
    /// enabled module, whose grant is then checked by the module.
    fn __check_auth(
        env: Env,
        signature_payload: Hash<32>,
        signature: OpSignature,
        auth_contexts: Vec<Context>,
    ) -> Result<(), WalletError> {
        if signature.signer != Self::owner(&env) {
            for context in auth_contexts.iter() {
                Self::ensure_session_context(&env, &signature.signer, &context)?;
            }
        }

        env.crypto().ed25519_verify(
            &signature.signer,
            signature_payload.to_bytes().as_ref(),
            &signature.signature,
        );

        Ok(())
    }
}

impl SmartWallet {
    fn ensure_session_context(
        env: &Env,
        session_key: &BytesN<32>,
        context: &Context,
    ) -> Result<(), WalletError> {
        let Context::Contract(ContractContext {
            contract,
            fn_name,
            args,
        }) = context
        else {
            return Err(WalletError::UnauthorizedContext);
        };

        ensure!(
            *fn_name == Symbol::new(env, SESSION_EXECUTION_FN),
            WalletError::UnauthorizedContext
        );
        ensure!(
            Self::is_module_enabled(env.clone(), contract.clone()),
            WalletError::UnauthorizedContext
        );

        let wallet = args
            .get(0)
            .and_then(|arg| Address::try_from_val(env, &arg).ok());
        ensure!(
            wallet == Some(env.current_contract_address()),
            WalletError::UnauthorizedContext
        );

        let signer = args
            .get(1)
            .and_then(|arg| BytesN::<32>::try_from_val(env, &arg).ok());
        ensure!(
            signer.as_ref() == Some(session_key),
            WalletError::UnauthorizedContext
        );

        Ok(())
    }
}
