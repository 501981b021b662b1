//! Wiring of an entry point, a wallet and the session key module. Registry
//! edits are authorized as the wallet, user operations go through the entry
//! point with real signatures.

use entry_point::{EntryPoint, EntryPointClient};
use session_key_module::{SessionKeyError, SessionKeyModule, SessionKeyModuleClient};
use session_keys_interfaces::types::{AllowedDestination, Call, FunctionSelector, UserOperation};
use smart_wallet::testutils::{register_wallet, unsigned_user_op, TestSigner};
use smart_wallet::SmartWalletClient;
use soroban_sdk::testutils::{Ledger as _, MockAuth, MockAuthInvoke};
use soroban_sdk::{
    contract, contractimpl, vec, Address, BytesN, ConversionError, Env, IntoVal, InvokeError,
    Symbol, Val, Vec,
};

pub const NOW: u64 = 1_000;

pub type TryResult<T, E> = Result<Result<T, ConversionError>, Result<E, InvokeError>>;

#[contract]
pub struct Counter;

#[contractimpl]
impl Counter {
    pub fn count(env: Env, account: Address) -> u32 {
        account.require_auth();

        let count = Self::counter(env.clone(), account.clone()) + 1;
        env.storage().persistent().set(&account, &count);

        count
    }

    pub fn counter(env: Env, account: Address) -> u32 {
        env.storage().persistent().get(&account).unwrap_or_default()
    }
}

pub struct TestWorld<'a> {
    pub env: Env,
    pub owner: TestSigner,
    pub entry_point: EntryPointClient<'a>,
    pub module: SessionKeyModuleClient<'a>,
    pub wallet: SmartWalletClient<'a>,
    pub counter: CounterClient<'a>,
}

impl TestWorld<'_> {
    pub fn setup() -> Self {
        let env = Env::default();
        env.ledger().set_timestamp(NOW);

        let owner = TestSigner::generate();
        let entry_point = env.register(EntryPoint, ());
        let module = env.register(SessionKeyModule, (entry_point.clone(),));
        let wallet = register_wallet(&env, &owner, &entry_point, &[module.clone()]);
        let counter = env.register(Counter, ());

        Self {
            owner,
            entry_point: EntryPointClient::new(&env, &entry_point),
            module: SessionKeyModuleClient::new(&env, &module),
            wallet: SmartWalletClient::new(&env, &wallet),
            counter: CounterClient::new(&env, &counter),
            env,
        }
    }

    pub fn set_time(&self, timestamp: u64) {
        self.env.ledger().set_timestamp(timestamp);
    }

    /// Whitelists the counter's `count` function.
    pub fn counter_destination(&self) -> AllowedDestination {
        AllowedDestination {
            destination: self.counter.address.clone(),
            selector: FunctionSelector::Function(Symbol::new(&self.env, "count")),
        }
    }

    pub fn counter_call(&self, function: &str, allow_all_destinations: bool) -> Call {
        Call {
            target: self.counter.address.clone(),
            function: Symbol::new(&self.env, function),
            args: vec![&self.env, self.wallet.address.to_val()],
            allow_all_destinations,
        }
    }

    /// Calls the module with only the wallet's authorization of `fn_name` mocked.
    fn as_wallet<T>(
        &self,
        fn_name: &str,
        args: Vec<Val>,
        call: impl FnOnce(&SessionKeyModuleClient) -> T,
    ) -> T {
        let invoke = MockAuthInvoke {
            contract: &self.module.address,
            fn_name,
            args,
            sub_invokes: &[],
        };
        let auths = [MockAuth {
            address: &self.wallet.address,
            invoke: &invoke,
        }];

        call(&SessionKeyModuleClient::new(&self.env, &self.module.address).mock_auths(&auths))
    }

    pub fn add_session_key(
        &self,
        session_key: &BytesN<32>,
        valid_after: u64,
        valid_until: u64,
        destinations: &Vec<AllowedDestination>,
    ) -> TryResult<(), SessionKeyError> {
        let wallet = &self.wallet.address;
        let args = (
            wallet.clone(),
            session_key.clone(),
            valid_after,
            valid_until,
            destinations.clone(),
        )
            .into_val(&self.env);

        self.as_wallet("add_session_key", args, |module| {
            module.try_add_session_key(wallet, session_key, &valid_after, &valid_until, destinations)
        })
    }

    pub fn revoke_session(&self, session_key: &BytesN<32>) -> TryResult<(), SessionKeyError> {
        let wallet = &self.wallet.address;
        let args = (wallet.clone(), session_key.clone()).into_val(&self.env);

        self.as_wallet("revoke_session", args, |module| {
            module.try_revoke_session(wallet, session_key)
        })
    }

    pub fn execute_with_session_key(
        &self,
        session_key: &BytesN<32>,
        call: &Call,
    ) -> TryResult<Val, SessionKeyError> {
        let wallet = &self.wallet.address;
        let args = (wallet.clone(), session_key.clone(), call.clone()).into_val(&self.env);

        self.as_wallet("execute_with_session_key", args, |module| {
            module.try_execute_with_session_key(wallet, session_key, call)
        })
    }

    /// An operation for the wallet's next nonce, signed by `signer`.
    pub fn user_op(&self, signer: &TestSigner, session_key: &BytesN<32>, call: Call) -> UserOperation {
        let mut op = unsigned_user_op(
            &self.env,
            &self.wallet.address,
            self.wallet.nonce(),
            &self.module.address,
            session_key,
            call,
        );
        op.signature = signer.sign(&self.env, &self.entry_point.user_op_hash(&op));

        op
    }

    pub fn session_op(&self, session: &TestSigner, call: Call) -> UserOperation {
        self.user_op(session, &session.public_key(&self.env), call)
    }
}
