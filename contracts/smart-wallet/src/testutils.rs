#![cfg(any(test, feature = "testutils"))]
extern crate std;

use ed25519_dalek::{Signer, SigningKey};
use rand::Rng;
use session_keys_interfaces::types::{Call, OpSignature, UserOperation};
use soroban_sdk::{Address, BytesN, Env, Vec};

use crate::contract::SmartWallet;

/// An ed25519 key pair, used both as wallet owner and as session key.
#[derive(Clone, Debug)]
pub struct TestSigner {
    pub signing_key: SigningKey,
}

impl TestSigner {
    pub fn generate() -> Self {
        Self {
            signing_key: SigningKey::from_bytes(&rand::thread_rng().gen()),
        }
    }

    pub fn public_key(&self, env: &Env) -> BytesN<32> {
        BytesN::from_array(env, &self.signing_key.verifying_key().to_bytes())
    }

    pub fn sign(&self, env: &Env, payload: &BytesN<32>) -> OpSignature {
        let signature = self.signing_key.sign(&payload.to_array());

        OpSignature {
            signer: self.public_key(env),
            signature: BytesN::from_array(env, &signature.to_bytes()),
        }
    }
}

pub fn register_wallet(
    env: &Env,
    owner: &TestSigner,
    entry_point: &Address,
    modules: &[Address],
) -> Address {
    env.register(
        SmartWallet,
        (
            owner.public_key(env),
            entry_point.clone(),
            Vec::from_slice(env, modules),
        ),
    )
}

/// A user operation carrying a placeholder signature by `session_key`.
///
/// Replace the signature once the entry point's hash of the operation is known.
pub fn unsigned_user_op(
    env: &Env,
    sender: &Address,
    nonce: u64,
    executor: &Address,
    session_key: &BytesN<32>,
    call: Call,
) -> UserOperation {
    UserOperation {
        sender: sender.clone(),
        nonce,
        executor: executor.clone(),
        session_key: session_key.clone(),
        call,
        signature: OpSignature {
            signer: session_key.clone(),
            signature: BytesN::from_array(env, &[0; 64]),
        },
    }
}
