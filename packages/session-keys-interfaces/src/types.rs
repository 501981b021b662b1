use soroban_sdk::{contracttype, Address, BytesN, Symbol, Val, Vec};

/// Which functions a session key may call on a whitelisted destination.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum FunctionSelector {
    /// Any function on the destination.
    AllowAll,
    /// Only the named function.
    Function(Symbol),
}

impl FunctionSelector {
    pub fn permits(&self, function: &Symbol) -> bool {
        match self {
            Self::AllowAll => true,
            Self::Function(allowed) => allowed == function,
        }
    }
}

/// A destination granted to a session key when it is created.
///
/// The zero address stands for "any destination" and only authorizes calls
/// that set `allow_all_destinations`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AllowedDestination {
    pub destination: Address,
    pub selector: FunctionSelector,
}

/// The grant of a session key on a wallet.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SessionKey {
    /// Ed25519 public key of the session.
    pub key: BytesN<32>,
    /// Last ledger timestamp at which the key is not yet usable.
    pub valid_after: u64,
    /// First ledger timestamp at which the key is no longer usable.
    pub valid_until: u64,
    pub revoked: bool,
}

impl SessionKey {
    /// A grant is active strictly inside its window and only while unrevoked.
    pub const fn is_active(&self, now: u64) -> bool {
        !self.revoked && self.valid_after < now && now < self.valid_until
    }
}

/// A call a session key asks the wallet to perform.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Call {
    pub target: Address,
    pub function: Symbol,
    pub args: Vec<Val>,
    /// Authorize against the wildcard destination instead of `target`.
    pub allow_all_destinations: bool,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct OpSignature {
    pub signer: BytesN<32>,    // Ed25519 public key
    pub signature: BytesN<64>, // Ed25519 signature
}

/// An operation submitted to the entry point on behalf of a wallet.
///
/// Everything except `signature` is covered by the operation hash.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct UserOperation {
    pub sender: Address,
    pub nonce: u64,
    /// Module that runs the payload, it must be enabled on `sender`.
    pub executor: Address,
    pub session_key: BytesN<32>,
    pub call: Call,
    pub signature: OpSignature,
}
