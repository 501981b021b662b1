use soroban_sdk::{contracttype, Address, BytesN};

#[contracttype]
#[derive(Clone, Debug)]
pub struct SessionId {
    pub wallet: Address,
    pub session_key: BytesN<32>,
}

#[contracttype]
#[derive(Clone, Debug)]
pub struct WhitelistId {
    pub wallet: Address,
    pub session_key: BytesN<32>,
    pub destination: Address,
}

#[contracttype]
#[derive(Clone, Debug)]
pub enum DataKey {
    EntryPoint,
    Session(SessionId),
    Whitelist(WhitelistId),
    SessionKeys(Address),
}
