use soroban_sdk::{contracttype, Address};

#[contracttype]
#[derive(Clone, Debug)]
pub enum DataKey {
    Owner,
    EntryPoint,
    Nonce,
    Module(Address),
}
