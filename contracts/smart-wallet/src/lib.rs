#![no_std]

// Allows using std (and its macros) in test modules
#[cfg(test)]
#[macro_use]
extern crate std;

mod event;
mod storage_types;

pub mod contract;

#[cfg(all(target_family = "wasm", feature = "testutils"))]
compile_error!("'testutils' feature is not supported on 'wasm' target");

#[cfg(any(test, feature = "testutils"))]
pub mod testutils;


pub use contract::{SmartWallet, SmartWalletClient};
pub use event::WalletEvent;
pub use session_keys_interfaces::smart_wallet::WalletError;
