#![no_std]

// Allows using std (and its macros) in test modules
#[cfg(test)]
#[macro_use]
extern crate std;

mod authorization;
mod event;
mod storage;
mod storage_types;

pub mod contract;


pub use contract::{SessionKeyModule, SessionKeyModuleClient};
pub use event::SessionKeyEvent;
pub use session_keys_interfaces::session_key_module::SessionKeyError;
