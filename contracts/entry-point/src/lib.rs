#![no_std]

// Allows using std (and its macros) in test modules
#[cfg(test)]
#[macro_use]
extern crate std;

mod event;

pub mod contract;


pub use contract::{EntryPoint, EntryPointClient};
pub use event::UserOperationEvent;
pub use session_keys_interfaces::entry_point::EntryPointError;
