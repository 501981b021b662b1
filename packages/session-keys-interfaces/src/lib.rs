#![no_std]

pub mod types;

pub mod entry_point;
pub mod session_key_module;
pub mod smart_wallet;
