use core::fmt::Debug;

use session_keys_interfaces::types::{AllowedDestination, FunctionSelector};
use session_keys_std::events::Event;
use soroban_sdk::{Address, BytesN, Env, IntoVal, Symbol, Topics, Val, Vec};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SessionKeyEvent {
    SessionKeyAdded {
        wallet: Address,
        session_key: BytesN<32>,
        valid_after: u64,
        valid_until: u64,
        destinations: Vec<AllowedDestination>,
    },
    SessionKeyRevoked {
        wallet: Address,
        session_key: BytesN<32>,
    },
    WhitelistedDestinationAdded {
        wallet: Address,
        session_key: BytesN<32>,
        destination: Address,
        selector: FunctionSelector,
    },
    WhitelistedDestinationRemoved {
        wallet: Address,
        session_key: BytesN<32>,
        destination: Address,
    },
}

impl SessionKeyEvent {
    const fn name(&self) -> &'static str {
        match self {
            Self::SessionKeyAdded { .. } => "session_key_added",
            Self::SessionKeyRevoked { .. } => "session_key_revoked",
            Self::WhitelistedDestinationAdded { .. } => "whitelisted_destination_added",
            Self::WhitelistedDestinationRemoved { .. } => "whitelisted_destination_removed",
        }
    }

    const fn subject(&self) -> (&Address, &BytesN<32>) {
        match self {
            Self::SessionKeyAdded {
                wallet,
                session_key,
                ..
            }
            | Self::SessionKeyRevoked {
                wallet,
                session_key,
            }
            | Self::WhitelistedDestinationAdded {
                wallet,
                session_key,
                ..
            }
            | Self::WhitelistedDestinationRemoved {
                wallet,
                session_key,
                ..
            } => (wallet, session_key),
        }
    }
}

impl Event for SessionKeyEvent {
    fn topics(&self, env: &Env) -> impl Topics + Debug {
        let (wallet, session_key) = self.subject();

        (
            Symbol::new(env, self.name()),
            wallet.clone(),
            session_key.clone(),
        )
    }

    fn data(&self, env: &Env) -> impl IntoVal<Env, Val> + Debug {
        let data: Val = match self {
            Self::SessionKeyAdded {
                valid_after,
                valid_until,
                destinations,
                ..
            } => (*valid_after, *valid_until, destinations.clone()).into_val(env),
            Self::SessionKeyRevoked { .. } => ().into_val(env),
            Self::WhitelistedDestinationAdded {
                destination,
                selector,
                ..
            } => (destination.clone(), selector.clone()).into_val(env),
            Self::WhitelistedDestinationRemoved { destination, .. } => {
                (destination.clone(),).into_val(env)
            }
        };

        data
    }
}
