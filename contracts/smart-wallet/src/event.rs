use core::fmt::Debug;

use session_keys_std::events::Event;
use soroban_sdk::{Address, Env, IntoVal, Symbol, Topics, Val};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum WalletEvent {
    ModuleEnabled {
        module: Address,
    },
    ModuleDisabled {
        module: Address,
    },
    ExecutionFromModuleSuccess {
        module: Address,
        target: Address,
        function: Symbol,
    },
}

impl Event for WalletEvent {
    fn topics(&self, env: &Env) -> impl Topics + Debug {
        match self {
            Self::ModuleEnabled { module } => (Symbol::new(env, "module_enabled"), module.clone()),
            Self::ModuleDisabled { module } => {
                (Symbol::new(env, "module_disabled"), module.clone())
            }
            Self::ExecutionFromModuleSuccess { module, .. } => (
                Symbol::new(env, "execution_from_module_success"),
                module.clone(),
            ),
        }
    }

    fn data(&self, env: &Env) -> impl IntoVal<Env, Val> + Debug {
        let data: Val = match self {
            Self::ModuleEnabled { .. } | Self::ModuleDisabled { .. } => ().into_val(env),
            Self::ExecutionFromModuleSuccess {
                target, function, ..
            } => (target.clone(), function.clone()).into_val(env),
        };

        data
    }
}
