use core::fmt::Debug;
use soroban_sdk::{Env, IntoVal, Topics, Val};

/// A contract event with a fixed topic layout.
///
/// Implementors describe how they are laid out on the event stream and
/// get publishing for free.
pub trait Event: Clone + Debug + PartialEq {
    fn topics(&self, env: &Env) -> impl Topics + Debug;

    fn data(&self, env: &Env) -> impl IntoVal<Env, Val> + Debug;

    fn emit(&self, env: &Env) {
        env.events().publish(self.topics(env), self.data(env));
    }
}
