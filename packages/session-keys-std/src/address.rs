use soroban_sdk::{Address, Env, String};

const ZERO_ADDRESS: &str = "GAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAWHF";

pub trait AddressExt {
    /// Address that can never sign or host a contract. Session grants use it
    /// as the "any destination" row.
    fn zero(env: &Env) -> Address;
}

impl AddressExt for Address {
    // https://github.com/stellar/js-stellar-base/blob/master/test/unit/address_test.js
    fn zero(env: &Env) -> Address {
        Self::from_string(&String::from_str(env, ZERO_ADDRESS))
    }
}

#[cfg(test)]
mod test {
    use super::AddressExt;
    use soroban_sdk::{testutils::Address as _, Address, Env};

    #[test]
    fn zero_address_is_stable() {
        let env = Env::default();

        assert_eq!(Address::zero(&env), Address::zero(&env));
        assert_ne!(Address::zero(&env), Address::generate(&env));
    }
}
