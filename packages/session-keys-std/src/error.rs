/// Return with an error if a condition is not met.
///
/// Simplifies the pattern of checking for a condition and returning with an error.
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $e:expr $(,)?) => {
        if !$cond {
            return Err($e);
        }
    };
}

// The following macros are mostly intended to serve as pseudo-documentation within tests,
// in addition to convenience/clarity

/// Assert that a [`Result`] is [`Ok`]
///
/// If the provided expresion evaulates to [`Ok`], then the
/// macro returns the value contained within the [`Ok`]. If
/// the [`Result`] is an [`Err`] then the macro will [`panic`]
/// with a message that includes the expression and the error.
#[macro_export]
macro_rules! assert_ok {
    ( $x:expr ) => {
        match $x {
            std::result::Result::Ok(v) => v,
            std::result::Result::Err(e) => {
                panic!("Error calling {}: {:?}", stringify!($x), e);
            }
        }
    };
}

/// Assert that an [`Option`] is [`Some`]
///
/// If the provided expresion evaulates to [`Some`], then the
/// macro returns the value contained within the [`Some`]. If
/// the [`Option`] is [`None`] then the macro will [`panic`]
/// with a message that includes the expression
#[macro_export]
macro_rules! assert_some {
    ( $x:expr ) => {
        match $x {
            core::option::Option::Some(s) => s,
            core::option::Option::None => {
                panic!("Expected value when calling {}, got None", stringify!($x));
            }
        }
    };
}

/// Assert that a `try_` client call failed with the given contract error.
///
/// Client `try_` calls return `Result<Result<T, _>, Result<E, InvokeError>>`,
/// the contract error sits in the inner `Ok` of the outer `Err`.
#[macro_export]
macro_rules! assert_contract_err {
    ( $given:expr, $expected:expr ) => {
        match $given {
            std::result::Result::Ok(v) => panic!(
                "Expected error {:?} when calling {}, got {:?} instead",
                $expected,
                stringify!($given),
                v
            ),
            std::result::Result::Err(std::result::Result::Err(e)) => {
                panic!("Expected error {:?}, got host error {:?} instead", $expected, e)
            }
            std::result::Result::Err(std::result::Result::Ok(e)) => {
                if e != $expected {
                    panic!("Expected error {:?}, got {:?} instead", $expected, e)
                }
            }
        }
    };
}

/// Assert that a `try_` client call was rejected by the host, e.g. because a
/// required authorization was missing, rather than by the contract itself.
#[macro_export]
macro_rules! assert_auth_err {
    ( $given:expr ) => {
        match $given {
            std::result::Result::Err(std::result::Result::Err(_)) => {}
            std::result::Result::Err(std::result::Result::Ok(e)) => panic!(
                "Expected host auth failure when calling {}, got contract error {:?} instead",
                stringify!($given),
                e
            ),
            std::result::Result::Ok(v) => panic!(
                "Expected host auth failure when calling {}, got {:?} instead",
                stringify!($given),
                v
            ),
        }
    };
}
