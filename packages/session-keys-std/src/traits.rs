/// Turns a predicate into a `Result`, so checks chain with `?`.
pub trait ThenOk<T, E> {
    fn then_ok(self, ok: T, err: E) -> Result<T, E>;
}

impl<T, E> ThenOk<T, E> for bool {
    fn then_ok(self, ok: T, err: E) -> Result<T, E> {
        if self {
            Ok(ok)
        } else {
            Err(err)
        }
    }
}
