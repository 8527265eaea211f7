/// Everything that can go wrong.
///
/// Overflow past the fixed width is *not* listed here: it is defined
/// truncation modulo $2^W$, uniformly across every operation.
#[derive(Clone, Copy, Debug, Eq, PartialEq, thiserror::Error)]
pub enum Error {
    /// Requested random bit length outside `[1, BITS]`, or a width the
    /// small-prime wheel carries no exponent table for.
    #[error("bit length outside the supported range")]
    InvalidLength,
    /// Number-string construction from empty, non-binary, or overlong input.
    #[error("malformed number string")]
    Parse,
    /// Zero divisor. The division primitive rejects this explicitly instead
    /// of producing an undefined quotient.
    #[error("division by zero")]
    DivisionByZero,
    /// Operand outside an operation's documented domain, e.g. a modular
    /// inverse outside `0 < num < mod`, or a Montgomery modulus that is
    /// even or zero.
    #[error("operand outside the operation's domain")]
    InvalidDomain,
}

/// [`Error`] or success.
pub type Result<T> = core::result::Result<T, Error>;
