use thiserror::Error;

/// Error while injecting providers into a function
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum InjectError {
    /// The value given as the function is not a [`Func`](crate::Func)
    #[error("value of type `{found}` is not a callable")]
    NotCallable { found: &'static str },

    /// None of the providers can be assigned to a parameter
    #[error("no provider of type `{parameter}` for parameter {index} of `{callable}`")]
    MissingProvider {
        callable: &'static str,
        index: usize,
        parameter: &'static str,
    },
}

/// Error while checking the signature of a function
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum AssertError {
    /// The value given as the function is not a [`Func`](crate::Func)
    #[error("value of type `{found}` is not a callable")]
    NotCallable { found: &'static str },

    /// The return types of the function do not match the expected ones
    #[error(
        "wrong signature: `{callable}` returns ({}), expected ({})",
        .actual.join(", "),
        .expected.join(", ")
    )]
    SignatureMismatch {
        callable: &'static str,
        expected: Vec<&'static str>,
        actual: Vec<&'static str>,
    },
}
