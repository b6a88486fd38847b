use thiserror::Error;

/// Errors that can occur when constructing a [`ListPool`][crate::ListPool].
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// A capacity parameter was zero. Pool capacities must be positive.
    #[error("{parameter} must be greater than zero")]
    ZeroCapacity {
        /// Name of the offending parameter.
        parameter: &'static str,
    },
}

/// A specialized `Result` type for list pool operations, returning the crate's
/// [`Error`] type as the error value.
pub(crate) type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use std::fmt::Debug;

    use static_assertions::assert_impl_all;

    use super::*;

    assert_impl_all!(Error: Send, Sync, Debug);

    #[test]
    fn zero_capacity_message_names_parameter() {
        let error = Error::ZeroCapacity {
            parameter: "default_capacity",
        };

        assert_eq!(error.to_string(), "default_capacity must be greater than zero");
    }
}
