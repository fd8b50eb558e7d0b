pub mod games;
pub mod models;
pub mod points;
pub mod validation;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
