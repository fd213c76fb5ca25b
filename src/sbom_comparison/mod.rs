//! Comparison domain: value objects, identity-key policies and the pure
//! matching / diffing / summarising services.
pub mod domain;
pub mod policies;
pub mod services;
