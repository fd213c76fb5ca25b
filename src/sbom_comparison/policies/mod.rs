mod identity_key;

pub use identity_key::{IdentityKeyPolicy, MatchKey, NameKeyPolicy, NamePurlKeyPolicy};
