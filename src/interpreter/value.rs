/// The runtime value sum and its inspect printing.
pub mod core;
/// Hash key identities for hash-map values.
pub mod hash;
