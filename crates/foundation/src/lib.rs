pub mod ordering;

// Foundation crate: small, well-tested primitives only.
pub use ordering::*;
