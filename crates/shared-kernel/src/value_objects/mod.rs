// crates/shared-kernel/src/value_objects/mod.rs
pub mod digest;
pub mod file_role;

pub use digest::Sha1Digest;
pub use file_role::FileRole;
