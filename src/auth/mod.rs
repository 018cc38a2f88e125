pub mod identity;
pub mod sessions;
pub mod token;
