pub mod keyring;
pub mod property;
