pub mod add;
pub mod change;
pub mod delete;
pub mod init;
pub mod keyring_helpers;
pub mod list;
pub mod render;
