pub mod cipher;
pub mod key_source;
