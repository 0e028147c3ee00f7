pub mod cipher;
pub mod keyrings;
