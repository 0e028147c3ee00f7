pub mod age_backend;
