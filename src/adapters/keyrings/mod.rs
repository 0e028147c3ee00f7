pub mod file_key_source;
