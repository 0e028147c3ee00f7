pub mod codec;
pub mod property_store;
pub mod template_renderer;
