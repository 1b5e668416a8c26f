pub mod document_store;
pub mod identity_provider;
pub mod text_generator;
