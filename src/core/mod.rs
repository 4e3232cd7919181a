pub mod classifier;
pub mod converter;
pub mod deriver;
pub mod engine;
pub mod mapper;
pub mod table;
pub mod types;
