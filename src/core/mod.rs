// src/core/mod.rs
pub mod engine;
pub mod joiner;
pub mod mapper;
pub mod rules;
pub mod script;
pub mod table;
pub mod types;
pub mod word;
