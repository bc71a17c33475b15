// src/core/mod.rs

pub mod converter;
pub mod engine;
pub mod error;
pub mod inventory;
pub mod root;
pub mod suffixes;
pub mod types;
pub mod validator;
