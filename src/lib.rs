// src/lib.rs
pub mod catalog;
pub mod select;
pub mod server;
