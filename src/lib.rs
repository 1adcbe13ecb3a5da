pub mod api;
pub mod config;
pub mod error;
pub mod notation;
pub mod solver;
// cmd and reports belong to the binary crate (main.rs).
