#![recursion_limit = "512"]

pub mod api;
pub mod app;
pub mod components;
pub mod state;
pub mod views;
