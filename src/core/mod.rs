pub mod action;
pub mod config;
pub mod session;
pub mod state;
