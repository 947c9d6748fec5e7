pub mod config;
pub mod domain;
pub mod services;
pub mod session;
pub mod ui;
