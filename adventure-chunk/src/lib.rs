pub mod app;
pub mod config;
pub mod provider;
pub mod service;
