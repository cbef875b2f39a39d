pub mod config;
pub mod demo;
pub mod error;
pub mod logging;
pub mod mvp;
pub mod ui;
