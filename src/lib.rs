pub mod app;
pub mod cli;
pub mod clipboard;
pub mod config;
pub mod controller;
pub mod detail;
pub mod error;
pub mod input;
pub mod layout;
pub mod locale;
pub mod logging;
pub mod notification;
pub mod opener;
pub mod scroll;
pub mod suggestions;
pub mod widgets;
pub mod wiki;
pub mod worker;
