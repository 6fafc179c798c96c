#![allow(clippy::implicit_hasher)]
#![allow(unknown_lints)]

pub mod api;
pub mod components;
pub mod config;
pub mod constants;
pub mod decision;
pub mod explain;
pub mod logging;
pub mod models;
pub mod position;
pub mod session;
pub mod sync;
pub mod time;

pub use components::app::App;
