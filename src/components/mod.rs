#![allow(clippy::needless_pass_by_value)]

pub mod app;
pub mod delay_injector;
pub mod header;
pub mod route_map;
pub mod schedule_table;
pub mod toast;
pub mod train_card;
