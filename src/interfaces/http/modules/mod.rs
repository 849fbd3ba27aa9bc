//! Per-resource HTTP modules

pub mod users;
