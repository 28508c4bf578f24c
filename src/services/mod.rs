// Service module exports

pub mod api;
pub mod client;
pub mod column;
pub mod database;
pub mod event;
pub mod export;
pub mod settings;
pub mod table;
pub mod timeline;
