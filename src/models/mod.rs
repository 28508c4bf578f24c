// Module exports for models

pub mod column;
pub mod event;
pub mod settings;
