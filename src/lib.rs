// Timeline Table Library
// Exports all modules for the binaries, tests and benches

pub mod models;
pub mod services;
pub mod ui_egui;
pub mod utils;
