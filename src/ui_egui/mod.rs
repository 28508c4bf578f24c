mod app;
mod dialogs;
mod views;

pub use app::TimelineTableApp;
