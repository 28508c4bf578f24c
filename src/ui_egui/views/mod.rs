pub mod grid_view;
pub mod timeline_view;
