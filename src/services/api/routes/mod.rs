//! Route groups for the table API.

pub mod columns;
pub mod rows;
