// src/table/mod.rs
pub mod columns;
pub mod raw_table;
pub mod reconstruct;

pub use columns::{find_column, require_column};
pub use raw_table::{Column, RawTable};
pub use reconstruct::{reconstruct, reconstruct_from_cells};
