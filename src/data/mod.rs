//! Data layer: core types and CSV loading.
//!
//! Architecture:
//! ```text
//!   file.csv
//!        │
//!        ▼
//!   ┌──────────┐
//!   │  loader  │  parse header + rows, infer column types
//!   └──────────┘
//!        │
//!        ▼
//!   ┌──────────┐
//!   │ Dataset  │  ordered Vec<Column>, numeric or text cells
//!   └──────────┘
//! ```

pub mod loader;
pub mod model;
