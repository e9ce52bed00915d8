//! al-table: ordered numeric lookup tables with piecewise-linear
//! interpolation and linear extrapolation past both ends.
//!
//! Tables are built once from `(key, value)` points, sorted by key and
//! checked for unique finite keys. Lookups are read-only and keep all
//! scratch state on the stack, so a table can be shared freely.
//!
//! # Example
//!
//! ```
//! use al_table::InterpolationTable;
//!
//! let table = InterpolationTable::new([(0.0, 0.0), (1.0, 10.0), (2.0, 15.0)]).unwrap();
//! assert_eq!(table.interpolate(0.5).unwrap(), 5.0);
//! assert_eq!(table.interpolate(-1.0).unwrap(), -10.0);
//! assert_eq!(table.interpolate(3.0).unwrap(), 20.0);
//! ```

pub mod error;
pub mod table;

pub use error::{TableError, TableResult};
pub use table::{InterpolationTable, interpolate};
