//! Output generation.
//!
//! # Submodules
//!
//! - [`csv_file`]: Writes the final article list to a flat CSV file
//!
//! # Output Structure
//!
//! ```text
//! ./
//! └── articles.csv   # header + one row per article
//! ```

pub mod csv_file;
