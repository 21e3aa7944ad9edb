//! xlsxmail - Excel to CSV converter with automatic email column detection
//!
//! This crate converts Excel files (`.xlsx`, `.xls`) into comma-separated
//! text files, optionally narrowing the output to the first column detected
//! as containing email addresses.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use std::path::Path;
//! use xlsxmail::ConverterBuilder;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Create a converter with default settings (email-only mode)
//!     let converter = ConverterBuilder::new().build()?;
//!
//!     // Convert a single file
//!     let ok = converter.convert_file(Path::new("contacts.xlsx"), Path::new("contacts.csv"));
//!     assert!(ok);
//!
//!     Ok(())
//! }
//! ```
//!
//! # Batch Conversion
//!
//! ```rust,no_run
//! use std::path::Path;
//! use xlsxmail::ConverterBuilder;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let converter = ConverterBuilder::new().verbose(true).build()?;
//! let count = converter.convert_directory(Path::new("input"), Path::new("output"));
//! println!("Converted {} file(s)", count);
//! # Ok(())
//! # }
//! ```
//!
//! # Keeping All Columns
//!
//! When no email column is found, the converter deliberately falls back to
//! exporting all columns. Email-only projection can also be disabled
//! entirely:
//!
//! ```rust,no_run
//! use xlsxmail::ConverterBuilder;
//!
//! # fn main() -> Result<(), xlsxmail::XlsxToCsvError> {
//! let converter = ConverterBuilder::new().email_only(false).build()?;
//! # Ok(())
//! # }
//! ```

mod builder;
mod detect;
mod error;
mod output;
mod parser;
mod table;
mod types;

// 公開API
pub use builder::{is_supported_path, Converter, ConverterBuilder, SUPPORTED_EXTENSIONS};
pub use detect::{EmailDetector, EMAIL_PATTERN};
pub use error::XlsxToCsvError;
pub use output::write_csv;
pub use parser::load_table;
pub use table::{Column, Table};
pub use types::CellValue;
