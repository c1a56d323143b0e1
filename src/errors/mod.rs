//! Error types and error handling for the front end.
//!
//! This module defines the positioned error type shared by the scanner
//! and the parser. It includes:
//!
//! - The `Error` structure carrying a source position
//! - `ErrorImpl` variants for syntax errors and symbol table exhaustion
//! - Short suggestions (`ErrorTip`) used when rendering diagnostics

pub mod errors;
