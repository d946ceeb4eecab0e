//! Error types for the front end.
//!
//! Every fallible operation returns its error by value; there is no
//! panic-based unwinding in the library. The parser stops at the first
//! error and hands it back unchanged.

pub mod errors;

#[cfg(test)]
mod tests;
