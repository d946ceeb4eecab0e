//! Lexically scoped binding frames.
//!
//! The parser records declarations in the active frame and consults it
//! while recognizing later forms. Frames chain through parent references
//! to model nested scopes; a frame never owns its parent.

pub mod environment;

#[cfg(test)]
mod tests;
