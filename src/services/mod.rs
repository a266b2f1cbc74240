//! Application services.
//!
//! Multi-statement operations live here so handlers stay thin and the
//! transaction boundaries sit in one place.

pub mod accounts;
pub mod jobs;
