pub mod account;
pub mod job;

pub use account::*;
pub use job::*;
