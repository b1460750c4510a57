pub mod charclass;
pub mod config;
pub mod error;
pub mod increment;
pub mod notice;
pub mod range;
pub mod sequence;
pub mod ui;

pub use error::{Result, StrBumpError};
pub use increment::{decrement, increment, is_inert, nth_after, nth_before};
