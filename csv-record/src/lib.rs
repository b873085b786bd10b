//! Records of delimited tabular data.
//!
//! A [`Record`] is one row of already-split field values. When the upstream
//! parser knows the header, it attaches a shared [`Mapping`] so that fields
//! can be read by column name as well as by position.

mod error;
mod mapping;
mod record;
mod record_builder;

pub use error::*;
pub use mapping::*;
pub use record::*;
pub use record_builder::*;
