//! In-memory tabular view engine: filter, sort and paginate a record
//! collection and hand row actions back to the host.

pub mod actions;
pub mod composer;
pub mod filter;
pub mod paginate;
pub mod sort;

#[cfg(test)]
mod tests;

pub use actions::RowActions;
pub use composer::{compose, GridView};
