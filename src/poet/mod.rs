//! Bridge-word poems
//!
//! - [`bridge`]: selection and insertion of bridge words over a word graph
//! - [`graph_poet`]: corpus loading and the [`GraphPoet`] facade

pub mod bridge;
pub mod graph_poet;

pub use bridge::{Bridge, BridgeInserter};
pub use graph_poet::{poem, GraphPoet};
