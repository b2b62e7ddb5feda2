//! Derived views: filtering, ordering, grouping and summaries over a snapshot.
//! Everything here is a pure function of its inputs.

pub mod group;
pub mod history;
pub mod items;
pub mod late;
pub mod ledger;
pub mod logic;
pub mod stats;
pub mod users;

pub use logic::ViewFilterEngine;
