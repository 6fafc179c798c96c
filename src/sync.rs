//! Keeps the console's view of the simulation current.

mod cell;
mod poller;

pub use cell::{ApplyOutcome, Ticket, VersionedCell};
pub use poller::{use_synchronizer, Synchronizer};
