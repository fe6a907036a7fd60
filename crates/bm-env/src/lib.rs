//! `bm-env`: light-particle environments and collision scans.
//!
//! # Crate layout
//!
//! | Module            | Contents                                              |
//! |-------------------|-------------------------------------------------------|
//! | [`region`]        | `Region` (disk / square): area, membership, sampling  |
//! | [`environment`]   | `Environment`: generation, advance, boundary regeneration |
//! | [`scan`]          | `earliest_against_single`, `earliest_within_collection` |
//!
//! Scans are exhaustive on purpose: every candidate pair is tested, in index
//! order, so tie-breaks are reproducible given identical RNG streams.

pub mod environment;
pub mod region;
pub mod scan;


pub use environment::Environment;
pub use region::Region;
pub use scan::{BpHit, PairHit};
