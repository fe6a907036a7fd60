//! `bm-sim`: event loops for the brownian_rs collision simulator.
//!
//! # Event loop
//!
//! Every model runs the same skeleton; only the source of the next event and
//! the environment policy differ:
//!
//! ```text
//! while collisions < target:
//!   ① Scan: ask the collision engine for the earliest next event.
//!   ② Advance: move the heavy particle (and a persistent field) by the
//!              event time.
//!   ③ Apply: randomise directions, append to the history, regenerate
//!            escaped light particles.
//!   ④ Check: stop on a terminal status.
//! ```
//!
//! | Model         | Environment                    | Terminal statuses          |
//! |---------------|--------------------------------|----------------------------|
//! | `Disk`        | fresh disk every tick          | `Completed`                |
//! | `DiskSubstep` | fresh, shrinking disk per hit  | `Completed`                |
//! | `Square`      | persistent square              | `NoBigCollision`, `OutsideEnv` |
//! | `Interacting` | persistent square, field-field | `NoBigLittleCollision`, `OutsideEnv` |
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | [`run_batch`] runs trials on Rayon's thread pool.      |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use bm_core::{TrialConfig, TrialId};
//! use bm_sim::{NoopObserver, TrialBuilder};
//!
//! let outcome = TrialBuilder::new(TrialConfig::square())
//!     .id(TrialId(0))
//!     .seed(42)
//!     .build()?
//!     .run(&mut NoopObserver);
//! println!("{} after {} collisions", outcome.status, outcome.collisions());
//! ```

pub mod batch;
pub mod builder;
pub mod error;
pub mod history;
pub mod observer;
pub mod status;
pub mod trial;

mod disk;
mod square;


pub use batch::{run_batch, BatchReport, StatusCounts};
pub use builder::TrialBuilder;
pub use error::{SimError, SimResult};
pub use history::{EventHistory, Snapshot};
pub use observer::{NoopObserver, TrialObserver};
pub use status::TrialStatus;
pub use trial::{Trial, TrialOutcome};
