//! # physio
//!
//! Host-testable model for the Phys.io pose game client.
//!
//! The browser app (`physio_web`) owns timers, HTTP and rendering. This crate
//! owns everything that can be decided without a browser:
//!
//! - [`pose`] / [`queue`]: the four target poses and the rotating 4-slot queue
//! - [`tier`]: mapping of the backend's scoring signal to feedback
//! - [`pending`] / [`cycle`]: the score hand-off between the two polling loops
//!   and the countdown clock
//! - [`session`]: the state machine both loops drive
//! - [`protocol`] / [`config`]: backend wire types and client configuration
//! - [`leaderboard`]: the ranking table model

pub mod config;
pub mod cycle;
pub mod error;
pub mod leaderboard;
pub mod pending;
pub mod pose;
pub mod prng;
pub mod protocol;
pub mod queue;
pub mod session;
pub mod tier;
pub mod time;

pub use config::ClientConfig;
pub use error::ClientError;
pub use pose::Pose;
pub use queue::PoseQueue;
pub use session::GameSession;
pub use tier::ScoringTier;
