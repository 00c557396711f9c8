//! Core types: players, clocks, images, RNG.
//!
//! These are the building blocks the engine is assembled from. Nothing
//! here knows about turns or game-over; that logic lives in `engine`.

pub mod clock;
pub mod image;
pub mod player;
pub mod rng;

pub use clock::{Clock, ClockStep};
pub use image::{ImageId, ImageItem};
pub use player::{Player, PlayerId, PlayerPair};
pub use rng::{GameRng, GameRngState};
