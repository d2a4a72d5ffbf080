#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod board;
mod common;
mod config;
mod coordinate;
mod fleet;
mod game;
#[cfg(feature = "std")]
mod logging;
mod placement;
mod player;
mod ship;
#[cfg(feature = "std")]
pub mod ui;

pub use board::*;
pub use common::*;
pub use config::*;
pub use coordinate::*;
pub use fleet::*;
pub use game::*;
#[cfg(feature = "std")]
pub use logging::init_logging;
pub use placement::*;
pub use player::*;
pub use ship::*;
