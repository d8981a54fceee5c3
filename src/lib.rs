//! River equity is a library for scoring Texas Hold'em hands once the
//! board is complete, and for working out how often the hero wins,
//! ties, or loses against unknown opponents.
//!
//! ```
//! use river_equity::holdem::{RiverSpot, exact_equity, label};
//!
//! let spot: RiverSpot = "AsKs KhKd5c5d2s".parse().unwrap();
//! assert_eq!("Full house (K over 5)", label(&spot.hero_score()).to_string());
//!
//! let heads_up = exact_equity(&spot);
//! assert_eq!(990, heads_up.total());
//! ```

/// Cards, decks, and seven card hand scoring. Nothing in here knows
/// about streets or opponents.
pub mod core;
/// The river calculators and labeling.
pub mod holdem;
