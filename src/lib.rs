//! Playing-card rank types with optional `no_std` support.
//!
//! The crate provides a [`Rank`] enumeration of the thirteen standard card
//! ranks, totally ordered by strength, together with a compact [`RankSet`]
//! bitmask over them. Every rank has a one-character canonical token
//! (`2`-`9`, `T`, `J`, `Q`, `K`, `A`); parsing and rendering are exact
//! inverses.
//!
//! # Example
//!
//! ```
//! use cardrank::{ParseRankError, Rank};
//!
//! let rank: Rank = "K".parse()?;
//! assert_eq!(rank, Rank::RK);
//! assert_eq!(rank.to_string(), "K");
//! assert!(Rank::RK < Rank::RA);
//! # Ok::<(), ParseRankError>(())
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod error;
pub mod rank;
pub mod set;

// Re-export main types
pub use error::ParseRankError;
pub use rank::Rank;
pub use set::RankSet;
