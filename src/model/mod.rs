//! Glimmerly domain model
//!
//! Static type definitions for glimmers, users, completed challenges,
//! categories and screens. No behaviour beyond display and parsing.

pub mod types;

pub use types::{
    AppView, Category, CategoryInfo, CompletedChallenge, Difficulty, Glimmer, MediaType,
    UnknownCategory, User,
};
