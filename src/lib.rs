//! # Glimmerly
//!
//! Daily micro-challenges with a short-video feed. A user picks the kinds of
//! challenges they like, gets one randomly drawn "glimmer" per day (with a
//! limited number of skips), records a photo or video for it, and browses
//! what others published.
//!
//! ## Features
//!
//! - **Explicit screen state machine**: every intent goes through a pure transition function
//! - **Persistent onboarding**: two flags in a localStorage-style key/value store
//! - **Cancellable capture**: device capture runs on Tokio and can be abandoned at any time
//! - **Terminal front end**: every screen rendered as text, driven by line commands
//!
//! ## Modules
//!
//! - [`model`]: Glimmers, users, completed challenges, categories
//! - [`catalog`]: Built-in sample data and the daily draw
//! - [`views`]: Per-screen state machines
//! - [`app`]: Cross-screen state, transitions and the session controller
//! - [`storage`]: Local key/value persistence
//! - [`capture`]: Media capture capability
//! - [`login`]: Login form validation
//! - [`shell`]: Text rendering and command execution
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use glimmerly::{Category, Config, Glimmerly};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut app = Glimmerly::from_config(&Config::default())?;
//!     app.mount()?;
//!
//!     app.toggle_category(Category::Wild)?;
//!     app.confirm_onboarding()?;
//!
//!     app.reveal()?;
//!     println!("Today: {}", app.state().daily_glimmer.title);
//!
//!     app.complete_challenge()?;
//!     app.capture().await?;
//!     app.submit_challenge()?;
//!
//!     Ok(())
//! }
//! ```

pub mod app;
pub mod capture;
pub mod catalog;
pub mod config;
pub mod error;
pub mod login;
pub mod model;
pub mod shell;
pub mod storage;
pub mod views;

// Re-export top-level types for convenience
pub use model::{AppView, Category, CompletedChallenge, Difficulty, Glimmer, MediaType, User};

pub use catalog::Catalog;

pub use app::{AppEvent, AppState, Glimmerly, Notice, Screen};

pub use error::{AppError, AppResult};

pub use storage::{FileStore, LocalStore, MemoryStore, StorageError, StorageResult};

pub use capture::{CaptureError, CaptureOutcome, CaptureService, MediaHandle, SimulatedCapture};

pub use config::{Config, ConfigError};

pub use login::{LoginError, LoginForm, LoginRequest};
