//! Glimmerly local storage
//!
//! - **local**: `LocalStore` trait with memory and JSON-file backends
//! - **onboarding**: the two persisted onboarding flags
//! - **error**: Error types
//!
//! # Example
//!
//! ```rust
//! use glimmerly::model::Category;
//! use glimmerly::storage::{load_onboarding, save_onboarding, MemoryStore};
//!
//! let mut store = MemoryStore::new();
//! save_onboarding(&mut store, &[Category::Wild]).unwrap();
//!
//! assert_eq!(load_onboarding(&store).unwrap(), Some(vec![Category::Wild]));
//! ```

pub mod error;
pub mod local;
pub mod onboarding;

pub use error::{StorageError, StorageResult};
pub use local::{FileStore, LocalStore, MemoryStore, STORE_FILE_NAME};
pub use onboarding::{
    clear_onboarding, load_onboarding, save_onboarding, CATEGORIES_KEY, ONBOARDING_COMPLETED,
    ONBOARDING_KEY,
};
