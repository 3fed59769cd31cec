//! Visual Store Adapters.
//!
//! - `InMemoryVisualStore` - single-process store for testing and development
//! - `FirestoreVisualStore` - Firestore REST API, collection "visuals"

mod firestore;
mod in_memory;

pub use firestore::{FirestoreConfig, FirestoreVisualStore};
pub use in_memory::InMemoryVisualStore;
