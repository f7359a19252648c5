//! In-memory repository implementations for the outreach platform.
//!
//! This crate provides [`MemoryStore`], a single store implementing every
//! repository trait from `outreach-core` over `HashMap`-backed tables guarded
//! by a `tokio::sync::RwLock`. It is the substitutable fake used by
//! view-model tests; production deployments use the `database` crate instead.
//!
//! # Example
//!
//! ```rust
//! use memory_store::MemoryStore;
//! use outreach_core::BusinessRepository;
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> outreach_core::Result<()> {
//!     let store = MemoryStore::new();
//!     let businesses = store.list_for_user("user_1").await?;
//!     assert!(businesses.is_empty());
//!     Ok(())
//! }
//! ```

mod store;

pub use store::MemoryStore;

// Re-export core types for convenience
pub use outreach_core::{
    Appointment, AppointmentRepository, Business, BusinessRepository, Campaign,
    CampaignRepository, Interaction, InteractionRepository, Lead, LeadRepository, Result,
    StoreError,
};
