// Service exports
pub mod cache;
pub mod seed;
pub mod store;

pub use cache::{CacheError, CacheKey, CacheManager};
pub use seed::default_questions;
pub use store::{AnswerStore, StoreError};
