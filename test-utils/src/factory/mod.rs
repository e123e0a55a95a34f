//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     let scholarship = factory::scholarship::create_scholarship(&db).await?;
//!     let review = factory::review::ReviewFactory::new(&db, scholarship.id)
//!         .rating("4")
//!         .build()
//!         .await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Available Factories
//!
//! - `user` - Create user entities
//! - `scholarship` - Create scholarship entities
//! - `review` - Create review entities
//! - `application` - Create application entities
//! - `helpers` - Unique id generation shared by the factories

pub mod application;
pub mod helpers;
pub mod review;
pub mod scholarship;
pub mod user;

pub use application::create_application;
pub use review::create_review;
pub use scholarship::create_scholarship;
pub use user::create_user;
