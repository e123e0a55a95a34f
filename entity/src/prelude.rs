pub use super::application::Entity as Application;
pub use super::review::Entity as Review;
pub use super::scholarship::Entity as Scholarship;
pub use super::user::Entity as User;
