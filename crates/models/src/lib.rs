//! Record types managed by the admin panel, plus the validation rules and
//! seed data shared by the service and server crates.

pub mod validation;
pub mod duration;
pub mod record;
pub mod course;
pub mod service;
pub mod seed;

pub use course::{Course, CourseInput};
pub use record::CatalogRecord;
pub use service::{Service, ServiceInput};
pub use validation::{FieldErrors, Validate};
