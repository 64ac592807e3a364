pub mod categories;
pub mod errors;

pub use errors::{Outcome, ServiceError, ServiceResult};
