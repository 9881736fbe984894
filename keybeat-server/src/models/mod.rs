//! Domain models
//!
//! Request types are checked for shape only (presence and type of fields);
//! invalid input returns ValidationError, not panic.

pub mod integer;
pub mod pagination;
pub mod session;
pub mod validation;

pub use pagination::{paginate, PageWindow, Paginated, Pagination, PaginationParams};
pub use session::{NewSession, SessionRecord};
pub use validation::ValidationError;
