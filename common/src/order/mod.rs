pub mod session;
pub mod validation;

pub use session::{FormSession, SubmitOutcome};
pub use validation::{validate, FieldError, ValidationError};
