pub mod errors;
pub mod validation;

pub use errors::DomainError;
