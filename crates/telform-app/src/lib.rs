pub mod input;
pub mod telephone_service;

#[cfg(test)]
pub(crate) mod fake;

pub use input::TelephoneInput;
pub use telephone_service::TelephoneService;
