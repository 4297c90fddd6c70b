pub mod numbering;

pub use numbering::LibPhoneNumber;
