pub mod error;
pub mod region;
pub mod telephone;

pub use error::ValidationError;
pub use region::{MalformedRegion, RegionCode};
pub use telephone::{digits_only, scan_characters, ParsedNumber, Telephone};
