pub mod types;
pub mod classification;

pub use types::{ClientError, PortalError};
pub use classification::{ErrorClassification, ErrorKind};
