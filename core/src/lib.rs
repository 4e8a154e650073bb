pub mod error;
pub mod options;

pub use error::{InspectError, InspectResult};
pub use options::InspectOptions;
