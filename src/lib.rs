#[macro_use]
extern crate lazy_static;
#[macro_use]
extern crate log;
#[macro_use]
extern crate serde_derive;

pub mod constants;
pub mod errors;
pub mod model;
pub mod reporting;

pub use crate::errors::Error;
pub use crate::model::{ErrorModel, ErrorModelKind, StateMask};
pub use crate::reporting::ModelReport;

pub type Result<T> = std::result::Result<T, Error>;
