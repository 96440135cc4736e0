//! Resolver models
//!
//! - `instrument` - Catalog record (InstrumentRecord)
//! - `validation` - Per-call verdict (ValidationResult, ResolutionKind)

mod instrument;
mod validation;

pub use instrument::InstrumentRecord;
pub use validation::{ResolutionKind, ValidationResult};
