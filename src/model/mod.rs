mod crane;
mod identifier;
mod mast;
mod validation;

pub use crane::CraneRecord;
pub use identifier::{ModelId, normalize_model_name};
pub use mast::MastRecord;
pub use validation::{ValidationError, parse_measurement};
