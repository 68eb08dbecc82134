mod process_variables;
mod release;

pub use process_variables::ProcessVariables;
pub use release::{Release, ReleaseType};
