pub mod context;
pub mod error;
pub mod policy;
pub mod roles;
mod test_macros;

pub use context::{Actor, SecurityContext, SecurityCtxExtractor};
pub use error::SecurityError;
pub use policy::{ensure_capability, Capability};
pub use roles::Role;
