//! Command implementations.

mod run;
mod validate;

pub use run::run_notifier;
pub use validate::run_validate;
