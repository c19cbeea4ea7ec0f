pub mod executor;
pub mod handlers;

pub use crate::events::AppCommand;
pub use executor::Effect;
