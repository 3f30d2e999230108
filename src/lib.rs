pub mod actions;
pub mod delay;
pub mod error;
pub mod floating;
pub mod hotkey;
pub mod logging;
pub mod override_state;
pub mod settings;
pub mod timer;
pub mod visibility;

pub use error::{FloatError, Result};
pub use floating::Floating;
pub use timer::{PendingTimeout, TimeoutOutcome};
