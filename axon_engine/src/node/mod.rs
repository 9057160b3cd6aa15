//! The node actor: mailbox message set, running state machine, and the
//! handle other code uses to address it.

pub mod actor;
pub mod handle;
pub mod message;

pub use actor::NodeActor;
pub use handle::NodeHandle;
pub use message::{ActivationOption, NodeMessage, NodeStatus};
