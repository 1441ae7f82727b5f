pub mod animation;
pub mod machine;
pub mod model;
pub mod signals;

pub use animation::ProgressAnimation;
pub use machine::{FrameOutcome, SwitchMachine, SwitchTransition};
pub use model::{SwitchPhase, SwitchVisualState};
pub use signals::{CheckedChangeSlot, FrameTickGate};
