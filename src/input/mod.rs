//! Input handling: event types, the click/drag state machine, and the input
//! processor that converts raw window events into scene intents.

/// Platform-agnostic input events.
pub mod event;
/// Parameterless key-bound actions.
pub mod keyboard;
/// Click/drag state machine and cursor tracking.
pub(crate) mod mouse;
/// Converts raw events into scene intents.
pub mod processor;

pub use event::{InputEvent, MouseButton};
pub use keyboard::KeyAction;
pub use processor::InputProcessor;
