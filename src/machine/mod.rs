//! Machine module: The keystroke-to-cell state machine.
//!
//! The state variable is the buffer length, an integer in `0..=N` where `N`
//! is the number of discovered cells. Display and focus are pure functions
//! of it and are re-applied after every mutation.
//!
//! ```text
//! KeyUp ──classify──▶ push / pop ──▶ render ──▶ cells[..] + focus
//! SwapEvent ──status != 422──▶ clear + rediscover ──▶ render
//! ```

mod key;
#[allow(clippy::module_inception)]
mod machine;
mod reset;

pub use key::{KeyClass, KeyUp, ALLOWED_CHAR_CODES, BACKSPACE, DELETE};
pub use machine::{focus_index, KeyOutcome, LetterInputMachine, ResetOutcome};
pub use reset::{SwapEvent, DEFAULT_STATUS, VALIDATION_FAILED};
