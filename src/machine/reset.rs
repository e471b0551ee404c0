//! Swap-completion events.

/// Status that marks a rejected submission; a swap carrying it keeps input.
pub const VALIDATION_FAILED: u16 = 422;

/// Status assumed when the event carries none.
pub const DEFAULT_STATUS: u16 = 200;

/// Signal that the page replaced part of the document out-of-band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SwapEvent {
    status: Option<u16>,
}

impl SwapEvent {
    /// A swap with no status payload.
    pub const fn new() -> Self {
        Self { status: None }
    }

    /// A swap carrying the response status `status`.
    pub const fn with_status(status: u16) -> Self {
        Self {
            status: Some(status),
        }
    }

    /// The raw status payload, if any.
    pub const fn raw_status(&self) -> Option<u16> {
        self.status
    }

    /// The status, defaulting to [`DEFAULT_STATUS`].
    pub const fn status(&self) -> u16 {
        match self.status {
            Some(status) => status,
            None => DEFAULT_STATUS,
        }
    }

    /// Check if the swap must leave typed letters in place.
    pub const fn preserves_input(&self) -> bool {
        self.status() == VALIDATION_FAILED
    }
}

impl From<Option<u16>> for SwapEvent {
    fn from(status: Option<u16>) -> Self {
        Self { status }
    }
}
