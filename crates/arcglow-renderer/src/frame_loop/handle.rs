use tokio_util::sync::CancellationToken;

/// Cancels a running [`FrameLoop`](super::FrameLoop). Clones share the loop.
#[derive(Debug, Clone)]
pub struct FrameHandle {
    token: CancellationToken,
}

impl FrameHandle {
    pub(super) fn new(token: CancellationToken) -> Self {
        Self { token }
    }

    /// Stop the loop. No frame starts after this returns; calling it again
    /// does nothing.
    pub fn cancel(&self) {
        self.token.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }
}
