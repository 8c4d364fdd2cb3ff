#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FinishReason {
    /// The server reported `Finished`.
    Completed,
    /// Polling failed more often than the retry budget allows.
    Failed,
    /// The configured frame cap was reached.
    FrameLimit,
}

/// Lifecycle of the render loop. `Finished` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClientState {
    #[default]
    Uninitialized,
    Polling,
    Finished(FinishReason),
}

impl ClientState {
    pub fn is_polling(&self) -> bool {
        matches!(self, ClientState::Polling)
    }

    pub fn is_finished(&self) -> bool {
        matches!(self, ClientState::Finished(_))
    }

    /// `Uninitialized -> Polling`; every other state is left as is.
    pub fn start(self) -> Self {
        match self {
            ClientState::Uninitialized => ClientState::Polling,
            other => other,
        }
    }

    /// Moves a polling client into `Finished`. A finished client keeps its
    /// original reason.
    pub fn finish(self, reason: FinishReason) -> Self {
        match self {
            ClientState::Finished(_) => self,
            _ => ClientState::Finished(reason),
        }
    }
}
