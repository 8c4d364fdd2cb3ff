use super::frame::Frame;
use super::palette::Rgba;
use super::session_config::SessionConfig;
use crate::common::{ApplicationResult, DomainResult};
use async_trait::async_trait;
use std::sync::Arc;

/// Port to the remote simulation server.
/// Implementations (adapters) talk HTTP; tests script the responses.
#[async_trait]
pub trait SimulationApi: Send + Sync {
    /// Creates a session on the server and returns its first frame.
    async fn start_session(&self, config: &SessionConfig) -> ApplicationResult<Frame>;
    /// Advances the simulation one step and returns the resulting frame.
    async fn next_frame(&self) -> ApplicationResult<Frame>;
    /// Sends the pause/resume toggle.
    async fn send_command(&self) -> ApplicationResult<()>;
}

pub type DynSimulationApi = Arc<dyn SimulationApi>;

/// Drawing target for rendered frames.
pub trait Surface: Send {
    fn width(&self) -> u32;
    fn height(&self) -> u32;
    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Rgba);
    fn fill_circle(&mut self, cx: f32, cy: f32, radius: f32, color: Rgba);
    /// Called once a complete frame has been drawn.
    fn present(&mut self, frame_index: u64) -> DomainResult<()>;
}

/// Source of "next frame" opportunities, the analogue of a display refresh.
#[async_trait]
pub trait FrameScheduler: Send {
    async fn next_frame(&mut self);
}
