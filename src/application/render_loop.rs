use crate::common::ApplicationResult;
use crate::config::ClientConfig;
use crate::domains::simulation::{
    ClientState, DynSimulationApi, FinishReason, Frame, FrameScheduler, Palette, SessionConfig,
    Surface, AGENT_RADIUS, BACKGROUND, WORLD_TO_PIXEL_SCALE,
};
use crate::domains::DynLogger;
use uuid::Uuid;

/// Outcome of a single poll/render iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// A frame was drawn and the loop should continue.
    Rendered,
    /// The poll failed but the retry budget allows another attempt.
    Retrying,
    /// The client is (now) finished; nothing was drawn.
    Stopped(FinishReason),
    /// The client has not been started.
    Idle,
}

/// Client session for one simulation run: owns the surface, the server port,
/// the frame pacing and the lifecycle state.
pub struct RenderLoopClient {
    session_id: Uuid,
    api: DynSimulationApi,
    surface: Box<dyn Surface>,
    scheduler: Box<dyn FrameScheduler>,
    logger: DynLogger,
    session_config: SessionConfig,
    options: ClientConfig,
    palette: Palette,
    state: ClientState,
    width: u32,
    height: u32,
    iteration: u64,
    presented: u64,
    consecutive_failures: u32,
    paused: bool,
}

impl RenderLoopClient {
    /// Builds the session, paints the background and requests a new
    /// simulation. Startup failures are logged; the canvas then stays at the
    /// background fill and `start` can still be called.
    pub async fn initialize(
        api: DynSimulationApi,
        surface: Box<dyn Surface>,
        scheduler: Box<dyn FrameScheduler>,
        logger: DynLogger,
        session_config: SessionConfig,
        options: ClientConfig,
    ) -> Self {
        let width = surface.width();
        let height = surface.height();
        let mut client = Self {
            session_id: Uuid::new_v4(),
            api,
            surface,
            scheduler,
            logger,
            session_config,
            options,
            palette: Palette::default(),
            state: ClientState::Uninitialized,
            width,
            height,
            iteration: 0,
            presented: 0,
            consecutive_failures: 0,
            paused: false,
        };

        client.clear();
        client.logger.info(&format!(
            "[{}] canvas {}x{} ready, starting simulation with {:?}",
            client.session_id, width, height, client.session_config
        ));

        let started = client.request_session().await;
        match started {
            Ok(frame) => client.render_frame(&frame),
            Err(e) => client
                .logger
                .error(&format!("[{}] failed to start simulation: {}", client.session_id, e)),
        }

        client
    }

    async fn request_session(&self) -> ApplicationResult<Frame> {
        self.session_config.validate()?;
        self.api.start_session(&self.session_config).await
    }

    /// Enters `Polling`, waits for the first frame opportunity and runs the
    /// loop to completion. A finished client returns immediately.
    pub async fn start(&mut self) -> ClientState {
        if self.state.is_finished() {
            return self.state;
        }
        self.state = self.state.start();
        self.logger
            .info(&format!("[{}] polling for frames", self.session_id));
        self.scheduler.next_frame().await;
        self.run_loop().await
    }

    /// Polls and renders until the client leaves `Polling`.
    pub async fn run_loop(&mut self) -> ClientState {
        while self.state.is_polling() {
            self.step().await;
        }
        self.state
    }

    /// One iteration: fetch, check completion, draw, wait for the next tick.
    pub async fn step(&mut self) -> StepOutcome {
        match self.state {
            ClientState::Uninitialized => return StepOutcome::Idle,
            ClientState::Finished(reason) => return StepOutcome::Stopped(reason),
            ClientState::Polling => {}
        }

        if let Some(limit) = self.options.max_frames {
            if self.iteration >= limit {
                self.logger.info(&format!(
                    "[{}] frame limit {} reached",
                    self.session_id, limit
                ));
                return self.finish(FinishReason::FrameLimit);
            }
        }

        let polled = self.api.next_frame().await;
        let frame = match polled {
            Ok(frame) => {
                self.consecutive_failures = 0;
                frame
            }
            Err(e) => {
                self.consecutive_failures += 1;
                self.logger.error(&format!(
                    "[{}] poll failed ({} consecutive): {}",
                    self.session_id, self.consecutive_failures, e
                ));
                if self.consecutive_failures > self.options.max_poll_retries {
                    return self.finish(FinishReason::Failed);
                }
                self.scheduler.next_frame().await;
                return StepOutcome::Retrying;
            }
        };

        if frame.finished {
            self.logger
                .info(&format!("[{}] simulation ended", self.session_id));
            return self.finish(FinishReason::Completed);
        }

        self.render_frame(&frame);
        self.iteration += 1;
        self.scheduler.next_frame().await;
        StepOutcome::Rendered
    }

    /// Clears the canvas and draws every agent of `frame`, then presents it.
    pub fn render_frame(&mut self, frame: &Frame) {
        self.clear();

        if !frame.is_consistent() {
            self.logger.warn(&format!(
                "[{}] frame reports {} agents but carries {}",
                self.session_id,
                frame.num,
                frame.agents.len()
            ));
        }

        for agent in frame.drawable_agents() {
            let (x, y) = agent.pixel_position(WORLD_TO_PIXEL_SCALE);
            let color = self.palette.color_for(agent.id);
            self.surface.fill_circle(x, y, AGENT_RADIUS, color);
        }

        if let Err(e) = self.surface.present(self.presented) {
            self.logger.warn(&format!(
                "[{}] failed to present frame {}: {}",
                self.session_id, self.presented, e
            ));
        }
        self.presented += 1;
    }

    /// Asks the server to pause or resume and flips the local flag.
    pub async fn toggle_pause(&mut self) -> ApplicationResult<bool> {
        self.api.send_command().await?;
        self.paused = !self.paused;
        self.logger.info(&format!(
            "[{}] simulation {}",
            self.session_id,
            if self.paused { "paused" } else { "resumed" }
        ));
        Ok(self.paused)
    }

    fn clear(&mut self) {
        self.surface
            .fill_rect(0.0, 0.0, self.width as f32, self.height as f32, BACKGROUND);
    }

    fn finish(&mut self, reason: FinishReason) -> StepOutcome {
        self.state = self.state.finish(reason);
        StepOutcome::Stopped(reason)
    }

    pub fn session_id(&self) -> Uuid {
        self.session_id
    }

    pub fn state(&self) -> ClientState {
        self.state
    }

    pub fn iteration(&self) -> u64 {
        self.iteration
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn session_config(&self) -> &SessionConfig {
        &self.session_config
    }
}
