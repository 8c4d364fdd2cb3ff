use crate::common::{ApplicationError, ApplicationResult};
use crate::config::ServerConfig;
use crate::domains::simulation::{Frame, SessionConfig, SimulationApi};
use async_trait::async_trait;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::{Client, Response};
use std::time::Duration;
use tracing::debug;

const SIMULATION_PATH: &str = "/simulation";
const JSON: &str = "application/json";

/// `SimulationApi` over HTTP against a single `/simulation` resource.
pub struct HttpSimulationApi {
    client: Client,
    endpoint: String,
}

impl HttpSimulationApi {
    pub fn new(config: &ServerConfig) -> ApplicationResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_millis(config.request_timeout_ms))
            .build()
            .map_err(|e| ApplicationError::Transport(format!("failed to build HTTP client: {}", e)))?;
        Ok(Self {
            client,
            endpoint: join_url(&config.base_url, SIMULATION_PATH),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl SimulationApi for HttpSimulationApi {
    async fn start_session(&self, config: &SessionConfig) -> ApplicationResult<Frame> {
        debug!(endpoint = %self.endpoint, ?config, "starting simulation session");
        let response = self
            .client
            .post(&self.endpoint)
            .header(ACCEPT, JSON)
            .header(CONTENT_TYPE, JSON)
            .json(config)
            .send()
            .await
            .map_err(transport_error)?;
        parse_frame(response).await
    }

    async fn next_frame(&self) -> ApplicationResult<Frame> {
        let response = self
            .client
            .get(&self.endpoint)
            .header(ACCEPT, JSON)
            .send()
            .await
            .map_err(transport_error)?;
        parse_frame(response).await
    }

    async fn send_command(&self) -> ApplicationResult<()> {
        debug!(endpoint = %self.endpoint, "toggling simulation pause");
        let response = self
            .client
            .put(&self.endpoint)
            .send()
            .await
            .map_err(transport_error)?;
        check_status(response).await.map(|_| ())
    }
}

fn transport_error(err: reqwest::Error) -> ApplicationError {
    ApplicationError::Transport(err.to_string())
}

async fn check_status(response: Response) -> ApplicationResult<Response> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "<unavailable>".to_string());
        Err(ApplicationError::UnexpectedStatus {
            status: status.as_u16(),
            body,
        })
    }
}

async fn parse_frame(response: Response) -> ApplicationResult<Frame> {
    let body = check_status(response)
        .await?
        .text()
        .await
        .map_err(transport_error)?;
    Ok(Frame::from_json(&body)?)
}

fn join_url(base: &str, path: &str) -> String {
    let base = base.trim_end_matches('/');
    if path.starts_with('/') {
        format!("{base}{path}")
    } else {
        format!("{base}/{path}")
    }
}
