use super::palette::remap_sentinel;
use serde::{Deserialize, Deserializer, Serialize};

/// A point entity reported by the simulation server.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Agent {
    #[serde(rename = "ID")]
    pub id: i64,
    #[serde(rename = "X")]
    pub x: f64,
    #[serde(rename = "Y")]
    pub y: f64,
}

impl Agent {
    pub fn new(id: i64, x: f64, y: f64) -> Self {
        Self { id, x, y }
    }

    /// Identifier used for color selection, with the sentinel already remapped.
    pub fn palette_id(&self) -> i64 {
        remap_sentinel(self.id)
    }

    /// Maps simulation coordinates onto the pixel grid.
    pub fn pixel_position(&self, scale: f64) -> (f32, f32) {
        ((self.x * scale) as f32, (self.y * scale) as f32)
    }
}

/// One snapshot of the simulation as served by `/simulation`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    #[serde(rename = "Num")]
    pub num: usize,
    #[serde(rename = "Agents", deserialize_with = "null_as_empty")]
    pub agents: Vec<Agent>,
    #[serde(rename = "Finished")]
    pub finished: bool,
}

impl Frame {
    pub fn new(agents: Vec<Agent>, finished: bool) -> Self {
        Self {
            num: agents.len(),
            agents,
            finished,
        }
    }

    pub fn from_json(body: &str) -> serde_json::Result<Self> {
        serde_json::from_str(body)
    }

    /// Agents that should be drawn: the first `Num` entries of the list.
    pub fn drawable_agents(&self) -> &[Agent] {
        let count = self.num.min(self.agents.len());
        &self.agents[..count]
    }

    /// True when the reported count matches the agent list.
    pub fn is_consistent(&self) -> bool {
        self.num == self.agents.len()
    }
}

// The server encodes an empty final frame's agent list as `null`.
fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<Agent>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<Agent>>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_server_frame() {
        let body = r#"{"Agents":[{"ID":-1,"X":1,"Y":1},{"ID":3,"X":2.5,"Y":2}],"Num":2,"Finished":false}"#;
        let frame = Frame::from_json(body).unwrap();

        assert_eq!(frame.num, 2);
        assert!(!frame.finished);
        assert_eq!(frame.agents[0], Agent::new(-1, 1.0, 1.0));
        assert_eq!(frame.agents[1].x, 2.5);
    }

    #[test]
    fn null_agent_list_decodes_as_empty() {
        let frame = Frame::from_json(r#"{"Agents":null,"Num":0,"Finished":true}"#).unwrap();
        assert!(frame.agents.is_empty());
        assert!(frame.finished);
    }

    #[test]
    fn missing_fields_are_rejected() {
        assert!(Frame::from_json(r#"{"Agents":[],"Num":0}"#).is_err());
        assert!(Frame::from_json(r#"{"Num":0,"Finished":false}"#).is_err());
        assert!(Frame::from_json(r#"{"Agents":[{"ID":1,"X":1}],"Num":1,"Finished":false}"#).is_err());
    }

    #[test]
    fn drawable_agents_respects_num() {
        let mut frame = Frame::new(vec![Agent::new(1, 0.0, 0.0), Agent::new(2, 1.0, 1.0)], false);
        frame.num = 1;
        assert_eq!(frame.drawable_agents().len(), 1);
        assert!(!frame.is_consistent());

        frame.num = 5;
        assert_eq!(frame.drawable_agents().len(), 2);
    }

    #[test]
    fn palette_id_does_not_mutate_agent() {
        let agent = Agent::new(-1, 3.0, 4.0);
        assert_eq!(agent.palette_id(), 0);
        assert_eq!(agent.id, -1);
        assert_eq!(agent.pixel_position(5.0), (15.0, 20.0));
    }
}
