use crate::common::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};

/// Environment dynamics the server applies to the world.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum WorldDynamics {
    #[default]
    Static,
    Seasonal,
    Extreme,
}

/// How dyadic social strengths evolve between bonded agents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum DsiMode {
    #[default]
    Fixed,
    Variable,
}

/// Parameters sent once with the startup request.
///
/// Serializes with the server's field names; deserialization also accepts
/// snake_case keys so the same type can live in `config.toml`. Missing keys
/// fall back to the defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    #[serde(rename = "NumAgents", alias = "num_agents")]
    pub num_agents: u32,
    #[serde(rename = "World", alias = "world")]
    pub world: WorldDynamics,
    /// Bracketed, comma separated agent ids, e.g. `"[1,2]"`.
    #[serde(rename = "BondedAgents", alias = "bonded_agents")]
    pub bonded_agents: String,
    #[serde(rename = "DSImode", alias = "dsi_mode")]
    pub dsi_mode: DsiMode,
}

impl SessionConfig {
    /// Parses the bonded agent list the way the server does: brackets are
    /// stripped, the rest is split on commas and every part must be a bare
    /// integer. Whitespace is not tolerated. `"[]"` and `""` yield no ids.
    pub fn bonded_agent_ids(&self) -> DomainResult<Vec<u32>> {
        let inner = self.bonded_agents.replace(|c: char| c == '[' || c == ']', "");
        if inner.is_empty() {
            return Ok(Vec::new());
        }
        inner
            .split(',')
            .map(|part| {
                if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
                    return Err(DomainError::InvalidSessionConfig {
                        reason: format!("bonded agent id '{}' is not a bare integer", part),
                    });
                }
                part.parse::<u32>().map_err(|e| DomainError::InvalidSessionConfig {
                    reason: format!("bonded agent id '{}' is not an integer: {}", part, e),
                })
            })
            .collect()
    }

    /// Rejects configurations the simulation server would abort on.
    pub fn validate(&self) -> DomainResult<()> {
        if self.num_agents == 0 {
            return Err(DomainError::InvalidSessionConfig {
                reason: "at least one agent is required".to_string(),
            });
        }

        let bonded = self.bonded_agent_ids()?;
        for (i, id) in bonded.iter().enumerate() {
            if *id < 1 || *id > self.num_agents {
                return Err(DomainError::InvalidSessionConfig {
                    reason: format!("bonded agent id {} outside 1..={}", id, self.num_agents),
                });
            }
            if bonded[..i].contains(id) {
                return Err(DomainError::InvalidSessionConfig {
                    reason: format!("bonded agent id {} listed twice", id),
                });
            }
        }
        Ok(())
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            num_agents: 6,
            world: WorldDynamics::Static,
            bonded_agents: "[]".to_string(),
            dsi_mode: DsiMode::Fixed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_serializes_to_server_payload() {
        let json = serde_json::to_value(SessionConfig::default()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "NumAgents": 6,
                "World": "Static",
                "BondedAgents": "[]",
                "DSImode": "Fixed"
            })
        );
    }

    #[test]
    fn accepts_snake_case_keys() {
        let cfg: SessionConfig = toml::from_str(
            r#"
            num_agents = 4
            world = "Seasonal"
            bonded_agents = "[1,3]"
            dsi_mode = "Variable"
            "#,
        )
        .unwrap();

        assert_eq!(cfg.num_agents, 4);
        assert_eq!(cfg.world, WorldDynamics::Seasonal);
        assert_eq!(cfg.bonded_agent_ids().unwrap(), vec![1, 3]);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn rejects_out_of_range_and_duplicate_bonds() {
        let mut cfg = SessionConfig {
            bonded_agents: "[1,7]".to_string(),
            ..SessionConfig::default()
        };
        assert!(matches!(cfg.validate(), Err(DomainError::InvalidSessionConfig { .. })));

        cfg.bonded_agents = "[2,2]".to_string();
        assert!(cfg.validate().is_err());

        cfg.bonded_agents = "[0]".to_string();
        assert!(cfg.validate().is_err());

        cfg.bonded_agents = "[a]".to_string();
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn rejects_whitespace_in_bonded_list() {
        for bonded in ["[1, 3]", "[ 1,3]", "[1,3 ]", "[ ]", "[1,,3]", "[+1]"] {
            let cfg = SessionConfig {
                bonded_agents: bonded.to_string(),
                ..SessionConfig::default()
            };
            assert!(
                matches!(cfg.validate(), Err(DomainError::InvalidSessionConfig { .. })),
                "{} should be rejected",
                bonded
            );
        }

        let cfg = SessionConfig {
            bonded_agents: "[1,3]".to_string(),
            ..SessionConfig::default()
        };
        assert_eq!(cfg.bonded_agent_ids().unwrap(), vec![1, 3]);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn partial_table_keeps_defaults() {
        let cfg: SessionConfig = toml::from_str("num_agents = 4").unwrap();
        assert_eq!(cfg.num_agents, 4);
        assert_eq!(cfg.world, WorldDynamics::Static);
        assert_eq!(cfg.bonded_agents, "[]");
        assert_eq!(cfg.dsi_mode, DsiMode::Fixed);
    }

    #[test]
    fn rejects_unknown_world() {
        let result: Result<SessionConfig, _> = serde_json::from_str(
            r#"{"NumAgents":6,"World":"Stormy","BondedAgents":"[]","DSImode":"Fixed"}"#,
        );
        assert!(result.is_err());
    }
}
