//! Structuring orchestrator: decoded tree in, ordered entity collections out.

use std::collections::HashMap;

use serde::Serialize;
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, info};

use crate::tree;
use crate::world::{Guild, Pal, Player};

/// Group records with this type tag are guilds.
const GUILD_GROUP_TYPE: &str = "EPalGroupType::Guild";

#[derive(Error, Debug)]
pub enum StructureError {
    #[error("Failed to parse decoded save JSON: {0}")]
    JsonParse(#[from] serde_json::Error),
}

/// The `{"players": [...], "guilds": [...]}` output document.
#[derive(Debug, Serialize)]
pub struct WorldSummary {
    pub players: Vec<Player>,
    pub guilds: Vec<Guild>,
}

/// A decoded world save with structuring capabilities.
///
/// Holds the property tree produced by the external GVAS decoder. All
/// structuring runs over the in-memory tree; entities built during one call
/// are owned exclusively by that call.
pub struct WorldSave {
    data: Value,
}

impl WorldSave {
    /// Parse a decoded save tree from its JSON serialization.
    ///
    /// This is the only fatal path in the library: corrupt input aborts,
    /// missing subtrees later just yield empty collections.
    pub fn from_json(bytes: &[u8]) -> Result<Self, StructureError> {
        let data = serde_json::from_slice(bytes)?;
        Ok(WorldSave { data })
    }

    /// Wrap an already-parsed tree.
    pub fn from_value(data: Value) -> Self {
        WorldSave { data }
    }

    fn world_data(&self) -> Option<&Value> {
        tree::value_of(&self.data, "worldSaveData")
    }

    /// The save's embedded reference tick, if present.
    pub fn reference_ticks(&self) -> Option<i64> {
        let game_time = tree::value_of(self.world_data()?, "GameTimeSaveData")?;
        tree::int_of(game_time, "RealDateTimeTicks")
    }

    /// Structure all players with their owned pals, sorted descending by
    /// level (stable, ties keep encounter order).
    pub fn structure_players(&self) -> Vec<Player> {
        info!("structuring players");
        let records = match self
            .world_data()
            .and_then(|world| tree::values_of(world, "CharacterSaveParameterMap"))
        {
            Some(records) => records,
            None => return Vec::new(),
        };

        let mut players: Vec<Player> = Vec::new();
        let mut pals: Vec<Pal> = Vec::new();

        for record in records {
            let data = match save_parameter(record) {
                Some(data) => data,
                // Neither a player nor a pal record shape: skip silently
                None => continue,
            };
            if tree::bool_of(data, "IsPlayer").unwrap_or(false) {
                let uid = record
                    .get("key")
                    .and_then(|key| key.get("PlayerUId"))
                    .and_then(|key| key.get("value"))
                    .unwrap_or(&Value::Null);
                players.push(Player::from_record(uid, data));
            } else if let Some(pal) = Pal::from_record(data) {
                pals.push(pal);
            }
        }

        // Linear owner join: decimal uid -> player index, first match wins.
        // Pals with no resolvable owner are dropped.
        let mut by_uid: HashMap<String, usize> = HashMap::with_capacity(players.len());
        for (index, player) in players.iter().enumerate() {
            by_uid.entry(player.player_uid.clone()).or_insert(index);
        }
        let pal_count = pals.len();
        for pal in pals {
            if let Some(&index) = by_uid.get(&pal.owner) {
                players[index].pals.push(pal);
            }
        }
        debug!(
            players = players.len(),
            pals = pal_count,
            "character records structured"
        );

        players.sort_by(|a, b| b.level.cmp(&a.level));
        players
    }

    /// Structure all guilds, sorted descending by base camp level (stable).
    ///
    /// `anchor_secs` is the wall-clock anchor for last-online timestamps,
    /// normally the save file's modification time.
    pub fn structure_guilds(&self, anchor_secs: i64) -> Vec<Guild> {
        info!("structuring guilds");
        let groups = match self
            .world_data()
            .and_then(|world| tree::values_of(world, "GroupSaveDataMap"))
        {
            Some(groups) => groups,
            None => return Vec::new(),
        };

        let reference_ticks = self.reference_ticks();

        let mut guilds: Vec<Guild> = groups
            .iter()
            .filter_map(|group| group.get("value"))
            .filter(|value| tree::enum_of(value, "GroupType") == Some(GUILD_GROUP_TYPE))
            .filter_map(|value| tree::value_of(value, "RawData"))
            .map(|raw| Guild::from_raw(raw, reference_ticks, anchor_secs))
            .collect();

        guilds.sort_by(|a, b| b.base_camp_level.cmp(&a.base_camp_level));
        guilds
    }

    /// Structure the whole save into the output document shape.
    pub fn structure_world(&self, anchor_secs: i64) -> WorldSummary {
        WorldSummary {
            players: self.structure_players(),
            guilds: self.structure_guilds(anchor_secs),
        }
    }
}

/// Dig out the `SaveParameter` subtree of one character record.
fn save_parameter(record: &Value) -> Option<&Value> {
    record
        .get("value")?
        .get("RawData")?
        .get("value")?
        .get("object")?
        .get("SaveParameter")?
        .get("value")
}
