//! World entities extracted from the decoded save tree.
//!
//! Each entity is a fixed-shape struct whose fields are declared in output
//! order; serialization follows declaration order, so the JSON stays diff
//! friendly. Every field has a documented default and extraction never
//! fails on an absent key.

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::Value;

use crate::codec::{tick_to_timestamp, uid_value_to_decimal};
use crate::reference::{pal_skills, pal_type};
use crate::tree;

/// Boss creatures carry this prefix on their internal type code.
const BOSS_PREFIX: &str = "BOSS_";

/// Tower (arena) creatures carry this prefix on their internal type code.
const TOWER_PREFIX: &str = "GYM_";

/// A player character with its owned pals.
#[derive(Debug, Serialize)]
pub struct Player {
    pub player_uid: String,
    pub nickname: String,
    pub level: i64,
    pub exp: i64,
    pub hp: i64,
    pub max_hp: i64,
    pub shield_hp: i64,
    pub shield_max_hp: i64,
    pub max_status_point: i64,
    pub status_point: BTreeMap<String, i64>,
    pub full_stomach: f64,
    pub pals: Vec<Pal>,
}

impl Player {
    /// Build a player from the `PlayerUId` key node and the character's
    /// `SaveParameter` subtree.
    pub fn from_record(uid: &Value, data: &Value) -> Self {
        let mut status_point = BTreeMap::new();
        if let Some(entries) = tree::values_of(data, "GotStatusPointList") {
            for entry in entries {
                if let (Some(name), Some(amount)) = (
                    tree::str_of(entry, "StatusName"),
                    tree::int_of(entry, "StatusPoint"),
                ) {
                    // Duplicate category names: last write wins
                    status_point.insert(name.to_string(), amount);
                }
            }
        }

        let full_stomach = tree::float_of(data, "FullStomach").unwrap_or(0.0);

        Player {
            player_uid: uid_value_to_decimal(uid),
            nickname: tree::str_of(data, "NickName").unwrap_or_default().to_string(),
            level: tree::int_of(data, "Level").unwrap_or(1),
            exp: tree::int_of(data, "Exp").unwrap_or(0),
            hp: tree::stat_of(data, "HP").unwrap_or(0),
            max_hp: tree::stat_of(data, "MaxHP").unwrap_or(0),
            shield_hp: tree::stat_of(data, "ShieldHP").unwrap_or(0),
            shield_max_hp: tree::stat_of(data, "ShieldMaxHP").unwrap_or(0),
            max_status_point: tree::stat_of(data, "MaxSP").unwrap_or(0),
            status_point,
            full_stomach: (full_stomach * 100.0).round() / 100.0,
            pals: Vec::new(),
        }
    }
}

/// A pal owned by a player.
///
/// `owner` is only used to join the pal onto its player and is not part of
/// the serialized form; ownership is expressed by nesting under [`Player`].
#[derive(Debug, Serialize)]
pub struct Pal {
    #[serde(skip)]
    pub owner: String,
    pub level: i64,
    pub exp: i64,
    pub hp: i64,
    pub max_hp: i64,
    #[serde(rename = "type")]
    pub pal_type: String,
    pub gender: String,
    pub is_lucky: bool,
    pub is_boss: bool,
    pub is_tower: bool,
    pub workspeed: f64,
    pub melee: i64,
    pub ranged: i64,
    pub defense: i64,
    pub rank: i64,
    pub skills: Vec<String>,
}

impl Pal {
    /// Build a pal from a character's `SaveParameter` subtree.
    ///
    /// Returns `None` when the record carries no `OwnerPlayerUId`; such
    /// records are wild creatures and are skipped, not an error.
    pub fn from_record(data: &Value) -> Option<Self> {
        let owner_node = tree::value_of(data, "OwnerPlayerUId")?;

        let gender = tree::enum_of(data, "Gender")
            .map(|tag| tag.rsplit("::").next().unwrap_or(tag).to_string())
            .unwrap_or_else(|| "Unknown".to_string());

        let is_lucky = tree::bool_of(data, "IsRarePal").unwrap_or(false);

        let mut is_boss = false;
        let mut is_tower = false;
        let pal_type = match tree::str_of(data, "CharacterID") {
            Some(raw_name) => {
                let mut code = raw_name.to_uppercase();
                if let Some(stripped) = code.strip_prefix(BOSS_PREFIX) {
                    // A rare pal with the boss prefix counts as lucky, not boss
                    is_boss = !is_lucky;
                    code = stripped.to_string();
                }
                is_tower = code.starts_with(TOWER_PREFIX);
                pal_type::resolve(&code, raw_name)
            }
            None => "Unknown".to_string(),
        };

        let skills = tree::values_of(data, "PassiveSkillList")
            .map(|codes| {
                codes
                    .iter()
                    .filter_map(Value::as_str)
                    .map(pal_skills::resolve)
                    .collect()
            })
            .unwrap_or_default();

        Some(Pal {
            owner: uid_value_to_decimal(owner_node),
            level: tree::int_of(data, "Level").unwrap_or(1),
            exp: tree::int_of(data, "Exp").unwrap_or(0),
            hp: tree::stat_of(data, "HP").unwrap_or(0),
            max_hp: tree::stat_of(data, "MaxHP").unwrap_or(0),
            pal_type,
            gender,
            is_lucky,
            is_boss,
            is_tower,
            workspeed: tree::float_of(data, "CraftSpeed").unwrap_or(0.0),
            melee: tree::int_of(data, "Talent_Melee").unwrap_or(0),
            ranged: tree::int_of(data, "Talent_Shot").unwrap_or(0),
            defense: tree::int_of(data, "Talent_Defense").unwrap_or(0),
            rank: tree::int_of(data, "Rank").unwrap_or(1),
            skills,
        })
    }
}

/// A guild member summary inside [`Guild`].
#[derive(Debug, Serialize)]
pub struct GuildMember {
    pub player_uid: String,
    pub nickname: String,
    pub last_online: String,
}

/// A guild with its members and owned base camps.
#[derive(Debug, Serialize)]
pub struct Guild {
    pub name: String,
    pub base_camp_level: i64,
    pub admin_player_uid: String,
    pub players: Vec<GuildMember>,
    pub base_ids: Vec<String>,
}

impl Guild {
    /// Build a guild from a group record's decoded `RawData` subtree.
    ///
    /// Unlike character records, the group raw data is already a plain
    /// mapping without `{"value": ...}` wrappers. `reference_ticks` is the
    /// save's embedded tick anchor; without it no timestamps are rendered.
    pub fn from_raw(raw: &Value, reference_ticks: Option<i64>, anchor_secs: i64) -> Self {
        let players = raw
            .get("players")
            .and_then(Value::as_array)
            .map(|members| {
                members
                    .iter()
                    .map(|member| Self::member_from_raw(member, reference_ticks, anchor_secs))
                    .collect()
            })
            .unwrap_or_default();

        let base_ids = raw
            .get("base_ids")
            .and_then(Value::as_array)
            .map(|ids| ids.iter().map(stringify).collect())
            .unwrap_or_default();

        Guild {
            name: raw
                .get("guild_name")
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string(),
            base_camp_level: raw
                .get("base_camp_level")
                .and_then(Value::as_i64)
                .unwrap_or(0),
            admin_player_uid: raw
                .get("admin_player_uid")
                .map(uid_value_to_decimal)
                .unwrap_or_default(),
            players,
            base_ids,
        }
    }

    fn member_from_raw(
        member: &Value,
        reference_ticks: Option<i64>,
        anchor_secs: i64,
    ) -> GuildMember {
        let info = member.get("player_info");
        let last_online = info
            .and_then(|i| i.get("last_online_real_time"))
            .and_then(Value::as_i64)
            .zip(reference_ticks)
            .map(|(tick, reference)| tick_to_timestamp(tick, reference, anchor_secs))
            .unwrap_or_default();

        GuildMember {
            player_uid: member
                .get("player_uid")
                .map(uid_value_to_decimal)
                .unwrap_or_default(),
            nickname: info
                .and_then(|i| i.get("player_name"))
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string(),
            last_online,
        }
    }
}

fn stringify(value: &Value) -> String {
    match value.as_str() {
        Some(s) => s.to_string(),
        None => value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_player_defaults_for_missing_fields() {
        let uid = json!("00000001-0000-0000-0000-000000000000");
        let player = Player::from_record(&uid, &json!({}));

        assert_eq!(player.player_uid, "1");
        assert_eq!(player.nickname, "");
        assert_eq!(player.level, 1);
        assert_eq!(player.exp, 0);
        assert_eq!(player.hp, 0);
        assert_eq!(player.max_hp, 0);
        assert_eq!(player.shield_hp, 0);
        assert_eq!(player.shield_max_hp, 0);
        assert_eq!(player.max_status_point, 0);
        assert!(player.status_point.is_empty());
        assert_eq!(player.full_stomach, 0.0);
        assert!(player.pals.is_empty());
    }

    #[test]
    fn test_player_full_extraction() {
        let uid = json!("0000000a-0000-0000-0000-000000000000");
        let data = json!({
            "NickName": {"value": "Ash"},
            "Level": {"value": 23},
            "Exp": {"value": 9000},
            "HP": {"value": {"Value": {"value": 54000}}},
            "MaxHP": {"value": {"Value": {"value": 54000}}},
            "ShieldHP": {"value": {"Value": {"value": 1200}}},
            "ShieldMaxHP": {"value": {"Value": {"value": 1500}}},
            "MaxSP": {"value": {"Value": {"value": 400}}},
            "GotStatusPointList": {"value": {"values": [
                {"StatusName": {"value": "HP"}, "StatusPoint": {"value": 3}},
                {"StatusName": {"value": "Weight"}, "StatusPoint": {"value": 5}},
                {"StatusName": {"value": "HP"}, "StatusPoint": {"value": 7}},
            ]}},
            "FullStomach": {"value": 87.654321},
        });

        let player = Player::from_record(&uid, &data);
        assert_eq!(player.player_uid, "10");
        assert_eq!(player.nickname, "Ash");
        assert_eq!(player.level, 23);
        assert_eq!(player.shield_max_hp, 1500);
        // Last write wins for duplicate categories
        assert_eq!(player.status_point.get("HP"), Some(&7));
        assert_eq!(player.status_point.get("Weight"), Some(&5));
        assert_eq!(player.full_stomach, 87.65);
    }

    fn owned(fields: serde_json::Value) -> serde_json::Value {
        let mut data = json!({
            "OwnerPlayerUId": {"value": "0000000a-0000-0000-0000-000000000000"},
        });
        data.as_object_mut()
            .unwrap()
            .extend(fields.as_object().unwrap().clone());
        data
    }

    #[test]
    fn test_pal_without_owner_is_skipped() {
        assert!(Pal::from_record(&json!({"Level": {"value": 3}})).is_none());
    }

    #[test]
    fn test_pal_defaults() {
        let pal = Pal::from_record(&owned(json!({}))).unwrap();
        assert_eq!(pal.owner, "10");
        assert_eq!(pal.level, 1);
        assert_eq!(pal.exp, 0);
        assert_eq!(pal.pal_type, "Unknown");
        assert_eq!(pal.gender, "Unknown");
        assert!(!pal.is_lucky);
        assert!(!pal.is_boss);
        assert!(!pal.is_tower);
        assert_eq!(pal.workspeed, 0.0);
        assert_eq!(pal.rank, 1);
        assert!(pal.skills.is_empty());
    }

    #[test]
    fn test_pal_gender_suffix() {
        let pal = Pal::from_record(&owned(json!({
            "Gender": {"value": {"value": "EPalGenderType::Female"}},
        })))
        .unwrap();
        assert_eq!(pal.gender, "Female");
    }

    #[test]
    fn test_pal_boss_prefix_sets_boss_flag() {
        let pal = Pal::from_record(&owned(json!({
            "CharacterID": {"value": "BOSS_SheepBall"},
        })))
        .unwrap();
        assert!(pal.is_boss);
        assert!(!pal.is_tower);
        assert_eq!(pal.pal_type, "Lamball");
    }

    #[test]
    fn test_rare_pal_overrides_boss_flag() {
        let pal = Pal::from_record(&owned(json!({
            "CharacterID": {"value": "BOSS_FOO"},
            "IsRarePal": {"value": true},
        })))
        .unwrap();
        assert!(pal.is_lucky);
        assert!(!pal.is_boss);
        assert!(!pal.is_tower);
        // Unknown code falls back to the raw upstream name
        assert_eq!(pal.pal_type, "BOSS_FOO");
    }

    #[test]
    fn test_pal_tower_prefix() {
        let pal = Pal::from_record(&owned(json!({
            "CharacterID": {"value": "GYM_ThunderDragonMan"},
        })))
        .unwrap();
        assert!(pal.is_tower);
        assert!(!pal.is_boss);
    }

    #[test]
    fn test_pal_skill_translation() {
        let pal = Pal::from_record(&owned(json!({
            "PassiveSkillList": {"value": {"values": ["CraftSpeed_up2", "Rare", "Bogus_Code"]}},
        })))
        .unwrap();
        assert_eq!(pal.skills, vec!["Artisan", "Lucky", "Bogus_Code"]);
    }

    #[test]
    fn test_pal_serializes_without_owner() {
        let pal = Pal::from_record(&owned(json!({}))).unwrap();
        let serialized = serde_json::to_value(&pal).unwrap();
        assert!(serialized.get("owner").is_none());
        assert!(serialized.get("type").is_some());
    }

    #[test]
    fn test_guild_extraction() {
        let raw = json!({
            "guild_name": "Night Raid",
            "base_camp_level": 12,
            "admin_player_uid": "0000000a-0000-0000-0000-000000000000",
            "players": [
                {
                    "player_uid": "0000000a-0000-0000-0000-000000000000",
                    "player_info": {
                        "player_name": "Ash",
                        "last_online_real_time": 20_000_000_i64,
                    },
                },
                {
                    "player_uid": "0000000b-0000-0000-0000-000000000000",
                    "player_info": {"player_name": "Brock"},
                },
            ],
            "base_ids": ["cafe0000-0000-0000-0000-000000000000"],
        });

        let guild = Guild::from_raw(&raw, Some(10_000_000), 1_700_000_000);
        assert_eq!(guild.name, "Night Raid");
        assert_eq!(guild.base_camp_level, 12);
        assert_eq!(guild.admin_player_uid, "10");
        assert_eq!(guild.players.len(), 2);
        assert_eq!(guild.players[0].last_online, "2023-11-14T22:13:21Z");
        // No last-online tick means no timestamp
        assert_eq!(guild.players[1].last_online, "");
        assert_eq!(guild.base_ids, vec!["cafe0000-0000-0000-0000-000000000000"]);
    }

    #[test]
    fn test_guild_without_tick_anchor_renders_no_timestamps() {
        let raw = json!({
            "guild_name": "g",
            "base_camp_level": 1,
            "admin_player_uid": "00000001-0000",
            "players": [{
                "player_uid": "00000001-0000",
                "player_info": {"player_name": "x", "last_online_real_time": 42},
            }],
            "base_ids": [],
        });
        let guild = Guild::from_raw(&raw, None, 1_700_000_000);
        assert_eq!(guild.players[0].last_online, "");
    }
}
