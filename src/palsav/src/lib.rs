//! # palsav
//!
//! Palworld save structuring library.
//!
//! This library takes an already-decoded world save property tree (the JSON
//! produced by an external GVAS decoder) and turns it into normalized,
//! stable collections of players, pals, and guilds:
//! - Navigate the wrapped-value property tree defensively
//! - Extract Player/Pal/Guild entities with documented field defaults
//! - Convert internal UID and tick encodings to decimal strings and UTC
//!   timestamps
//! - Translate internal creature-type and passive-skill code names through
//!   generated reference tables
//!
//! ## Example
//!
//! ```no_run
//! use std::fs;
//!
//! # fn main() -> anyhow::Result<()> {
//! let decoded = fs::read("Level.sav.json")?;
//! let save = palsav::WorldSave::from_json(&decoded)?;
//!
//! // Wall-clock anchor for last-online timestamps: the save's mtime
//! let anchor = 1_700_000_000;
//!
//! let summary = save.structure_world(anchor);
//! println!("{} players, {} guilds", summary.players.len(), summary.guilds.len());
//!
//! fs::write("structure.json", serde_json::to_vec_pretty(&summary)?)?;
//! # Ok(())
//! # }
//! ```

pub mod codec;
pub mod reference;
pub mod structure;
pub mod tree;
pub mod world;

// Re-export commonly used items
#[doc(inline)]
pub use codec::{tick_to_timestamp, uid_to_decimal, uid_value_to_decimal};
#[doc(inline)]
pub use structure::{StructureError, WorldSave, WorldSummary};
#[doc(inline)]
pub use world::{Guild, GuildMember, Pal, Player};
