//! Creature type display names, keyed by uppercased internal code name.
//!
//! Generated by `palsav generate --table pal-type`. Do not edit by hand.
//!
//! Data sources:
//! - https://github.com/EternalWraith/PalEdit/blob/main/PalInfo.py
//! - https://github.com/EternalWraith/PalEdit/blob/main/palworld_pal_edit/resources/data/pals.json

use phf::phf_map;
use tracing::warn;

/// Uppercased internal code name -> display name.
pub static PAL_TYPES: phf::Map<&'static str, &'static str> = phf_map! {
    "UNKNOWN" => "Unknown",
    "NONE" => "None",
    "ALPACA" => "Melpaca",
    "AMATERASUWOLF" => "Kitsun",
    "ANUBIS" => "Anubis",
    "BAPHOMET" => "Incineram",
    "BAPHOMET_DARK" => "Incineram Noct",
    "BASTET" => "Mau",
    "BASTET_ICE" => "Mau Cryst",
    "BERRYGOAT" => "Caprity",
    "BIRDDRAGON" => "Vanwyrm",
    "BIRDDRAGON_ICE" => "Vanwyrm Cryst",
    "BLACKCENTAUR" => "Necromus",
    "BLACKGRIFFON" => "Shadowbeak",
    "BLACKMETALDRAGON" => "Astegon",
    "BLUEDRAGON" => "Azurobe",
    "BLUEPLATYPUS" => "Fuack",
    "BOAR" => "Rushoar",
    "CAPTAINPENGUIN" => "Penking",
    "CARBUNCLO" => "Lifmunk",
    "CATBAT" => "Tombat",
    "CATMAGE" => "Katress",
    "CATVAMPIRE" => "Felbat",
    "CHICKENPAL" => "Chikipi",
    "COLORFULBIRD" => "Tocotoco",
    "COWPAL" => "Mozzarina",
    "CUTEFOX" => "Vixy",
    "DARKCROW" => "Cawgnito",
    "DARKSCORPION" => "Menasting",
    "DEER" => "Eikthyrdeer",
    "DEER_GROUND" => "Eikthyrdeer Terra",
    "DREAMDEMON" => "Daedream",
    "DRILLGAME" => "Digtoise",
    "EAGLE" => "Galeclaw",
    "ELECCAT" => "Sparkit",
    "ELECPANDA" => "Grizzbolt",
    "FAIRYDRAGON" => "Elphidran",
    "FAIRYDRAGON_WATER" => "Elphidran Aqua",
    "FENGYUNDEEPER" => "Fenglope",
    "FIREKIRIN" => "Pyrin",
    "FIREKIRIN_DARK" => "Pyrin Noct",
    "FLAMEBAMBI" => "Rooby",
    "FLOWERDOLL" => "Petallia",
    "FLOWERRABBIT" => "Flopie",
    "FOXMAGE" => "Wixen",
    "GARM" => "Direhowl",
    "GHOSTBEAST" => "Maraith",
    "GORILLA" => "Gorirat",
    "GRASSMAMMOTH" => "Mammorest",
    "GRASSMAMMOTH_ICE" => "Mammorest Cryst",
    "GRASSPANDA" => "Mossanda",
    "GRASSPANDA_ELECTRIC" => "Mossanda Lux",
    "HAWKBIRD" => "Nitewing",
    "HEDGEHOG" => "Jolthog",
    "HEDGEHOG_ICE" => "Jolthog Cryst",
    "HERCULESBEETLE" => "Warsect",
    "HORUS" => "Faleris",
    "ICEHORSE" => "Frostallion",
    "ICEHORSE_DARK" => "Frostallion Noct",
    "JETDRAGON" => "Jetragon",
    "KINGALPACA" => "Kingpaca",
    "KINGALPACA_ICE" => "Ice Kingpaca",
    "KIRIN" => "Univolt",
    "KITSUNEBI" => "Foxparks",
    "LAZYCATFISH" => "Dumud",
    "LILYQUEEN" => "Lyleen",
    "LILYQUEEN_DARK" => "Lyleen Noct",
    "LITTLEBRIARROSE" => "Bristla",
    "LIZARDMAN" => "Leezpunk",
    "LIZARDMAN_FIRE" => "Leezpunk Ignis",
    "MANTICORE" => "Blazamut",
    "MONKEY" => "Tanzee",
    "MOPBABY" => "Swee",
    "MOPKING" => "Sweepa",
    "NAUGHTYCAT" => "Grintale",
    "NEGATIVEKOALA" => "Depresso",
    "NIGHTFOX" => "Nox",
    "PENGUIN" => "Pengullet",
    "PINKCAT" => "Cattiva",
    "PINKLIZARD" => "Lovander",
    "PLANTSLIME" => "Gumoss",
    "QUEENBEE" => "Elizabee",
    "RAIJINDAUGHTER" => "Dazzi",
    "REDARMORBIRD" => "Ragnahawk",
    "ROBINHOOD" => "Robinquill",
    "ROBINHOOD_GROUND" => "Robinquill Terra",
    "RONIN" => "Bushi",
    "SAINTCENTAUR" => "Paladius",
    "SAKURASAURUS" => "Dinossom",
    "SAKURASAURUS_WATER" => "Dinossom Lux",
    "SERPENT" => "Surfent",
    "SERPENT_GROUND" => "Surfent Terra",
    "SHEEPBALL" => "Lamball",
    "SKYDRAGON" => "Quivern",
    "SOLDIERBEE" => "Beegarde",
    "SUZAKU" => "Suzaku",
    "SUZAKU_WATER" => "Suzaku Aqua",
    "SWEETSSHEEP" => "Woolipop",
    "THUNDERBIRD" => "Beakon",
    "THUNDERDOG" => "Rayhound",
    "THUNDERDRAGONMAN" => "Orserk",
    "UMIHEBI" => "Jormuntide",
    "UMIHEBI_FIRE" => "Jormuntide Ignis",
    "VOLCANICMONSTER" => "Reptyro",
    "VOLCANICMONSTER_ICE" => "Ice Reptyro",
    "WEASELDRAGON" => "Chillet",
    "WHITEMOTH" => "Sibelyx",
    "WIZARDOWL" => "Hoocrates",
    "WOOLFOX" => "Cremis",
};

/// Case-insensitive lookup with raw-name fallback.
///
/// `code_upper` must already be uppercased (and boss-prefix stripped);
/// `raw_name` is the untouched upstream code returned on a miss.
pub fn resolve(code_upper: &str, raw_name: &str) -> String {
    match PAL_TYPES.get(code_upper) {
        Some(name) => (*name).to_string(),
        None => {
            warn!("pal type {} needs to be translated", raw_name);
            raw_name.to_string()
        }
    }
}
