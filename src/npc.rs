//! Table-driven NPC generation.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::character::Stats;

const NAMES: &[&str] = &[
    "Dex", "Mara", "Rogue", "Silas", "Yuki", "Brick", "Nadia", "Cole", "Ember", "Vash", "Tessa",
    "Jax", "Luna", "Orin", "Pike", "Wren",
];

const ROLES: &[&str] = &[
    "Solo",
    "Netrunner",
    "Fixer",
    "Tech",
    "Medtech",
    "Nomad",
    "Exec",
    "Lawman",
    "Media",
    "Rockerboy",
];

const QUIRKS: &[&str] = &[
    "owes a dangerous debt",
    "never removes their gloves",
    "collects pre-war vinyl",
    "speaks in borrowed slogans",
    "trusts no one with implants",
    "keeps a list of names",
    "always sits facing the door",
    "quotes dead poets",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Npc {
    pub name: String,
    pub role: String,
    pub quirk: String,
    pub stats: Stats,
}

/// Sample a fresh NPC from the tables. Stats land in 2..=8 so generated
/// characters stay in the same band as hand-made ones.
pub fn generate(rng: &mut impl Rng) -> Npc {
    let mut stat = || rng.gen_range(2..=8u8);
    let stats = Stats {
        intelligence: stat(),
        reflexes: stat(),
        dexterity: stat(),
        technique: stat(),
        cool: stat(),
        willpower: stat(),
        luck: stat(),
        movement: stat(),
        body: stat(),
        empathy: stat(),
    };
    Npc {
        name: NAMES[rng.gen_range(0..NAMES.len())].to_string(),
        role: ROLES[rng.gen_range(0..ROLES.len())].to_string(),
        quirk: QUIRKS[rng.gen_range(0..QUIRKS.len())].to_string(),
        stats,
    }
}
