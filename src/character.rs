//! Player/NPC character records and their CRUD store.
//!
//! The only relational constraint is id uniqueness, which the store's
//! allocator owns. Hit points derive from BODY (`10 + BODY * 5`) and are
//! recomputed whenever the stat changes; current HP clamps to the new
//! maximum.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CharacterId(pub u32);

impl fmt::Display for CharacterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "character-{}", self.0)
    }
}

/// The ten core stats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stats {
    pub intelligence: u8,
    pub reflexes: u8,
    pub dexterity: u8,
    pub technique: u8,
    pub cool: u8,
    pub willpower: u8,
    pub luck: u8,
    pub movement: u8,
    pub body: u8,
    pub empathy: u8,
}

impl Default for Stats {
    fn default() -> Self {
        Self {
            intelligence: 5,
            reflexes: 5,
            dexterity: 5,
            technique: 5,
            cool: 5,
            willpower: 5,
            luck: 5,
            movement: 5,
            body: 5,
            empathy: 5,
        }
    }
}

impl Stats {
    /// Label/value pairs in sheet order.
    pub fn entries(&self) -> [(&'static str, u8); 10] {
        [
            ("INT", self.intelligence),
            ("REF", self.reflexes),
            ("DEX", self.dexterity),
            ("TECH", self.technique),
            ("COOL", self.cool),
            ("WILL", self.willpower),
            ("LUCK", self.luck),
            ("MOVE", self.movement),
            ("BODY", self.body),
            ("EMP", self.empathy),
        ]
    }
}

/// The six tracked skills.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skills {
    pub athletics: u8,
    pub brawling: u8,
    pub education: u8,
    pub evasion: u8,
    pub perception: u8,
    pub persuasion: u8,
}

impl Skills {
    pub fn entries(&self) -> [(&'static str, u8); 6] {
        [
            ("Athletics", self.athletics),
            ("Brawling", self.brawling),
            ("Education", self.education),
            ("Evasion", self.evasion),
            ("Perception", self.perception),
            ("Persuasion", self.persuasion),
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hp {
    pub current: u16,
    pub max: u16,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Armor {
    pub head: u8,
    pub body: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Weapon {
    pub name: String,
    pub damage: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Combat {
    pub hp: Hp,
    pub armor: Armor,
    #[serde(default)]
    pub weapons: Vec<Weapon>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Character {
    pub id: CharacterId,
    pub name: String,
    pub role: String,
    pub stats: Stats,
    pub combat: Combat,
    pub skills: Skills,
    #[serde(default)]
    pub notes: String,
}

pub fn derived_hp(body: u8) -> u16 {
    10 + body as u16 * 5
}

impl Character {
    pub fn new(id: CharacterId, name: impl Into<String>, role: impl Into<String>) -> Self {
        let stats = Stats::default();
        let max = derived_hp(stats.body);
        Self {
            id,
            name: name.into(),
            role: role.into(),
            stats,
            combat: Combat {
                hp: Hp { current: max, max },
                armor: Armor::default(),
                weapons: Vec::new(),
            },
            skills: Skills::default(),
            notes: String::new(),
        }
    }

    /// Update BODY and recompute hit points. Current HP is clamped to the
    /// new maximum.
    pub fn set_body(&mut self, body: u8) {
        self.stats.body = body;
        let max = derived_hp(body);
        self.combat.hp.max = max;
        self.combat.hp.current = self.combat.hp.current.min(max);
    }
}

/// CRUD store for characters, persisted wholesale as one JSON document.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct CharacterStore {
    characters: Vec<Character>,
    next_id: u32,
}

impl CharacterStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, name: impl Into<String>, role: impl Into<String>) -> CharacterId {
        let id = CharacterId(self.next_id);
        self.next_id += 1;
        self.characters.push(Character::new(id, name, role));
        tracing::debug!(character = %id, "added character");
        id
    }

    pub fn remove(&mut self, id: CharacterId) -> Result<Character> {
        let idx = self
            .characters
            .iter()
            .position(|c| c.id == id)
            .ok_or(Error::UnknownCharacter(id))?;
        Ok(self.characters.remove(idx))
    }

    pub fn get(&self, id: CharacterId) -> Option<&Character> {
        self.characters.iter().find(|c| c.id == id)
    }

    pub fn get_mut(&mut self, id: CharacterId) -> Option<&mut Character> {
        self.characters.iter_mut().find(|c| c.id == id)
    }

    pub fn len(&self) -> usize {
        self.characters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.characters.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Character> {
        self.characters.iter()
    }

    /// Id following `current` in insertion order, wrapping. `None` when the
    /// store is empty.
    pub fn next_after(&self, current: Option<CharacterId>) -> Option<CharacterId> {
        if self.characters.is_empty() {
            return None;
        }
        let idx = current
            .and_then(|id| self.characters.iter().position(|c| c.id == id))
            .map(|idx| (idx + 1) % self.characters.len())
            .unwrap_or(0);
        Some(self.characters[idx].id)
    }
}
