//! Enemy template catalog and per-location pools.

use rand::seq::SliceRandom;
use rand::Rng;

use super::EnemyInstance;

/// Immutable catalog row for one enemy kind.
///
/// Instances never share mutable state with their template; spawning
/// always clones a fresh full-HP copy.
#[derive(Debug, Clone, Copy)]
pub struct EnemyTemplate {
    pub id: &'static str,
    pub name: &'static str,
    pub max_hp: u32,
    pub level: u32,
    pub sprite: &'static str,
    pub description: &'static str,
}

impl EnemyTemplate {
    /// Clones this template into a live, full-HP enemy.
    pub fn spawn(&self) -> EnemyInstance {
        EnemyInstance {
            id: self.id,
            name: self.name,
            current_hp: self.max_hp,
            max_hp: self.max_hp,
            sprite: self.sprite,
        }
    }
}

pub const SLIME: EnemyTemplate = EnemyTemplate {
    id: "slime",
    name: "Slime",
    max_hp: 60,
    level: 1,
    sprite: "blob",
    description: "A weak forest-dwelling creature with a soft, gelatinous body.",
};

pub const GOBLIN: EnemyTemplate = EnemyTemplate {
    id: "goblin",
    name: "Goblin",
    max_hp: 80,
    level: 2,
    sprite: "humanoid",
    description: "A small humanoid of low cunning that hunts in packs.",
};

pub const WOLF: EnemyTemplate = EnemyTemplate {
    id: "wolf",
    name: "Forest Wolf",
    max_hp: 70,
    level: 2,
    sprite: "beast",
    description: "A vicious wolf of the deep woods, quick on its feet.",
};

pub const BANDIT: EnemyTemplate = EnemyTemplate {
    id: "bandit",
    name: "Bandit",
    max_hp: 90,
    level: 4,
    sprite: "humanoid",
    description: "A mountain brigand skilled with blades.",
};

pub const GOLEM: EnemyTemplate = EnemyTemplate {
    id: "golem",
    name: "Stone Golem",
    max_hp: 120,
    level: 5,
    sprite: "construct",
    description: "A humanoid shape of living rock, resistant to blows.",
};

pub const ICE_SPIRIT: EnemyTemplate = EnemyTemplate {
    id: "ice_spirit",
    name: "Ice Spirit",
    max_hp: 100,
    level: 6,
    sprite: "spirit",
    description: "A creature of frost dwelling at the mountain's peak.",
};

pub const SANDWORM: EnemyTemplate = EnemyTemplate {
    id: "sandworm",
    name: "Sandworm",
    max_hp: 150,
    level: 8,
    sprite: "beast",
    description: "A giant burrowing worm that erupts from the desert sands.",
};

pub const DESERT_BANDIT: EnemyTemplate = EnemyTemplate {
    id: "desert_bandit",
    name: "Desert Raider",
    max_hp: 120,
    level: 8,
    sprite: "humanoid",
    description: "A raider of the dunes, striking fast and vanishing.",
};

pub const MUMMY: EnemyTemplate = EnemyTemplate {
    id: "mummy",
    name: "Mummy",
    max_hp: 140,
    level: 9,
    sprite: "undead",
    description: "A cursed corpse risen from the ancient ruins.",
};

pub const DARK_KNIGHT: EnemyTemplate = EnemyTemplate {
    id: "dark_knight",
    name: "Dark Knight",
    max_hp: 180,
    level: 14,
    sprite: "humanoid",
    description: "An armored knight sworn to the demon lord.",
};

pub const DRAGON: EnemyTemplate = EnemyTemplate {
    id: "dragon",
    name: "Dragon",
    max_hp: 200,
    level: 15,
    sprite: "dragon",
    description: "A legendary fire-breathing wyrm of immense power.",
};

pub const DARK_LORD: EnemyTemplate = EnemyTemplate {
    id: "dark_lord",
    name: "Demon Lord",
    max_hp: 250,
    level: 20,
    sprite: "demon",
    description: "The evil will that seeks dominion over the world.",
};

/// Enemy pool for a location. Unknown locations fall back to the slime,
/// the documented default.
pub fn enemies_for_location(location_id: &str) -> &'static [EnemyTemplate] {
    match location_id {
        "forest" => &[SLIME, GOBLIN, WOLF],
        "mountain" => &[BANDIT, GOLEM, ICE_SPIRIT],
        "desert" => &[SANDWORM, DESERT_BANDIT, MUMMY],
        "castle" => &[DARK_LORD, DARK_KNIGHT, DRAGON],
        _ => &[SLIME],
    }
}

/// Picks one enemy uniformly from the location's pool and spawns a
/// fresh instance. Never fails; unknown locations use the default pool.
pub fn random_enemy_for_location(location_id: &str, rng: &mut impl Rng) -> EnemyInstance {
    let pool = enemies_for_location(location_id);
    pool.choose(rng).unwrap_or(&SLIME).spawn()
}
