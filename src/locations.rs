//! World-map location definitions.

use crate::constants::DEFAULT_ENEMY_QUOTA;

/// What happens when the player explores a location.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocationType {
    /// No encounters; visiting rests the player.
    Safe,
    /// Quiz-battle encounter against the location's enemy pool.
    Dungeon,
    /// Final encounter; same mechanics, harder pool.
    Boss,
}

/// Fixed reward for clearing one encounter at a location.
///
/// Rewards are a property of the encounter configuration; the battle
/// engine itself never touches them.
#[derive(Debug, Clone, Copy)]
pub struct EncounterReward {
    pub exp: u64,
    pub gold: u64,
}

/// One location on the world map.
#[derive(Debug, Clone, Copy)]
pub struct Location {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub location_type: LocationType,
    /// Player level required to enter.
    pub min_level: u32,
    /// Quiz category battled here (dungeon/boss locations only).
    pub quiz_category: &'static str,
    /// Enemies to defeat for victory.
    pub enemy_quota: u32,
    pub reward: EncounterReward,
}

impl Location {
    pub fn is_battle(&self) -> bool {
        matches!(self.location_type, LocationType::Dungeon | LocationType::Boss)
    }

    pub fn unlocked_at(&self, player_level: u32) -> bool {
        player_level >= self.min_level
    }
}

/// All locations, in map display order.
pub fn get_all_locations() -> &'static [Location] {
    &[
        Location {
            id: "village",
            name: "Peaceful Village",
            description: "Where the journey begins. Kind villagers offer a place to rest.",
            location_type: LocationType::Safe,
            min_level: 1,
            quiz_category: "",
            enemy_quota: 0,
            reward: EncounterReward { exp: 0, gold: 0 },
        },
        Location {
            id: "forest",
            name: "Deep Forest",
            description: "A mysterious wood of ancient trees. Slimes and goblins roam here.",
            location_type: LocationType::Dungeon,
            min_level: 1,
            quiz_category: "brand_names",
            enemy_quota: DEFAULT_ENEMY_QUOTA,
            reward: EncounterReward { exp: 200, gold: 100 },
        },
        Location {
            id: "town",
            name: "Trade City",
            description: "A bustling city of merchants. A safe place to rest and resupply.",
            location_type: LocationType::Safe,
            min_level: 3,
            quiz_category: "",
            enemy_quota: 0,
            reward: EncounterReward { exp: 0, gold: 0 },
        },
        Location {
            id: "mountain",
            name: "Misty Mountain",
            description: "A steep path shrouded in cloud. Powerful monsters lurk above.",
            location_type: LocationType::Dungeon,
            min_level: 5,
            quiz_category: "diabetes",
            enemy_quota: DEFAULT_ENEMY_QUOTA,
            reward: EncounterReward { exp: 500, gold: 300 },
        },
        Location {
            id: "desert",
            name: "Scorching Desert",
            description: "An endless sea of sand hiding ancient ruins.",
            location_type: LocationType::Dungeon,
            min_level: 8,
            quiz_category: "anticoagulants",
            enemy_quota: DEFAULT_ENEMY_QUOTA,
            reward: EncounterReward { exp: 800, gold: 500 },
        },
        Location {
            id: "castle",
            name: "Demon Lord's Castle",
            description: "A dreadful keep swirling with dark power. The final battle awaits.",
            location_type: LocationType::Boss,
            min_level: 15,
            quiz_category: "anticoagulants",
            enemy_quota: DEFAULT_ENEMY_QUOTA,
            reward: EncounterReward {
                exp: 2000,
                gold: 2000,
            },
        },
    ]
}

/// Looks up a location by ID.
pub fn get_location(id: &str) -> Option<&'static Location> {
    get_all_locations().iter().find(|l| l.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz::catalog::get_category;

    #[test]
    fn test_get_location_known() {
        let forest = get_location("forest").expect("forest should exist");
        assert_eq!(forest.location_type, LocationType::Dungeon);
        assert!(forest.is_battle());
    }

    #[test]
    fn test_get_location_unknown() {
        assert!(get_location("moon").is_none());
    }

    #[test]
    fn test_battle_locations_have_valid_config() {
        for location in get_all_locations() {
            if location.is_battle() {
                assert!(location.enemy_quota >= 1, "{} quota", location.id);
                assert!(location.reward.exp > 0, "{} reward", location.id);
                // Every battle location's quiz category must resolve
                assert!(
                    get_category(location.quiz_category).is_ok(),
                    "{} references unknown category {}",
                    location.id,
                    location.quiz_category
                );
            }
        }
    }

    #[test]
    fn test_unlock_levels() {
        let castle = get_location("castle").unwrap();
        assert!(!castle.unlocked_at(14));
        assert!(castle.unlocked_at(15));

        let village = get_location("village").unwrap();
        assert!(village.unlocked_at(1));
    }

    #[test]
    fn test_safe_locations_are_not_battles() {
        for id in ["village", "town"] {
            let location = get_location(id).unwrap();
            assert!(!location.is_battle());
        }
    }
}
