pub mod data;

pub use data::{enemies_for_location, random_enemy_for_location, EnemyTemplate};

/// A live enemy in battle, cloned from an [`EnemyTemplate`].
///
/// Battle sessions are ephemeral, so instances are never persisted.
#[derive(Debug, Clone)]
pub struct EnemyInstance {
    pub id: &'static str,
    pub name: &'static str,
    pub current_hp: u32,
    pub max_hp: u32,
    pub sprite: &'static str,
}

impl EnemyInstance {
    pub fn is_alive(&self) -> bool {
        self.current_hp > 0
    }

    pub fn take_damage(&mut self, amount: u32) {
        self.current_hp = self.current_hp.saturating_sub(amount);
    }

    pub fn reset_hp(&mut self) {
        self.current_hp = self.max_hp;
    }

    pub fn hp_ratio(&self) -> f64 {
        self.current_hp as f64 / self.max_hp as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_take_damage_saturates_at_zero() {
        let mut enemy = data::GOBLIN.spawn();
        enemy.take_damage(enemy.max_hp + 500);
        assert_eq!(enemy.current_hp, 0);
        assert!(!enemy.is_alive());
    }

    #[test]
    fn test_reset_hp() {
        let mut enemy = data::WOLF.spawn();
        enemy.take_damage(25);
        enemy.reset_hp();
        assert_eq!(enemy.current_hp, enemy.max_hp);
    }
}
