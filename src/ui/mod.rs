pub mod battle_scene;
pub mod enemy_sprites;
pub mod map_scene;
