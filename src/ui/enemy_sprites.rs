//! ASCII sprite archetypes for battle enemies.

/// Returns the ASCII art for a template's sprite key. Unknown keys get
/// the blob, matching the catalog's default enemy.
pub fn sprite_for(key: &str) -> &'static str {
    match key {
        "blob" => SPRITE_BLOB,
        "humanoid" => SPRITE_HUMANOID,
        "beast" => SPRITE_BEAST,
        "construct" => SPRITE_CONSTRUCT,
        "spirit" => SPRITE_SPIRIT,
        "undead" => SPRITE_UNDEAD,
        "dragon" => SPRITE_DRAGON,
        "demon" => SPRITE_DEMON,
        _ => SPRITE_BLOB,
    }
}

pub const SPRITE_BLOB: &str = r"
    ╭──────╮
   ╱ ●    ● ╲
  │    ──    │
   ╲________╱
  ~~~~~~~~~~~~";

pub const SPRITE_HUMANOID: &str = r"
     ╭────╮
     │● ●│
     ╰─┬─╯
    ╱──┴──╲
    │ ▒▒▒ │
    ╱╲   ╱╲";

pub const SPRITE_BEAST: &str = r"
   ╱╲    ╱╲
  ╱  ╲__╱  ╲
  │ ●    ● │
  │  ▼▼▼▼  │
   ╲______╱";

pub const SPRITE_CONSTRUCT: &str = r"
   ┌──────┐
   │ ■  ■ │
   ├──────┤
   │▓▓▓▓▓▓│
   └┐    ┌┘";

pub const SPRITE_SPIRIT: &str = r"
    ✦ ╭──╮ ✦
     ╱ ◇◇ ╲
    │  ～  │
     ╲    ╱
      ╵╲╱╵";

pub const SPRITE_UNDEAD: &str = r"
    ╭▒▒▒▒╮
    │ ×  × │
    │  ──  │
    ╰┬┬┬┬┬╯
     ││││││";

pub const SPRITE_DRAGON: &str = r"
   ╱╲______╱╲
  ╱ ●      ● ╲
  ╲  ▼▼▼▼▼▼  ╱
 ╱╱ ════════ ╲╲
 ▲▲          ▲▲";

pub const SPRITE_DEMON: &str = r"
  ╲╲        ╱╱
   ╲▲──────▲╱
   │ ◆    ◆ │
   │  ▼▼▼▼  │
   ╲ ══════ ╱
    ╲______╱";

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enemies::data;

    #[test]
    fn test_all_catalog_sprites_resolve() {
        // Every template sprite key must map to real art, not the fallback
        for template in [
            data::SLIME,
            data::GOBLIN,
            data::WOLF,
            data::BANDIT,
            data::GOLEM,
            data::ICE_SPIRIT,
            data::SANDWORM,
            data::DESERT_BANDIT,
            data::MUMMY,
            data::DARK_KNIGHT,
            data::DRAGON,
            data::DARK_LORD,
        ] {
            assert!(!sprite_for(template.sprite).is_empty());
        }
    }

    #[test]
    fn test_unknown_key_falls_back_to_blob() {
        assert_eq!(sprite_for("kraken"), SPRITE_BLOB);
    }
}
