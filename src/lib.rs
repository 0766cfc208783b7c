//! QuizQuest - Terminal Quiz-Battle RPG Library
//!
//! This module exposes the game logic for testing and external use.

// Allow dead code in library - some functions are only used by the binary
#![allow(dead_code)]

pub mod battle;
pub mod build_info;
pub mod constants;
pub mod enemies;
pub mod game_state;
pub mod locations;
pub mod quiz;
pub mod save_manager;
pub mod ui;
