use std::io;
use std::time::{Duration, Instant};

use chrono::Utc;
use crossterm::event::{self, Event};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::{backend::CrosstermBackend, Terminal};

use quizquest::battle::{BattleSession, RespawnPolicy, SessionOutcome};
use quizquest::build_info;
use quizquest::constants::{AUTOSAVE_INTERVAL_SECONDS, QUIZ_SET_SIZE, TICK_INTERVAL_MS};
use quizquest::enemies::enemies_for_location;
use quizquest::game_state::{GameState, GameStateUpdate};
use quizquest::locations::{get_location, Location};
use quizquest::quiz::draw_random;
use quizquest::save_manager::SaveManager;
use quizquest::ui::battle_scene::{BattleEvent, BattleScene};
use quizquest::ui::map_scene::{MapAction, MapScene};

enum Screen {
    Map,
    Battle,
}

fn main() -> io::Result<()> {
    // Handle CLI arguments
    let args: Vec<String> = std::env::args().collect();

    if args.len() > 1 {
        match args[1].as_str() {
            "--version" | "-v" => {
                println!(
                    "quizquest {} ({})",
                    build_info::BUILD_DATE,
                    build_info::BUILD_COMMIT
                );
                std::process::exit(0);
            }
            "--help" | "-h" => {
                println!("QuizQuest - Terminal Quiz-Battle RPG\n");
                println!("Usage: quizquest [command]\n");
                println!("Commands:");
                println!("  --version  Show version information");
                println!("  --help     Show this help message");
                std::process::exit(0);
            }
            other => {
                eprintln!("Unknown command: {}", other);
                eprintln!("Run 'quizquest --help' for usage.");
                std::process::exit(1);
            }
        }
    }

    let save_manager = SaveManager::new()?;
    let mut state = if save_manager.save_exists() {
        match save_manager.load() {
            Ok(loaded) => loaded,
            Err(e) => {
                eprintln!("Could not load save: {}", e);
                eprintln!("Starting a new game.");
                GameState::new(Utc::now().timestamp())
            }
        }
    } else {
        GameState::new(Utc::now().timestamp())
    };

    // A battle flag left set means the last session never completed
    // (crash or force-quit). Sessions are not persisted, so clear it.
    if state.battle_in_progress {
        state.battle_in_progress = false;
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, &mut state, &save_manager);

    // Restore terminal
    disable_raw_mode()?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;

    result
}

fn run(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    state: &mut GameState,
    save_manager: &SaveManager,
) -> io::Result<()> {
    let mut rng = rand::thread_rng();
    let mut current_screen = Screen::Map;
    let mut map_scene = MapScene::new();
    let mut battle_scene: Option<BattleScene> = None;

    let base_play_time = state.play_time_seconds;
    let started_at = Instant::now();
    let mut last_autosave = Instant::now();

    loop {
        match current_screen {
            Screen::Map => {
                terminal.draw(|f| {
                    let area = f.size();
                    map_scene.draw(f, area, state);
                })?;

                if event::poll(Duration::from_millis(TICK_INTERVAL_MS))? {
                    if let Event::Key(key_event) = event::read()? {
                        match map_scene.handle_key(key_event.code, state) {
                            MapAction::Quit => break,
                            MapAction::Rest => {
                                state.rest();
                                map_scene.status =
                                    Some("You rest and recover fully.".to_string());
                            }
                            MapAction::Explore(location) => {
                                match launch_encounter(location, state, &mut rng) {
                                    Ok(scene) => {
                                        state.merge(GameStateUpdate {
                                            battle_in_progress: Some(true),
                                            current_location: Some(location.id.to_string()),
                                            ..Default::default()
                                        });
                                        battle_scene = Some(scene);
                                        current_screen = Screen::Battle;
                                    }
                                    Err(message) => {
                                        map_scene.status = Some(message);
                                    }
                                }
                            }
                            MapAction::None => {}
                        }
                    }
                }
            }
            Screen::Battle => {
                let scene = match battle_scene.as_mut() {
                    Some(scene) => scene,
                    None => {
                        current_screen = Screen::Map;
                        continue;
                    }
                };

                terminal.draw(|f| {
                    let area = f.size();
                    scene.draw(f, area);
                })?;

                let mut battle_event = BattleEvent::None;
                if event::poll(Duration::from_millis(TICK_INTERVAL_MS))? {
                    if let Event::Key(key_event) = event::read()? {
                        battle_event = scene.handle_key(key_event.code, &mut rng);
                    }
                }
                if matches!(battle_event, BattleEvent::None) {
                    battle_event = scene.tick(&mut rng);
                }

                match battle_event {
                    BattleEvent::None => {}
                    BattleEvent::Abandoned => {
                        // Dropping the scene drops the session; no
                        // summary was collected, so no reward.
                        battle_scene = None;
                        state.merge(GameStateUpdate {
                            battle_in_progress: Some(false),
                            ..Default::default()
                        });
                        map_scene.status = Some("You fled the battle.".to_string());
                        current_screen = Screen::Map;
                    }
                    BattleEvent::Finished(summary) => {
                        let location = get_location(&state.current_location);
                        state.apply_vitals(summary.final_vitals);
                        let mut update = GameStateUpdate {
                            battle_in_progress: Some(false),
                            ..Default::default()
                        };
                        if summary.outcome == SessionOutcome::Victory {
                            if let Some(location) = location {
                                update.exp_gained = Some(location.reward.exp);
                                update.gold_gained = Some(location.reward.gold);
                            }
                        }
                        state.merge(update);

                        map_scene.status = Some(match summary.outcome {
                            SessionOutcome::Victory => format!(
                                "Victory! {} enemies defeated in {} turns.",
                                summary.enemies_defeated, summary.turns_taken
                            ),
                            SessionOutcome::Defeat => {
                                "Defeated... you barely crawl back to safety.".to_string()
                            }
                        });

                        battle_scene = None;
                        current_screen = Screen::Map;
                        if let Err(e) = save_game(state, save_manager, base_play_time, started_at)
                        {
                            map_scene.status = Some(format!("Save failed: {}", e));
                        }
                    }
                }
            }
        }

        if last_autosave.elapsed() >= Duration::from_secs(AUTOSAVE_INTERVAL_SECONDS) {
            if let Err(e) = save_game(state, save_manager, base_play_time, started_at) {
                map_scene.status = Some(format!("Autosave failed: {}", e));
            }
            last_autosave = Instant::now();
        }
    }

    // Final save on quit
    if let Err(e) = save_game(state, save_manager, base_play_time, started_at) {
        eprintln!("Warning: could not save on exit: {}", e);
    }
    Ok(())
}

/// Builds a session from a battle location's configuration. Errors are
/// returned as display text for the map status line.
fn launch_encounter(
    location: &'static Location,
    state: &GameState,
    rng: &mut impl rand::Rng,
) -> Result<BattleScene, String> {
    let enemy_pool = enemies_for_location(location.id).to_vec();
    let quiz_pool = draw_random(location.quiz_category, QUIZ_SET_SIZE, rng)
        .map_err(|e| e.to_string())?;

    let session = BattleSession::start(
        enemy_pool,
        quiz_pool,
        location.enemy_quota,
        state.vitals(),
        RespawnPolicy::FreshDraw,
        rng,
    )
    .map_err(|e| e.to_string())?;

    Ok(BattleScene::new(session, location))
}

fn save_game(
    state: &mut GameState,
    save_manager: &SaveManager,
    base_play_time: u64,
    started_at: Instant,
) -> io::Result<()> {
    state.play_time_seconds = base_play_time + started_at.elapsed().as_secs();
    state.last_save_time = Utc::now().timestamp();
    save_manager.save(state)
}
