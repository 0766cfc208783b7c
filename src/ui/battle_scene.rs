//! Battle scene: quiz prompt, answer keys, damage reveal pacing.
//!
//! The scene owns the session plus the one timer the engine leaves to
//! its host: after each resolved answer it waits the result's advance
//! delay, then either advances the turn or collects the completion.

use std::time::{Duration, Instant};

use crossterm::event::KeyCode;
use rand::Rng;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};

use crate::battle::{BattleSession, BattleSummary, TurnResult};
use crate::locations::Location;

use super::enemy_sprites::sprite_for;

/// What the main loop should do after a battle scene update.
pub enum BattleEvent {
    None,
    /// Player walked away mid-battle. No summary, no reward.
    Abandoned,
    /// Session terminated and its completion was collected.
    Finished(BattleSummary),
}

pub struct BattleScene {
    session: BattleSession,
    location: &'static Location,
    /// When to run the scheduled continuation, if one is waiting.
    advance_at: Option<Instant>,
    last_result: Option<TurnResult>,
}

impl BattleScene {
    pub fn new(session: BattleSession, location: &'static Location) -> Self {
        Self {
            session,
            location,
            advance_at: None,
            last_result: None,
        }
    }

    pub fn handle_key(&mut self, code: KeyCode, rng: &mut impl Rng) -> BattleEvent {
        match code {
            KeyCode::Esc => {
                // Once the session has ended, the reveal plays out and
                // the completion is collected; fleeing is over.
                if self.session.is_terminated() {
                    BattleEvent::None
                } else {
                    BattleEvent::Abandoned
                }
            }
            KeyCode::Char(c @ '1'..='4') => {
                let index = c as usize - '1' as usize;
                let choice = match self.session.active_quiz() {
                    Some(quiz) => quiz.options.get(index).cloned(),
                    None => None,
                };
                if let Some(choice) = choice {
                    let result = self.session.submit_answer(&choice, rng);
                    if !result.is_ignored() {
                        self.last_result = Some(result);
                        self.advance_at = Some(
                            Instant::now()
                                + Duration::from_secs_f64(result.advance_delay_seconds()),
                        );
                    }
                }
                BattleEvent::None
            }
            _ => BattleEvent::None,
        }
    }

    /// Called every tick. Fires the pending continuation once its
    /// deadline passes.
    pub fn tick(&mut self, rng: &mut impl Rng) -> BattleEvent {
        let due = matches!(self.advance_at, Some(at) if Instant::now() >= at);
        if !due {
            return BattleEvent::None;
        }
        self.advance_at = None;

        if self.session.is_terminated() {
            match self.session.take_completion() {
                Some(summary) => BattleEvent::Finished(summary),
                None => BattleEvent::None,
            }
        } else {
            self.session.advance_turn(rng);
            self.last_result = None;
            BattleEvent::None
        }
    }

    pub fn draw(&self, frame: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),  // Enemy header + progress
                Constraint::Length(3),  // Enemy HP
                Constraint::Min(6),     // Sprite + result message
                Constraint::Length(3),  // Player HP
                Constraint::Length(8),  // Quiz prompt + options
                Constraint::Length(3),  // Footer
            ])
            .split(area);

        self.draw_header(frame, chunks[0]);
        self.draw_enemy_hp(frame, chunks[1]);
        self.draw_arena(frame, chunks[2]);
        self.draw_player_hp(frame, chunks[3]);
        self.draw_quiz(frame, chunks[4]);
        self.draw_footer(frame, chunks[5]);
    }

    fn draw_header(&self, frame: &mut Frame, area: Rect) {
        let enemy = self.session.enemy();
        let header = Line::from(vec![
            Span::styled(
                enemy.name,
                Style::default()
                    .fg(Color::Red)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(format!(
                "   {} | defeated {}/{}",
                self.location.name,
                self.session.defeated_count(),
                self.session.enemy_quota()
            )),
        ]);
        let paragraph = Paragraph::new(header)
            .block(Block::default().borders(Borders::ALL))
            .alignment(Alignment::Left);
        frame.render_widget(paragraph, area);
    }

    fn draw_enemy_hp(&self, frame: &mut Frame, area: Rect) {
        let enemy = self.session.enemy();
        let gauge = Gauge::default()
            .block(Block::default().borders(Borders::ALL).title("Enemy HP"))
            .gauge_style(Style::default().fg(Color::Red))
            .ratio(enemy.hp_ratio())
            .label(format!("{}/{}", enemy.current_hp, enemy.max_hp));
        frame.render_widget(gauge, area);
    }

    fn draw_arena(&self, frame: &mut Frame, area: Rect) {
        let halves = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
            .split(area);

        let sprite = Paragraph::new(sprite_for(self.session.enemy().sprite))
            .block(Block::default().borders(Borders::ALL))
            .alignment(Alignment::Center);
        frame.render_widget(sprite, halves[0]);

        let message = match self.last_result {
            Some(TurnResult::EnemyHit { damage }) => Line::from(Span::styled(
                format!("Correct! {} damage to the enemy.", damage),
                Style::default().fg(Color::Green),
            )),
            Some(TurnResult::EnemyDefeated { damage }) => Line::from(Span::styled(
                format!("Correct! {} damage! Enemy defeated!", damage),
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            )),
            Some(TurnResult::Victory { damage }) => Line::from(Span::styled(
                format!("Correct! {} damage! VICTORY!", damage),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )),
            Some(TurnResult::PlayerHit { damage }) => Line::from(Span::styled(
                format!("Wrong! You take {} damage.", damage),
                Style::default().fg(Color::Red),
            )),
            Some(TurnResult::Defeat { damage }) => Line::from(Span::styled(
                format!("Wrong! {} damage! You collapse...", damage),
                Style::default()
                    .fg(Color::Red)
                    .add_modifier(Modifier::BOLD),
            )),
            Some(TurnResult::Ignored) | None => Line::from(""),
        };
        let paragraph = Paragraph::new(message)
            .block(Block::default().borders(Borders::ALL).title("Battle"))
            .alignment(Alignment::Center);
        frame.render_widget(paragraph, halves[1]);
    }

    fn draw_player_hp(&self, frame: &mut Frame, area: Rect) {
        let vitals = self.session.vitals();
        let gauge = Gauge::default()
            .block(Block::default().borders(Borders::ALL).title("Your HP"))
            .gauge_style(Style::default().fg(Color::Green))
            .ratio(vitals.hp_ratio())
            .label(format!("{}/{}", vitals.hp, vitals.max_hp));
        frame.render_widget(gauge, area);
    }

    fn draw_quiz(&self, frame: &mut Frame, area: Rect) {
        let mut lines = Vec::new();
        match self.session.active_quiz() {
            Some(quiz) => {
                lines.push(Line::from(Span::styled(
                    quiz.prompt.clone(),
                    Style::default().add_modifier(Modifier::BOLD),
                )));
                lines.push(Line::from(""));
                for (i, option) in quiz.options.iter().enumerate() {
                    lines.push(Line::from(format!("  [{}] {}", i + 1, option)));
                }
            }
            None => lines.push(Line::from("...")),
        }
        let title = if self.session.answer_locked() {
            "Question (resolving...)"
        } else {
            "Question"
        };
        let paragraph =
            Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(title));
        frame.render_widget(paragraph, area);
    }

    fn draw_footer(&self, frame: &mut Frame, area: Rect) {
        let paragraph = Paragraph::new("1-4 answer | Esc flee")
            .block(Block::default().borders(Borders::ALL))
            .alignment(Alignment::Center);
        frame.render_widget(paragraph, area);
    }
}
