//! World map scene: location list, details pane, explore/rest actions.

use crossterm::event::KeyCode;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::game_state::GameState;
use crate::locations::{get_all_locations, Location, LocationType};

/// What the main loop should do after a key press on the map.
pub enum MapAction {
    None,
    Quit,
    /// Rest at a safe location.
    Rest,
    /// Launch an encounter at this location.
    Explore(&'static Location),
}

pub struct MapScene {
    pub selected: usize,
    /// Status line shown under the map (config errors, save failures).
    pub status: Option<String>,
}

impl MapScene {
    pub fn new() -> Self {
        Self {
            selected: 0,
            status: None,
        }
    }

    pub fn handle_key(&mut self, code: KeyCode, state: &GameState) -> MapAction {
        let locations = get_all_locations();
        match code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.selected = self.selected.saturating_sub(1);
                MapAction::None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if self.selected + 1 < locations.len() {
                    self.selected += 1;
                }
                MapAction::None
            }
            KeyCode::Enter => {
                let location = &locations[self.selected];
                if !location.unlocked_at(state.level) {
                    self.status = Some(format!(
                        "{} requires level {}",
                        location.name, location.min_level
                    ));
                    return MapAction::None;
                }
                self.status = None;
                if location.is_battle() {
                    MapAction::Explore(location)
                } else {
                    MapAction::Rest
                }
            }
            KeyCode::Char('q') | KeyCode::Esc => MapAction::Quit,
            _ => MapAction::None,
        }
    }

    pub fn draw(&self, frame: &mut Frame, area: Rect, state: &GameState) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Player header
                Constraint::Min(8),    // Map body
                Constraint::Length(3), // Status / help
            ])
            .split(area);

        self.draw_header(frame, chunks[0], state);
        self.draw_body(frame, chunks[1], state);
        self.draw_footer(frame, chunks[2]);
    }

    fn draw_header(&self, frame: &mut Frame, area: Rect, state: &GameState) {
        let header = Line::from(vec![
            Span::styled(
                "World Map",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(format!(
                "   Lv.{}  HP {}/{}  MP {}/{}  EXP {}/{}  {}G",
                state.level,
                state.hp,
                state.max_hp,
                state.mp,
                state.max_mp,
                state.exp,
                state.exp_to_next,
                state.gold
            )),
        ]);
        let paragraph = Paragraph::new(header)
            .block(Block::default().borders(Borders::ALL))
            .alignment(Alignment::Left);
        frame.render_widget(paragraph, area);
    }

    fn draw_body(&self, frame: &mut Frame, area: Rect, state: &GameState) {
        let halves = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
            .split(area);

        let locations = get_all_locations();
        let items: Vec<ListItem> = locations
            .iter()
            .map(|location| {
                let unlocked = location.unlocked_at(state.level);
                let marker = match (unlocked, location.location_type) {
                    (false, _) => "🔒",
                    (true, LocationType::Safe) => "🏠",
                    (true, LocationType::Dungeon) => "⚔",
                    (true, LocationType::Boss) => "👑",
                };
                let style = if unlocked {
                    Style::default()
                } else {
                    Style::default().fg(Color::DarkGray)
                };
                ListItem::new(format!("{} {} (Lv.{})", marker, location.name, location.min_level))
                    .style(style)
            })
            .collect();

        let list = List::new(items)
            .block(Block::default().borders(Borders::ALL).title("Locations"))
            .highlight_style(
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("> ");
        let mut list_state = ListState::default();
        list_state.select(Some(self.selected));
        frame.render_stateful_widget(list, halves[0], &mut list_state);

        self.draw_details(frame, halves[1], &locations[self.selected]);
    }

    fn draw_details(&self, frame: &mut Frame, area: Rect, location: &Location) {
        let mut lines = vec![
            Line::from(Span::styled(
                location.name,
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(location.description),
            Line::from(""),
        ];

        if location.is_battle() {
            lines.push(Line::from(vec![
                Span::styled("Quota: ", Style::default().fg(Color::Red)),
                Span::raw(format!("{} enemies", location.enemy_quota)),
            ]));
            lines.push(Line::from(vec![
                Span::styled("Reward: ", Style::default().fg(Color::Green)),
                Span::raw(format!(
                    "{} EXP, {}G",
                    location.reward.exp, location.reward.gold
                )),
            ]));
            lines.push(Line::from(""));
            lines.push(Line::from("Press Enter to explore."));
        } else {
            lines.push(Line::from("A safe haven. Press Enter to rest."));
        }

        let paragraph = Paragraph::new(lines)
            .block(Block::default().borders(Borders::ALL).title("Details"))
            .wrap(ratatui::widgets::Wrap { trim: true });
        frame.render_widget(paragraph, area);
    }

    fn draw_footer(&self, frame: &mut Frame, area: Rect) {
        let text = match &self.status {
            Some(message) => Line::from(Span::styled(
                message.as_str(),
                Style::default().fg(Color::Red),
            )),
            None => Line::from("↑/↓ select | Enter explore/rest | q quit"),
        };
        let paragraph = Paragraph::new(text)
            .block(Block::default().borders(Borders::ALL))
            .alignment(Alignment::Center);
        frame.render_widget(paragraph, area);
    }
}
