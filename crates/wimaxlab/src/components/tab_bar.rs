use super::{Component, EventResult};
use crate::state::{AppState, TabId};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Tabs},
};

pub struct TabBar;

impl TabBar {
    pub fn new() -> Self {
        Self
    }
}

impl Component for TabBar {
    fn handle_key(&mut self, key: KeyEvent, state: &mut AppState) -> EventResult {
        match key.code {
            KeyCode::Char(c @ '1'..='6') => {
                let index = c as usize - '1' as usize;
                if let Some(tab) = TabId::from_index(index) {
                    state.switch_tab(tab);
                }
                EventResult::Handled
            }
            KeyCode::Tab => {
                let next = (state.active_tab.index() + 1) % TabId::ALL.len();
                if let Some(tab) = TabId::from_index(next) {
                    state.switch_tab(tab);
                }
                EventResult::Handled
            }
            _ => EventResult::NotHandled,
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let titles: Vec<Line> = TabId::ALL
            .iter()
            .enumerate()
            .map(|(idx, tab)| {
                let content = format!("[{}] {}", idx + 1, tab.name());

                if *tab == state.active_tab {
                    Line::from(Span::styled(
                        content,
                        Style::default()
                            .fg(Color::Yellow)
                            .add_modifier(Modifier::BOLD),
                    ))
                } else {
                    Line::from(Span::styled(content, Style::default().fg(Color::Gray)))
                }
            })
            .collect();

        let tabs = Tabs::new(titles)
            .block(Block::default().borders(Borders::BOTTOM))
            .select(state.active_tab.index())
            .style(Style::default())
            .highlight_style(
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            );

        frame.render_widget(tabs, area);
    }
}
