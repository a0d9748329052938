use crate::app::state::App;
use moser_tui::renderer::GridWidget;
use moser_tui::views::{RulesetListWidget, StatusWidget};
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

const SIDEBAR_WIDTH: u16 = 40;

const HELP: &str = "\
space pause   s step   n new grid
r/R ruleset   c color  +/- speed
w save rules  d delete q quit
mouse: left paint, right kill";

impl App {
    pub fn draw(&mut self, f: &mut Frame) {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(0), Constraint::Length(SIDEBAR_WIDTH)])
            .split(f.area());

        self.last_grid_rect = columns[0];
        f.render_widget(
            GridWidget::new(
                &self.grid,
                format!(
                    "Moser Life {}x{}",
                    self.grid.cols(),
                    self.grid.rows()
                ),
            ),
            columns[0],
        );

        let sidebar = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(8),
                Constraint::Min(5),
                Constraint::Length(6),
            ])
            .split(columns[1]);

        let (name, notation) = self.ruleset_label();
        f.render_widget(
            StatusWidget {
                generation: self.grid.generation(),
                stats: self.grid.last_stats(),
                ruleset_name: &name,
                notation: &notation,
                color_behavior: self.color_behavior.get(),
                tick_interval_ms: self.tick_interval.as_millis() as u64,
                paused: self.paused,
                message: self.message.as_deref(),
            },
            sidebar[0],
        );

        f.render_widget(
            RulesetListWidget {
                rulesets: self.registry.rulesets(),
                selected: self.active_ruleset,
                predefined_count: self.registry.predefined().len(),
            },
            sidebar[1],
        );

        f.render_widget(
            Paragraph::new(HELP)
                .style(Style::default().fg(Color::DarkGray))
                .block(Block::default().borders(Borders::ALL).title("Keys")),
            sidebar[2],
        );
    }
}
