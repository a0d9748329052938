use moser_core::{ColorBehavior, GenerationStats};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, Paragraph, Widget};

pub struct StatusWidget<'a> {
    pub generation: u64,
    pub stats: GenerationStats,
    pub ruleset_name: &'a str,
    pub notation: &'a str,
    pub color_behavior: ColorBehavior,
    pub tick_interval_ms: u64,
    pub paused: bool,
    /// Last notice for the user, e.g. a rejected ruleset.
    pub message: Option<&'a str>,
}

impl StatusWidget<'_> {
    fn color_for_behavior(behavior: ColorBehavior) -> Color {
        match behavior {
            ColorBehavior::Default => Color::Green,
            ColorBehavior::AverageColor => Color::Cyan,
            ColorBehavior::MajorityColor => Color::Magenta,
        }
    }
}

impl Widget for StatusWidget<'_> {
    fn render(self, area: Rect, buf: &mut ratatui::buffer::Buffer) {
        let block = Block::default().title("Status").borders(Borders::ALL);
        let inner = block.inner(area);
        block.render(area, buf);

        let lines = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Min(0),
            ])
            .split(inner);

        let run_state = if self.paused {
            ("PAUSED", Color::Yellow)
        } else {
            ("RUNNING", Color::Green)
        };
        Paragraph::new(format!(
            "Gen {} | {} | {}ms",
            self.generation, run_state.0, self.tick_interval_ms
        ))
        .style(Style::default().fg(run_state.1))
        .render(lines[0], buf);

        Paragraph::new(format!(
            "Alive {} | +{} -{} | Trails {}",
            self.stats.population, self.stats.births, self.stats.deaths, self.stats.trails
        ))
        .render(lines[1], buf);

        Paragraph::new(format!("{} ({})", self.ruleset_name, self.notation))
            .style(Style::default().add_modifier(Modifier::BOLD))
            .render(lines[2], buf);

        Paragraph::new(format!("Color: {}", self.color_behavior))
            .style(Style::default().fg(Self::color_for_behavior(self.color_behavior)))
            .render(lines[3], buf);

        if let Some(message) = self.message {
            Paragraph::new(message)
                .style(Style::default().fg(Color::Red))
                .render(lines[4], buf);
        }
    }
}
