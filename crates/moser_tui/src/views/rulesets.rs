use moser_core::Ruleset;
use ratatui::prelude::*;
use ratatui::widgets::*;

/// Scrolling list of rulesets with the active one highlighted.
pub struct RulesetListWidget<'a> {
    pub rulesets: &'a [Ruleset],
    pub selected: Option<usize>,
    /// Entries past this index are user-defined.
    pub predefined_count: usize,
}

impl Widget for RulesetListWidget<'_> {
    fn render(self, area: Rect, buf: &mut ratatui::buffer::Buffer) {
        let items: Vec<ListItem> = self
            .rulesets
            .iter()
            .enumerate()
            .map(|(i, ruleset)| {
                let marker = if i >= self.predefined_count { "*" } else { " " };
                let style = if self.selected == Some(i) {
                    Style::default()
                        .fg(Color::Black)
                        .bg(Color::Green)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default()
                };
                ListItem::new(format!(
                    "{}{:<20} {}",
                    marker,
                    ruleset.name(),
                    ruleset.notation()
                ))
                .style(style)
            })
            .collect();

        let mut state = ListState::default().with_selected(self.selected);
        StatefulWidget::render(
            List::new(items).block(Block::default().borders(Borders::ALL).title("Rulesets")),
            area,
            buf,
            &mut state,
        );
    }
}
