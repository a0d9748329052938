use crate::app::state::App;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use moser_core::color::DEFAULT_BIRTH_COLOR;
use moser_io::DuplicateResolution;
use moser_tui::renderer::GridWidget;

impl App {
    pub fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.running = false
            }
            KeyCode::Char('q') | KeyCode::Esc => self.running = false,
            KeyCode::Char(' ') => self.paused = !self.paused,
            KeyCode::Char('s') => {
                self.paused = true;
                self.step_generation();
            }
            KeyCode::Char('n') => {
                if let Err(e) = self.new_grid() {
                    self.notify(e.to_string());
                }
            }
            KeyCode::Char('r') | KeyCode::Down => self.next_ruleset(),
            KeyCode::Char('R') | KeyCode::Up => self.previous_ruleset(),
            KeyCode::Char('c') => {
                self.cycle_color_behavior();
            }
            KeyCode::Char('+') | KeyCode::Char('=') => self.speed_up(),
            KeyCode::Char('-') | KeyCode::Char('_') => self.slow_down(),
            KeyCode::Char('w') => {
                let name = self.registry.unused_name("Custom");
                if let Err(e) =
                    self.save_current_ruleset(&name, "", DuplicateResolution::UseExisting)
                {
                    self.notify(e.to_string());
                }
            }
            KeyCode::Char('d') => self.delete_active_ruleset(),
            _ => {}
        }
    }

    /// Left button paints living cells, right button kills them.
    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        let alive = match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) | MouseEventKind::Drag(MouseButton::Left) => {
                true
            }
            MouseEventKind::Down(MouseButton::Right)
            | MouseEventKind::Drag(MouseButton::Right) => false,
            _ => return,
        };
        let Some((col, row)) =
            GridWidget::screen_to_grid(mouse.column, mouse.row, self.last_grid_rect, false)
        else {
            return;
        };

        if alive {
            let color = DEFAULT_BIRTH_COLOR;
            self.grid
                .set_cell_state(col, row, true, color.r, color.g, color.b, u8::MAX);
        } else if let Some(cell) = self.grid.cell(col, row).copied() {
            if cell.is_alive {
                let opacity = self.grid.trail_settings().death_opacity;
                self.grid
                    .set_cell_state(col, row, false, cell.r, cell.g, cell.b, opacity);
            }
        }
    }
}
