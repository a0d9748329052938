use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Color;
use ratatui::widgets::{Block, Borders, Widget};

use moser_core::{Cell, Grid};

const ALIVE_SYMBOL: &str = "█";
const TRAIL_SYMBOL: &str = "▓";

/// Draws the current generation, one terminal cell per grid cell.
pub struct GridWidget<'a> {
    grid: &'a Grid,
    title: String,
    borderless: bool,
}

impl<'a> GridWidget<'a> {
    pub fn new(grid: &'a Grid, title: impl Into<String>) -> Self {
        Self {
            grid,
            title: title.into(),
            borderless: false,
        }
    }

    #[must_use]
    pub fn borderless(mut self, borderless: bool) -> Self {
        self.borderless = borderless;
        self
    }

    pub fn get_inner_area(area: Rect, borderless: bool) -> Rect {
        if borderless {
            area
        } else {
            Block::default().borders(Borders::ALL).inner(area)
        }
    }

    /// Living cells show their RGB; trails are dimmed by their alpha.
    pub fn color_for_cell(cell: &Cell) -> Option<Color> {
        if cell.is_alive {
            return Some(Color::Rgb(cell.r, cell.g, cell.b));
        }
        if !cell.has_trail() {
            return None;
        }
        let scale = |channel: u8| ((channel as u16 * cell.a as u16) / 255) as u8;
        Some(Color::Rgb(scale(cell.r), scale(cell.g), scale(cell.b)))
    }

    pub fn symbol_for_cell(cell: &Cell) -> &'static str {
        if cell.is_alive {
            ALIVE_SYMBOL
        } else if cell.has_trail() {
            TRAIL_SYMBOL
        } else {
            " "
        }
    }

    pub fn grid_to_screen(
        col: usize,
        row: usize,
        area: Rect,
        borderless: bool,
    ) -> Option<(u16, u16)> {
        let inner = Self::get_inner_area(area, borderless);
        let col = u16::try_from(col).ok()?;
        let row = u16::try_from(row).ok()?;
        let x = inner.x.checked_add(col)?;
        let y = inner.y.checked_add(row)?;
        if x < inner.right() && y < inner.bottom() {
            Some((x, y))
        } else {
            None
        }
    }

    /// Maps a mouse position back to grid coordinates.
    pub fn screen_to_grid(
        screen_x: u16,
        screen_y: u16,
        area: Rect,
        borderless: bool,
    ) -> Option<(usize, usize)> {
        let inner = Self::get_inner_area(area, borderless);
        if screen_x >= inner.left()
            && screen_x < inner.right()
            && screen_y >= inner.top()
            && screen_y < inner.bottom()
        {
            Some(((screen_x - inner.x) as usize, (screen_y - inner.y) as usize))
        } else {
            None
        }
    }
}

impl Widget for GridWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if !self.borderless {
            Block::default()
                .title(self.title.as_str())
                .borders(Borders::ALL)
                .render(area, buf);
        }

        for (col, row, cell) in self.grid.iter() {
            let Some(color) = Self::color_for_cell(cell) else {
                continue;
            };
            let Some((x, y)) = Self::grid_to_screen(col, row, area, self.borderless) else {
                continue;
            };
            let target = &mut buf[(x, y)];
            target.set_symbol(Self::symbol_for_cell(cell));
            target.set_fg(color);
        }
    }
}
