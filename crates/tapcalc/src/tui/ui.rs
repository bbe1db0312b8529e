//! TUI rendering
//!
//! Visual feedback makes state visible: the display panel on top, the
//! keypad below and a one-line key legend at the bottom.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
    Frame,
};

use super::app::CalculatorApp;
use super::keypad::KeypadWidget;

/// Title of the outer frame
pub const TITLE: &str = " tapcalc ";

/// Key legend shown under the keypad
pub const HELP_LINE: &str = "0-9 . + - * / %   Enter =   Esc C   Bksp ⌫   n ±   q quit";

/// Height of the display panel, borders included
const DISPLAY_HEIGHT: u16 = 5;

/// Renders the calculator UI to the frame
pub fn render(app: &CalculatorApp, frame: &mut Frame) {
    let area = frame.area();
    frame.render_widget(CalculatorUI::new(app), area);
}

/// Area the keypad occupies when the whole UI is drawn into `area`
#[must_use]
pub fn keypad_area(area: Rect) -> Rect {
    CalculatorUI::create_layout(area)[1]
}

/// Calculator UI widget
#[derive(Debug)]
pub struct CalculatorUI<'a> {
    app: &'a CalculatorApp,
}

impl<'a> CalculatorUI<'a> {
    /// Creates a new calculator UI widget
    #[must_use]
    pub fn new(app: &'a CalculatorApp) -> Self {
        Self { app }
    }

    /// Splits the frame into display, keypad and legend
    fn create_layout(area: Rect) -> [Rect; 3] {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([
                Constraint::Length(DISPLAY_HEIGHT),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .split(area);
        [chunks[0], chunks[1], chunks[2]]
    }

    /// Renders the display panel, value right-aligned on the middle line
    ///
    /// A value wider than the panel shows its tail, so the last digit
    /// entered stays visible.
    fn render_display(&self, area: Rect, buf: &mut Buffer) {
        let inner_width = usize::from(area.width.saturating_sub(2));
        let value = Span::styled(
            visible_tail(self.app.display(), inner_width),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        );

        Paragraph::new(vec![Line::default(), Line::from(value)])
            .alignment(Alignment::Right)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Gray)),
            )
            .render(area, buf);
    }

    fn render_help(&self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(Span::styled(HELP_LINE, Style::default().fg(Color::DarkGray)))
            .alignment(Alignment::Center)
            .render(area, buf);
    }
}

/// The last `width` characters of `text`
fn visible_tail(text: &str, width: usize) -> &str {
    let skip = text.chars().count().saturating_sub(width);
    text.char_indices()
        .nth(skip)
        .map_or("", |(start, _)| &text[start..])
}

impl Widget for CalculatorUI<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Block::default()
            .title(TITLE)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White))
            .render(area, buf);

        let [display_area, keypad_area, help_area] = Self::create_layout(area);
        self.render_display(display_area, buf);
        KeypadWidget::new(self.app.keypad()).render(keypad_area, buf);
        self.render_help(help_area, buf);
    }
}
