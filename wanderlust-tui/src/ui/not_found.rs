use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::theme;
use crate::ui::centered_rect;

pub fn render(f: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(Span::styled("📍", theme::accent())),
        Line::from(""),
        Line::from(Span::styled("Lost in Adventure?", theme::accent_bold())),
        Line::from(""),
        Line::from(Span::styled(
            "The destination you're looking for doesn't exist or has been moved.",
            theme::muted(),
        )),
        Line::from(""),
        Line::from(Span::styled("[Enter] Back to Homepage", theme::neutral())),
    ];
    let para = Paragraph::new(lines).alignment(Alignment::Center);
    f.render_widget(para, centered_rect(80, 50, area));
}
