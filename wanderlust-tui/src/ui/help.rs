//! Help overlay — keyboard shortcuts per page.

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::theme;
use crate::ui::centered_rect;

pub fn render(f: &mut Frame, area: Rect) {
    let popup = centered_rect(80, 90, area);
    f.render_widget(Clear, popup);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::accent())
        .title(" Help [Esc]close ")
        .title_style(theme::accent_bold());

    let inner = block.inner(popup);
    f.render_widget(block, popup);
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(inner);

    let mut lines: Vec<Line> = Vec::new();

    section(&mut lines, "Global Navigation");
    key(&mut lines, "1-5", "Switch page");
    key(&mut lines, "Tab / Shift+Tab", "Cycle pages forward / back");
    key(&mut lines, "g", "Go to a path");
    key(&mut lines, "?", "This help");
    key(&mut lines, "q", "Quit");
    lines.push(Line::from(""));

    section(&mut lines, "Home / Destinations");
    key(&mut lines, "j / k", "Move cursor down / up");
    key(&mut lines, "Enter", "Open destination");
    key(&mut lines, "/", "Search name or country");
    key(&mut lines, "h / l, Space", "Pick a tag, toggle it");
    key(&mut lines, "c", "Clear filters");
    lines.push(Line::from(""));

    section(&mut lines, "Destination Detail");
    key(&mut lines, "h / l", "Switch tab");
    key(&mut lines, "a", "Add to itinerary");
    key(&mut lines, "s", "Browse stays for this destination");
    key(&mut lines, "Esc", "Back to destinations");
    f.render_widget(Paragraph::new(lines), columns[0]);

    let mut lines: Vec<Line> = Vec::new();
    section(&mut lines, "Itinerary");
    key(&mut lines, "c", "Change destination");
    key(&mut lines, "/", "Picker: search destinations");
    key(&mut lines, "r", "Rename trip");
    key(&mut lines, "d / D", "Add day / remove selected day");
    key(&mut lines, "h / l", "Select day");
    key(&mut lines, "H / L", "Move selected day earlier / later");
    key(&mut lines, "n", "Renumber days by position");
    key(&mut lines, "t", "Set the day's date");
    key(&mut lines, "a / e / x", "Add, edit, remove activity");
    key(&mut lines, "Tab, Enter, Esc", "Editor: field, save, cancel");
    lines.push(Line::from(""));

    section(&mut lines, "Stays");
    key(&mut lines, "/", "Search by name or location");
    key(&mut lines, "d", "Cycle destination");
    key(&mut lines, "[ / ]", "Lower / raise max price");
    key(&mut lines, "h / l, Space", "Pick a type, toggle it");
    lines.push(Line::from(""));

    section(&mut lines, "Budget");
    key(&mut lines, "+ / -", "More / fewer travelers");
    key(&mut lines, "> / <", "More / fewer days");
    key(&mut lines, "c", "Cycle currency");
    key(&mut lines, "a", "Add expense");
    key(&mut lines, "x", "Remove expense under cursor");

    f.render_widget(Paragraph::new(lines), columns[1]);
}

fn section<'a>(lines: &mut Vec<Line<'a>>, title: &str) {
    lines.push(Line::from(Span::styled(title.to_string(), theme::accent_bold())));
}

fn key<'a>(lines: &mut Vec<Line<'a>>, keys: &str, desc: &str) {
    lines.push(Line::from(vec![
        Span::styled(format!("  {:>16}  ", keys), theme::accent()),
        Span::styled(desc.to_string(), theme::muted()),
    ]));
}
