use console_core::{
    ConsoleViewModel, FormField, Notice, NoticeKind, StatusKind, CONFIRM_CLEAR_PROMPT,
};
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

use super::layout;

const FOOTER_HINTS: &str =
    "Tab next field │ Enter crawl │ Ctrl+R refresh stats │ Ctrl+K clear index │ Esc quit";

pub fn render(frame: &mut Frame, view: &ConsoleViewModel, server: &str) {
    let areas = layout::screen_areas(frame.size());

    draw_header(frame, server, areas.header);
    draw_field(frame, view, FormField::Url, " URL ", &view.form.url, areas.url);
    draw_field(
        frame,
        view,
        FormField::MaxPages,
        " Max pages ",
        &view.form.max_pages,
        areas.max_pages,
    );
    draw_field(
        frame,
        view,
        FormField::MaxDepth,
        " Max depth ",
        &view.form.max_depth,
        areas.max_depth,
    );
    draw_status(frame, view, areas.status);
    draw_stats(frame, view, areas.stats);
    draw_footer(frame, areas.footer);

    if view.confirm_clear {
        draw_confirm(frame);
    }
    if let Some(notice) = &view.notice {
        draw_notice(frame, notice);
    }
}

fn draw_header(frame: &mut Frame, server: &str, area: Rect) {
    let header = Line::from(vec![
        Span::styled(
            " Search Console ",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ),
        Span::raw("│ "),
        Span::styled(server, Style::default().fg(Color::White)),
    ]);
    frame.render_widget(Paragraph::new(header), area);
}

fn draw_field(
    frame: &mut Frame,
    view: &ConsoleViewModel,
    field: FormField,
    title: &str,
    value: &str,
    area: Rect,
) {
    let focused = view.form.focus == field;
    let border_style = if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let widget = Paragraph::new(value).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(border_style),
    );
    frame.render_widget(widget, area);

    // The cursor belongs to the focused field unless a modal is on top.
    let modal_open = view.confirm_clear || view.notice.is_some();
    if focused && !modal_open {
        frame.set_cursor(area.x + 1 + value.chars().count() as u16, area.y + 1);
    }
}

fn draw_status(frame: &mut Frame, view: &ConsoleViewModel, area: Rect) {
    let line = match &view.status {
        Some(status) => {
            let style = match status.kind {
                StatusKind::Loading => Style::default().fg(Color::Yellow),
                StatusKind::Success => Style::default().fg(Color::Green),
                StatusKind::Error => Style::default().fg(Color::Red),
            };
            Line::from(Span::styled(status.text.as_str(), style))
        }
        None => Line::from(Span::styled(
            "Enter a URL and press Enter to crawl.",
            Style::default().fg(Color::DarkGray),
        )),
    };
    frame.render_widget(Paragraph::new(line), area);
}

fn draw_stats(frame: &mut Frame, view: &ConsoleViewModel, area: Rect) {
    let widget = Paragraph::new(stats_label(view.document_count)).block(
        Block::default()
            .title(" Index ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    frame.render_widget(widget, area);
}

fn draw_footer(frame: &mut Frame, area: Rect) {
    let hints = Line::from(Span::styled(
        FOOTER_HINTS,
        Style::default().fg(Color::DarkGray),
    ));
    frame.render_widget(Paragraph::new(hints), area);
}

fn draw_confirm(frame: &mut Frame) {
    let area = layout::centered_rect(60, 7, frame.size());
    frame.render_widget(Clear, area);
    let lines = vec![
        Line::from(CONFIRM_CLEAR_PROMPT),
        Line::from(""),
        Line::from(Span::styled(
            "[y] clear   [n] keep",
            Style::default().fg(Color::DarkGray),
        )),
    ];
    let widget = Paragraph::new(lines).wrap(Wrap { trim: false }).block(
        Block::default()
            .title(" Clear index ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Red)),
    );
    frame.render_widget(widget, area);
}

fn draw_notice(frame: &mut Frame, notice: &Notice) {
    let (title, color) = match notice.kind {
        NoticeKind::Success => (" Done ", Color::Green),
        NoticeKind::Error => (" Problem ", Color::Red),
    };
    let area = layout::centered_rect(60, 7, frame.size());
    frame.render_widget(Clear, area);
    let lines = vec![
        Line::from(notice.text.as_str()),
        Line::from(""),
        Line::from(Span::styled(
            "[Enter] dismiss",
            Style::default().fg(Color::DarkGray),
        )),
    ];
    let widget = Paragraph::new(lines).wrap(Wrap { trim: false }).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(color)),
    );
    frame.render_widget(widget, area);
}

fn stats_label(count: Option<u64>) -> String {
    match count {
        Some(count) => format!("Documents indexed: {}", format_with_commas(count)),
        None => "Documents indexed: fetching...".to_string(),
    }
}

fn format_with_commas(value: u64) -> String {
    let mut out = String::new();
    for (i, ch) in value.to_string().chars().rev().enumerate() {
        if i != 0 && i % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out.chars().rev().collect()
}

#[cfg(test)]
mod tests {
    use super::{format_with_commas, stats_label};

    #[test]
    fn groups_digits_in_threes() {
        assert_eq!(format_with_commas(0), "0");
        assert_eq!(format_with_commas(999), "999");
        assert_eq!(format_with_commas(1_000), "1,000");
        assert_eq!(format_with_commas(1_234_567), "1,234,567");
    }

    #[test]
    fn stats_label_reports_count_or_placeholder() {
        assert_eq!(stats_label(Some(1_500)), "Documents indexed: 1,500");
        assert_eq!(stats_label(None), "Documents indexed: fetching...");
    }
}
