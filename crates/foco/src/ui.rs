//! UI rendering

use foco_core::format;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Gauge, List, ListItem, Paragraph, Tabs, Wrap},
    Frame,
};

use crate::app::{MoodView, Snapshot, Tab, TimerView};

const TITLE: &str = " Foco & Humor ";
const ACCENT: Color = Color::Cyan;

/// Main draw function
pub fn draw(f: &mut Frame, snap: &Snapshot, show_help: bool) {
    // Header, tabs, card, footer
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(f.area());

    draw_header(f, snap, chunks[0]);
    draw_tabs(f, snap.tab, chunks[1]);
    match snap.tab {
        Tab::Timer => draw_timer(f, &snap.timer, chunks[2]),
        Tab::Mood => draw_mood(f, &snap.mood, chunks[2]),
    }
    draw_footer(f, snap.tab, chunks[3]);

    if show_help {
        draw_help_overlay(f);
    }
}

fn draw_header(f: &mut Frame, snap: &Snapshot, area: Rect) {
    let status = if snap.timer.running {
        Span::styled(
            format!("focusing {}", format::clock(snap.timer.remaining_seconds)),
            Style::default().fg(Color::Green),
        )
    } else {
        Span::styled("Focus and wellbeing", Style::default().fg(Color::DarkGray))
    };

    let header = Paragraph::new(Line::from(vec![
        Span::styled(TITLE, Style::default().fg(ACCENT).bold()),
        Span::raw(" - "),
        status,
    ]))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(ACCENT)),
    );

    f.render_widget(header, area);
}

fn draw_tabs(f: &mut Frame, tab: Tab, area: Rect) {
    let titles: Vec<Line> = Tab::ALL
        .iter()
        .map(|t| Line::from(format!(" {} ", t.title())))
        .collect();

    let tabs = Tabs::new(titles)
        .select(tab.index())
        .style(Style::default().fg(Color::DarkGray))
        .highlight_style(Style::default().fg(Color::Black).bg(ACCENT).bold())
        .divider(" ");

    f.render_widget(tabs, area);
}

fn card(title: &str) -> Block<'_> {
    Block::default()
        .title(format!(" {} ", title))
        .title_style(Style::default().fg(Color::Magenta).bold())
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Blue))
}

fn button(label: &str, enabled: bool, color: Color) -> Span<'static> {
    let style = if enabled {
        Style::default().fg(Color::Black).bg(color).bold()
    } else {
        Style::default().fg(Color::DarkGray).add_modifier(Modifier::DIM)
    };
    Span::styled(format!(" {} ", label), style)
}

fn draw_timer(f: &mut Frame, timer: &TimerView, area: Rect) {
    let block = card("Focus cycle");
    let inner = block.inner(area);
    f.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // spacer
            Constraint::Length(1), // clock
            Constraint::Length(1), // spacer
            Constraint::Length(1), // gauge
            Constraint::Length(1), // spacer
            Constraint::Length(1), // duration controls
            Constraint::Length(1), // spacer
            Constraint::Length(1), // start/pause + reset
            Constraint::Length(1), // spacer
            Constraint::Min(0),    // hint
        ])
        .split(inner);

    let clock_color = if timer.remaining_seconds == 0 {
        Color::Green
    } else if timer.running {
        Color::Yellow
    } else {
        Color::White
    };
    let clock = Paragraph::new(Line::from(Span::styled(
        format::clock(timer.remaining_seconds),
        Style::default().fg(clock_color).bold(),
    )))
    .alignment(Alignment::Center);
    f.render_widget(clock, rows[1]);

    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(Color::Green).bg(Color::Black))
        .ratio(timer.progress.clamp(0.0, 1.0))
        .label(format!("{:.0}%", timer.progress * 100.0));
    f.render_widget(gauge, pad(rows[3], 2));

    // Duration can only change while stopped
    let adjustable = !timer.running;
    let controls = Paragraph::new(Line::from(vec![
        button("-5", adjustable, Color::Gray),
        Span::raw(" "),
        button("-1", adjustable, Color::Gray),
        Span::raw("  "),
        Span::styled(
            format!("{} min", timer.duration_minutes),
            Style::default().fg(ACCENT).bold(),
        ),
        Span::raw("  "),
        button("+1", adjustable, Color::Gray),
        Span::raw(" "),
        button("+5", adjustable, Color::Gray),
    ]))
    .alignment(Alignment::Center);
    f.render_widget(controls, rows[5]);

    let (primary, primary_color) = if timer.running {
        ("Pause", Color::Yellow)
    } else {
        ("Start", Color::Green)
    };
    let actions = Paragraph::new(Line::from(vec![
        button(primary, timer.remaining_seconds > 0 || timer.running, primary_color),
        Span::raw("   "),
        button("Reset", true, Color::Gray),
    ]))
    .alignment(Alignment::Center);
    f.render_widget(actions, rows[7]);

    let hint = if timer.remaining_seconds == 0 {
        "Cycle complete. Press r to reset and start another."
    } else {
        "Tip: set the duration before starting. At 00:00 you get a buzz."
    };
    let hint = Paragraph::new(hint)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    f.render_widget(hint, rows[9]);
}

fn draw_mood(f: &mut Frame, mood: &MoodView, area: Rect) {
    let block = card("How are you feeling?");
    let inner = block.inner(area);
    f.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // spacer
            Constraint::Length(1), // options
            Constraint::Length(1), // spacer
            Constraint::Length(1), // register
            Constraint::Length(1), // spacer
            Constraint::Length(1), // entries title
            Constraint::Min(0),    // entries
        ])
        .split(inner);

    let mut options: Vec<Span> = Vec::new();
    for (i, option) in mood.options.iter().enumerate() {
        let selected = mood.pending == Some(option.key);
        let style = if selected {
            Style::default().fg(Color::Black).bg(Color::Magenta).bold()
        } else {
            Style::default().fg(Color::White)
        };
        if i > 0 {
            options.push(Span::raw(" "));
        }
        options.push(Span::styled(format!(" {} {} ", i + 1, option.label), style));
    }
    f.render_widget(
        Paragraph::new(Line::from(options)).alignment(Alignment::Center),
        rows[1],
    );

    let register = Paragraph::new(Line::from(button(
        "Register mood",
        mood.pending.is_some(),
        Color::Green,
    )))
    .alignment(Alignment::Center);
    f.render_widget(register, rows[3]);

    let title = Paragraph::new(Line::from(vec![
        Span::styled(" Entries ", Style::default().fg(Color::Magenta).bold()),
        Span::styled(
            format!("({})", mood.log.len()),
            Style::default().fg(Color::DarkGray),
        ),
    ]));
    f.render_widget(title, rows[5]);

    if mood.log.is_empty() {
        let empty = Paragraph::new("No entries yet. Pick a mood and press Enter to register it.")
            .style(Style::default().fg(Color::DarkGray))
            .wrap(Wrap { trim: true });
        f.render_widget(empty, pad(rows[6], 1));
        return;
    }

    let label_width = rows[6].width.saturating_sub(10) as usize;
    let items: Vec<ListItem> = mood
        .log
        .iter()
        .take(rows[6].height as usize)
        .map(|entry| {
            ListItem::new(Line::from(vec![
                Span::raw(" "),
                Span::styled(
                    format!("{:<5}", entry.time),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::raw("  "),
                Span::raw(format::truncate(&entry.label, label_width)),
            ]))
        })
        .collect();
    f.render_widget(List::new(items), rows[6]);
}

fn draw_footer(f: &mut Frame, tab: Tab, area: Rect) {
    let mut spans = vec![
        Span::styled(" q", Style::default().fg(ACCENT).bold()),
        Span::raw(" quit  "),
        Span::styled("Tab", Style::default().fg(ACCENT).bold()),
        Span::raw(" switch  "),
    ];

    match tab {
        Tab::Timer => spans.extend([
            Span::styled("space", Style::default().fg(ACCENT).bold()),
            Span::raw(" start/pause  "),
            Span::styled("r", Style::default().fg(ACCENT).bold()),
            Span::raw(" reset  "),
            Span::styled("+/-", Style::default().fg(ACCENT).bold()),
            Span::raw(" 1 min  "),
            Span::styled("[/]", Style::default().fg(ACCENT).bold()),
            Span::raw(" 5 min  "),
        ]),
        Tab::Mood => spans.extend([
            Span::styled("1-5", Style::default().fg(ACCENT).bold()),
            Span::raw(" pick  "),
            Span::styled("Enter", Style::default().fg(ACCENT).bold()),
            Span::raw(" register  "),
        ]),
    }

    spans.push(Span::styled("?", Style::default().fg(ACCENT).bold()));
    spans.push(Span::raw(" help"));

    let footer = Paragraph::new(Line::from(spans)).style(Style::default().fg(Color::DarkGray));
    f.render_widget(footer, area);
}

fn draw_help_overlay(f: &mut Frame) {
    let area = f.area();

    let popup_width = 48.min(area.width);
    let popup_height = 19.min(area.height);
    let x = (area.width.saturating_sub(popup_width)) / 2;
    let y = (area.height.saturating_sub(popup_height)) / 2;
    let popup_area = Rect::new(x, y, popup_width, popup_height);

    f.render_widget(Clear, popup_area);

    let key = |k: &'static str, what: &'static str| {
        Line::from(vec![
            Span::styled(format!("  {:<11}", k), Style::default().fg(ACCENT)),
            Span::raw(what),
        ])
    };

    let help_text = vec![
        Line::from(""),
        key("q / Esc", "Quit"),
        key("Tab", "Switch tab"),
        key("t / m", "Timer / Mood tab"),
        Line::from(""),
        Line::from(Span::styled("  Timer", Style::default().fg(Color::Magenta).bold())),
        key("space / s", "Start or pause"),
        key("r", "Reset to full duration"),
        key("+ / -", "Duration +1 / -1 min"),
        key("] / [", "Duration +5 / -5 min"),
        Line::from(""),
        Line::from(Span::styled("  Mood", Style::default().fg(Color::Magenta).bold())),
        key("1-5", "Pick a mood"),
        key("<- / ->", "Cycle moods"),
        key("Enter", "Register the picked mood"),
        Line::from(""),
        Line::from(Span::styled(
            "Press ? to close",
            Style::default().fg(Color::DarkGray),
        ))
        .centered(),
    ];

    let help_popup = Paragraph::new(help_text).block(
        Block::default()
            .title(" Keyboard Shortcuts ")
            .title_style(Style::default().fg(Color::Yellow).bold())
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Yellow)),
    );

    f.render_widget(help_popup, popup_area);
}

/// Shrink a rect horizontally by `margin` cells on each side
fn pad(area: Rect, margin: u16) -> Rect {
    let margin = margin.min(area.width / 2);
    Rect::new(area.x + margin, area.y, area.width - 2 * margin, area.height)
}
