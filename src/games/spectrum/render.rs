//! Spectrum Clicker rendering. A pure read of `SpectrumState`.

use std::cell::RefCell;
use std::rc::Rc;

use ratzilla::ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratzilla::ratatui::style::{Color, Modifier, Style};
use ratzilla::ratatui::text::{Line, Span};
use ratzilla::ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratzilla::ratatui::Frame;

use crate::input::{is_narrow_layout, ClickState};
use crate::widgets::ClickableList;

use super::actions::{BUY_BUILDING_BASE, CLICK};
use super::logic::{contribution_label, format_number, per_second_label};
use super::state::{Building, SpectrumState};

/// Spinner characters for the production indicator.
const SPINNER: &[char] = &['◐', '◓', '◑', '◒'];

pub fn render(state: &SpectrumState, f: &mut Frame, area: Rect, click_state: &Rc<RefCell<ClickState>>) {
    // Log panel on the right when wide enough
    let (main_area, log_area) = if area.width >= 80 {
        let h_chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(area);
        (h_chunks[0], Some(h_chunks[1]))
    } else {
        (area, None)
    };

    let building_rows = state.buildings.len() as u16 + 3;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(7), Constraint::Min(building_rows)])
        .split(main_area);

    render_clicker(state, f, chunks[0], click_state);
    render_buildings(state, f, chunks[1], click_state);

    if let Some(log_area) = log_area {
        render_log(state, f, log_area);
    }
}

fn panel_borders(width: u16) -> Borders {
    if is_narrow_layout(width) {
        Borders::TOP | Borders::BOTTOM
    } else {
        Borders::ALL
    }
}

fn render_clicker(
    state: &SpectrumState,
    f: &mut Frame,
    area: Rect,
    click_state: &Rc<RefCell<ClickState>>,
) {
    let spinner = if state.per_second > 0 {
        SPINNER[(state.anim_frame / 3) as usize % SPINNER.len()]
    } else {
        ' '
    };

    let click_style = if state.click_flash > 0 {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD | Modifier::REVERSED)
    } else {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    };

    let mut cl = ClickableList::new();
    cl.push(Line::from(Span::styled(
        format!(" {} clicks", format_number(state.clicks)),
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
    )));
    cl.push(Line::from(Span::styled(
        format!(" {} {}", spinner, per_second_label(state.per_second)),
        Style::default().fg(Color::Cyan),
    )));
    // One prism cell per building, lit once owned
    cl.push(Line::from(
        std::iter::once(Span::raw(" "))
            .chain(state.buildings.iter().map(|b| {
                let color = if b.count > 0 { b.kind.color() } else { Color::DarkGray };
                Span::styled("█", Style::default().fg(color))
            }))
            .collect::<Vec<_>>(),
    ));
    cl.push_clickable(Line::from(Span::styled(" [C] CLICK! ", click_style)), CLICK);
    cl.push(Line::from(Span::styled(
        format!(
            " 👆{}  total {}",
            format_number(state.total_clicks),
            format_number(state.clicks_all_time)
        ),
        Style::default().fg(Color::DarkGray),
    )));

    let border_color = if state.purchase_flash > 0 { Color::White } else { Color::Yellow };
    let block = Block::default()
        .borders(panel_borders(area.width))
        .border_style(Style::default().fg(border_color))
        .title(" Spectrum Clicker ");

    {
        let mut cs = click_state.borrow_mut();
        cl.register_targets(area, &mut cs, 1, 1, 0);
    }
    f.render_widget(Paragraph::new(cl.into_lines()).block(block), area);
}

fn building_line(b: &Building) -> Line<'static> {
    let (key_style, text_style) = if b.can_buy {
        (
            Style::default().fg(b.kind.color()).add_modifier(Modifier::BOLD),
            Style::default().fg(Color::White),
        )
    } else {
        (
            Style::default().fg(Color::DarkGray),
            Style::default().fg(Color::DarkGray),
        )
    };
    let output_style = if b.count > 0 {
        Style::default().fg(b.kind.color())
    } else {
        Style::default().fg(Color::DarkGray)
    };

    Line::from(vec![
        Span::styled(format!(" [{}] ", b.kind.key()), key_style),
        Span::styled(format!("{:<7}{:>4}x ", b.kind.name(), b.count), text_style),
        Span::styled(format!("cost: {:<8}", format_number(b.current_price)), text_style),
        Span::styled(format!("{:>6}/s ", format_number(b.output())), output_style),
        Span::styled(
            format!("{:>7}", contribution_label(b.contribution)),
            Style::default().fg(Color::Magenta),
        ),
    ])
}

fn render_buildings(
    state: &SpectrumState,
    f: &mut Frame,
    area: Rect,
    click_state: &Rc<RefCell<ClickState>>,
) {
    let mut cl = ClickableList::new();
    for (i, b) in state.buildings.iter().enumerate() {
        cl.push_clickable(building_line(b), BUY_BUILDING_BASE + i as u16);
    }

    let border_color = if state.purchase_flash > 0 { Color::Yellow } else { Color::Green };
    let block = Block::default()
        .borders(panel_borders(area.width))
        .border_style(Style::default().fg(border_color))
        .title(" Buildings — 1-7 で購入 ");

    {
        let mut cs = click_state.borrow_mut();
        cl.register_targets(area, &mut cs, 1, 1, 0);
    }
    f.render_widget(Paragraph::new(cl.into_lines()).block(block), area);
}

fn render_log(state: &SpectrumState, f: &mut Frame, area: Rect) {
    let visible_height = area.height.saturating_sub(2) as usize;

    // Newest entries first
    let log_lines: Vec<Line> = state
        .log
        .iter()
        .rev()
        .take(visible_height)
        .enumerate()
        .map(|(i, entry)| {
            let style = if entry.is_important {
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
            } else if i < 3 {
                Style::default().fg(Color::White)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            Line::from(Span::styled(entry.text.as_str(), style))
        })
        .collect();

    let widget = Paragraph::new(log_lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Blue))
                .title(" Log "),
        )
        .wrap(Wrap { trim: false });
    f.render_widget(widget, area);
}
