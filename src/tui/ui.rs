use ratatui::prelude::*;
use ratatui::widgets::{Block, Cell, Clear, Paragraph, Row, Table, Tabs};

use crate::output::{format_factor_reduction, format_multiplier, format_reduction, format_weight};
use crate::scoring::{RiskTier, DISCLAIMER};
use crate::selection::FactorKind;
use crate::tui::app::{App, FlashKind, InputMode};
use crate::tui::theme::ThemeColors;

pub fn draw(frame: &mut Frame, app: &mut App) {
    let area = frame.area();

    // Handle very small terminal sizes gracefully
    if area.height < 12 || area.width < 40 {
        let msg = Paragraph::new("Terminal too small").alignment(Alignment::Center);
        frame.render_widget(msg, area);
        return;
    }

    let chunks = Layout::vertical([
        Constraint::Length(1), // Title bar
        Constraint::Length(5), // Summary panel
        Constraint::Length(1), // Advisory
        Constraint::Length(1), // Tab bar
        Constraint::Fill(1),   // Factor table
        Constraint::Length(1), // Disclaimer
        Constraint::Length(1), // Status bar
    ])
    .split(area);

    render_title(frame, chunks[0], app);
    render_summary(frame, chunks[1], app);
    render_advisory(frame, chunks[2], app);
    render_tabs(frame, chunks[3], app);
    render_table(frame, chunks[4], app);
    frame.render_widget(
        Paragraph::new(DISCLAIMER).style(Style::default().fg(app.colors.muted)),
        chunks[5],
    );
    render_status_bar(frame, chunks[6], app);

    match app.input_mode {
        InputMode::Help => render_help_popup(frame, &app.colors),
        InputMode::Breakdown => render_breakdown_popup(frame, app),
        InputMode::Normal => {}
    }
}

fn render_title(frame: &mut Frame, area: Rect, app: &App) {
    let title = "アルツハイマー型認知症 リスクシミュレーター";
    let selected = format!(
        "{} risks / {} preventions selected",
        app.selection.risks.len(),
        app.selection.preventions.len()
    );
    let padding_len = (area.width as usize)
        .saturating_sub(title.chars().count() * 2 + selected.len());

    let line = Line::from(vec![
        Span::styled(title, Style::default().fg(app.colors.title_color).bold()),
        Span::raw(" ".repeat(padding_len)),
        Span::styled(selected, Style::default().fg(app.colors.muted)),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

fn tier_badge(tier: RiskTier, colors: &ThemeColors) -> Span<'static> {
    Span::styled(
        format!(" {} ", tier.label()),
        Style::default()
            .fg(Color::Black)
            .bg(colors.tier_color(tier))
            .bold(),
    )
}

fn render_summary(frame: &mut Frame, area: Rect, app: &App) {
    let colors = &app.colors;
    let summary = &app.summary;

    let block = Block::bordered().title(" 総合評価 ");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let columns = Layout::horizontal([
        Constraint::Ratio(1, 3),
        Constraint::Ratio(1, 3),
        Constraint::Ratio(1, 3),
    ])
    .split(inner);

    let cards = [
        (
            "リスク要因",
            summary.risk_score,
            tier_badge(summary.risk_tier, colors),
        ),
        (
            "予防効果",
            summary.prevention_score,
            Span::styled(
                format_reduction(summary.risk_reduction_percent),
                Style::default().fg(colors.reduction).bold(),
            ),
        ),
        (
            "総合リスク",
            summary.combined_score,
            tier_badge(summary.combined_tier, colors),
        ),
    ];

    for ((name, score, badge), column) in cards.into_iter().zip(columns.iter()) {
        let lines = vec![
            Line::from(Span::styled(name, Style::default().fg(colors.muted))),
            Line::from(Span::styled(format_multiplier(score), colors.score_value)),
            Line::from(badge),
        ];
        frame.render_widget(Paragraph::new(lines), *column);
    }
}

fn render_advisory(frame: &mut Frame, area: Rect, app: &App) {
    let text = app
        .summary
        .advisories
        .iter()
        .map(|a| a.message())
        .collect::<Vec<_>>()
        .join("  ");
    frame.render_widget(
        Paragraph::new(text).style(Style::default().fg(app.colors.reduction)),
        area,
    );
}

fn render_tabs(frame: &mut Frame, area: Rect, app: &App) {
    let titles = vec![
        format!("リスク評価 ({})", app.selection.risks.len()),
        format!("予防効果 ({})", app.selection.preventions.len()),
    ];
    let selected = match app.current_tab {
        FactorKind::Risk => 0,
        FactorKind::Prevention => 1,
    };

    let tabs = Tabs::new(titles)
        .select(selected)
        .style(app.colors.tab_inactive_style)
        .highlight_style(app.colors.tab_active_style)
        .divider(" | ");

    frame.render_widget(tabs, area);
}

fn render_table(frame: &mut Frame, area: Rect, app: &mut App) {
    let kind = app.current_tab;
    let colors = &app.colors;

    // (id, label, badge) for the active catalog
    let entries: Vec<(&str, &str, String)> = match kind {
        FactorKind::Risk => app
            .catalog
            .risks
            .iter()
            .map(|f| (f.id.as_str(), f.label.as_str(), format_weight(f.risk)))
            .collect(),
        FactorKind::Prevention => app
            .catalog
            .preventions
            .iter()
            .map(|f| {
                (
                    f.id.as_str(),
                    f.label.as_str(),
                    format_factor_reduction(f.reduction_percent()),
                )
            })
            .collect(),
    };

    if entries.is_empty() {
        let empty_msg = Paragraph::new("No factors in catalog")
            .alignment(Alignment::Center)
            .block(Block::default());
        frame.render_widget(empty_msg, area);
        return;
    }

    let rows: Vec<Row> = entries
        .iter()
        .enumerate()
        .map(|(idx, (id, label, badge))| {
            let checked = app.selection.is_selected(kind, id);
            let checkbox = if checked {
                Span::styled("[x]", Style::default().fg(colors.checkbox_on).bold())
            } else {
                Span::styled("[ ]", Style::default().fg(colors.checkbox_off))
            };

            // Alternating row background (odd rows get subtle background)
            let row_style = if idx % 2 == 1 {
                Style::default().bg(colors.row_alt_bg)
            } else {
                Style::default()
            };

            Row::new(vec![
                Cell::from(checkbox),
                Cell::from(*label),
                Cell::from(Line::from(badge.clone()).alignment(Alignment::Right)),
            ])
            .style(row_style)
        })
        .collect();

    let header = match kind {
        FactorKind::Risk => ["", "リスク要因", "倍率"],
        FactorKind::Prevention => ["", "予防対策", "低減"],
    };

    let widths = [
        Constraint::Length(4),  // Checkbox
        Constraint::Fill(1),    // Label
        Constraint::Length(10), // Badge: "44% 低減"
    ];

    let table = Table::new(rows, widths)
        .header(Row::new(header).style(colors.header_style).bottom_margin(1))
        .row_highlight_style(colors.row_selected);

    let state = match kind {
        FactorKind::Risk => &mut app.risk_table,
        FactorKind::Prevention => &mut app.prevention_table,
    };
    frame.render_stateful_widget(table, area, state);
}

fn render_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let colors = &app.colors;

    let text = if let Some((ref msg, _, kind)) = app.flash_message {
        let msg_color = flash_color(kind, colors);
        Line::from(Span::styled(msg.clone(), Style::default().fg(msg_color)))
    } else {
        let hints = [
            ("j/k", ":nav "),
            ("Space", ":toggle "),
            ("Tab", ":switch "),
            ("c", ":clear "),
            ("b", ":breakdown "),
            ("?", ":help "),
            ("q", ":quit"),
        ];

        let mut spans = Vec::new();
        for (i, (key, label)) in hints.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw(" "));
            }
            spans.push(Span::styled(*key, Style::default().fg(colors.status_key_color)));
            spans.push(Span::raw(*label));
        }
        Line::from(spans)
    };

    frame.render_widget(
        Paragraph::new(text).style(Style::default().bg(colors.status_bar_bg)),
        area,
    );
}

fn flash_color(kind: FlashKind, colors: &ThemeColors) -> Color {
    match kind {
        FlashKind::Success => colors.flash_success,
        FlashKind::Warning => colors.flash_error,
        FlashKind::Info => Color::White,
    }
}

/// Create a centered rectangle with fixed width and height
fn centered_rect_fixed(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);

    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;

    Rect {
        x,
        y,
        width,
        height,
    }
}

fn render_help_popup(frame: &mut Frame, colors: &ThemeColors) {
    let popup_area = centered_rect_fixed(50, 14, frame.area());
    frame.render_widget(Clear, popup_area);

    let block = Block::bordered()
        .title(Span::styled(" Keyboard Shortcuts ", colors.popup_title))
        .border_style(Style::default().fg(colors.popup_border))
        .style(Style::default().bg(colors.popup_bg));
    let inner = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    let key_style = Style::default().fg(colors.status_key_color).bold();
    let entries = [
        ("j / Down      ", "Move down"),
        ("k / Up        ", "Move up"),
        ("Space / Enter ", "Toggle factor"),
        ("Tab / <- ->   ", "Switch risk/prevention tab"),
        ("c             ", "Clear this tab"),
        ("C             ", "Clear both tabs"),
        ("b             ", "Show score breakdown"),
        ("?             ", "Show/hide this help"),
        ("q / Ctrl-c    ", "Quit"),
    ];

    let mut help_lines: Vec<Line> = entries
        .iter()
        .map(|(key, desc)| Line::from(vec![Span::styled(*key, key_style), Span::raw(*desc)]))
        .collect();
    help_lines.push(Line::from(""));
    help_lines.push(Line::from(Span::styled(
        "Press any key to close",
        Style::default().fg(colors.muted),
    )));

    frame.render_widget(Paragraph::new(help_lines), inner);
}

/// Step-by-step product of the selected factors
fn render_breakdown_popup(frame: &mut Frame, app: &App) {
    let colors = &app.colors;
    let factor_count = app.summary.breakdown.len() as u16;
    let popup_area = centered_rect_fixed(70, factor_count + 6, frame.area());
    frame.render_widget(Clear, popup_area);

    let block = Block::bordered()
        .title(Span::styled(" Score Breakdown ", colors.popup_title))
        .border_style(Style::default().fg(colors.popup_border))
        .style(Style::default().bg(colors.popup_bg));
    let inner = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    let mut lines = vec![Line::from(Span::styled(
        "1.000 (base)",
        Style::default().fg(colors.muted),
    ))];

    if app.summary.breakdown.is_empty() {
        lines.push(Line::from("No factors selected"));
    }

    for factor in &app.summary.breakdown {
        let arrow_color = if factor.after > factor.before {
            colors.tier_high
        } else {
            colors.tier_standard
        };
        lines.push(Line::from(vec![
            Span::styled(
                format!("x{:<5} ", factor.weight),
                Style::default().fg(arrow_color).bold(),
            ),
            Span::raw(format!("{:.3} -> {:.3}  ", factor.before, factor.after)),
            Span::raw(factor.label.clone()),
        ]));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled("総合リスク ", Style::default().bold()),
        Span::styled(format_multiplier(app.summary.combined_score), colors.score_value),
        Span::raw(" "),
        tier_badge(app.summary.combined_tier, colors),
    ]));

    frame.render_widget(Paragraph::new(lines), inner);
}
