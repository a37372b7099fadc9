//! Watch dashboard: VPN state, verdict banner, probe table, audit tail.

use crate::app::App;
use crate::constants;
use crate::state::{RiskLevel, VpnState};
use crate::theme;
use crate::utils;
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
    Frame,
};

/// Render the dashboard.
pub fn render(frame: &mut Frame, app: &App) {
    let chunks = Layout::vertical([
        Constraint::Length(3), // header
        Constraint::Length(3), // verdict banner
        Constraint::Min(5),    // probe table
        Constraint::Length(8), // audit tail
        Constraint::Length(1), // footer
    ])
    .split(frame.area());

    render_header(frame, app, chunks[0]);
    render_verdict(frame, app, chunks[1]);
    render_probes(frame, app, chunks[2]);
    render_audit_tail(frame, app, chunks[3]);
    crate::ui::widgets::footer::render(frame, chunks[4]);
}

fn vpn_state_style(state: VpnState) -> Style {
    let color = match state {
        VpnState::Connected => theme::GREEN,
        VpnState::Disconnected => theme::TEXT_SECONDARY,
        VpnState::Connecting | VpnState::Disconnecting => theme::YELLOW,
        VpnState::Error => theme::RED,
    };
    Style::default().fg(color).add_modifier(Modifier::BOLD)
}

fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let vpn_state = app
        .investigation
        .as_ref()
        .map_or(VpnState::Disconnected, |i| i.vpn_state);

    let line = Line::from(vec![
        Span::styled(
            format!(" {} ", constants::APP_NAME),
            Style::default()
                .fg(theme::ACCENT_PRIMARY)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled("│ VPN: ", Style::default().fg(theme::TEXT_SECONDARY)),
        Span::styled(vpn_state.to_string(), vpn_state_style(vpn_state)),
        Span::styled(
            format!("  │ config: {}", app.config_source),
            Style::default().fg(theme::TEXT_SECONDARY),
        ),
    ]);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::BORDER_DEFAULT));
    frame.render_widget(Paragraph::new(line).block(block), area);
}

fn render_verdict(frame: &mut Frame, app: &App, area: Rect) {
    let (text, color) = match &app.investigation {
        None => (
            "Waiting for first investigation pass...".to_string(),
            theme::TEXT_SECONDARY,
        ),
        Some(investigation) => {
            let verdict = &investigation.verdict;
            let color = match verdict.risk {
                RiskLevel::High => theme::RED,
                RiskLevel::Medium => theme::YELLOW,
                RiskLevel::Low => theme::GREEN,
            };
            (
                format!("{}  —  risk {}", verdict.summary(), verdict.risk),
                color,
            )
        }
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color))
        .title(Span::styled(
            " Verdict ",
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ));
    let paragraph = Paragraph::new(Span::styled(
        text,
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    ))
    .alignment(Alignment::Center)
    .block(block);
    frame.render_widget(paragraph, area);
}

fn render_probes(frame: &mut Frame, app: &App, area: Rect) {
    let header = Row::new(vec!["Target", "Status", "Latency", "Loss"]).style(
        Style::default()
            .fg(theme::TEXT_SECONDARY)
            .add_modifier(Modifier::BOLD),
    );

    let rows: Vec<Row> = match &app.investigation {
        None => app
            .config
            .probe
            .targets
            .iter()
            .map(|target| {
                Row::new(vec![
                    Cell::from(target.clone()),
                    Cell::from("pending").style(Style::default().fg(theme::TEXT_SECONDARY)),
                    Cell::from("---"),
                    Cell::from("---"),
                ])
            })
            .collect(),
        Some(investigation) => investigation
            .probes
            .iter()
            .map(|probe| {
                let (status, style) = if probe.is_reachable {
                    // Reachable local target is the alarming case here.
                    ("reachable", Style::default().fg(theme::RED))
                } else {
                    ("blocked", Style::default().fg(theme::GREEN))
                };
                let latency = probe
                    .latency_ms
                    .map_or_else(|| "---".to_string(), |ms| format!("{ms:.1} ms"));
                Row::new(vec![
                    Cell::from(probe.host.clone()),
                    Cell::from(status).style(style.add_modifier(Modifier::BOLD)),
                    Cell::from(latency),
                    Cell::from(format!("{:.0}%", probe.packet_loss_percent)),
                ])
            })
            .collect(),
    };

    let table = Table::new(
        rows,
        [
            Constraint::Min(24),
            Constraint::Length(10),
            Constraint::Length(10),
            Constraint::Length(6),
        ],
    )
    .header(header)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::BORDER_DEFAULT))
            .title(" Local Targets "),
    );
    frame.render_widget(table, area);
}

fn render_audit_tail(frame: &mut Frame, app: &App, area: Rect) {
    let entries = app.audit.recent(constants::AUDIT_TAIL_LEN);
    let lines: Vec<Line> = if entries.is_empty() {
        vec![Line::from(Span::styled(
            " (empty)",
            Style::default().fg(theme::TEXT_SECONDARY),
        ))]
    } else {
        entries
            .iter()
            .rev()
            .map(|entry| {
                Line::from(vec![
                    Span::styled(
                        format!(" {:>8} ", utils::format_age(entry.timestamp)),
                        Style::default().fg(theme::TEXT_SECONDARY),
                    ),
                    Span::styled(
                        entry.message.clone(),
                        Style::default().fg(theme::TEXT_PRIMARY),
                    ),
                ])
            })
            .collect()
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::BORDER_DEFAULT))
        .title(" Audit Log ");
    frame.render_widget(Paragraph::new(lines).block(block), area);
}
