//! TUI layout and widget rendering.

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{BarChart, Block, Borders, Gauge, Paragraph};

use super::runtime::App;
use super::style::{self, Palette};
use crate::opt::types::BUILDING_LABELS;

/// Renders the full TUI frame.
pub fn render(frame: &mut Frame, app: &App) {
    let pal = style::palette(&app.scenario.ui.theme);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // header
            Constraint::Length(3), // input sliders
            Constraint::Min(10),   // before/after charts
            Constraint::Length(5), // metrics panel
            Constraint::Length(1), // footer
        ])
        .split(frame.area());

    render_header(frame, app, &pal, chunks[0]);
    render_sliders(frame, app, &pal, chunks[1]);
    render_charts(frame, app, &pal, chunks[2]);
    render_metrics(frame, app, &pal, chunks[3]);
    render_footer(frame, &pal, chunks[4]);
}

/// Header bar: title, preset name, run state.
fn render_header(frame: &mut Frame, app: &App, pal: &Palette, area: Rect) {
    let state_label = if app.is_optimized() {
        "OPTIMIZED"
    } else {
        "READY"
    };

    let header = Line::from(vec![
        Span::styled(
            format!(" {} ", app.scenario.ui.title),
            Style::default()
                .fg(pal.header_fg)
                .bg(pal.header_bg)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" "),
        Span::styled(
            &app.preset_name,
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw(format!(" │ runs={} │ {} ", app.runs, state_label)),
    ]);
    frame.render_widget(Paragraph::new(header), area);
}

/// One bounded slider gauge per building; the selected one is accented.
fn render_sliders(frame: &mut Frame, app: &App, pal: &Palette, area: Rect) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 3); 3])
        .split(area);

    let inp = &app.scenario.input;
    let span = (inp.max_kw - inp.min_kw).max(1);

    for (i, label) in BUILDING_LABELS.iter().enumerate() {
        let kw = app.loads[i];
        let ratio = f64::from(kw.saturating_sub(inp.min_kw)) / f64::from(span);
        let selected = i == app.selected;

        let title = if selected {
            format!(" ▸ {label} ")
        } else {
            format!("   {label} ")
        };
        let border_style = if selected {
            Style::default().fg(pal.accent).add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };

        let gauge = Gauge::default()
            .block(
                Block::default()
                    .title(title)
                    .borders(Borders::ALL)
                    .border_style(border_style),
            )
            .gauge_style(Style::default().fg(pal.slider))
            .ratio(ratio.clamp(0.0, 1.0))
            .label(format!("{kw} kW"));
        frame.render_widget(gauge, columns[i]);
    }
}

/// Before/after bar charts on a shared kW scale.
fn render_charts(frame: &mut Frame, app: &App, pal: &Palette, area: Rect) {
    let halves = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 2); 2])
        .split(area);

    let max_kw = u64::from(app.scenario.input.max_kw);

    let before_data: Vec<(&str, u64)> = BUILDING_LABELS
        .iter()
        .zip(app.loads)
        .map(|(label, kw)| (*label, u64::from(kw)))
        .collect();

    let before_chart = BarChart::default()
        .block(
            Block::default()
                .title(" Grid State · Before ")
                .borders(Borders::ALL),
        )
        .data(before_data.as_slice())
        .bar_width(7)
        .bar_gap(2)
        .max(max_kw)
        .bar_style(Style::default().fg(pal.bar_before))
        .value_style(Style::default().add_modifier(Modifier::BOLD));
    frame.render_widget(before_chart, halves[0]);

    if let Some(record) = app.last_result() {
        let after_values = record.after.values();
        let after_data: Vec<(&str, u64)> = BUILDING_LABELS
            .iter()
            .zip(after_values)
            .map(|(label, kw)| (*label, u64::from(kw)))
            .collect();

        let after_chart = BarChart::default()
            .block(
                Block::default()
                    .title(" Optimized · After ")
                    .borders(Borders::ALL),
            )
            .data(after_data.as_slice())
            .bar_width(7)
            .bar_gap(2)
            .max(max_kw)
            .bar_style(Style::default().fg(pal.bar_after))
            .value_style(Style::default().add_modifier(Modifier::BOLD));
        frame.render_widget(after_chart, halves[1]);
    } else {
        let placeholder = Paragraph::new(Line::from(Span::styled(
            "  No result yet — press 'o' to optimize.",
            Style::default().fg(pal.footer_fg),
        )))
        .block(
            Block::default()
                .title(" Optimized · After ")
                .borders(Borders::ALL),
        );
        frame.render_widget(placeholder, halves[1]);
    }
}

/// Impact metrics panel for the latest run.
fn render_metrics(frame: &mut Frame, app: &App, pal: &Palette, area: Rect) {
    let lines = if let Some(r) = app.last_result() {
        let m = &r.metrics;
        vec![
            Line::from(format!(
                "  total: {:>4} kW → {:>4} kW     peak: {:>3} kW → {:>3} kW",
                r.before.total_kw(),
                r.after.total_kw(),
                r.before.peak_kw(),
                r.after.peak_kw(),
            )),
            Line::from(vec![
                Span::raw(format!(
                    "  savings={:>4} kW   peak_cut={:>3} kW   efficiency=",
                    m.total_savings_kw, m.peak_reduction_kw,
                )),
                Span::styled(
                    format!("{:.2}%", m.savings_percent),
                    Style::default()
                        .fg(style::savings_color(m.savings_percent))
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(Span::styled(
                format!("  floor_hits={}", r.floor_hits),
                Style::default().fg(pal.positive),
            )),
        ]
    } else {
        vec![Line::from(
            "  Adjust the loads, then trigger an optimization.",
        )]
    };

    let block = Block::default().title(" Impact Metrics ").borders(Borders::ALL);
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// Footer with keybinding hints.
fn render_footer(frame: &mut Frame, pal: &Palette, area: Rect) {
    let footer = Paragraph::new(Line::from(Span::styled(
        " q:Quit  ←/→:Building  ↑/↓:±1  PgUp/PgDn:±step  o:Optimize  r:Reset  1-4:Preset",
        Style::default().fg(pal.footer_fg),
    )));
    frame.render_widget(footer, area);
}
