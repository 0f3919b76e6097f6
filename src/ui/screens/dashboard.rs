use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Paragraph},
    Frame,
};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use crate::ui::app::App;
use crate::ui::theme;
use crate::ui::util::format_amount;

/// Most recent days shown in the daily chart.
const MAX_DAYS: usize = 14;

pub(crate) fn render(f: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(7), // Summary cards
            Constraint::Min(10),   // Charts
        ])
        .split(area);

    render_summary_cards(f, chunks[0], app);

    let charts = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(30), Constraint::Min(20)])
        .split(chunks[1]);

    render_totals_chart(f, charts[0], app);
    render_daily_chart(f, charts[1], app);
}

fn render_summary_cards(f: &mut Frame, area: Rect, app: &App) {
    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(area);

    let income_count = app.transactions.iter().filter(|t| t.is_income()).count();
    let expense_count = app.transactions.iter().filter(|t| t.is_expense()).count();
    let currency = &app.config.currency;

    render_card(
        f,
        cards[0],
        "Income",
        format_amount(app.totals.income, currency),
        theme::GREEN,
        format!("{income_count} txns"),
    );
    render_card(
        f,
        cards[1],
        "Expenses",
        format_amount(app.totals.expense, currency),
        theme::RED,
        format!("{expense_count} txns"),
    );
    render_card(
        f,
        cards[2],
        "Balance",
        format_amount(app.totals.balance, currency),
        theme::balance_color(app.totals.balance),
        app.window.to_string(),
    );
}

fn render_card(
    f: &mut Frame,
    area: Rect,
    title: &str,
    display: String,
    color: ratatui::style::Color,
    subtitle: String,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::OVERLAY))
        .title(Span::styled(format!(" {title} "), theme::title_style()));

    let text = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            display,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(subtitle, theme::dim_style())),
    ])
    .centered()
    .block(block);

    f.render_widget(text, area);
}

fn chart_block(title: &str) -> Block<'_> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::OVERLAY))
        .title(Span::styled(format!(" {title} "), theme::title_style()))
}

fn bar_value(amount: Decimal) -> u64 {
    amount.abs().round().to_u64().unwrap_or(0)
}

fn render_empty(f: &mut Frame, area: Rect, title: &str) {
    let msg = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            "No transactions in this period. Press a to add one",
            theme::dim_style(),
        )),
    ])
    .centered()
    .block(chart_block(title));
    f.render_widget(msg, area);
}

fn render_totals_chart(f: &mut Frame, area: Rect, app: &App) {
    const TITLE: &str = "Income vs Expense";
    if app.transactions.is_empty() {
        render_empty(f, area, TITLE);
        return;
    }

    let bars = [
        Bar::default()
            .value(bar_value(app.totals.income))
            .text_value(String::new())
            .label(Line::from("In"))
            .style(theme::income_style()),
        Bar::default()
            .value(bar_value(app.totals.expense))
            .text_value(String::new())
            .label(Line::from("Out"))
            .style(theme::expense_style()),
    ];

    let chart = BarChart::default()
        .block(chart_block(TITLE))
        .data(BarGroup::default().bars(&bars))
        .bar_width(10)
        .bar_gap(2);

    f.render_widget(chart, area);
}

fn render_daily_chart(f: &mut Frame, area: Rect, app: &App) {
    const TITLE: &str = "Daily Income / Expense";
    if app.daily.is_empty() {
        render_empty(f, area, TITLE);
        return;
    }

    let skip = app.daily.len().saturating_sub(MAX_DAYS);
    let groups: Vec<BarGroup> = app
        .daily
        .iter()
        .skip(skip)
        .map(|day| {
            let bars = [
                Bar::default()
                    .value(bar_value(day.income))
                    .text_value(String::new())
                    .style(theme::income_style()),
                Bar::default()
                    .value(bar_value(day.expense))
                    .text_value(String::new())
                    .style(theme::expense_style()),
            ];
            BarGroup::default()
                .label(Line::from(day.day.format("%d/%m").to_string()))
                .bars(&bars)
        })
        .collect();

    let mut chart = BarChart::default()
        .block(chart_block(TITLE))
        .bar_width(3)
        .bar_gap(0)
        .group_gap(2);
    for group in groups {
        chart = chart.data(group);
    }

    f.render_widget(chart, area);
}
