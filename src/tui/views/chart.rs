//! Income versus expense chart
//!
//! A filled pie drawn on a braille canvas. The chart is rebuilt from scratch
//! on every redraw and is absent while both totals are zero.

use std::f64::consts::TAU;

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    symbols::Marker,
    text::{Line, Span},
    widgets::{
        canvas::{Canvas, Points},
        Block, Borders, Paragraph,
    },
    Frame,
};

use crate::models::Money;
use crate::services::Totals;
use crate::tui::app::App;

const RINGS: usize = 24;
const RAY_STEPS: usize = 180;

/// Chart data derived from one set of totals
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExpenseChart {
    pub income: Money,
    pub expense: Money,
    /// Fraction of the circle taken by income
    pub income_share: f64,
}

impl ExpenseChart {
    /// Build a chart, or `None` when there is nothing to draw
    pub fn from_totals(totals: &Totals) -> Option<Self> {
        totals.income_share().map(|income_share| Self {
            income: totals.income,
            expense: totals.expense,
            income_share,
        })
    }

    /// Sample points of a unit pie split into (income, expense) slices
    pub fn slices(&self) -> (Vec<(f64, f64)>, Vec<(f64, f64)>) {
        let split = self.income_share * TAU;
        let mut income = Vec::new();
        let mut expense = Vec::new();

        for ring in 1..=RINGS {
            let radius = ring as f64 / RINGS as f64;
            for step in 0..RAY_STEPS {
                let angle = step as f64 / RAY_STEPS as f64 * TAU;
                // Start at twelve o'clock and run clockwise
                let point = (radius * angle.sin(), radius * angle.cos());
                if angle < split {
                    income.push(point);
                } else {
                    expense.push(point);
                }
            }
        }

        (income, expense)
    }
}

/// Render the chart panel
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let block = Block::default()
        .title(" Income vs Expense ")
        .title_style(theme.title_style())
        .borders(Borders::ALL)
        .border_style(theme.border_style())
        .style(theme.base());

    let Some(chart) = app.view.chart else {
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled("No data yet", theme.muted_style())))
                .block(block),
            area,
        );
        return;
    };

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(2)])
        .split(inner);

    // Terminal cells are about twice as tall as they are wide
    let aspect = if chunks[0].height == 0 {
        1.0
    } else {
        f64::from(chunks[0].width) / (2.0 * f64::from(chunks[0].height))
    };
    let x_bound = aspect.max(1.0) * 1.05;
    let y_bound = (1.0 / aspect).max(1.0) * 1.05;
    let (income_points, expense_points) = chart.slices();

    let canvas = Canvas::default()
        .marker(Marker::Braille)
        .background_color(theme.background)
        .x_bounds([-x_bound, x_bound])
        .y_bounds([-y_bound, y_bound])
        .paint(|ctx| {
            ctx.draw(&Points {
                coords: &income_points,
                color: theme.income,
            });
            ctx.draw(&Points {
                coords: &expense_points,
                color: theme.expense,
            });
        });
    frame.render_widget(canvas, chunks[0]);

    let symbol = &app.settings.currency_symbol;
    let legend = vec![
        Line::from(vec![
            Span::styled("■ ", theme.amount_style(false)),
            Span::raw(format!(
                "Income  {} ({:.0}%)",
                chart.income.format_with_symbol(symbol),
                chart.income_share * 100.0
            )),
        ]),
        Line::from(vec![
            Span::styled("■ ", theme.amount_style(true)),
            Span::raw(format!(
                "Expense {} ({:.0}%)",
                chart.expense.format_with_symbol(symbol),
                (1.0 - chart.income_share) * 100.0
            )),
        ]),
    ];
    frame.render_widget(Paragraph::new(legend).style(theme.base()), chunks[1]);
}
