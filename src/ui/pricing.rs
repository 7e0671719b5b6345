// Pricing view rendering.
// Billing toggle, tier cards, comparison table, and FAQ.

use ratatui::{prelude::*, widgets::*};

use crate::catalog::pricing::{COMPARISON, FAQ};
use crate::catalog::{BillingCycle, PLANS, format_price};
use crate::state::PricingPanel;

use super::widgets::titled_block;

pub fn draw_pricing(frame: &mut Frame, panel: &PricingPanel, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),                           // Billing toggle
            Constraint::Min(14),                             // Cards
            Constraint::Length(COMPARISON.len() as u16 + 3), // Comparison
            Constraint::Length(FAQ.len() as u16 * 2 + 2),    // FAQ
        ])
        .split(area);

    draw_billing_toggle(frame, panel, chunks[0]);
    draw_cards(frame, panel, chunks[1]);
    draw_comparison(frame, chunks[2]);
    draw_faq(frame, chunks[3]);
}

fn draw_billing_toggle(frame: &mut Frame, panel: &PricingPanel, area: Rect) {
    let active = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);
    let inactive = Style::default().fg(Color::DarkGray);
    let (monthly, yearly) = match panel.billing {
        BillingCycle::Monthly => (active, inactive),
        BillingCycle::Yearly => (inactive, active),
    };

    let toggle = Paragraph::new(Line::from(vec![
        Span::styled("Monthly", monthly),
        Span::raw("  ⇄ (b)  "),
        Span::styled("Yearly", yearly),
        Span::styled("  Save 10%", Style::default().fg(Color::Green)),
        Span::styled(
            format!("    Current plan: {}", panel.current().name),
            Style::default().fg(Color::DarkGray),
        ),
    ]))
    .alignment(Alignment::Center);
    frame.render_widget(toggle, area);
}

fn draw_cards(frame: &mut Frame, panel: &PricingPanel, area: Rect) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 4); 4])
        .split(area);

    for (index, (plan, column)) in PLANS.iter().zip(columns.iter()).enumerate() {
        let mut lines = Vec::new();

        if plan.popular {
            lines.push(Line::from(Span::styled(
                "Most Popular",
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            )));
        }
        if panel.is_current(plan) {
            lines.push(Line::from(Span::styled(
                "Current Plan",
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
            )));
        }

        if plan.is_free() {
            lines.push(Line::from(Span::styled(
                "Free",
                Style::default().add_modifier(Modifier::BOLD),
            )));
        } else {
            lines.push(Line::from(vec![
                Span::styled(
                    format_price(plan.price_cents(panel.billing)),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::styled("/month", Style::default().fg(Color::DarkGray)),
            ]));
            if panel.billing == BillingCycle::Yearly {
                lines.push(Line::from(Span::styled(
                    format!("Save ${}/year", plan.yearly_savings_dollars()),
                    Style::default().fg(Color::Green),
                )));
            }
        }
        lines.push(Line::from(""));

        for feature in plan.features {
            lines.push(Line::from(vec![
                Span::styled("✓ ", Style::default().fg(Color::Green)),
                Span::raw(*feature),
            ]));
        }
        for limitation in plan.limitations {
            lines.push(Line::from(Span::styled(
                format!("· {}", limitation),
                Style::default().fg(Color::DarkGray),
            )));
        }

        lines.push(Line::from(""));
        let action_style = if panel.is_current(plan) {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default().fg(Color::Black).bg(Color::Cyan)
        };
        lines.push(Line::from(Span::styled(
            format!(" {} ", panel.action_label(plan)),
            action_style,
        )));

        let border = if index == panel.selected {
            Color::Yellow
        } else if plan.popular {
            Color::Cyan
        } else if panel.is_current(plan) {
            Color::Green
        } else {
            Color::DarkGray
        };

        let card = Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .block(titled_block(plan.name).border_style(Style::default().fg(border)));
        frame.render_widget(card, *column);
    }
}

fn draw_comparison(frame: &mut Frame, area: Rect) {
    let header = Row::new(
        std::iter::once("Features".to_string()).chain(PLANS.iter().map(|p| p.name.to_string())),
    )
    .style(Style::default().add_modifier(Modifier::BOLD));

    let rows = COMPARISON.iter().map(|(label, cells)| {
        Row::new(std::iter::once(label.to_string()).chain(cells.iter().map(|c| c.to_string())))
    });

    let widths = [
        Constraint::Percentage(36),
        Constraint::Percentage(16),
        Constraint::Percentage(16),
        Constraint::Percentage(16),
        Constraint::Percentage(16),
    ];
    let table = Table::new(rows, widths)
        .header(header)
        .block(titled_block("Compare All Features"));
    frame.render_widget(table, area);
}

fn draw_faq(frame: &mut Frame, area: Rect) {
    let lines: Vec<Line> = FAQ
        .iter()
        .flat_map(|(question, answer)| {
            [
                Line::from(Span::styled(
                    *question,
                    Style::default().add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(*answer, Style::default().fg(Color::DarkGray))),
            ]
        })
        .collect();
    let faq = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(titled_block("Frequently Asked Questions"));
    frame.render_widget(faq, area);
}
