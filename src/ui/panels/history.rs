//! Recent transactions table.

use ratatui::{
    Frame,
    layout::{Constraint, Rect},
    style::{Modifier, Style},
    widgets::{Cell, Row, Table},
};

use crate::client::WalletProvider;
use crate::state::App;
use crate::theme::SUCCESS_COLOR;
use crate::ui::helpers::create_border_block;

const HEADERS: [&str; 5] = ["From", "To", "Amount", "Timestamp", "Status"];

/// Renders the history table. Callers skip this while the history is empty.
pub fn render<W: WalletProvider>(frame: &mut Frame, area: Rect, app: &App<W>) {
    let palette = app.theme.palette();

    let header = Row::new(HEADERS.iter().map(|h| Cell::from(*h)))
        .style(palette.muted_style().add_modifier(Modifier::BOLD));

    let rows: Vec<Row> = app
        .history
        .iter()
        .map(|record| {
            Row::new(vec![
                Cell::from(record.from.symbol()),
                Cell::from(record.to.symbol()),
                Cell::from(record.amount.clone()),
                Cell::from(record.formatted_timestamp()),
                Cell::from(record.status()).style(Style::new().fg(SUCCESS_COLOR)),
            ])
            .style(palette.text_style())
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Length(6),
            Constraint::Length(6),
            Constraint::Min(10),
            Constraint::Length(19),
            Constraint::Length(8),
        ],
    )
    .header(header)
    .column_spacing(2)
    .block(create_border_block("Recent Transactions", false, &palette));

    frame.render_widget(table, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Token, TransactionRecord};
    use crate::test_utils::{AppMother, buffer_to_string};
    use ratatui::{Terminal, backend::TestBackend};

    #[test]
    fn test_history_rows_most_recent_first() {
        let mut app = AppMother::app();
        app.history
            .push(TransactionRecord::new(Token::Rupx, Token::Brupx, "1.5", "0x01"));
        app.history
            .push(TransactionRecord::new(Token::Brupx, Token::Rupx, "42", "0x02"));

        let mut terminal = Terminal::new(TestBackend::new(70, 6)).unwrap();
        terminal
            .draw(|frame| render(frame, frame.area(), &app))
            .unwrap();
        let content = buffer_to_string(terminal.backend().buffer());
        let lines: Vec<&str> = content.lines().collect();

        assert!(lines[0].contains("Recent Transactions"));
        assert!(lines[1].contains("From"));
        assert!(lines[1].contains("Timestamp"));
        assert!(lines[1].contains("Status"));
        assert!(lines[2].contains("BRUPX"));
        assert!(lines[2].contains("42"));
        assert!(lines[2].contains("Success"));
        assert!(lines[3].contains("1.5"));
    }
}
