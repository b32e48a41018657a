//! Balances card: one column per token.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::Line,
    widgets::Paragraph,
};

use crate::client::WalletProvider;
use crate::domain::{Token, display_balance};
use crate::state::App;
use crate::theme::Palette;
use crate::ui::helpers::create_border_block;

/// Renders both balances side by side.
pub fn render<W: WalletProvider>(frame: &mut Frame, area: Rect, app: &App<W>) {
    let palette = app.theme.palette();
    let block = create_border_block("Balances", false, &palette);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(inner);

    render_stat(frame, columns[0], Token::Rupx, &app.balances.rupx, &palette);
    render_stat(frame, columns[1], Token::Brupx, &app.balances.brupx, &palette);
}

fn render_stat(frame: &mut Frame, area: Rect, token: Token, balance: &str, palette: &Palette) {
    let lines = vec![
        Line::styled(format!("{token} Balance"), palette.muted_style()),
        Line::styled(display_balance(balance), palette.title_style()),
        Line::styled("Updated in real-time", palette.muted_style()),
    ];
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{BalanceSnapshot, NetworkStatus};
    use crate::test_utils::{AppMother, buffer_to_string};
    use ratatui::{Terminal, backend::TestBackend};

    #[test]
    fn test_placeholder_balances() {
        let app = AppMother::app();
        let mut terminal = Terminal::new(TestBackend::new(50, 5)).unwrap();
        terminal
            .draw(|frame| render(frame, frame.area(), &app))
            .unwrap();

        let content = buffer_to_string(terminal.backend().buffer());
        assert!(content.starts_with("╭ Balances "));
        assert!(content.contains("RUPX Balance"));
        assert!(content.contains("BRUPX Balance"));
        assert_eq!(content.matches("0.0000").count(), 2);
        assert_eq!(content.matches("Updated in real-time").count(), 2);
    }

    #[test]
    fn test_balances_rounded_to_four_decimals() {
        let mut app = AppMother::connected(799);
        app.balances = BalanceSnapshot {
            network: NetworkStatus::from_chain_id(799),
            rupx: "12.3456789".to_string(),
            brupx: "3".to_string(),
        };

        let mut terminal = Terminal::new(TestBackend::new(60, 5)).unwrap();
        terminal
            .draw(|frame| render(frame, frame.area(), &app))
            .unwrap();
        let content = buffer_to_string(terminal.backend().buffer());

        assert!(content.contains("12.3457"));
        assert!(content.contains("3.0000"));
    }
}
