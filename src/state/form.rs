//! Bridge form state: token selectors, amount input and field focus.

use crate::domain::TokenPair;
use crate::domain::amount::accepts_amount_char;

// ============================================================================
// Form Field
// ============================================================================

/// Fields of the bridge form, in focus order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    #[default]
    From,
    To,
    Amount,
}

impl FormField {
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::From => Self::To,
            Self::To => Self::Amount,
            Self::Amount => Self::From,
        }
    }

    #[must_use]
    pub const fn prev(self) -> Self {
        match self {
            Self::From => Self::Amount,
            Self::To => Self::From,
            Self::Amount => Self::To,
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::From => "From",
            Self::To => "To",
            Self::Amount => "Amount",
        }
    }
}

// ============================================================================
// Bridge Form
// ============================================================================

/// Inputs of the bridge form. Defaults to RUPX -> BRUPX with an empty amount.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BridgeForm {
    pub pair: TokenPair,
    pub amount: String,
    pub focus: FormField,
}

impl BridgeForm {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_field(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn prev_field(&mut self) {
        self.focus = self.focus.prev();
    }

    /// Flips the token in the focused selector. No-op on the amount field.
    pub fn cycle_focused_token(&mut self) {
        match self.focus {
            FormField::From => self.pair.cycle_from(),
            FormField::To => self.pair.cycle_to(),
            FormField::Amount => {}
        }
    }

    pub fn swap(&mut self) {
        self.pair.swap();
    }

    /// Appends `c` if it keeps the amount a plain decimal.
    pub fn push_char(&mut self, c: char) {
        if accepts_amount_char(&self.amount, c) {
            self.amount.push(c);
        }
    }

    pub fn backspace(&mut self) {
        self.amount.pop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Token;

    #[test]
    fn test_focus_cycle() {
        let mut form = BridgeForm::new();
        assert_eq!(form.focus, FormField::From);
        form.next_field();
        form.next_field();
        assert_eq!(form.focus, FormField::Amount);
        form.next_field();
        assert_eq!(form.focus, FormField::From);
        form.prev_field();
        assert_eq!(form.focus, FormField::Amount);
    }

    #[test]
    fn test_cycle_focused_token() {
        let mut form = BridgeForm::new();
        form.cycle_focused_token();
        assert_eq!(form.pair.from, Token::Brupx);
        assert_eq!(form.pair.to, Token::Brupx);

        form.next_field();
        form.cycle_focused_token();
        assert_eq!(form.pair.to, Token::Rupx);

        form.next_field();
        form.cycle_focused_token();
        assert_eq!(form.pair, TokenPair::new(Token::Brupx, Token::Rupx));
    }

    #[test]
    fn test_amount_input() {
        let mut form = BridgeForm::new();
        for c in "1.5.x0".chars() {
            form.push_char(c);
        }
        assert_eq!(form.amount, "1.50");

        form.backspace();
        assert_eq!(form.amount, "1.5");
        form.backspace();
        form.backspace();
        form.backspace();
        form.backspace();
        assert_eq!(form.amount, "");
    }

    #[test]
    fn test_swap() {
        let mut form = BridgeForm::new();
        form.swap();
        assert_eq!(form.pair, TokenPair::new(Token::Brupx, Token::Rupx));
    }
}
