//! Wallet State - Balance Display
//!
//! The tab bar shows the player's native balance to two decimal
//! places. The value refreshes whenever the host reports a balance
//! change; until the first read lands there is a placeholder, never
//! a stale or invented number.

/// Balance state for the tab bar.
#[derive(Debug, Clone, PartialEq)]
pub struct WalletView {
    /// Native balance in whole tokens, once read.
    pub balance: Option<f64>,
    /// Two-decimal display string, or a placeholder.
    pub display: String,
}

impl WalletView {
    /// Build the view from the latest balance read.
    pub fn from_balance(balance: Option<f64>) -> Self {
        Self {
            display: format_balance(balance),
            balance,
        }
    }
}

/// Format a balance to two decimals, with a placeholder before the
/// first successful read.
pub fn format_balance(balance: Option<f64>) -> String {
    balance.map_or_else(|| "-.--".to_string(), |value| format!("{value:.2}"))
}
