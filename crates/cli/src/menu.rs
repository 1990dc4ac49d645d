//! Main menu options.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Register,
    Remove,
    Move,
    StockReport,
    ValuationReport,
    History,
    Quit,
}

impl MenuChoice {
    pub const ALL: [MenuChoice; 7] = [
        MenuChoice::Register,
        MenuChoice::Remove,
        MenuChoice::Move,
        MenuChoice::StockReport,
        MenuChoice::ValuationReport,
        MenuChoice::History,
        MenuChoice::Quit,
    ];

    pub fn key(self) -> &'static str {
        match self {
            MenuChoice::Register => "1",
            MenuChoice::Remove => "2",
            MenuChoice::Move => "3",
            MenuChoice::StockReport => "4",
            MenuChoice::ValuationReport => "5",
            MenuChoice::History => "6",
            MenuChoice::Quit => "7",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MenuChoice::Register => "Register product",
            MenuChoice::Remove => "Remove product",
            MenuChoice::Move => "Stock movement (inbound/outbound)",
            MenuChoice::StockReport => "Stock report (low stock)",
            MenuChoice::ValuationReport => "Valuation report (total value and ABC curve)",
            MenuChoice::History => "Movement history",
            MenuChoice::Quit => "Quit",
        }
    }

    pub fn parse(input: &str) -> Option<Self> {
        let input = input.trim();
        Self::ALL.into_iter().find(|c| c.key() == input)
    }
}

/// The menu as printed before every selection.
pub fn render() -> String {
    let rule = "=".repeat(50);
    let mut lines = vec![
        String::new(),
        rule.clone(),
        "    Mini-ERP - Inventory Module".to_string(),
        rule,
    ];
    for choice in MenuChoice::ALL {
        lines.push(format!("{}. {}", choice.key(), choice.label()));
    }
    lines.push("-".repeat(50));
    lines.join("\n")
}
