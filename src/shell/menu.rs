use crate::tree::traversal::Order;

/// One entry of the console menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    AddOrUpdate,
    Search,
    Delete,
    /// List every contact; carries the traversal to print.
    List(Order),
    Statistics,
    Quit,
    Visualize,
}

/// Menu lines in display order, keyed by the digit the user types.
pub const MENU: &[(&str, &str)] = &[
    ("1", "Add or update contact"),
    ("2", "Search contact"),
    ("3", "Delete contact"),
    ("4", "List all contacts (alphabetical order)"),
    ("5", "Show preorder traversal"),
    ("6", "Show postorder traversal"),
    ("7", "Show tree statistics"),
    ("8", "Quit"),
    ("9", "Show tree visual representation"),
];

impl MenuChoice {
    /// Parse a menu selection. Surrounding whitespace is ignored;
    /// anything else unrecognised is `None`.
    pub fn parse(input: &str) -> Option<Self> {
        let choice = match input.trim() {
            "1" => MenuChoice::AddOrUpdate,
            "2" => MenuChoice::Search,
            "3" => MenuChoice::Delete,
            "4" => MenuChoice::List(Order::In),
            "5" => MenuChoice::List(Order::Pre),
            "6" => MenuChoice::List(Order::Post),
            "7" => MenuChoice::Statistics,
            "8" => MenuChoice::Quit,
            "9" => MenuChoice::Visualize,
            _ => return None,
        };
        Some(choice)
    }
}
