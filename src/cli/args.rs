use clap::{Parser, Subcommand};
use std::fmt;

/// Upper bound for `--quantity`; the stepper replays one increment per unit.
pub const MAX_CLI_QUANTITY: i64 = 9_999;

#[derive(Parser)]
#[command(name = "order-cli")]
#[command(about = "Order checkout screen with a quantity stepper and payment summary")]
#[command(version = "0.1.0")]
pub struct Args {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Product name (defaults to "Cake")
    #[arg(long, global = true)]
    pub name: Option<String>,

    /// Product image reference
    #[arg(long, global = true)]
    pub image: Option<String>,

    /// Unit price; only the leading digits are read (defaults to 38000)
    #[arg(long, global = true, allow_hyphen_values = true)]
    pub price: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the order screen once
    Show {
        /// Quantity to show
        #[arg(short, long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..=MAX_CLI_QUANTITY))]
        quantity: u32,
    },
    /// Drive the quantity stepper from a menu
    Interactive,
    /// Place the order and print the receipt
    Order {
        /// Quantity to order
        #[arg(short, long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..=MAX_CLI_QUANTITY))]
        quantity: u32,
        /// Also write the receipt as JSON to this path
        #[arg(short, long)]
        output: Option<String>,
    },
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ScreenAction {
    Increment,
    Decrement,
    Order,
    Back,
}

impl ScreenAction {
    pub const ALL: [ScreenAction; 4] = [
        ScreenAction::Increment,
        ScreenAction::Decrement,
        ScreenAction::Order,
        ScreenAction::Back,
    ];
}

impl fmt::Display for ScreenAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScreenAction::Increment => write!(f, "+ Increase quantity"),
            ScreenAction::Decrement => write!(f, "- Decrease quantity"),
            ScreenAction::Order => write!(f, "Order"),
            ScreenAction::Back => write!(f, "Back"),
        }
    }
}
