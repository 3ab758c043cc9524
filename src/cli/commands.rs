use std::path::Path;
use std::sync::Arc;
use anyhow::{Context, Result};
use console::{style, Emoji};
use dialoguer::{Select, theme::ColorfulTheme};

use tracing::{error, info};

use crate::{
    cli::args::*,
    models::order::{OrderParams, OrderReceipt},
    services::{Navigator, OrderScreen},
    utils::formatting::{format_order_screen, format_receipt},
};

static CHECKMARK: Emoji<'_, '_> = Emoji("✅ ", "");
static CROSS: Emoji<'_, '_> = Emoji("❌ ", "");
static BACK: Emoji<'_, '_> = Emoji("⬅️ ", "");
static CAKE: Emoji<'_, '_> = Emoji("🍰 ", "");

/// Navigator for the terminal front-end: there is no previous screen, so
/// going back just announces that the order screen was closed.
pub struct TerminalNavigator;

impl Navigator for TerminalNavigator {
    fn go_back(&self) {
        println!("{} {}", BACK, style("Order screen closed").dim());
    }
}

pub struct CliApp {
    theme: ColorfulTheme,
    navigator: Arc<dyn Navigator>,
}

impl CliApp {
    pub fn new() -> Self {
        Self::with_navigator(Arc::new(TerminalNavigator))
    }

    pub fn with_navigator(navigator: Arc<dyn Navigator>) -> Self {
        Self {
            theme: ColorfulTheme::default(),
            navigator,
        }
    }

    pub fn run(&self, args: Args) -> Result<()> {
        let params = OrderParams::new(args.name, args.image, args.price)
            .context("Invalid order parameters")?;
        let mut screen = OrderScreen::new(params, self.navigator.clone());

        match args.command {
            Commands::Show { quantity } => self.handle_show(&mut screen, quantity),
            Commands::Interactive => self.handle_interactive(&mut screen),
            Commands::Order { quantity, output } => self.handle_order(&mut screen, quantity, output),
        }
    }

    fn handle_show(&self, screen: &mut OrderScreen, quantity: u32) -> Result<()> {
        step_to_quantity(screen, quantity);
        println!("{}", format_order_screen(screen.params(), &screen.summary()));
        Ok(())
    }

    fn handle_interactive(&self, screen: &mut OrderScreen) -> Result<()> {
        loop {
            println!("{}", format_order_screen(screen.params(), &screen.summary()));

            let selection = Select::with_theme(&self.theme)
                .with_prompt("Choose an action")
                .items(&ScreenAction::ALL)
                .default(0)
                .interact()
                .context("Failed to read menu selection")?;

            match ScreenAction::ALL[selection] {
                ScreenAction::Increment => {
                    screen.increment();
                }
                ScreenAction::Decrement => {
                    screen.decrement();
                }
                ScreenAction::Order => {
                    let receipt = screen.place_order();
                    print_receipt(&receipt);
                    return Ok(());
                }
                ScreenAction::Back => {
                    screen.go_back();
                    return Ok(());
                }
            }
        }
    }

    fn handle_order(&self, screen: &mut OrderScreen, quantity: u32, output: Option<String>) -> Result<()> {
        step_to_quantity(screen, quantity);
        let receipt = screen.place_order();
        print_receipt(&receipt);

        if let Some(path) = output {
            match write_receipt(&receipt, &path) {
                Ok(_) => {
                    println!("{} Receipt saved to {}", CHECKMARK, style(&path).cyan());
                    info!("Receipt {} written to {}", receipt.order_id, path);
                }
                Err(e) => {
                    println!("{} Failed to save receipt: {}", CROSS, style(&e).red());
                    error!("Failed to save receipt: {:#}", e);
                    return Err(e);
                }
            }
        }

        Ok(())
    }
}

impl Default for CliApp {
    fn default() -> Self {
        Self::new()
    }
}

/// Replay the stepper from its initial value; targets below one stay at one.
pub fn step_to_quantity(screen: &mut OrderScreen, quantity: u32) {
    while screen.quantity() < quantity {
        screen.increment();
    }
}

pub fn write_receipt(receipt: &OrderReceipt, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let json = serde_json::to_string_pretty(receipt).context("Failed to serialize receipt")?;
    std::fs::write(path, json)
        .with_context(|| format!("Failed to write receipt to {}", path.display()))?;
    Ok(())
}

fn print_receipt(receipt: &OrderReceipt) {
    println!("{} {}", CAKE, style("Order placed!").bold().green());
    println!("{}", format_receipt(receipt));
}
