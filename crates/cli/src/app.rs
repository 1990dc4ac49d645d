//! Interactive session: menu loop plus one handler per menu option.
//!
//! Domain errors are printed and the loop carries on. Only terminal IO
//! failures propagate out of [`App::run`].

use std::io::{BufRead, Write};

use chrono::{DateTime, Utc};

use minierp_core::Entity;
use minierp_inventory::{InventoryService, MovementKind, NewProduct};
use minierp_reporting::{ReportFormatter, classify, low_stock_report, valuate};

use crate::menu::{self, MenuChoice};
use crate::prompt::{
    Prompter, parse_movement_kind, parse_movement_quantity, parse_name, parse_price,
    parse_stock_quantity,
};

/// Whether the session can keep reading input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Closed,
}

pub struct App<R, W> {
    service: InventoryService,
    formatter: ReportFormatter,
    prompter: Prompter<R, W>,
    clock: fn() -> DateTime<Utc>,
}

impl<R: BufRead, W: Write> App<R, W> {
    pub fn new(formatter: ReportFormatter, input: R, output: W) -> Self {
        Self {
            service: InventoryService::new(),
            formatter,
            prompter: Prompter::new(input, output),
            clock: Utc::now,
        }
    }

    /// Replace the timestamp source for recorded movements.
    pub fn with_clock(mut self, clock: fn() -> DateTime<Utc>) -> Self {
        self.clock = clock;
        self
    }

    pub fn service(&self) -> &InventoryService {
        &self.service
    }

    pub fn into_output(self) -> W {
        self.prompter.into_output()
    }

    /// Run until the user quits or input ends.
    pub fn run(&mut self) -> anyhow::Result<()> {
        loop {
            self.prompter.say(menu::render())?;
            let Some(answer) = self.prompter.ask("Choose an option (1-7): ")? else {
                break;
            };

            let flow = match MenuChoice::parse(&answer) {
                Some(MenuChoice::Quit) => break,
                Some(choice) => self.dispatch(choice)?,
                None => {
                    self.prompter
                        .say("\nInvalid option. Please enter a number from 1 to 7.")?;
                    Flow::Continue
                }
            };

            if flow == Flow::Closed {
                break;
            }
        }

        tracing::info!(
            products = self.service.products().len(),
            movements = self.service.ledger().len(),
            "session ended"
        );
        self.prompter.say("\nClosing Mini-ERP. Goodbye!")?;
        Ok(())
    }

    fn dispatch(&mut self, choice: MenuChoice) -> anyhow::Result<Flow> {
        match choice {
            MenuChoice::Register => self.register(),
            MenuChoice::Remove => self.remove(),
            MenuChoice::Move => self.move_stock(),
            MenuChoice::StockReport => self.stock_report(),
            MenuChoice::ValuationReport => self.valuation_report(),
            MenuChoice::History => self.history(),
            MenuChoice::Quit => Ok(Flow::Closed),
        }
    }

    fn register(&mut self) -> anyhow::Result<Flow> {
        self.prompter.say("\n--- Register Product ---")?;

        let Some(name) =
            self.prompter
                .ask_until("Product name: ", "Name cannot be empty.", parse_name)?
        else {
            return Ok(Flow::Closed);
        };

        // Checked up front so the user is not asked for data that will be thrown away.
        if let Some(existing) = self.service.find_by_name(&name) {
            let err = minierp_core::DomainError::duplicate_name(&name, existing.id());
            tracing::warn!(error = %err, "registration rejected");
            self.prompter.say(format!("Error: {err}."))?;
            return Ok(Flow::Continue);
        }

        let Some(category) = self
            .prompter
            .ask("Category (e.g. Electronics, Food, Clothing): ")?
        else {
            return Ok(Flow::Closed);
        };

        let Some(price) = self.prompter.ask_until(
            "Unit price (e.g. 19.99): ",
            "Invalid input. Enter a valid positive price.",
            parse_price,
        )?
        else {
            return Ok(Flow::Closed);
        };

        let Some(quantity) = self.prompter.ask_until(
            "Initial quantity in stock: ",
            "Invalid input. Enter a non-negative whole number.",
            parse_stock_quantity,
        )?
        else {
            return Ok(Flow::Closed);
        };

        match self
            .service
            .register(NewProduct::new(name, category, price, quantity))
        {
            Ok(product) => {
                let msg = format!(
                    "\nProduct '{}' registered successfully! ID: {}",
                    product.name(),
                    product.id()
                );
                self.prompter.say(msg)?;
            }
            Err(e) => self.prompter.say(format!("Error: {e}."))?,
        }
        Ok(Flow::Continue)
    }

    fn remove(&mut self) -> anyhow::Result<Flow> {
        self.prompter.say("\n--- Remove Product ---")?;
        if self.service.products().is_empty() {
            self.prompter
                .say("Inventory is empty. There are no products to remove.")?;
            return Ok(Flow::Continue);
        }

        let Some(identifier) = self
            .prompter
            .ask("Enter the product ID or name to remove: ")?
        else {
            return Ok(Flow::Closed);
        };

        match self.service.remove(&identifier) {
            Ok(product) => self.prompter.say(format!(
                "\nProduct '{}' (ID: {}) was removed.",
                product.name(),
                product.id()
            ))?,
            Err(e) => self.prompter.say(format!("\nError: {e}."))?,
        }
        Ok(Flow::Continue)
    }

    fn move_stock(&mut self) -> anyhow::Result<Flow> {
        self.prompter.say("\n--- Stock Movement ---")?;
        if self.service.products().is_empty() {
            self.prompter
                .say("Inventory is empty. Register a product first.")?;
            return Ok(Flow::Continue);
        }

        let Some(identifier) = self
            .prompter
            .ask("Enter the product ID or name to move: ")?
        else {
            return Ok(Flow::Closed);
        };

        let Some(product) = self.service.find(&identifier) else {
            let err = minierp_core::DomainError::not_found(identifier.as_str());
            tracing::warn!(error = %err, "movement rejected");
            self.prompter.say(format!("Error: {err}."))?;
            return Ok(Flow::Continue);
        };
        let (product_id, name, on_hand) = (product.id(), product.name().to_string(), product.quantity());

        self.prompter.say(format!(
            "\nSelected product: {name} (current stock: {on_hand})"
        ))?;

        let Some(kind) = self.prompter.ask_until(
            "Movement type (I = inbound / O = outbound): ",
            "Invalid choice. Enter 'I' or 'O'.",
            parse_movement_kind,
        )?
        else {
            return Ok(Flow::Closed);
        };

        let Some(quantity) = self.prompter.ask_until(
            "Quantity to move: ",
            "Invalid input. Enter a positive whole number.",
            parse_movement_quantity,
        )?
        else {
            return Ok(Flow::Closed);
        };

        let now = (self.clock)();
        match self.service.move_stock(product_id, kind, quantity, now) {
            Ok(movement) => {
                let verb = match kind {
                    MovementKind::In => "INBOUND",
                    MovementKind::Out => "OUTBOUND",
                };
                let on_hand = self
                    .service
                    .find(&product_id.to_string())
                    .map(|p| p.quantity())
                    .unwrap_or_default();
                self.prompter.say(format!(
                    "\n{verb} of {} unit(s) of '{}' recorded.",
                    movement.quantity, movement.product_name
                ))?;
                self.prompter
                    .say(format!("New stock for '{name}': {on_hand}"))?;
            }
            Err(e) => self.prompter.say(format!("\nError: {e}."))?,
        }
        Ok(Flow::Continue)
    }

    fn stock_report(&mut self) -> anyhow::Result<Flow> {
        self.prompter.say("\n--- Stock Report ---")?;
        let report = low_stock_report(self.service.products());
        let text = self.formatter.stock_report(&report);
        self.prompter.say(text)?;
        Ok(Flow::Continue)
    }

    fn valuation_report(&mut self) -> anyhow::Result<Flow> {
        self.prompter
            .say("\n--- Management Report: Inventory Value and ABC Curve ---")?;
        let outcome = classify(valuate(self.service.products()));
        let text = self.formatter.valuation_report(&outcome);
        self.prompter.say(text)?;
        Ok(Flow::Continue)
    }

    fn history(&mut self) -> anyhow::Result<Flow> {
        self.prompter.say("\n--- Movement History ---")?;
        let text = self.formatter.movement_history(self.service.ledger().entries());
        self.prompter.say(text)?;
        Ok(Flow::Continue)
    }
}
