//! Interactive menu loop.

use std::io::{BufRead, Write};

use stockline_inventory::Inventory;

use crate::config::OutputMode;
use crate::input::{InputError, InputResult, Prompter};
use crate::report::{Action, Report};

const MENU: &str = "\n======== INVENTORY MANAGEMENT (SLL) ========
1. Insert product (head/tail)
2. Find product by ID
3. Update stock by ID
4. Delete product by ID
5. List inventory
0. Exit";

/// A menu choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuOption {
    Insert,
    Find,
    UpdateStock,
    Delete,
    List,
    Exit,
}

impl MenuOption {
    pub fn from_choice(choice: i64) -> Option<Self> {
        match choice {
            1 => Some(MenuOption::Insert),
            2 => Some(MenuOption::Find),
            3 => Some(MenuOption::UpdateStock),
            4 => Some(MenuOption::Delete),
            5 => Some(MenuOption::List),
            0 => Some(MenuOption::Exit),
            _ => None,
        }
    }
}

/// One interactive session over an owned [`Inventory`].
pub struct Session<R, W> {
    inventory: Inventory,
    prompter: Prompter<R, W>,
    output: OutputMode,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, out: W, output: OutputMode) -> Self {
        Self {
            inventory: Inventory::new(),
            prompter: Prompter::new(input, out),
            output,
        }
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    /// Run until the user picks Exit or input ends.
    ///
    /// Returns the writer so callers can inspect what was printed. The
    /// inventory and every product still in it are released on return.
    pub fn run(mut self) -> InputResult<W> {
        tracing::info!("session started");
        loop {
            match self.step() {
                Ok(true) => continue,
                Ok(false) => break,
                Err(InputError::Eof) => {
                    tracing::info!("input closed, leaving menu");
                    writeln!(self.prompter.out())?;
                    break;
                }
                Err(e) => return Err(e),
            }
        }

        writeln!(self.prompter.out(), "Exiting and releasing memory. Goodbye!")?;
        let released = self.inventory.clear();
        tracing::info!("session ended, {} products released", released);

        let (_, out) = self.prompter.into_inner();
        Ok(out)
    }

    /// Show the menu and handle one choice. `Ok(false)` means exit.
    fn step(&mut self) -> InputResult<bool> {
        writeln!(self.prompter.out(), "{MENU}")?;
        let choice = self.prompter.read_non_negative("Select an option: ")?;

        let Some(option) = MenuOption::from_choice(choice) else {
            writeln!(self.prompter.out(), "Invalid option. Try again.")?;
            return Ok(true);
        };
        tracing::debug!("menu option {:?}", option);

        let report = match option {
            MenuOption::Insert => self.insert()?,
            MenuOption::Find => self.find()?,
            MenuOption::UpdateStock => self.update_stock()?,
            MenuOption::Delete => self.delete()?,
            MenuOption::List => Report::Listing {
                products: self.inventory.list(),
            },
            MenuOption::Exit => return Ok(false),
        };

        report.write_to(self.output, self.prompter.out())?;
        Ok(true)
    }

    fn insert(&mut self) -> InputResult<Report> {
        writeln!(self.prompter.out(), "\n--- INSERT ---")?;
        let id = self.prompter.read_id("ID (non-negative integer): ")?;
        let name = self.prompter.read_name("Name (max 39 chars): ")?;
        let stock = self.prompter.read_stock("Stock: ")?;
        let position = self.prompter.read_position()?;

        Ok(match self.inventory.insert(id, name, stock, position) {
            Ok(outcome) => Report::Inserted { id, outcome },
            Err(e) => Report::from_error(Action::Insert, e),
        })
    }

    fn find(&mut self) -> InputResult<Report> {
        let id = self.prompter.read_id("Enter the ID to find: ")?;
        Ok(match self.inventory.find(id) {
            Ok(product) => Report::Found {
                product: product.clone(),
            },
            Err(e) => Report::from_error(Action::Find, e),
        })
    }

    fn update_stock(&mut self) -> InputResult<Report> {
        let id = self
            .prompter
            .read_id("Enter the ID of the product to update: ")?;

        // Show the current record before asking for the new value.
        let current = match self.inventory.find(id) {
            Ok(product) => product.clone(),
            Err(e) => return Ok(Report::from_error(Action::Update, e)),
        };
        write!(
            self.prompter.out(),
            "Product: {} (current stock: {}). ",
            current.name(),
            current.stock()
        )?;

        let new_stock = self.prompter.read_non_negative("Enter the NEW stock (>= 0): ")?;
        Ok(match self.inventory.update_stock(id, new_stock) {
            Ok(change) => Report::StockUpdated { id, change },
            Err(e) => Report::from_error(Action::Update, e),
        })
    }

    fn delete(&mut self) -> InputResult<Report> {
        let id = self
            .prompter
            .read_id("Enter the ID of the product to delete: ")?;
        Ok(match self.inventory.delete(id) {
            Ok(removed) => Report::Deleted { removed },
            Err(e) => Report::from_error(Action::Delete, e),
        })
    }
}
