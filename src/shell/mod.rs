pub mod menu;
pub mod options;

use std::io::{BufRead, Write};

use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::tree::traversal::Order;
use crate::tree::OrderedIndex;
use menu::{MenuChoice, MENU};
pub use options::Options;

/// What the loop does after handling one menu choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Stop,
}

/// Interactive contact manager on top of an [`OrderedIndex`].
///
/// Generic over its input and output so the same loop runs against a
/// terminal or an in-memory buffer. Each menu action maps to exactly one
/// index operation; all formatting and input checks live here, never in
/// the index.
pub struct Shell<R, W> {
    index: OrderedIndex,
    input: R,
    output: W,
    options: Options,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self::with_options(input, output, Options::default())
    }

    pub fn with_options(input: R, output: W, options: Options) -> Self {
        Shell {
            index: OrderedIndex::new(),
            input,
            output,
            options,
        }
    }

    pub fn index(&self) -> &OrderedIndex {
        &self.index
    }

    /// Consume the shell, keeping the index it built up.
    pub fn into_index(self) -> OrderedIndex {
        self.index
    }

    /// Run the menu loop until the user quits or input runs out.
    ///
    /// Invalid menu choices and blank names are reported and the loop
    /// carries on; only IO failures end it with an error.
    pub fn run(&mut self) -> Result<()> {
        info!("contact manager started");
        if self.options.show_banner {
            writeln!(self.output, "Binary Search Tree Contact Manager")?;
            writeln!(
                self.output,
                "This program demonstrates BST operations for educational purposes."
            )?;
        }

        loop {
            self.print_menu()?;
            let Some(line) = self.prompt("\nChoose an option: ")? else {
                debug!("input closed");
                break;
            };

            let Some(choice) = MenuChoice::parse(&line) else {
                debug!(input = %line, "unrecognised menu choice");
                writeln!(self.output, "Invalid option. Please try again.")?;
                continue;
            };

            match self.handle(choice) {
                Ok(Flow::Continue) => {}
                Ok(Flow::Stop) => break,
                Err(Error::EmptyKey) => writeln!(self.output, "{}", Error::EmptyKey)?,
                Err(e) => return Err(e),
            }
        }

        info!(contacts = self.index.size(), "contact manager stopped");
        Ok(())
    }

    fn handle(&mut self, choice: MenuChoice) -> Result<Flow> {
        match choice {
            MenuChoice::AddOrUpdate => self.add_or_update(),
            MenuChoice::Search => self.search(),
            MenuChoice::Delete => self.delete(),
            MenuChoice::List(Order::In) => self.list_alphabetical(),
            MenuChoice::List(order) => self.list_keys(order),
            MenuChoice::Statistics => self.statistics(),
            MenuChoice::Visualize => self.visualize(),
            MenuChoice::Quit => {
                writeln!(self.output, "Program terminated.")?;
                Ok(Flow::Stop)
            }
        }
    }

    fn add_or_update(&mut self) -> Result<Flow> {
        let Some(name) = self.prompt_key("Name: ")? else {
            return Ok(Flow::Stop);
        };
        let Some(info) = self.prompt("Phone or email: ")? else {
            return Ok(Flow::Stop);
        };

        if self.index.insert(name.clone(), Some(info.clone())) {
            writeln!(self.output, "Contact added: {name} -> {info}")?;
        } else {
            writeln!(self.output, "Contact updated: {name} -> {info}")?;
        }
        Ok(Flow::Continue)
    }

    fn search(&mut self) -> Result<Flow> {
        let Some(name) = self.prompt_key("Name to search: ")? else {
            return Ok(Flow::Stop);
        };

        match self.index.search(&name) {
            Some(node) => writeln!(
                self.output,
                "Contact found: {} -> {}",
                node.key(),
                node.value().unwrap_or_default()
            )?,
            None => writeln!(self.output, "Contact '{name}' not found.")?,
        }
        Ok(Flow::Continue)
    }

    fn delete(&mut self) -> Result<Flow> {
        let Some(name) = self.prompt_key("Name to delete: ")? else {
            return Ok(Flow::Stop);
        };

        if self.index.delete(&name) {
            writeln!(self.output, "Contact '{name}' deleted.")?;
        } else {
            writeln!(
                self.output,
                "Contact '{name}' not found. No deletion performed."
            )?;
        }
        Ok(Flow::Continue)
    }

    fn list_alphabetical(&mut self) -> Result<Flow> {
        if self.index.is_empty() {
            writeln!(self.output, "No contacts available.")?;
            return Ok(Flow::Continue);
        }

        writeln!(self.output, "\nContacts in alphabetical order:")?;
        let width = self.options.key_width;
        for (name, info) in self.index.inorder() {
            writeln!(
                self.output,
                "{name:width$} -> {}",
                info.unwrap_or_default()
            )?;
        }
        Ok(Flow::Continue)
    }

    fn list_keys(&mut self, order: Order) -> Result<Flow> {
        if self.index.is_empty() {
            writeln!(self.output, "Tree is empty.")?;
            return Ok(Flow::Continue);
        }

        let title = match order {
            Order::Pre => "Preorder traversal:",
            Order::Post => "Postorder traversal:",
            Order::In => "Inorder traversal:",
        };
        let keys: Vec<&str> = self.index.traverse(order).keys().collect();
        writeln!(self.output, "\n{title}")?;
        writeln!(self.output, "{}", keys.join(self.options.separator.as_str()))?;
        Ok(Flow::Continue)
    }

    fn statistics(&mut self) -> Result<Flow> {
        let stats = self.index.stats();
        writeln!(self.output, "\nTree Statistics:")?;
        writeln!(self.output, "Total contacts: {}", stats.size)?;
        writeln!(self.output, "Tree empty: {}", stats.is_empty)?;
        if let (Some(first), Some(last)) = (stats.first, stats.last) {
            writeln!(self.output, "First (alphabetically): {first}")?;
            writeln!(self.output, "Last (alphabetically): {last}")?;
        }
        Ok(Flow::Continue)
    }

    fn visualize(&mut self) -> Result<Flow> {
        if !self.index.is_empty() {
            writeln!(self.output, "\nBinary Search Tree Structure:")?;
        }
        write!(self.output, "{}", self.index)?;
        Ok(Flow::Continue)
    }

    fn print_menu(&mut self) -> Result<()> {
        writeln!(self.output, "\n=== Contact Manager (BST) ===")?;
        for (digit, label) in MENU {
            writeln!(self.output, "{digit}) {label}")?;
        }
        Ok(())
    }

    /// Print a prompt and read one trimmed line. `None` at end of input.
    fn prompt(&mut self, text: &str) -> Result<Option<String>> {
        write!(self.output, "{text}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Like [`prompt`](Self::prompt), but a blank answer is an error.
    fn prompt_key(&mut self, text: &str) -> Result<Option<String>> {
        match self.prompt(text)? {
            Some(name) if name.is_empty() => Err(Error::EmptyKey),
            other => Ok(other),
        }
    }
}
