//! A line-oriented menu that drives a [`Tree`] of `i32` keys.
//!
//! The menu reads one number per line from any [`BufRead`] and writes to any [`Write`], so the
//! binary runs it over stdin/stdout while tests run it over in-memory buffers.
//!
//! ```text
//! === BINARY SEARCH TREE ===
//! 1 - Insert value
//! 2 - Search value
//! 3 - Remove value
//! 4 - Traverse tree
//! 0 - Quit
//! ```
//!
//! # Examples
//!
//! ```
//! use ordered_tree::Menu;
//!
//! let input = "1\n20\n1\n10\n4\n2\n0\n0\n";
//! let mut output = Vec::new();
//!
//! Menu::new(input.as_bytes(), &mut output)
//!     .prompts(false)
//!     .run()
//!     .unwrap();
//!
//! let output = String::from_utf8(output).unwrap();
//! assert!(output.contains("In-order: 10 20"));
//! ```

use std::io::{BufRead, Write};

use tracing::{debug, info, instrument, trace};

use crate::error::MenuError;
use crate::traversal::Order;
use crate::tree::Tree;

/// What the menu does after handling one option.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

/// The entries of the main menu.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    /// Add a key to the tree.
    Insert,
    /// Report whether a key is in the tree.
    Search,
    /// Remove a key from the tree if it is there.
    Remove,
    /// Open the traversal submenu.
    Traverse,
    /// Tear the tree down and leave.
    Quit,
}

impl TryFrom<i64> for Action {
    type Error = MenuError;

    fn try_from(option: i64) -> Result<Self, Self::Error> {
        match option {
            1 => Ok(Action::Insert),
            2 => Ok(Action::Search),
            3 => Ok(Action::Remove),
            4 => Ok(Action::Traverse),
            0 => Ok(Action::Quit),
            other => Err(MenuError::UnknownOption(other)),
        }
    }
}

/// Maps a traversal submenu option to its order. `Ok(None)` means "back to the main menu".
fn traversal_option(option: i64) -> Result<Option<Order>, MenuError> {
    match option {
        1 => Ok(Some(Order::PreOrder)),
        2 => Ok(Some(Order::InOrder)),
        3 => Ok(Some(Order::PostOrder)),
        0 => Ok(None),
        other => Err(MenuError::UnknownOption(other)),
    }
}

/// An interactive session over a single tree. The tree lives as long as the session and is torn
/// down when the user quits or the input runs out.
pub struct Menu<R, W> {
    input: R,
    output: W,
    tree: Tree<i32>,
    prompts: bool,
}

impl<R, W> Menu<R, W>
where
    R: BufRead,
    W: Write,
{
    /// Creates a session with an empty tree. Menus and prompts are shown by default.
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            tree: Tree::new(),
            prompts: true,
        }
    }

    /// Whether to print menu banners and input prompts. Result lines are always printed.
    pub fn prompts(mut self, prompts: bool) -> Self {
        self.prompts = prompts;
        self
    }

    /// The tree this session is driving.
    pub fn tree(&self) -> &Tree<i32> {
        &self.tree
    }

    /// Runs the main menu until the user quits or the input ends. Bad options and numbers are
    /// reported and the menu is shown again; only I/O errors end the session early.
    pub fn run(&mut self) -> Result<(), MenuError> {
        info!("Session started");
        loop {
            match self.main_menu_step() {
                Ok(Flow::Continue) => {}
                Ok(Flow::Quit) => break,
                Err(e) if e.is_recoverable() => writeln!(self.output, "{}", e)?,
                Err(e) => return Err(e),
            }
        }
        self.quit()
    }

    fn main_menu_step(&mut self) -> Result<Flow, MenuError> {
        self.chatter(
            "\n=== BINARY SEARCH TREE ===\n\
             1 - Insert value\n\
             2 - Search value\n\
             3 - Remove value\n\
             4 - Traverse tree\n\
             0 - Quit\n",
        )?;
        let Some(option) = self.read_number("Choose an option: ")? else {
            return Ok(Flow::Quit);
        };
        match Action::try_from(option)? {
            Action::Insert => self.insert(),
            Action::Search => self.search(),
            Action::Remove => self.remove(),
            Action::Traverse => self.traversal_menu(),
            Action::Quit => Ok(Flow::Quit),
        }
    }

    #[instrument(level = "debug", skip(self))]
    fn insert(&mut self) -> Result<Flow, MenuError> {
        let Some(key) = self.read_key("Enter the value to insert: ")? else {
            return Ok(Flow::Quit);
        };
        let inserted = self.tree.insert(key);
        debug!(key, inserted, len = self.tree.len(), "Insert");
        if inserted {
            writeln!(self.output, "Value {} inserted successfully!", key)?;
        } else {
            writeln!(self.output, "Value {} is already in the tree.", key)?;
        }
        Ok(Flow::Continue)
    }

    #[instrument(level = "debug", skip(self))]
    fn search(&mut self) -> Result<Flow, MenuError> {
        let Some(key) = self.read_key("Enter the value to search for: ")? else {
            return Ok(Flow::Quit);
        };
        let found = self.tree.search(&key);
        debug!(key, found, "Search");
        self.report_found(key, found)?;
        Ok(Flow::Continue)
    }

    #[instrument(level = "debug", skip(self))]
    fn remove(&mut self) -> Result<Flow, MenuError> {
        let Some(key) = self.read_key("Enter the value to remove: ")? else {
            return Ok(Flow::Quit);
        };
        if self.tree.search(&key) {
            let removed = self.tree.delete(&key);
            debug!(key, removed, len = self.tree.len(), "Remove");
            writeln!(self.output, "Value {} removed successfully!", key)?;
        } else {
            debug!(key, "Remove of missing key");
            self.report_found(key, false)?;
        }
        Ok(Flow::Continue)
    }

    fn report_found(&mut self, key: i32, found: bool) -> Result<(), MenuError> {
        if found {
            writeln!(self.output, "Value {} found in the tree!", key)?;
        } else {
            writeln!(self.output, "Value {} not found in the tree!", key)?;
        }
        Ok(())
    }

    /// Runs the traversal submenu until the user goes back. Ending the input here ends the whole
    /// session.
    #[instrument(level = "debug", skip(self))]
    fn traversal_menu(&mut self) -> Result<Flow, MenuError> {
        loop {
            self.chatter(
                "\n=== TRAVERSAL MENU ===\n\
                 1 - Pre-order\n\
                 2 - In-order\n\
                 3 - Post-order\n\
                 0 - Back\n",
            )?;
            let choice = match self.read_number("Choose an option: ") {
                Ok(Some(option)) => traversal_option(option),
                Ok(None) => return Ok(Flow::Quit),
                Err(e) => Err(e),
            };
            match choice {
                Ok(Some(order)) => self.print_traversal(order)?,
                Ok(None) => {
                    self.chatter("Returning to the main menu...\n")?;
                    return Ok(Flow::Continue);
                }
                Err(e) if e.is_recoverable() => writeln!(self.output, "{}", e)?,
                Err(e) => return Err(e),
            }
        }
    }

    fn print_traversal(&mut self, order: Order) -> Result<(), MenuError> {
        debug!(%order, len = self.tree.len(), "Traverse");
        let keys = self
            .tree
            .traverse(order)
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(" ");
        writeln!(self.output, "{}: {}", order, keys)?;
        Ok(())
    }

    fn quit(&mut self) -> Result<(), MenuError> {
        writeln!(self.output, "Tearing down tree and exiting...")?;
        info!(len = self.tree.len(), "Tearing down tree");
        self.tree.teardown();
        self.output.flush()?;
        Ok(())
    }

    /// Writes menu text that is only shown when prompts are enabled.
    fn chatter(&mut self, text: &str) -> Result<(), MenuError> {
        if self.prompts {
            write!(self.output, "{}", text)?;
            self.output.flush()?;
        }
        Ok(())
    }

    /// Prompts for and reads the next non-blank line as a number. `Ok(None)` means the input has
    /// ended.
    fn read_number(&mut self, prompt: &str) -> Result<Option<i64>, MenuError> {
        self.read_parsed(prompt)
    }

    fn read_key(&mut self, prompt: &str) -> Result<Option<i32>, MenuError> {
        self.read_parsed(prompt)
    }

    fn read_parsed<T>(&mut self, prompt: &str) -> Result<Option<T>, MenuError>
    where
        T: std::str::FromStr,
    {
        self.chatter(prompt)?;
        let mut line = String::new();
        loop {
            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                trace!("End of input");
                return Ok(None);
            }
            trace!(line = line.trim_end(), "Read line");
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }
            return trimmed
                .parse()
                .map(Some)
                .map_err(|_| MenuError::NotANumber(trimmed.to_string()));
        }
    }
}
