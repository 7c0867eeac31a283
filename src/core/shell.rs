use std::io::{BufRead, Write};

use crate::core::CartLine;
use crate::utils::error::Result;

const NOT_A_NUMBER: &str = "Error: you must enter a whole number!";
const INVALID_ITEM: &str = "Invalid item number.";
const NON_POSITIVE_QUANTITY: &str = "Quantity must be greater than 0.";
const QUANTITY_TOO_LARGE: &str = "Quantity is too large.";
const ADDED: &str = "--> Added to cart.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellState {
    Browsing,
    AwaitingQuantity { name: String },
    Done,
}

/// Collects a cart from console input.
///
/// Input and output are injected so the whole dialogue can run against
/// in-memory buffers. End of input behaves like choosing checkout.
pub struct Shell<'a, R: BufRead, W: Write> {
    items: &'a [String],
    input: R,
    output: W,
    state: ShellState,
    cart: Vec<CartLine>,
}

impl<'a, R: BufRead, W: Write> Shell<'a, R, W> {
    pub fn new(items: &'a [String], input: R, output: W) -> Self {
        Self {
            items,
            input,
            output,
            state: ShellState::Browsing,
            cart: Vec::new(),
        }
    }

    pub fn state(&self) -> &ShellState {
        &self.state
    }

    pub fn cart(&self) -> &[CartLine] {
        &self.cart
    }

    /// Runs until checkout and hands back the cart.
    pub fn run(mut self) -> Result<Vec<CartLine>> {
        while self.state != ShellState::Done {
            self.step()?;
        }
        tracing::debug!("Checkout with {} cart lines", self.cart.len());
        Ok(self.cart)
    }

    /// Performs one prompt/answer exchange for the current state.
    pub fn step(&mut self) -> Result<()> {
        let next = match std::mem::replace(&mut self.state, ShellState::Done) {
            ShellState::Browsing => self.browse()?,
            ShellState::AwaitingQuantity { name } => self.ask_quantity(name)?,
            ShellState::Done => ShellState::Done,
        };
        self.state = next;
        Ok(())
    }

    fn browse(&mut self) -> Result<ShellState> {
        writeln!(self.output)?;
        writeln!(self.output, "What would you like to add to the cart?")?;
        for (i, name) in self.items.iter().enumerate() {
            writeln!(self.output, "{}. {}", i + 1, name)?;
        }
        writeln!(self.output, "0. Checkout and exit")?;

        let Some(answer) = self.prompt("Your choice (number): ")? else {
            return Ok(ShellState::Done);
        };

        let choice = match answer.parse::<i64>() {
            Ok(choice) => choice,
            Err(_) => {
                writeln!(self.output, "{}", NOT_A_NUMBER)?;
                return Ok(ShellState::Browsing);
            }
        };

        if choice == 0 {
            return Ok(ShellState::Done);
        }

        let selected = usize::try_from(choice)
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|index| self.items.get(index));
        match selected {
            Some(name) => Ok(ShellState::AwaitingQuantity { name: name.clone() }),
            None => {
                writeln!(self.output, "{}", INVALID_ITEM)?;
                Ok(ShellState::Browsing)
            }
        }
    }

    fn ask_quantity(&mut self, name: String) -> Result<ShellState> {
        let question = format!("How many pieces of '{}' do you want? ", name);
        let Some(answer) = self.prompt(&question)? else {
            return Ok(ShellState::Done);
        };

        let message = match answer.parse::<i64>() {
            Err(_) => NOT_A_NUMBER,
            Ok(n) if n <= 0 => NON_POSITIVE_QUANTITY,
            Ok(n) => match u32::try_from(n) {
                Ok(quantity) => {
                    tracing::debug!("Added {}x '{}' to cart", quantity, name);
                    self.cart.push(CartLine::new(name, quantity));
                    ADDED
                }
                Err(_) => QUANTITY_TOO_LARGE,
            },
        };
        writeln!(self.output, "{}", message)?;
        Ok(ShellState::Browsing)
    }

    /// Prints `question` and reads one trimmed line. `None` means end of input.
    fn prompt(&mut self, question: &str) -> Result<Option<String>> {
        write!(self.output, "{}", question)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            tracing::debug!("Input closed, treating as checkout");
            writeln!(self.output)?;
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn items() -> Vec<String> {
        vec!["Bolt".to_string(), "Widget".to_string()]
    }

    fn run_with(input: &str) -> (Vec<CartLine>, String) {
        let items = items();
        let mut output = Vec::new();
        let cart = Shell::new(&items, Cursor::new(input.to_string()), &mut output)
            .run()
            .unwrap();
        (cart, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_checkout_immediately() {
        let (cart, output) = run_with("0\n");
        assert!(cart.is_empty());
        assert!(output.contains("1. Bolt"));
        assert!(output.contains("2. Widget"));
        assert!(output.contains("0. Checkout and exit"));
    }

    #[test]
    fn test_add_lines_in_order_with_duplicates() {
        let (cart, output) = run_with("2\n7\n1\n3\n2\n1\n0\n");
        assert_eq!(
            cart,
            vec![
                CartLine::new("Widget", 7),
                CartLine::new("Bolt", 3),
                CartLine::new("Widget", 1),
            ]
        );
        assert_eq!(output.matches(ADDED).count(), 3);
    }

    #[test]
    fn test_invalid_selection_stays_browsing() {
        let items = items();
        let mut output = Vec::new();
        let mut shell = Shell::new(&items, Cursor::new("5\n"), &mut output);

        shell.step().unwrap();
        assert_eq!(shell.state(), &ShellState::Browsing);
        assert!(shell.cart().is_empty());
        drop(shell);
        assert!(String::from_utf8(output).unwrap().contains(INVALID_ITEM));
    }

    #[test]
    fn test_negative_and_text_selection() {
        let (cart, output) = run_with("-1\nabc\n\n0\n");
        assert!(cart.is_empty());
        assert_eq!(output.matches(INVALID_ITEM).count(), 1);
        assert_eq!(output.matches(NOT_A_NUMBER).count(), 2);
    }

    #[test]
    fn test_valid_selection_moves_to_quantity() {
        let items = items();
        let mut shell = Shell::new(&items, Cursor::new(" 1 \n"), Vec::<u8>::new());

        shell.step().unwrap();
        assert_eq!(
            shell.state(),
            &ShellState::AwaitingQuantity {
                name: "Bolt".to_string()
            }
        );
    }

    #[test]
    fn test_bad_quantity_leaves_cart_untouched() {
        let (cart, output) = run_with("1\n0\n1\n-4\n1\nmany\n1\n2.5\n0\n");
        assert!(cart.is_empty());
        assert_eq!(output.matches(NON_POSITIVE_QUANTITY).count(), 2);
        assert_eq!(output.matches(NOT_A_NUMBER).count(), 2);
        assert!(!output.contains(ADDED));
    }

    #[test]
    fn test_oversized_quantity_is_rejected() {
        let (cart, output) = run_with("1\n99999999999\n0\n");
        assert!(cart.is_empty());
        assert!(output.contains(QUANTITY_TOO_LARGE));
    }

    #[test]
    fn test_end_of_input_is_checkout() {
        let (cart, _) = run_with("2\n4\n");
        assert_eq!(cart, vec![CartLine::new("Widget", 4)]);

        let (cart, _) = run_with("2\n");
        assert!(cart.is_empty());
    }

    #[test]
    fn test_empty_inventory_only_offers_checkout() {
        let items: Vec<String> = Vec::new();
        let mut output = Vec::new();
        let cart = Shell::new(&items, Cursor::new("1\n0\n"), &mut output).run().unwrap();

        assert!(cart.is_empty());
        let output = String::from_utf8(output).unwrap();
        assert!(output.contains(INVALID_ITEM));
    }
}
