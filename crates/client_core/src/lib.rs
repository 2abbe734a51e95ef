use shared::domain::Operation;

mod api_client;
mod display;

pub use api_client::{ApiClient, ClientError};
pub use display::format_value;

/// A single keypad or keyboard event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Digit(char),
    Decimal,
    Operator(Operation),
    Equals,
    Clear,
    ClearEntry,
    Backspace,
}

impl Key {
    /// Maps a typed character to a key. Front ends translate the
    /// non-printing keys themselves (Enter, Escape, Delete, Backspace).
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '0'..='9' => Some(Key::Digit(c)),
            '.' => Some(Key::Decimal),
            '=' => Some(Key::Equals),
            _ => Operation::from_symbol(c).map(Key::Operator),
        }
    }
}

/// The calculator input state machine.
///
/// Holds the display string, the stashed operand, and the pending operator.
/// Arithmetic is delegated to [`engine`]; any evaluator failure moves the
/// machine into the error state, which renders the literal `"Error"` and is
/// left by the next digit/decimal input, Clear, or Backspace.
#[derive(Debug, Clone)]
pub struct Calculator {
    current_value: String,
    previous_value: Option<f64>,
    operator: Option<Operation>,
    waiting_for_new_value: bool,
    has_error: bool,
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}

impl Calculator {
    pub fn new() -> Self {
        Self {
            current_value: "0".to_string(),
            previous_value: None,
            operator: None,
            waiting_for_new_value: false,
            has_error: false,
        }
    }

    pub fn display(&self) -> &str {
        &self.current_value
    }

    pub fn has_error(&self) -> bool {
        self.has_error
    }

    /// True while a binary operation is pending completion.
    pub fn operation_pending(&self) -> bool {
        self.operator.is_some()
    }

    pub fn apply(&mut self, key: Key) {
        match key {
            Key::Digit(digit) => self.input_digit(digit),
            Key::Decimal => self.input_decimal(),
            Key::Operator(op) => self.input_operator(op),
            Key::Equals => self.equals(),
            Key::Clear => self.clear(),
            Key::ClearEntry => self.clear_entry(),
            Key::Backspace => self.backspace(),
        }
    }

    pub fn clear(&mut self) {
        self.current_value = "0".to_string();
        self.previous_value = None;
        self.operator = None;
        self.waiting_for_new_value = false;
        self.has_error = false;
    }

    pub fn clear_entry(&mut self) {
        self.current_value = "0".to_string();
        self.has_error = false;
    }

    fn input_digit(&mut self, digit: char) {
        if !digit.is_ascii_digit() {
            return;
        }
        if self.has_error {
            self.clear();
        }

        if self.waiting_for_new_value {
            self.current_value = digit.to_string();
            self.waiting_for_new_value = false;
        } else if self.current_value == "0" {
            self.current_value = digit.to_string();
        } else {
            self.current_value.push(digit);
        }
    }

    fn input_decimal(&mut self) {
        if self.has_error {
            self.clear();
        }

        if self.waiting_for_new_value {
            self.current_value = "0.".to_string();
            self.waiting_for_new_value = false;
        } else if !self.current_value.contains('.') {
            self.current_value.push('.');
        }
    }

    fn input_operator(&mut self, new_operator: Operation) {
        if self.has_error {
            return;
        }

        let input_value = self.current_number();

        if self.previous_value.is_none() {
            self.previous_value = Some(input_value);
        } else if let (Some(op), Some(prev)) = (self.operator, self.previous_value) {
            // A chained operator: settle the pending operation first.
            if !self.waiting_for_new_value {
                match engine::evaluate(prev, op, input_value) {
                    Ok(result) => {
                        self.current_value = display::format_value(result);
                        self.previous_value = Some(result);
                    }
                    Err(_) => {
                        self.set_error();
                        return;
                    }
                }
            }
        }

        self.operator = Some(new_operator);
        self.waiting_for_new_value = true;
    }

    fn equals(&mut self) {
        if self.has_error || self.waiting_for_new_value {
            return;
        }
        let (Some(op), Some(prev)) = (self.operator, self.previous_value) else {
            return;
        };

        match engine::evaluate(prev, op, self.current_number()) {
            Ok(result) => {
                self.current_value = display::format_value(result);
                self.previous_value = None;
                self.operator = None;
                self.waiting_for_new_value = true;
            }
            Err(_) => self.set_error(),
        }
    }

    fn backspace(&mut self) {
        if self.has_error {
            self.clear();
            return;
        }

        if self.current_value.chars().count() > 1 {
            self.current_value.pop();
        } else {
            self.current_value = "0".to_string();
        }
    }

    fn set_error(&mut self) {
        self.has_error = true;
        self.current_value = "Error".to_string();
        self.operator = None;
        self.previous_value = None;
        self.waiting_for_new_value = false;
    }

    fn current_number(&self) -> f64 {
        self.current_value.parse().unwrap_or(0.0)
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
