use serde::{Deserialize, Serialize};

/// The four arithmetic operations the calculator supports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operation {
    pub const ALL: [Operation; 4] = [
        Operation::Add,
        Operation::Subtract,
        Operation::Multiply,
        Operation::Divide,
    ];

    /// Resolves a snake_case wire name (`add`, `subtract`, ...).
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "add" => Some(Operation::Add),
            "subtract" => Some(Operation::Subtract),
            "multiply" => Some(Operation::Multiply),
            "divide" => Some(Operation::Divide),
            _ => None,
        }
    }

    /// Resolves a keypad symbol (`+`, `-`, `*`, `/`).
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '+' => Some(Operation::Add),
            '-' => Some(Operation::Subtract),
            '*' => Some(Operation::Multiply),
            '/' => Some(Operation::Divide),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Operation::Add => "add",
            Operation::Subtract => "subtract",
            Operation::Multiply => "multiply",
            Operation::Divide => "divide",
        }
    }

    pub fn symbol(&self) -> char {
        match self {
            Operation::Add => '+',
            Operation::Subtract => '-',
            Operation::Multiply => '*',
            Operation::Divide => '/',
        }
    }

    pub fn describe(&self) -> &'static str {
        match self {
            Operation::Add => "Suma dos números",
            Operation::Subtract => "Resta dos números",
            Operation::Multiply => "Multiplica dos números",
            Operation::Divide => "Divide dos números",
        }
    }
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
