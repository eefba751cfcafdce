use std::fmt;

/// Binary operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinOp {
    // Logical
    /// Logical AND (`AND`, `&&`)
    And,
    /// Logical OR (`OR`, `||`)
    Or,

    // Comparison
    /// Equal (`==`)
    Equal,
    /// Not equal (`!=`)
    NotEqual,
    /// Greater than or equal (`>=`)
    GreaterEqual,
    /// Less than or equal (`<=`)
    LessEqual,
    /// Greater than (`>`)
    GreaterThan,
    /// Less than (`<`)
    LessThan,
    /// Pattern match (`LIKE`)
    Like,
    /// Membership (`IN`)
    In,
}

impl BinOp {
    pub fn as_str(&self) -> &'static str {
        match self {
            BinOp::And => "AND",
            BinOp::Or => "OR",
            BinOp::Equal => "==",
            BinOp::NotEqual => "!=",
            BinOp::GreaterEqual => ">=",
            BinOp::LessEqual => "<=",
            BinOp::GreaterThan => ">",
            BinOp::LessThan => "<",
            BinOp::Like => "LIKE",
            BinOp::In => "IN",
        }
    }
}

impl fmt::Display for BinOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
