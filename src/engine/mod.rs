// ============================================================================
// Engine Module
// Contains the core number validation logic
// ============================================================================

mod checker;
mod lexer;
mod rules;
mod validator;

pub use checker::ConstraintChecker;
pub use lexer::{LexicalMatcher, DECIMAL_POINT};
pub use rules::{PrecisionRule, ScaleRule, SignRule};
pub use validator::NumberValidator;
