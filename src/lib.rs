pub mod ast;
pub mod cli;
pub mod expression;
pub mod lexer;
pub mod output;
pub mod parser;

pub use ast::{Node, Token};
pub use expression::RelationExpression;
pub use lexer::Lexer;
pub use output::{to_json, to_json_pretty, to_json_string};
pub use parser::{ParseError, Parser, Violation, parse, parse_opt};
