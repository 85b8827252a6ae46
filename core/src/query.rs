use crate::tokenizer::tokenize;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Reserved query words. A document term spelled `and`, `or` or `not` cannot be
/// queried as an operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operator {
    And,
    Or,
    Not,
}

impl Operator {
    pub fn from_word(word: &str) -> Option<Self> {
        match word {
            "and" => Some(Operator::And),
            "or" => Some(Operator::Or),
            "not" => Some(Operator::Not),
            _ => None,
        }
    }

    /// Only the relative order matters: `not > and > or`.
    pub fn precedence(self) -> u8 {
        match self {
            Operator::Not => 3,
            Operator::And => 2,
            Operator::Or => 1,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Operator::And => "and",
            Operator::Or => "or",
            Operator::Not => "not",
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.as_str()) }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryToken {
    Term(String),
    Operator(Operator),
}

/// Parse an infix boolean query into postfix order.
pub fn parse(query: &str) -> Vec<QueryToken> {
    let postfix = to_postfix(tokenize(query));
    tracing::debug!(query, tokens = postfix.len(), "parsed query");
    postfix
}

/// Shunting-yard over already normalized words. No parentheses; operators of
/// equal precedence associate to the left.
pub fn to_postfix<I>(words: I) -> Vec<QueryToken>
where
    I: IntoIterator<Item = String>,
{
    let mut output = Vec::new();
    let mut held: Vec<Operator> = Vec::new();
    for word in words {
        match Operator::from_word(&word) {
            Some(op) => {
                while let Some(&top) = held.last() {
                    if top.precedence() < op.precedence() {
                        break;
                    }
                    output.push(QueryToken::Operator(top));
                    held.pop();
                }
                held.push(op);
            }
            None => output.push(QueryToken::Term(word)),
        }
    }
    while let Some(op) = held.pop() {
        output.push(QueryToken::Operator(op));
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    fn show(tokens: &[QueryToken]) -> String {
        tokens
            .iter()
            .map(|t| match t {
                QueryToken::Term(w) => w.clone(),
                QueryToken::Operator(op) => op.to_string().to_uppercase(),
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    #[test]
    fn and_binds_tighter_than_or() {
        assert_eq!(show(&parse("a or b and c")), "a b c AND OR");
        assert_eq!(show(&parse("a and b or c")), "a b AND c OR");
    }

    #[test]
    fn not_binds_tightest() {
        assert_eq!(show(&parse("a and not b")), "a b NOT AND");
        assert_eq!(show(&parse("not a or b")), "a NOT b OR");
        assert_eq!(show(&parse("cat not dog")), "cat dog NOT");
    }

    #[test]
    fn equal_precedence_is_left_associative() {
        assert_eq!(show(&parse("a and b and c")), "a b AND c AND");
    }

    #[test]
    fn operators_are_case_insensitive() {
        assert_eq!(show(&parse("Cat AND Dog")), "cat dog AND");
    }

    #[test]
    fn empty_query_parses_to_nothing() {
        assert!(parse("").is_empty());
        assert!(parse("  ,; ").is_empty());
    }
}
