use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use tracing::debug;

use crate::ast::expr::Expr;
use crate::error::LoadError;

impl Expr {
    /// Decodes a tree from its JSON form, e.g.
    /// `{"Unary": {"operator": {"kind": "Minus", "lexeme": "-"}, "right": {"Literal": 3}}}`.
    pub fn from_json(source: &str) -> Result<Self, LoadError> {
        Ok(serde_json::from_str(source)?)
    }

    pub fn from_reader(reader: impl Read) -> Result<Self, LoadError> {
        Ok(serde_json::from_reader(reader)?)
    }

    pub fn from_path(path: &Path) -> Result<Self, LoadError> {
        debug!(path = %path.display(), "loading expression tree");
        let file = File::open(path).map_err(|source| LoadError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_reader(BufReader::new(file))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frontend::literal::Literal;
    use crate::frontend::token::{Token, TokenType};

    #[test]
    fn decodes_every_variant() {
        let source = r#"{
            "Binary": {
                "left": {"Grouping": {"expression": {"Literal": 1}}},
                "operator": {"kind": "EqualEqual", "lexeme": "=="},
                "right": {
                    "Unary": {
                        "operator": {"kind": "Bang", "lexeme": "!", "line": 4},
                        "right": {"Literal": null}
                    }
                }
            }
        }"#;

        let expected = Expr::binary(
            Expr::grouping(Expr::literal(1.0)),
            Token::symbol(TokenType::EqualEqual, 0),
            Expr::unary(Token::symbol(TokenType::Bang, 4), Expr::nil()),
        );
        assert_eq!(Expr::from_json(source).unwrap(), expected);
    }

    #[test]
    fn decodes_scalar_literals() {
        let cases = [
            (r#"{"Literal": 2.5}"#, Literal::Number(2.5)),
            (r#"{"Literal": true}"#, Literal::Boolean(true)),
            (r#"{"Literal": "abc"}"#, Literal::String("abc".into())),
            (r#"{"Literal": null}"#, Literal::None),
        ];
        for (source, literal) in cases {
            assert_eq!(Expr::from_json(source).unwrap(), Expr::Literal(literal));
        }
    }

    #[test]
    fn malformed_json_is_a_decode_error() {
        let err = Expr::from_json(r#"{"Ternary": {}}"#).unwrap_err();
        assert!(matches!(err, LoadError::Decode(_)));
    }

    fn nested_groupings(depth: usize) -> String {
        let mut source = String::from(r#"{"Literal": 0}"#);
        for _ in 0..depth {
            source = format!(r#"{{"Grouping": {{"expression": {source}}}}}"#);
        }
        source
    }

    #[test]
    fn moderately_deep_tree_decodes() {
        let mut expected = Expr::literal(0.0);
        for _ in 0..60 {
            expected = Expr::grouping(expected);
        }
        assert_eq!(Expr::from_json(&nested_groupings(60)).unwrap(), expected);
    }

    #[test]
    fn nesting_beyond_recursion_limit_is_rejected() {
        // Every grouping level costs two JSON object levels.
        let err = Expr::from_json(&nested_groupings(70)).unwrap_err();
        assert!(matches!(err, LoadError::Decode(_)));
    }

    #[test]
    fn decode_message_leaves_cause_to_source() {
        let err = Expr::from_json("{ not json").unwrap_err();
        assert_eq!(err.to_string(), "Failed to decode expression tree");
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let path = Path::new("does/not/exist.json");
        let err = Expr::from_path(path).unwrap_err();
        match err {
            LoadError::Read {
                path: ref reported,
                ..
            } => {
                assert_eq!(reported.as_path(), path);
                assert_eq!(
                    err.to_string(),
                    "Failed to read expression file 'does/not/exist.json'"
                );
                assert!(std::error::Error::source(&err).is_some());
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
