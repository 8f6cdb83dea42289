use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Literal {
    None,
    Boolean(bool),
    String(String),
    Number(f64),
}

impl From<f64> for Literal {
    fn from(number: f64) -> Self {
        Literal::Number(number)
    }
}

impl From<bool> for Literal {
    fn from(boolean: bool) -> Self {
        Literal::Boolean(boolean)
    }
}

impl From<&str> for Literal {
    fn from(string: &str) -> Self {
        Literal::String(string.into())
    }
}

impl From<String> for Literal {
    fn from(string: String) -> Self {
        Literal::String(string)
    }
}
