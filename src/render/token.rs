/// One configuration datum to be printed in a section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// Printed as-is; holds no quote, backslash or line break.
    Literal(String),
    /// `name=\"value\"`.
    Defined(String, String),
    /// `name=value` with `value` in base 10.
    DefinedNumeric(String, i64),
    /// `name=UNDEF`.
    Undefined(String),
}

impl Token {
    pub fn literal(text: impl Into<String>) -> Self {
        Token::Literal(text.into())
    }

    pub fn defined(name: impl Into<String>, value: impl Into<String>) -> Self {
        Token::Defined(name.into(), value.into())
    }

    pub fn numeric(name: impl Into<String>, value: i64) -> Self {
        Token::DefinedNumeric(name.into(), value)
    }

    pub fn undefined(name: impl Into<String>) -> Self {
        Token::Undefined(name.into())
    }

    /// Key name for the `key=...` variants.
    pub fn name(&self) -> Option<&str> {
        match self {
            Token::Literal(_) => None,
            Token::Defined(name, _) | Token::DefinedNumeric(name, _) | Token::Undefined(name) => {
                Some(name)
            }
        }
    }
}
