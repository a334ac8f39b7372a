use std::{fmt, rc::Rc};

#[derive(Debug, PartialEq, Clone)]
pub enum RuntimeValue {
    Nil,
    Bool(bool),
    Int(i64),
    Float(f64),
    Char(char),
    String(Rc<String>),
}

impl RuntimeValue {
    pub fn type_name(&self) -> &'static str {
        use RuntimeValue::*;
        match self {
            Nil => "nil",
            Bool(_) => "bool",
            Int(_) => "int",
            Float(_) => "float",
            Char(_) => "char",
            String(_) => "string",
        }
    }
}

impl From<&str> for RuntimeValue {
    fn from(value: &str) -> Self {
        RuntimeValue::String(Rc::new(value.to_string()))
    }
}

impl From<i64> for RuntimeValue {
    fn from(value: i64) -> Self {
        RuntimeValue::Int(value)
    }
}

impl fmt::Display for RuntimeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use RuntimeValue::*;
        match self {
            Nil => write!(f, "nil"),
            Bool(value) => write!(f, "{}", value),
            Int(value) => write!(f, "{}", value),
            Float(value) => {
                // Shortest round-trip form, always with a fractional part.
                let text = value.to_string();
                if value.is_finite() && !text.contains('.') {
                    write!(f, "{}.0", text)
                } else {
                    f.write_str(&text)
                }
            }
            Char(value) => write!(f, "{}", value),
            String(value) => f.write_str(value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stringify() {
        assert_eq!(RuntimeValue::Nil.to_string(), "nil");
        assert_eq!(RuntimeValue::Bool(false).to_string(), "false");
        assert_eq!(RuntimeValue::Int(-42).to_string(), "-42");
        assert_eq!(RuntimeValue::Char('x').to_string(), "x");
        assert_eq!(RuntimeValue::from("a b").to_string(), "a b");
    }

    #[test]
    fn floats_keep_a_fractional_part() {
        assert_eq!(RuntimeValue::Float(3.0).to_string(), "3.0");
        assert_eq!(RuntimeValue::Float(132.4).to_string(), "132.4");
        assert_eq!(RuntimeValue::Float(-0.5).to_string(), "-0.5");
        assert_eq!(RuntimeValue::Float(1e21).to_string(), "1000000000000000000000.0");
    }

    #[test]
    fn type_names() {
        assert_eq!(RuntimeValue::Float(1.0).type_name(), "float");
        assert_eq!(RuntimeValue::from(3_i64).type_name(), "int");
        assert_eq!(RuntimeValue::Nil.type_name(), "nil");
    }
}
