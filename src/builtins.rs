use crate::{environment::Environment, value::RuntimeValue};

pub const VERSION_MAJOR: i64 = 0;
pub const VERSION_MINOR: i64 = 1;
pub const VERSION_PATCH: i64 = 1;
pub const VERSION_STR: &str = "0.1.0";

/// The root scope every program runs under.
pub fn global_environment() -> Environment<'static> {
    let mut globals = Environment::new();

    globals.define("SL_VER_MAJOR", RuntimeValue::Int(VERSION_MAJOR));
    globals.define("SL_VER_MINOR", RuntimeValue::Int(VERSION_MINOR));
    globals.define("SL_VER_PATCH", RuntimeValue::Int(VERSION_PATCH));
    globals.define("SL_VER_STR", RuntimeValue::from(VERSION_STR));

    globals
}
