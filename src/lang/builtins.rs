use std::f64::consts;

/// The fixed set of one-argument math functions an expression may call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryFn {
    Sin,
    Cos,
    Tan,
    Sqrt,
    Abs,
    Ln,
    Exp,
}

impl UnaryFn {
    pub fn apply(self, v: f64) -> f64 {
        match self {
            UnaryFn::Sin => v.sin(),
            UnaryFn::Cos => v.cos(),
            UnaryFn::Tan => v.tan(),
            UnaryFn::Sqrt => v.sqrt(),
            UnaryFn::Abs => v.abs(),
            UnaryFn::Ln => v.ln(),
            UnaryFn::Exp => v.exp(),
        }
    }
}

// --- Name tables ---

/// `log` is the natural logarithm, same as `ln`.
const MATH_UNARY: &[(&str, UnaryFn)] = &[
    ("sin", UnaryFn::Sin),
    ("cos", UnaryFn::Cos),
    ("tan", UnaryFn::Tan),
    ("sqrt", UnaryFn::Sqrt),
    ("abs", UnaryFn::Abs),
    ("log", UnaryFn::Ln),
    ("ln", UnaryFn::Ln),
    ("exp", UnaryFn::Exp),
];

const CONSTANTS: &[(&str, f64)] = &[("pi", consts::PI), ("e", consts::E)];

/// The single free variable.
pub const VARIABLE: &str = "x";

pub fn lookup_function(name: &str) -> Option<UnaryFn> {
    MATH_UNARY
        .iter()
        .find(|(n, _)| *n == name)
        .map(|(_, f)| *f)
}

pub fn lookup_constant(name: &str) -> Option<f64> {
    CONSTANTS.iter().find(|(n, _)| *n == name).map(|(_, v)| *v)
}

/// Names of all callable functions, for diagnostics.
pub fn function_names() -> impl Iterator<Item = &'static str> {
    MATH_UNARY.iter().map(|(n, _)| *n)
}
