/// parsing of human-typed numbers: plain decimals and scientific notation in the forms
/// `C*10^E`, `C*e^E` and `Ce^E`. Whitespace anywhere in the text is ignored.
/// # Examples
/// ```
/// use pHsolver::Aqueous::numeric_parser::parse_numeric;
/// use approx::assert_relative_eq;
/// assert_relative_eq!(parse_numeric("1.8 e^-5").unwrap(), 1.8e-5, epsilon = 1e-15);
/// assert_relative_eq!(parse_numeric("0.1").unwrap(), 0.1);
/// assert!(parse_numeric("abc").is_err());
/// ```
pub mod numeric_parser;
/// equilibrium of a weak monoprotic acid (or base) HA <=> H+ + A-.
/// With starting concentration M and dissociation constant K the equilibrium [H+] = x obeys
/// x^2 + K*x - K*M = 0
/// The quadratic is solved in complex arithmetic and the real root is selected:
/// 1) both roots real - the larger one
/// 2) one root real - that one
/// 3) no real root - error
///
/// A selected root that is zero, negative or infinite (cancellation, underflow or overflow of
/// the f64 arithmetic) is an error as well.
/// # Examples
/// ```
/// use pHsolver::Aqueous::equilibrium_solver::solve_h_concentration;
/// use approx::assert_relative_eq;
/// // acetic acid, 0.1 M
/// let h = solve_h_concentration(0.1, 1.8e-5).unwrap();
/// assert_relative_eq!(h, 1.3327e-3, epsilon = 1e-6);
/// ```
pub mod equilibrium_solver;
/// conversion of [H+] into pH
pub mod ph_converter;

use thiserror::Error;

/// error types of the numeric core
#[derive(Debug, Error, Clone, PartialEq)]
pub enum AqueousError {
    #[error("Invalid numeric input: {0:?}")]
    InvalidNumber(String),
    #[error("Concentration and dissociation constant must be positive (M = {m}, K = {k})")]
    PreconditionViolation { m: f64, k: f64 },
    #[error("No real solution for [H+] (M = {m}, K = {k})")]
    NoRealSolution { m: f64, k: f64 },
    #[error("Equilibrium root {root} is not a positive finite [H+] (M = {m}, K = {k})")]
    DegenerateRoot { m: f64, k: f64, root: f64 },
    #[error("pH is undefined for [H+] = {0}")]
    NonPositiveConcentration(f64),
}

/// Species enum: acid or base. Chooses the store, the prompts and the pH convention
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Species {
    Acid,
    Base,
}

impl Species {
    /// parses the answer to "Acid or base?"; only the exact keywords are accepted
    pub fn from_answer(answer: &str) -> Option<Species> {
        match answer {
            "acid" => Some(Species::Acid),
            "base" => Some(Species::Base),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Species::Acid => "acid",
            Species::Base => "base",
        }
    }

    /// name of the dissociation constant: Ka or Kb
    pub fn constant_label(&self) -> &'static str {
        match self {
            Species::Acid => "Ka",
            Species::Base => "Kb",
        }
    }
}
