use crate::Aqueous::equilibrium_solver::solve_h_concentration;
use crate::Aqueous::numeric_parser::parse_numeric;
use crate::Aqueous::ph_converter::{complement_ph, ph_from_concentration};
use crate::Aqueous::{AqueousError, Species};
use crate::formula_store::{FormulaStore, StoreError};
use crate::store_config::StoreConfig;
use log::{info, warn};
use std::io::{self, BufRead, Write};
use thiserror::Error;

/// fatal errors of an interactive session
#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Aqueous(#[from] AqueousError),
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error("Terminal I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Result of one pH computation
#[derive(Debug, Clone, PartialEq)]
pub struct PhReport {
    pub species: Species,
    pub formula: String,
    /// Ka or Kb
    pub k: f64,
    /// starting concentration, mol/L
    pub m: f64,
    /// root of the equilibrium quadratic
    pub h_concentration: f64,
    /// -log10 of the root
    pub raw_ph: f64,
    /// raw pH for acids, 14 - raw pH for bases
    pub displayed_ph: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SessionOutcome {
    Computed(PhReport),
    /// "Invalid input" was printed; nothing was computed or saved
    InvalidInput,
}

/// Solves the equilibrium for one solution and applies the pH convention of the species.
pub fn compute_ph(
    species: Species,
    formula: &str,
    m: f64,
    k: f64,
) -> Result<PhReport, AqueousError> {
    let h_concentration = solve_h_concentration(m, k)?;
    let raw_ph = ph_from_concentration(h_concentration)?;
    let displayed_ph = match species {
        Species::Acid => raw_ph,
        Species::Base => complement_ph(raw_ph),
    };
    info!(
        "{} {}: M = {}, {} = {}, root = {}, pH = {}",
        species.as_str(),
        formula,
        m,
        species.constant_label(),
        k,
        h_concentration,
        displayed_ph
    );
    Ok(PhReport {
        species,
        formula: formula.to_string(),
        k,
        m,
        h_concentration,
        raw_ph,
        displayed_ph,
    })
}

/// Runs one question-and-answer session:
/// acid or base -> formula -> (stored constant confirmation) -> K -> M -> pH, then saves K.
///
/// Only the store of the chosen branch is opened. Unparsable or non-positive numbers end the
/// session with "Invalid input" and no file writes.
pub fn run_session<R: BufRead, W: Write>(
    mut input: R,
    mut output: W,
    config: &StoreConfig,
) -> Result<SessionOutcome, SessionError> {
    let answer = prompt(&mut input, &mut output, "Acid or base?: ")?;
    let Some(species) = Species::from_answer(&answer) else {
        return invalid_input(&mut output, &format!("unknown branch {:?}", answer));
    };

    let mut store = FormulaStore::open(config.path_for(species))?;
    let label = species.constant_label();

    let formula = prompt(&mut input, &mut output, "Enter formula: ")?;
    let mut k = None;
    if let Some(stored) = store.get(&formula) {
        let question = format!("{} of {}: {}. Correct? (y/n) ", label, formula, stored);
        if prompt(&mut input, &mut output, &question)? == "y" {
            k = Some(stored);
        }
    }
    let k = match k {
        Some(k) => k,
        None => {
            let raw = prompt(&mut input, &mut output, &format!("Enter {}: ", label))?;
            match parse_numeric(&raw) {
                Ok(k) => k,
                Err(e) => return invalid_input(&mut output, &e.to_string()),
            }
        }
    };
    if !(k > 0.0) {
        return invalid_input(&mut output, &format!("{} must be positive, got {}", label, k));
    }

    let raw = prompt(&mut input, &mut output, "Enter M: ")?;
    let m = match parse_numeric(&raw) {
        Ok(m) if m > 0.0 => m,
        Ok(m) => return invalid_input(&mut output, &format!("M must be positive, got {}", m)),
        Err(e) => return invalid_input(&mut output, &e.to_string()),
    };

    let report = compute_ph(species, &formula, m, k)?;
    writeln!(output, "pH: {}", report.displayed_ph)?;

    store.save(&formula, k)?;
    Ok(SessionOutcome::Computed(report))
}

fn invalid_input<W: Write>(output: &mut W, reason: &str) -> Result<SessionOutcome, SessionError> {
    warn!("invalid input: {}", reason);
    writeln!(output, "Invalid input")?;
    Ok(SessionOutcome::InvalidInput)
}

/// prints the question and reads one line without its line ending; end of input reads as ""
fn prompt<R: BufRead, W: Write>(input: &mut R, output: &mut W, question: &str) -> io::Result<String> {
    write!(output, "{}", question)?;
    output.flush()?;
    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim_end_matches(['\n', '\r']).to_string())
}
