use super::AqueousError;

/// pH + pOH at 25 C
pub const PH_POH_SUM: f64 = 14.0;

/// pH = -log10([H+])
pub fn ph_from_concentration(h_conc: f64) -> Result<f64, AqueousError> {
    if !(h_conc > 0.0) {
        return Err(AqueousError::NonPositiveConcentration(h_conc));
    }
    Ok(-h_conc.log10())
}

/// pH of a base whose solver output was treated as [OH-]: 14 - pOH
pub fn complement_ph(ph: f64) -> f64 {
    PH_POH_SUM - ph
}
