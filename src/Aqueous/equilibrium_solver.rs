use super::AqueousError;
use log::debug;
use nalgebra::Complex;

/// Roots of a*x^2 + b*x + c = 0 by the closed-form formula, in complex arithmetic,
/// so a negative discriminant needs no special case.
pub fn quadratic_roots(a: f64, b: f64, c: f64) -> (Complex<f64>, Complex<f64>) {
    let discriminant = Complex::new(b * b - 4.0 * a * c, 0.0);
    let sqrt_d = discriminant.sqrt();
    let minus_b = Complex::new(-b, 0.0);
    let root1 = (minus_b + sqrt_d) / (2.0 * a);
    let root2 = (minus_b - sqrt_d) / (2.0 * a);
    (root1, root2)
}

/// Equilibrium hydrogen-ion concentration of a weak acid with starting concentration `m`
/// and dissociation constant `k`: the selected root of x^2 + K*x - K*M = 0.
///
/// Imaginary parts are compared with zero exactly. When both roots are real the larger
/// real part wins. The selected root must be finite and positive.
pub fn solve_h_concentration(m: f64, k: f64) -> Result<f64, AqueousError> {
    if !(m > 0.0 && k > 0.0) {
        return Err(AqueousError::PreconditionViolation { m, k });
    }
    let (root1, root2) = quadratic_roots(1.0, k, -k * m);
    debug!("roots for M = {}, K = {}: {} and {}", m, k, root1, root2);

    let root = match (root1.im == 0.0, root2.im == 0.0) {
        (true, true) => root1.re.max(root2.re),
        (true, false) => root1.re,
        (false, true) => root2.re,
        (false, false) => return Err(AqueousError::NoRealSolution { m, k }),
    };
    if !(root.is_finite() && root > 0.0) {
        return Err(AqueousError::DegenerateRoot { m, k, root });
    }
    Ok(root)
}
