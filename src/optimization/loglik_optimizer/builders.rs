//! loglik_optimizer::builders — L-BFGS solver construction helpers.
//!
//! Small, focused builders for the L-BFGS solvers used by the
//! log-likelihood optimizer. These helpers hide Argmin's generic wiring
//! and apply crate-level options (tolerances, memory size) so that
//! higher-level code can request a configured solver without touching
//! Argmin-specific types. The builders do **not** set the initial
//! parameter vector or `max_iters`; those are runtime concerns applied by
//! the runner (`run_lbfgs`).
use argmin::solver::quasinewton::LBFGS;

use crate::optimization::{
    errors::OptResult,
    loglik_optimizer::{
        traits::MLEOptions,
        types::{
            Cost, DEFAULT_LBFGS_MEM, Grad, HagerZhangLS, LbfgsHagerZhang, LbfgsMoreThuente,
            MoreThuenteLS, Theta,
        },
    },
};

/// Construct L-BFGS with a Hager–Zhang line search.
///
/// Consults `opts.lbfgs_mem` (falling back to [`DEFAULT_LBFGS_MEM`]) and
/// wires the optional gradient/cost tolerances from `opts.tols` into the
/// solver via [`configure_lbfgs`].
///
/// # Errors
/// - `OptError` (via `From<argmin::core::Error>`) if Argmin rejects a
///   tolerance setting.
pub fn build_optimizer_hager_zhang(opts: &MLEOptions) -> OptResult<LbfgsHagerZhang> {
    let hager_zhang = HagerZhangLS::new();
    let mem = opts.lbfgs_mem.unwrap_or(DEFAULT_LBFGS_MEM);
    let lbfgs = LbfgsHagerZhang::new(hager_zhang, mem);
    configure_lbfgs(lbfgs, opts)
}

/// Construct L-BFGS with a More–Thuente line search.
///
/// Same configuration path as [`build_optimizer_hager_zhang`] with the
/// alternate line-search strategy.
///
/// # Errors
/// - `OptError` (via `From<argmin::core::Error>`) if Argmin rejects a
///   tolerance setting.
pub fn build_optimizer_more_thuente(opts: &MLEOptions) -> OptResult<LbfgsMoreThuente> {
    let more_thuente = MoreThuenteLS::new();
    let mem = opts.lbfgs_mem.unwrap_or(DEFAULT_LBFGS_MEM);
    let lbfgs = LbfgsMoreThuente::new(more_thuente, mem);
    configure_lbfgs(lbfgs, opts)
}

/// Apply optional tolerances to an L-BFGS solver.
///
/// Generic over the line-search type `L` so both builders (and any future
/// variants) share one tolerance-wiring path. When a tolerance is `None`,
/// the corresponding `with_tolerance_*` method is not called and Argmin's
/// defaults remain in effect.
///
/// # Errors
/// - `OptError` (via `From<argmin::core::Error>`) when
///   `with_tolerance_grad` or `with_tolerance_cost` rejects a value.
pub fn configure_lbfgs<L>(
    mut solver: LBFGS<L, Theta, Grad, Cost>, opts: &MLEOptions,
) -> OptResult<LBFGS<L, Theta, Grad, Cost>> {
    if let Some(g) = opts.tols.tol_grad {
        solver = solver.with_tolerance_grad(g)?;
    }
    if let Some(c) = opts.tols.tol_cost {
        solver = solver.with_tolerance_cost(c)?;
    }
    Ok(solver)
}
