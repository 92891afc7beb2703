//! AS4100 Section 5 - shear capacity of webs and circular sections.
//!
//! Only load-independent capacities live here; interaction with moment
//! (S5.12) belongs in a combined-actions check.

/// Shear yield capacity of a flat web panel to AS4100 S5.11.4, in N.
///
/// Acceptable for any section other than a CHS. `aw` is the gross web area
/// in m² (welded sections use the web panel depth only), `fy` in Pa. The
/// 0.6 factor approximates 1/sqrt(3).
pub fn s5_11_4_v_w_generic(aw: f64, fy: f64) -> f64 {
    0.6 * fy * aw
}

/// Shear yield capacity of a CHS to AS4100 S5.11.4, in N.
///
/// `ae` is the effective area allowing for holes; the gross area is
/// normally acceptable.
pub fn s5_11_4_v_w_chs(ae: f64, fy: f64) -> f64 {
    0.36 * fy * ae
}

/// Shear capacity limited by the welds connecting a component to the rest
/// of the section, AS4100 S5.11.4.
///
/// `v_w` is the total longitudinal weld capacity in N/m, `q` the first
/// moment of area of the connected component in m³ and `i` the second
/// moment of area of the whole section in m⁴.
pub fn s5_11_4_v_w_weld(v_w: f64, q: f64, i: f64) -> f64 {
    v_w * i / q
}

/// Shear capacity limited by local yield of an interface such as a
/// flange-to-web junction.
///
/// The thinner side of the interface governs; `t1` and `t2` are the summed
/// component thicknesses on each side in m and `fy_min` the minimum yield
/// strength of the connected parts in Pa.
pub fn s5_11_4_v_w_interface(t1: &[f64], t2: &[f64], fy_min: f64, q: f64, i: f64) -> f64 {
    let t = t1.iter().sum::<f64>().min(t2.iter().sum::<f64>());

    0.6 * fy_min * t * i / q
}

/// Shear buckling coefficient to AS4100 S5.11.5 for an unstiffened web.
///
/// `dp` is the web panel depth and `tw` the web thickness, in m. The
/// default `slenderness_limit` of 82.0 assumes a web simply supported top
/// and bottom; `fy_ref` is 250 MPa per AS4100.
pub fn s5_11_5_alpha_v(dp: f64, tw: f64, fy: f64, slenderness_limit: f64, fy_ref: f64) -> f64 {
    let ratio = dp / tw;
    let limit = slenderness_limit / (fy / fy_ref).sqrt();

    if ratio > limit {
        (limit / ratio).powi(2).min(1.0)
    } else {
        1.0
    }
}

/// Non-uniform shear stress factor to AS4100 S5.11.3.
///
/// Applies to sections such as PFCs and monosymmetric I sections. `f_vm`
/// and `f_va` are the maximum and average elastic shear stresses.
pub fn s5_11_3_alpha_vma(f_vm: f64, f_va: f64) -> f64 {
    (2.0 / (0.9 + f_vm / f_va)).min(1.0)
}
