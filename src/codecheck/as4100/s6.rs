//! AS4100 Section 6 - plate element slenderness and effective areas in
//! compression.

use std::f64::consts::PI;

/// Slenderness of a flat plate element to AS4100 S6.2.
///
/// `b` is the clear width and `t` the thickness in m; `fy_ref` is the
/// 250 MPa reference yield stress.
pub fn s6_2_lambda_e_flatplate(b: f64, t: f64, fy: f64, fy_ref: f64) -> f64 {
    (b / t) * (fy / fy_ref).sqrt()
}

/// Slenderness of a CHS element to AS4100 S6.2.
pub fn s6_2_lambda_e_chs(d_o: f64, t: f64, fy: f64, fy_ref: f64) -> f64 {
    (d_o / t) * (fy / fy_ref)
}

/// Effective width of a flat plate element to AS4100 S6.2.
///
/// `lambda_ey` is the yield slenderness limit from AS4100 T6.2.4.
pub fn s6_2_b_e_flatplate(b: f64, lambda_e: f64, lambda_ey: f64) -> f64 {
    (b * lambda_ey / lambda_e).min(b)
}

/// Effective outside diameter of a CHS element to AS4100 S6.2.
pub fn s6_2_d_e_chs(d_o: f64, lambda_e: f64, lambda_ey: f64) -> f64 {
    let d_e1 = d_o * (lambda_ey / lambda_e).sqrt();
    let d_e2 = d_o * (3.0 * lambda_ey / lambda_e).powi(2);

    d_e1.min(d_e2).min(d_o)
}

/// Effective compression area of a flat plate element to AS4100 S6.2, in m².
pub fn s6_2_a_e_flatplate(b: f64, t: f64, fy: f64, lambda_ey: f64, fy_ref: f64) -> f64 {
    let lambda_e = s6_2_lambda_e_flatplate(b, t, fy, fy_ref);
    let b_e = s6_2_b_e_flatplate(b, lambda_e, lambda_ey);

    b_e * t
}

/// Effective compression area of a CHS element to AS4100 S6.2, in m²,
/// based on a ring of the effective diameter and the original wall.
pub fn s6_2_a_e_chs(d_o: f64, t: f64, fy: f64, lambda_ey: f64, fy_ref: f64) -> f64 {
    let lambda_e = s6_2_lambda_e_chs(d_o, t, fy, fy_ref);
    let d_e = s6_2_d_e_chs(d_o, lambda_e, lambda_ey);

    let r_o = d_e / 2.0;
    let r_i = d_e / 2.0 - t;

    PI * (r_o * r_o - r_i * r_i)
}

/// Form factor kf to AS4100 S6.2: effective over net area.
pub fn s6_2_k_f_form_factor(a_n: f64, a_e: f64) -> f64 {
    a_e / a_n
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_flatplate_slenderness() {
        // 100x10 plate at the reference yield stress
        assert_relative_eq!(s6_2_lambda_e_flatplate(0.1, 0.01, 250e6, 250e6), 10.0);

        // grade 360: slenderness scales with sqrt(fy)
        assert_relative_eq!(
            s6_2_lambda_e_flatplate(0.1, 0.01, 360e6, 250e6),
            10.0 * (360.0_f64 / 250.0).sqrt()
        );
    }

    #[test]
    fn test_chs_slenderness_scales_linearly() {
        assert_relative_eq!(s6_2_lambda_e_chs(0.1, 0.005, 500e6, 250e6), 40.0);
    }

    #[test]
    fn test_stocky_plate_fully_effective() {
        // lambda_e below the yield limit: full width, full area
        assert_relative_eq!(s6_2_b_e_flatplate(0.1, 10.0, 16.0), 0.1);
        assert_relative_eq!(s6_2_a_e_flatplate(0.1, 0.01, 250e6, 16.0, 250e6), 0.001);
    }

    #[test]
    fn test_slender_plate_reduced() {
        // lambda_e = 32 against a limit of 16: half the width is effective
        let b_e = s6_2_b_e_flatplate(0.32, 32.0, 16.0);
        assert_relative_eq!(b_e, 0.16);
    }

    #[test]
    fn test_stocky_chs_fully_effective() {
        let d_e = s6_2_d_e_chs(0.1, 40.0, 82.0);
        assert_relative_eq!(d_e, 0.1);
    }

    #[test]
    fn test_form_factor() {
        assert_relative_eq!(s6_2_k_f_form_factor(0.002, 0.001), 0.5);
        assert_relative_eq!(s6_2_k_f_form_factor(0.002, 0.002), 1.0);
    }
}
