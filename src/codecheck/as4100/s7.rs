//! AS4100 Section 7 - members subject to axial tension.
//!
//! Pure capacity equations in SI units (m², Pa, N). Capacity reduction
//! factors are applied by the caller.

/// Tension capacity to AS4100 S7.1: the lesser of gross yield and net
/// fracture.
///
/// `ag` and `an` are the gross and net section areas in m², `fy` and `fu`
/// the yield and ultimate strengths in Pa, `kt` the connection efficiency
/// factor and `alpha_u` the ultimate-strength uncertainty factor (AS4100
/// gives 0.85).
pub fn s7_1_nt(ag: f64, an: f64, fy: f64, fu: f64, kt: f64, alpha_u: f64) -> f64 {
    s7_2_nty(ag, fy).min(s7_2_ntu(an, fu, kt, alpha_u))
}

/// Gross yield capacity to AS4100 S7.2, in N.
pub fn s7_2_nty(ag: f64, fy: f64) -> f64 {
    ag * fy
}

/// Net fracture capacity to AS4100 S7.2, in N, including the additional
/// ultimate-strength uncertainty factor.
pub fn s7_2_ntu(an: f64, fu: f64, kt: f64, alpha_u: f64) -> f64 {
    an * fu * kt * alpha_u
}
