//! Beamcheck Example - Stepped Tension Member

use anyhow::Result;
use beamcheck::prelude::*;
use std::collections::BTreeMap;
use std::sync::Arc;

fn main() -> Result<()> {
    env_logger::init();

    println!("=== Beamcheck Example: Stepped Tension Member ===\n");

    // A 5m hanger made of two circular bars spliced at mid-length:
    //
    //     0.0m           2.5m           5.0m
    //      |---- d=32 ----|---- d=24 ----|
    //                   splice
    //
    // The splice is modelled as a zero-length seam element so both faces
    // of the step stay queryable.

    let grade_300 = Material::as3678_300();

    let bar_32: SectionRef = Arc::new(Circle::new(grade_300.clone(), 0.016)?);
    let bar_24: SectionRef = Arc::new(Circle::new(grade_300, 0.012)?);

    // Case 1: 60kN dead load tension, constant over the member.
    // Case 2: live load varying along the member, peaking at the splice.
    let case_ids = [1, 2];
    let dead = [0.0, 0.0, 60e3, 0.0, 0.0, 0.0];

    let live_left = LoadCase::new(vec![
        [0.0, 0.0, 0.0, 20e3, 0.0, 0.0, 0.0],
        [1.0, 0.0, 0.0, 45e3, 0.0, 0.0, 0.0],
    ])?;
    let live_right = LoadCase::new(vec![
        [0.0, 0.0, 0.0, 45e3, 0.0, 0.0, 0.0],
        [1.0, 0.0, 0.0, 15e3, 0.0, 0.0, 0.0],
    ])?;
    let live_splice = LoadCase::constant_load([0.0, 0.0, 45e3, 0.0, 0.0, 0.0]);

    let elements = vec![
        Element::new(
            BTreeMap::from([(1, LoadCase::constant_load(dead)), (2, live_left)]),
            2.5,
            bar_32.clone(),
        )?,
        Element::new(
            BTreeMap::from([(1, LoadCase::constant_load(dead)), (2, live_splice)]),
            0.0,
            bar_24.clone(),
        )?,
        Element::new(
            BTreeMap::from([(1, LoadCase::constant_load(dead)), (2, live_right)]),
            2.5,
            bar_24,
        )?,
    ];

    let beam = Beam::new(elements)?;

    println!("Member length: {:.1}m", beam.length());
    println!("Load cases:    {:?}\n", beam.load_case_ids());

    // Query the axial load along the member for each case.
    for case in case_ids {
        println!("--- Case {case}: axial load ---");
        let axial =
            beam.get_load_component(case, &PositionQuery::min_positions(5), LoadComponent::N)?;
        for [position, n] in axial {
            println!("  x = {position:>5.2}m   N = {:>6.1} kN", n / 1e3);
        }
        println!();
    }

    // Sections at the splice: both bars and the seam itself show up.
    let at_splice = beam.get_section(Some(&[2.5]))?;
    println!("Sections at the splice (x = 2.5m):");
    for section in &at_splice[0] {
        println!("  area = {:.1} mm²", section.area() * 1e6);
    }
    println!();

    // AS4100 tension check over the whole member.
    let check = As4100::for_beam(beam)?;

    println!("--- AS4100 tension check ---");
    println!("phi.Nt  = {:>6.1} kN", check.phi_nt(None)? / 1e3);
    println!("phi.Nty = {:>6.1} kN", check.phi_nty(None)? / 1e3);
    println!("phi.Ntu = {:>6.1} kN", check.phi_ntu(None)? / 1e3);

    for case in case_ids {
        let utilisation = check.tension_utilisation(Some(case), None)?;
        println!("Case {case} utilisation: {:.1}%", utilisation * 100.0);
    }

    println!("\n=== Example Complete ===");

    Ok(())
}
