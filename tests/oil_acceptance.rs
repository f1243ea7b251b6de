use approx::assert_relative_eq;
use rockfluid_rs::fluid::oil::{dead_density, live_density, reference_density};
use rockfluid_rs::{
    DomainError, Fluid, FluidKind, FluidModel, OilParameters, ValidationMode, compute_summary,
};

#[test]
fn dead_oil_density_is_the_dead_correlation() {
    let o = OilParameters::default();
    assert_eq!(
        o.density().to_bits(),
        dead_density(o.temperature, o.pressure, o.api_gravity).to_bits()
    );

    // Eqs. 18 and 19 written independently.
    let (t, p) = (45.0_f64, 10.0_f64);
    let rho0 = 141.5 / (39.6 + 131.5);
    let rho_p = rho0 + (0.00277 * p - 1.71e-7 * p * p * p) * (rho0 - 1.15) * (rho0 - 1.15) + 3.49e-4 * p;
    let expected = rho_p / (0.972 + 3.81e-4 * (t + 17.78).powf(1.175));
    assert_relative_eq!(o.density(), expected, max_relative = 1e-14);
    assert_relative_eq!(o.density(), 0.815_936, max_relative = 1e-6);
}

#[test]
fn live_oil_density_uses_formation_volume_factor() {
    let o = OilParameters {
        live: true,
        ..Default::default()
    };
    let rho0 = reference_density(39.6);
    let bo = 0.972 + 0.00038 * (2.4 * 5.0 * (0.6 / rho0).sqrt() + 45.0 + 17.8).powf(1.175);
    let expected = (rho0 + 0.0012 * 0.6 * 5.0) / bo;

    assert_relative_eq!(o.density(), expected, max_relative = 1e-14);
    assert_relative_eq!(o.density(), 0.805_788, max_relative = 1e-6);
    assert_relative_eq!(o.formation_volume_factor().unwrap_or_default(), 1.030_794, max_relative = 1e-6);
    assert_eq!(o.density(), live_density(45.0, 39.6, 5.0, 0.6));
}

#[test]
fn bulk_modulus_combines_density_and_velocity() {
    for live in [false, true] {
        let o = OilParameters {
            live,
            ..Default::default()
        };
        let expected = o.density() * o.compressional_velocity().powi(2) / 1e6;
        assert_eq!(o.bulk_modulus(), expected);
    }
    assert_relative_eq!(
        OilParameters::default().bulk_modulus(),
        1.414_451,
        max_relative = 1e-6
    );
}

#[test]
fn viscosity_follows_live_flag() {
    let dead = OilParameters::default();
    let live = OilParameters { live: true, ..dead };
    assert_relative_eq!(dead.viscosity(), 4.706_187, max_relative = 1e-6);
    assert_relative_eq!(live.viscosity(), 3.128_373, max_relative = 1e-6);
}

#[test]
fn calculations_reread_mutated_parameters() {
    let mut o = OilParameters::default();
    let before = o.density();
    o.temperature = 67.0;
    o.api_gravity = 43.0;
    assert_ne!(o.density(), before);
    assert_eq!(o.density(), dead_density(67.0, 10.0, 43.0));

    o.live = true;
    assert_eq!(o.density(), live_density(67.0, 43.0, 5.0, 0.6));
}

#[test]
fn strict_summary_for_default_oil() {
    let fluid = Fluid::with_defaults(FluidKind::Oil);
    let summary = compute_summary(&fluid, ValidationMode::Strict).expect("defaults are valid");
    assert_eq!(summary.fluid, FluidKind::Oil);
    assert!(!summary.live);
    assert_eq!(summary.formation_volume_factor, None);
    assert_eq!(summary.density_g_cc, fluid.density());
}

#[test]
fn strict_summary_distinguishes_error_kinds() {
    let bad_api = Fluid::Oil(OilParameters {
        api_gravity: -131.5,
        ..Default::default()
    });
    assert!(matches!(
        compute_summary(&bad_api, ValidationMode::Strict),
        Err(DomainError::OutOfRange {
            parameter: "api_gravity",
            ..
        })
    ));

    let no_gas = Fluid::Oil(OilParameters {
        live: true,
        gas_gravity: -1.0,
        ..Default::default()
    });
    assert_eq!(
        compute_summary(&no_gas, ValidationMode::Strict),
        Err(DomainError::MissingLiveParameter {
            parameter: "gas_gravity"
        })
    );

    // The same inputs pass through permissively.
    let summary = compute_summary(&bad_api, ValidationMode::Permissive).expect("permissive");
    assert!(!summary.density_g_cc.is_finite());
}
