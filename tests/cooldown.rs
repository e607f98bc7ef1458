//! 쿨다운 계산 회귀 테스트.
use std::f64::consts::PI;

use approx::assert_relative_eq;
use lng_cooldown_toolbox::cooldown::{
    calculate, CalculationBasis, ContingencyTarget, CoolingDrive, CooldownInput, CooldownModel,
    Cryogen, LatentHeatModel, Phase, PhaseLayout, PipelineInput, TankGeometry,
};
use lng_cooldown_toolbox::material_db::MaterialId;

/// h=10 m, d=4000 mm, t=20 mm, 9% Ni, 20 → -162 °C, 10 °C/h, 10 %
fn reference_input() -> CooldownInput {
    CooldownInput {
        tank: TankGeometry::Shell {
            height_m: 10.0,
            diameter_mm: 4000.0,
            wall_thickness_mm: 20.0,
        },
        tank_material: MaterialId::NickelSteel9,
        pipeline: None,
        initial_temperature_c: 20.0,
        target_temperature_c: -162.0,
        drive: CoolingDrive::CoolingRate { c_per_h: 10.0 },
        contingency_percent: 10.0,
    }
}

/// 48π m² 셸, 20 mm, 8050 kg/m³, 490 J/kgK
fn reference_heat_capacity() -> f64 {
    48.0 * PI * 0.02 * 8050.0 * 490.0
}

#[test]
fn reference_scenario_volumes_and_durations() {
    let res = calculate(&reference_input(), &CooldownModel::default()).expect("cooldown calc");
    let c = reference_heat_capacity();

    assert_eq!(res.basis, CalculationBasis::CoolingRate);
    assert_relative_eq!(res.mass.heat_capacity_j_per_k, c, max_relative = 1e-12);
    assert_eq!(res.phases.len(), 3);

    let lin = c * 180.0 / 200_000.0 / 800.0;
    let lng = c * 2.0 / 512_000.0 / 450.0;
    assert_relative_eq!(res.lin_volume_m3, lin, max_relative = 1e-12);
    assert_relative_eq!(res.lng_volume_m3, lng, max_relative = 1e-12);
    assert_relative_eq!(res.total_lin_volume_m3, lin * 1.1, max_relative = 1e-12);
    assert_relative_eq!(res.total_lng_volume_m3, lng, max_relative = 1e-12);

    assert_relative_eq!(res.lin_duration_h, 18.0, max_relative = 1e-12);
    assert_relative_eq!(res.lng_duration_h, 0.2, max_relative = 1e-12);
    assert_relative_eq!(
        res.total_duration_h,
        res.lin_duration_h + res.lng_duration_h,
        max_relative = 1e-12
    );

    assert!(res.total_lin_volume_m3.is_finite() && res.total_lin_volume_m3 > 0.0);
    assert!(res.total_lng_volume_m3.is_finite() && res.total_lng_volume_m3 > 0.0);
    assert!(res.total_duration_h > 0.0);
}

#[test]
fn total_duration_is_sum_of_phase_durations() {
    let res = calculate(&reference_input(), &CooldownModel::default()).unwrap();
    let sum: f64 = res.phases.iter().map(|p| p.duration_h).sum();
    assert_relative_eq!(res.total_duration_h, sum, max_relative = 1e-12);
    let vapor = res.phase(Phase::VaporLin).expect("vapor phase");
    assert_relative_eq!(vapor.duration_h, 14.0, max_relative = 1e-12);
}

#[test]
fn every_phase_delta_t_is_non_negative() {
    for layout in [PhaseLayout::VaporLinLinLng, PhaseLayout::LinLng] {
        let model = CooldownModel {
            phase_layout: layout,
            ..CooldownModel::default()
        };
        let res = calculate(&reference_input(), &model).unwrap();
        assert!(res.phases.iter().all(|p| p.delta_t_k >= 0.0));
    }
}

#[test]
fn calculation_is_idempotent() {
    let input = reference_input();
    let model = CooldownModel::default();
    let a = calculate(&input, &model).unwrap();
    let b = calculate(&input, &model).unwrap();
    assert_eq!(a, b);
    assert_eq!(
        a.total_lin_volume_m3.to_bits(),
        b.total_lin_volume_m3.to_bits()
    );
}

#[test]
fn two_phase_layout_matches_three_phase_lin_total_with_latent_model() {
    let three = calculate(&reference_input(), &CooldownModel::default()).unwrap();
    let two = calculate(
        &reference_input(),
        &CooldownModel {
            phase_layout: PhaseLayout::LinLng,
            ..CooldownModel::default()
        },
    )
    .unwrap();
    assert_eq!(two.phases.len(), 2);
    assert!(two.phase(Phase::VaporLin).is_none());
    assert_relative_eq!(two.lin_volume_m3, three.lin_volume_m3, max_relative = 1e-12);
    assert_relative_eq!(two.total_duration_h, three.total_duration_h, max_relative = 1e-12);
}

#[test]
fn latent_plus_sensible_adds_cryogen_term() {
    let model = CooldownModel {
        latent_heat: LatentHeatModel::LatentPlusSensible,
        ..CooldownModel::default()
    };
    let res = calculate(&reference_input(), &model).unwrap();
    let c = reference_heat_capacity();
    let vapor = res.phase(Phase::VaporLin).unwrap();
    let expected = c * 140.0 / (200_000.0 + 2040.0 * 140.0) / 800.0;
    assert_relative_eq!(vapor.volume_m3, expected, max_relative = 1e-12);

    let plain = calculate(&reference_input(), &CooldownModel::default()).unwrap();
    assert!(res.lin_volume_m3 < plain.lin_volume_m3);
}

#[test]
fn flow_rate_drive_uses_volume_over_flow() {
    let input = CooldownInput {
        drive: CoolingDrive::FlowRates {
            lin_m3_per_h: 2.0,
            lng_m3_per_h: 0.5,
        },
        ..reference_input()
    };
    let res = calculate(&input, &CooldownModel::default()).unwrap();
    assert_eq!(res.basis, CalculationBasis::FlowRate);
    assert_eq!(res.flow_rate_lin_m3_per_h, 2.0);
    assert_eq!(res.flow_rate_lng_m3_per_h, 0.5);
    assert!(res.heat_removal_rate_w.is_none());
    for p in &res.phases {
        let flow = match p.cryogen {
            Cryogen::Lin => 2.0,
            Cryogen::Lng => 0.5,
        };
        assert_relative_eq!(p.duration_h, p.volume_m3 / flow, max_relative = 1e-12);
    }
}

#[test]
fn higher_flow_rate_shortens_phase_duration() {
    let run = |lin: f64| {
        let input = CooldownInput {
            drive: CoolingDrive::FlowRates {
                lin_m3_per_h: lin,
                lng_m3_per_h: 1.0,
            },
            ..reference_input()
        };
        calculate(&input, &CooldownModel::default()).unwrap()
    };
    let slow = run(1.0);
    let fast = run(4.0);
    assert!(fast.lin_duration_h < slow.lin_duration_h);
    assert_eq!(fast.lng_duration_h, slow.lng_duration_h);
}

#[test]
fn cooling_rate_drive_reports_average_flow_and_heat_removal() {
    let res = calculate(&reference_input(), &CooldownModel::default()).unwrap();
    let c = reference_heat_capacity();
    assert_relative_eq!(
        res.flow_rate_lin_m3_per_h,
        res.lin_volume_m3 / res.lin_duration_h,
        max_relative = 1e-12
    );
    assert_relative_eq!(
        res.flow_rate_lin_m3_per_h,
        c * 10.0 / 200_000.0 / 800.0,
        max_relative = 1e-9
    );
    assert_relative_eq!(
        res.heat_removal_rate_w.unwrap(),
        c * 10.0 / 3600.0,
        max_relative = 1e-12
    );
}

#[test]
fn contingency_zero_leaves_volume_unchanged() {
    let input = CooldownInput {
        contingency_percent: 0.0,
        ..reference_input()
    };
    let res = calculate(&input, &CooldownModel::default()).unwrap();
    assert_eq!(res.contingency_volume_m3, 0.0);
    assert_eq!(res.total_lin_volume_m3, res.lin_volume_m3);
}

#[test]
fn contingency_is_strictly_increasing() {
    let adjusted = |pct: f64| {
        let input = CooldownInput {
            contingency_percent: pct,
            ..reference_input()
        };
        calculate(&input, &CooldownModel::default())
            .unwrap()
            .adjusted_volume_m3()
    };
    let values: Vec<f64> = [0.0, 5.0, 10.0, 50.0].into_iter().map(adjusted).collect();
    assert!(values.windows(2).all(|w| w[1] > w[0]), "{values:?}");
}

#[test]
fn contingency_can_target_lng() {
    let model = CooldownModel {
        contingency_target: ContingencyTarget::Lng,
        ..CooldownModel::default()
    };
    let res = calculate(&reference_input(), &model).unwrap();
    assert_eq!(res.total_lin_volume_m3, res.lin_volume_m3);
    assert_relative_eq!(
        res.total_lng_volume_m3,
        res.lng_volume_m3 * 1.1,
        max_relative = 1e-12
    );
    assert_eq!(res.adjusted_volume_m3(), res.total_lng_volume_m3);
}

#[test]
fn advisory_max_flow_rate_uses_ceiling_and_target_duration() {
    let res = calculate(&reference_input(), &CooldownModel::default()).unwrap();
    // 182 K / 12.5 K/h / 16 h
    assert_relative_eq!(res.max_lin_flow_rate, 182.0 / 12.5 / 16.0, max_relative = 1e-12);
}

#[test]
fn metal_volume_branch_uses_density_directly() {
    let input = CooldownInput {
        tank: TankGeometry::Volume { volume_m3: 3.0 },
        ..reference_input()
    };
    let res = calculate(&input, &CooldownModel::default()).unwrap();
    assert_relative_eq!(res.mass.tank_mass_kg, 3.0 * 8050.0, max_relative = 1e-12);
}

#[test]
fn pipeline_adds_mass_and_heat_capacity() {
    let bare = calculate(&reference_input(), &CooldownModel::default()).unwrap();
    let input = CooldownInput {
        pipeline: Some(PipelineInput {
            length_m: 100.0,
            diameter_mm: 200.0,
            material: MaterialId::StainlessSteel,
        }),
        ..reference_input()
    };
    let res = calculate(&input, &CooldownModel::default()).unwrap();
    let pipe_mass = PI * 0.1_f64.powi(2) * 100.0 * 8000.0;
    assert_relative_eq!(res.mass.pipeline_mass_kg, pipe_mass, max_relative = 1e-12);
    assert_relative_eq!(
        res.mass.heat_capacity_j_per_k,
        bare.mass.heat_capacity_j_per_k + pipe_mass * 500.0,
        max_relative = 1e-12
    );
    assert!(res.total_lin_volume_m3 > bare.total_lin_volume_m3);
}

#[test]
fn cryogen_density_round_trip() {
    let res = calculate(&reference_input(), &CooldownModel::default()).unwrap();
    for cryogen in [Cryogen::Lin, Cryogen::Lng] {
        let v = res.total_volume_m3(cryogen);
        let back = cryogen.mass_to_volume_m3(cryogen.volume_to_mass_kg(v));
        assert_relative_eq!(back, v, max_relative = 1e-14);
    }
}
