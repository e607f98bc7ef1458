//! 입력 검증 테스트. 잘못된 입력은 계산 전에 ValidationError로 거부되어야 한다.
use lng_cooldown_toolbox::cooldown::{
    calculate, AdvisoryLimits, ComputationError, CoolingDrive, CooldownError, CooldownForm,
    CooldownInput, CooldownModel, Field, Phase, PhaseSpan, TankGeometry, ValidationError,
};
use lng_cooldown_toolbox::material_db::MaterialId;
use lng_cooldown_toolbox::units::TemperatureUnit;

fn base_input() -> CooldownInput {
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

fn base_form() -> CooldownForm {
    CooldownForm {
        tank_height: Some("10".into()),
        tank_diameter: Some("4000".into()),
        tank_wall_thickness: Some("20".into()),
        tank_material: Some("9% Nickel Steel".into()),
        initial_temperature: Some("20".into()),
        target_temperature: Some("-162".into()),
        cooling_rate: Some("10".into()),
        contingency_factor: Some("10".into()),
        ..CooldownForm::default()
    }
}

fn validation_error(input: &CooldownInput) -> ValidationError {
    match calculate(input, &CooldownModel::default()) {
        Err(CooldownError::Validation(e)) => e,
        other => panic!("expected validation error, got {other:?}"),
    }
}

#[test]
fn zero_cooling_rate_is_rejected() {
    let input = CooldownInput {
        drive: CoolingDrive::CoolingRate { c_per_h: 0.0 },
        ..base_input()
    };
    assert_eq!(
        validation_error(&input),
        ValidationError::NotPositive {
            field: Field::CoolingRate,
            value: 0.0
        }
    );
}

#[test]
fn zero_flow_rate_is_rejected() {
    let input = CooldownInput {
        drive: CoolingDrive::FlowRates {
            lin_m3_per_h: 3.0,
            lng_m3_per_h: 0.0,
        },
        ..base_input()
    };
    assert!(matches!(
        validation_error(&input),
        ValidationError::NotPositive {
            field: Field::LngFlowRate,
            ..
        }
    ));
}

#[test]
fn negative_geometry_is_rejected() {
    let input = CooldownInput {
        tank: TankGeometry::Shell {
            height_m: 10.0,
            diameter_mm: -4000.0,
            wall_thickness_mm: 20.0,
        },
        ..base_input()
    };
    assert!(matches!(
        validation_error(&input),
        ValidationError::NotPositive {
            field: Field::TankDiameter,
            ..
        }
    ));
}

#[test]
fn nan_temperature_is_rejected() {
    let input = CooldownInput {
        initial_temperature_c: f64::NAN,
        ..base_input()
    };
    assert!(matches!(
        validation_error(&input),
        ValidationError::NotFinite {
            field: Field::InitialTemperature,
            ..
        }
    ));
}

#[test]
fn initial_below_vapor_boundary_is_rejected() {
    let input = CooldownInput {
        initial_temperature_c: -130.0,
        ..base_input()
    };
    assert!(matches!(
        validation_error(&input),
        ValidationError::TemperatureOrder { .. }
    ));
}

#[test]
fn target_above_lng_boundary_is_rejected() {
    let input = CooldownInput {
        target_temperature_c: -150.0,
        ..base_input()
    };
    assert!(matches!(
        validation_error(&input),
        ValidationError::TemperatureOrder { .. }
    ));
}

#[test]
fn target_on_boundary_is_rejected() {
    let input = CooldownInput {
        target_temperature_c: -160.0,
        ..base_input()
    };
    assert!(matches!(
        validation_error(&input),
        ValidationError::TemperatureOrder { .. }
    ));
}

#[test]
fn negative_contingency_is_rejected() {
    let input = CooldownInput {
        contingency_percent: -5.0,
        ..base_input()
    };
    assert!(matches!(
        validation_error(&input),
        ValidationError::Negative {
            field: Field::ContingencyFactor,
            ..
        }
    ));
}

#[test]
fn zero_advisory_duration_is_rejected() {
    let model = CooldownModel {
        advisory: AdvisoryLimits {
            target_duration_h: 0.0,
            ..AdvisoryLimits::default()
        },
        ..CooldownModel::default()
    };
    let err = calculate(&base_input(), &model).unwrap_err();
    assert!(err.is_validation());
}

#[test]
fn form_parses_reference_scenario() {
    let input = base_form().parse().expect("form parse");
    assert_eq!(input, base_input());
}

#[test]
fn form_reports_missing_field() {
    let form = CooldownForm {
        tank_wall_thickness: None,
        ..base_form()
    };
    assert_eq!(
        form.parse(),
        Err(ValidationError::Missing(Field::TankWallThickness))
    );
}

#[test]
fn form_reports_non_numeric_field() {
    let form = CooldownForm {
        cooling_rate: Some("fast".into()),
        ..base_form()
    };
    assert_eq!(
        form.parse(),
        Err(ValidationError::NotANumber {
            field: Field::CoolingRate,
            raw: "fast".into()
        })
    );
}

#[test]
fn form_rejects_unknown_material() {
    let form = CooldownForm {
        tank_material: Some("unobtainium".into()),
        ..base_form()
    };
    assert!(matches!(
        form.parse(),
        Err(ValidationError::UnknownMaterial {
            field: Field::TankMaterial,
            ..
        })
    ));
}

#[test]
fn form_defaults_tank_material_to_nickel_steel() {
    let form = CooldownForm {
        tank_material: None,
        ..base_form()
    };
    assert_eq!(form.parse().unwrap().tank_material, MaterialId::NickelSteel9);
}

#[test]
fn form_rejects_flow_and_cooling_rate_together() {
    let form = CooldownForm {
        lin_flow_rate: Some("3".into()),
        lng_flow_rate: Some("1".into()),
        ..base_form()
    };
    assert!(matches!(
        form.parse(),
        Err(ValidationError::Conflicting {
            second: Field::CoolingRate,
            ..
        })
    ));
}

#[test]
fn form_requires_both_flow_rates() {
    let form = CooldownForm {
        cooling_rate: None,
        lin_flow_rate: Some("3".into()),
        ..base_form()
    };
    assert_eq!(form.parse(), Err(ValidationError::Missing(Field::LngFlowRate)));
}

#[test]
fn form_prefers_metal_volume_when_present() {
    let form = CooldownForm {
        tank_height: None,
        tank_diameter: None,
        tank_wall_thickness: None,
        tank_volume: Some("3.0".into()),
        ..base_form()
    };
    assert_eq!(
        form.parse().unwrap().tank,
        TankGeometry::Volume { volume_m3: 3.0 }
    );
}

#[test]
fn form_pipeline_material_defaults_to_tank_material() {
    let form = CooldownForm {
        tank_material: Some("al".into()),
        pipeline_length: Some("50".into()),
        pipeline_diameter: Some("150".into()),
        ..base_form()
    };
    let pipe = form.parse().unwrap().pipeline.expect("pipeline");
    assert_eq!(pipe.material, MaterialId::Aluminum);
    assert_eq!(pipe.length_m, 50.0);
}

#[test]
fn form_converts_kelvin_temperatures() {
    let form = CooldownForm {
        initial_temperature: Some("293.15".into()),
        target_temperature: Some("111.15".into()),
        temperature_unit: Some(TemperatureUnit::Kelvin),
        ..base_form()
    };
    let input = form.parse().unwrap();
    assert!((input.initial_temperature_c - 20.0).abs() < 1e-9);
    assert!((input.target_temperature_c + 162.0).abs() < 1e-9);
}

#[test]
fn form_rejects_unknown_pipeline_material_without_geometry() {
    let form = CooldownForm {
        pipeline_material: Some("unobtainium".into()),
        ..base_form()
    };
    assert_eq!(
        form.parse(),
        Err(ValidationError::UnknownMaterial {
            field: Field::PipelineMaterial,
            raw: "unobtainium".into()
        })
    );
}

#[test]
fn form_requires_pipeline_geometry_when_material_given() {
    let form = CooldownForm {
        pipeline_material: Some("ss".into()),
        ..base_form()
    };
    assert_eq!(
        form.parse(),
        Err(ValidationError::Missing(Field::PipelineLength))
    );
}

#[test]
fn form_rejects_metal_volume_with_shell_fields() {
    let form = CooldownForm {
        tank_volume: Some("3.0".into()),
        ..base_form()
    };
    assert_eq!(
        form.parse(),
        Err(ValidationError::Conflicting {
            first: Field::TankVolume,
            second: Field::TankHeight
        })
    );
}

#[test]
fn form_treats_blank_contingency_as_missing() {
    let form = CooldownForm {
        contingency_factor: None,
        ..base_form()
    };
    assert_eq!(
        form.parse(),
        Err(ValidationError::Missing(Field::ContingencyFactor))
    );
}

#[test]
fn target_below_absolute_zero_is_rejected() {
    let input = CooldownInput {
        target_temperature_c: -1000.0,
        ..base_input()
    };
    assert_eq!(
        validation_error(&input),
        ValidationError::BelowAbsoluteZero {
            field: Field::TargetTemperature,
            value: -1000.0
        }
    );
}

#[test]
fn form_rejects_fahrenheit_below_absolute_zero() {
    let form = CooldownForm {
        initial_temperature: Some("68".into()),
        target_temperature: Some("-500".into()),
        temperature_unit: Some(TemperatureUnit::Fahrenheit),
        ..base_form()
    };
    assert!(matches!(
        form.parse(),
        Err(ValidationError::BelowAbsoluteZero {
            field: Field::TargetTemperature,
            ..
        })
    ));
}

#[test]
fn absolute_zero_target_is_accepted() {
    let input = CooldownInput {
        target_temperature_c: -273.15,
        ..base_input()
    };
    assert!(calculate(&input, &CooldownModel::default()).is_ok());
}

#[test]
fn overflowing_geometry_is_a_computation_error() {
    let input = CooldownInput {
        tank: TankGeometry::Shell {
            height_m: 1e300,
            diameter_mm: 1e300,
            wall_thickness_mm: 1e300,
        },
        ..base_input()
    };
    match calculate(&input, &CooldownModel::default()) {
        Err(CooldownError::Computation(ComputationError::NonFinite { quantity, value })) => {
            assert_eq!(quantity, "heat capacity");
            assert!(value.is_infinite());
        }
        other => panic!("expected computation error, got {other:?}"),
    }
}

#[test]
fn inverted_phase_span_has_negative_delta_t() {
    let span = PhaseSpan {
        phase: Phase::Lin,
        upper_c: -170.0,
        lower_c: -160.0,
    };
    assert_eq!(
        span.delta_t(),
        Err(ValidationError::NegativeDeltaT {
            phase: "LIN",
            upper_c: -170.0,
            lower_c: -160.0
        })
    );
}
