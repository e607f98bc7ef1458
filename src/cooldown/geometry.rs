use std::f64::consts::PI;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::input::{CooldownInput, PipelineInput, TankGeometry};
use crate::material_db::Material;

/// 냉각 대상 금속의 질량 분해.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SystemMass {
    pub tank_mass_kg: f64,
    pub pipeline_mass_kg: f64,
    pub total_mass_kg: f64,
    /// Σ 질량·비열 [J/K]
    pub heat_capacity_j_per_k: f64,
}

/// 원통 측면 + 양단 캡 면적 [m²].
///
/// 캡을 셸과 같은 반경의 평판으로 본 근사식이다. 접시형 경판 형상은 반영하지 않는다.
pub fn shell_surface_area_m2(height_m: f64, diameter_mm: f64) -> f64 {
    let r = (diameter_mm / 2.0) / 1000.0;
    2.0 * PI * r * height_m + 2.0 * PI * r.powi(2)
}

/// 탱크 금속 질량 [kg].
pub fn tank_mass_kg(tank: TankGeometry, material: &Material) -> f64 {
    match tank {
        TankGeometry::Shell {
            height_m,
            diameter_mm,
            wall_thickness_mm,
        } => {
            let area = shell_surface_area_m2(height_m, diameter_mm);
            area * (wall_thickness_mm / 1000.0) * material.density_kg_per_m3
        }
        TankGeometry::Volume { volume_m3 } => volume_m3 * material.density_kg_per_m3,
    }
}

/// 배관을 중실 원기둥으로 본 질량 [kg].
pub fn pipeline_mass_kg(pipe: &PipelineInput) -> f64 {
    let r = pipe.diameter_mm / 1000.0 / 2.0;
    PI * r.powi(2) * pipe.length_m * pipe.material.material().density_kg_per_m3
}

/// 입력으로부터 탱크와 배관 질량, 열용량을 구한다.
pub fn system_mass(input: &CooldownInput) -> SystemMass {
    let tank_material = input.tank_material.material();
    let tank_mass = tank_mass_kg(input.tank, tank_material);
    let mut heat_capacity = tank_mass * tank_material.specific_heat_j_per_kgk;

    let pipeline_mass = match &input.pipeline {
        Some(pipe) => {
            let m = pipeline_mass_kg(pipe);
            heat_capacity += m * pipe.material.material().specific_heat_j_per_kgk;
            m
        }
        None => 0.0,
    };

    let mass = SystemMass {
        tank_mass_kg: tank_mass,
        pipeline_mass_kg: pipeline_mass,
        total_mass_kg: tank_mass + pipeline_mass,
        heat_capacity_j_per_k: heat_capacity,
    };
    debug!(
        tank_kg = mass.tank_mass_kg,
        pipeline_kg = mass.pipeline_mass_kg,
        heat_capacity_j_per_k = mass.heat_capacity_j_per_k,
        "system mass derived"
    );
    mass
}
