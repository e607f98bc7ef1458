use serde::{Deserialize, Serialize};

use super::cryogen::{ABSOLUTE_ZERO_C, LIN_LNG_BOUNDARY_C, VAPOR_LIN_BOUNDARY_C};
use super::error::{Field, ValidationError};
use crate::material_db::MaterialId;

/// 탱크 질량 산정 방식. 두 분기는 호출자가 명시적으로 고른다.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum TankGeometry {
    /// 원통 셸 + 평판 양단 캡 근사
    Shell {
        /// 높이 [m]
        height_m: f64,
        /// 외경 [mm]
        diameter_mm: f64,
        /// 벽 두께 [mm]
        wall_thickness_mm: f64,
    },
    /// 금속 체적 직접 입력 [m³]
    Volume { volume_m3: f64 },
}

/// 탱크에 연결된 배관. 주어지면 시스템 질량에 더한다.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PipelineInput {
    /// 길이 [m]
    pub length_m: f64,
    /// 직경 [mm]
    pub diameter_mm: f64,
    pub material: MaterialId,
}

/// 구간 소요시간을 정하는 입력.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum CoolingDrive {
    /// 냉매별 공급 유량 [m³/h]
    FlowRates {
        lin_m3_per_h: f64,
        lng_m3_per_h: f64,
    },
    /// 냉각 속도 [°C/h]
    CoolingRate { c_per_h: f64 },
}

/// 쿨다운 계산 입력. 계산 요청마다 한 번 생성하고 수정하지 않는다.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CooldownInput {
    pub tank: TankGeometry,
    pub tank_material: MaterialId,
    pub pipeline: Option<PipelineInput>,
    pub initial_temperature_c: f64,
    pub target_temperature_c: f64,
    pub drive: CoolingDrive,
    /// 여유율 [%]
    pub contingency_percent: f64,
}

impl CooldownInput {
    /// 수치 범위와 온도 순서를 검사한다.
    pub fn validate(&self) -> Result<(), ValidationError> {
        match self.tank {
            TankGeometry::Shell {
                height_m,
                diameter_mm,
                wall_thickness_mm,
            } => {
                require_positive(Field::TankHeight, height_m)?;
                require_positive(Field::TankDiameter, diameter_mm)?;
                require_positive(Field::TankWallThickness, wall_thickness_mm)?;
            }
            TankGeometry::Volume { volume_m3 } => {
                require_positive(Field::TankVolume, volume_m3)?;
            }
        }
        if let Some(pipe) = self.pipeline {
            require_positive(Field::PipelineLength, pipe.length_m)?;
            require_positive(Field::PipelineDiameter, pipe.diameter_mm)?;
        }
        require_physical_temperature(Field::InitialTemperature, self.initial_temperature_c)?;
        require_physical_temperature(Field::TargetTemperature, self.target_temperature_c)?;
        match self.drive {
            CoolingDrive::FlowRates {
                lin_m3_per_h,
                lng_m3_per_h,
            } => {
                require_positive(Field::LinFlowRate, lin_m3_per_h)?;
                require_positive(Field::LngFlowRate, lng_m3_per_h)?;
            }
            CoolingDrive::CoolingRate { c_per_h } => {
                require_positive(Field::CoolingRate, c_per_h)?;
            }
        }
        require_non_negative(Field::ContingencyFactor, self.contingency_percent)?;

        let ordered = self.initial_temperature_c > VAPOR_LIN_BOUNDARY_C
            && self.target_temperature_c < LIN_LNG_BOUNDARY_C;
        if !ordered {
            return Err(ValidationError::TemperatureOrder {
                initial_c: self.initial_temperature_c,
                target_c: self.target_temperature_c,
                upper_boundary_c: VAPOR_LIN_BOUNDARY_C,
                lower_boundary_c: LIN_LNG_BOUNDARY_C,
            });
        }
        Ok(())
    }
}

pub(crate) fn require_finite(field: Field, value: f64) -> Result<f64, ValidationError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ValidationError::NotFinite { field, value })
    }
}

fn require_physical_temperature(field: Field, value_c: f64) -> Result<f64, ValidationError> {
    require_finite(field, value_c)?;
    if value_c < ABSOLUTE_ZERO_C {
        return Err(ValidationError::BelowAbsoluteZero {
            field,
            value: value_c,
        });
    }
    Ok(value_c)
}

pub(crate) fn require_positive(field: Field, value: f64) -> Result<f64, ValidationError> {
    require_finite(field, value)?;
    if value > 0.0 {
        Ok(value)
    } else {
        Err(ValidationError::NotPositive { field, value })
    }
}

pub(crate) fn require_non_negative(field: Field, value: f64) -> Result<f64, ValidationError> {
    require_finite(field, value)?;
    if value >= 0.0 {
        Ok(value)
    } else {
        Err(ValidationError::Negative { field, value })
    }
}
