//! 화면/CLI에서 받은 문자열 필드를 [`CooldownInput`]으로 변환한다.
//!
//! 누락, 숫자 아님, 재질 해석 실패는 여기서 걸러지고 범위/순서 검사는
//! [`CooldownInput::validate`]가 맡는다.

use serde::{Deserialize, Serialize};

use super::error::{Field, ValidationError};
use super::input::{CoolingDrive, CooldownInput, PipelineInput, TankGeometry};
use crate::material_db::{self, MaterialId};
use crate::units::{convert_temperature, TemperatureUnit};

/// 입력 폼 원문. 빈 문자열과 `None`은 모두 미입력으로 본다.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CooldownForm {
    pub tank_height: Option<String>,
    pub tank_diameter: Option<String>,
    pub tank_wall_thickness: Option<String>,
    pub tank_volume: Option<String>,
    pub tank_material: Option<String>,
    pub pipeline_length: Option<String>,
    pub pipeline_diameter: Option<String>,
    pub pipeline_material: Option<String>,
    pub initial_temperature: Option<String>,
    pub target_temperature: Option<String>,
    /// 두 온도 필드의 단위. 기본값은 °C.
    pub temperature_unit: Option<TemperatureUnit>,
    pub lin_flow_rate: Option<String>,
    pub lng_flow_rate: Option<String>,
    pub cooling_rate: Option<String>,
    pub contingency_factor: Option<String>,
}

impl CooldownForm {
    /// 폼 원문을 계산 입력으로 변환하고 범위 검사까지 수행한다.
    pub fn parse(&self) -> Result<CooldownInput, ValidationError> {
        let tank = if is_present(&self.tank_volume) {
            let shell_field = [
                (Field::TankHeight, &self.tank_height),
                (Field::TankDiameter, &self.tank_diameter),
                (Field::TankWallThickness, &self.tank_wall_thickness),
            ]
            .into_iter()
            .find(|(_, raw)| is_present(raw));
            if let Some((second, _)) = shell_field {
                return Err(ValidationError::Conflicting {
                    first: Field::TankVolume,
                    second,
                });
            }
            TankGeometry::Volume {
                volume_m3: number(Field::TankVolume, &self.tank_volume)?,
            }
        } else {
            TankGeometry::Shell {
                height_m: number(Field::TankHeight, &self.tank_height)?,
                diameter_mm: number(Field::TankDiameter, &self.tank_diameter)?,
                wall_thickness_mm: number(Field::TankWallThickness, &self.tank_wall_thickness)?,
            }
        };

        let tank_material = match present(&self.tank_material) {
            Some(raw) => resolve_material(Field::TankMaterial, raw)?,
            None => MaterialId::DEFAULT_TANK,
        };

        let pipeline_material = present(&self.pipeline_material)
            .map(|raw| resolve_material(Field::PipelineMaterial, raw))
            .transpose()?;
        let pipeline = if is_present(&self.pipeline_length) || is_present(&self.pipeline_diameter)
        {
            Some(PipelineInput {
                length_m: number(Field::PipelineLength, &self.pipeline_length)?,
                diameter_mm: number(Field::PipelineDiameter, &self.pipeline_diameter)?,
                material: pipeline_material.unwrap_or(tank_material),
            })
        } else if pipeline_material.is_some() {
            // 재질만 있고 치수가 없는 배관은 계산에 넣을 수 없다.
            return Err(ValidationError::Missing(Field::PipelineLength));
        } else {
            None
        };

        let unit = self.temperature_unit.unwrap_or(TemperatureUnit::Celsius);
        let to_c = |v: f64| convert_temperature(v, unit, TemperatureUnit::Celsius);
        let initial_temperature_c = to_c(number(
            Field::InitialTemperature,
            &self.initial_temperature,
        )?);
        let target_temperature_c = to_c(number(Field::TargetTemperature, &self.target_temperature)?);

        let has_flow = is_present(&self.lin_flow_rate) || is_present(&self.lng_flow_rate);
        let drive = match (has_flow, is_present(&self.cooling_rate)) {
            (true, true) => {
                let first = if is_present(&self.lin_flow_rate) {
                    Field::LinFlowRate
                } else {
                    Field::LngFlowRate
                };
                return Err(ValidationError::Conflicting {
                    first,
                    second: Field::CoolingRate,
                });
            }
            (true, false) => CoolingDrive::FlowRates {
                lin_m3_per_h: number(Field::LinFlowRate, &self.lin_flow_rate)?,
                lng_m3_per_h: number(Field::LngFlowRate, &self.lng_flow_rate)?,
            },
            (false, _) => CoolingDrive::CoolingRate {
                c_per_h: number(Field::CoolingRate, &self.cooling_rate)?,
            },
        };

        let input = CooldownInput {
            tank,
            tank_material,
            pipeline,
            initial_temperature_c,
            target_temperature_c,
            drive,
            contingency_percent: number(Field::ContingencyFactor, &self.contingency_factor)?,
        };
        input.validate()?;
        Ok(input)
    }
}

fn present(raw: &Option<String>) -> Option<&str> {
    raw.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

fn is_present(raw: &Option<String>) -> bool {
    present(raw).is_some()
}

fn number(field: Field, raw: &Option<String>) -> Result<f64, ValidationError> {
    let text = present(raw).ok_or(ValidationError::Missing(field))?;
    let value = text
        .parse::<f64>()
        .map_err(|_| ValidationError::NotANumber {
            field,
            raw: text.to_string(),
        })?;
    if !value.is_finite() {
        return Err(ValidationError::NotFinite { field, value });
    }
    Ok(value)
}

fn resolve_material(field: Field, raw: &str) -> Result<MaterialId, ValidationError> {
    material_db::find_by_name(raw)
        .map(|m| m.id)
        .ok_or_else(|| ValidationError::UnknownMaterial {
            field,
            raw: raw.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field(s: &str) -> Option<String> {
        Some(s.to_string())
    }

    #[test]
    fn blank_text_counts_as_missing() {
        assert_eq!(
            number(Field::TankHeight, &field("   ")),
            Err(ValidationError::Missing(Field::TankHeight))
        );
        assert_eq!(
            number(Field::TankHeight, &None),
            Err(ValidationError::Missing(Field::TankHeight))
        );
    }

    #[test]
    fn infinity_text_is_not_finite() {
        assert!(matches!(
            number(Field::CoolingRate, &field("inf")),
            Err(ValidationError::NotFinite { .. })
        ));
    }

    #[test]
    fn trims_surrounding_whitespace() {
        assert_eq!(number(Field::TankHeight, &field(" 12.5 ")), Ok(12.5));
    }
}
