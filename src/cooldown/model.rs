//! 계산 모델 선택지.
//!
//! 구간 구성, 잠열 산식, 여유율 적용 대상은 현장마다 다르게 써 왔기 때문에
//! 추정하지 않고 설정으로 명시한다.

use serde::{Deserialize, Serialize};

use super::error::{Field, ValidationError};
use super::input::require_positive;

/// 냉각 구간 구성.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PhaseLayout {
    /// 기상 LIN(초기→-120°C), LIN(-120→-160°C), LNG(-160°C→목표) 3구간
    #[default]
    VaporLinLinLng,
    /// LIN(초기→-160°C), LNG(-160°C→목표) 2구간
    LinLng,
}

/// 열부하를 냉매 소요량으로 바꾸는 에너지 항.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LatentHeatModel {
    /// L = 잠열
    #[default]
    Latent,
    /// L = 잠열 + 냉매비열·ΔT.
    ///
    /// 두 항의 차원이 맞지 않는 기존 산식이다. 과거 결과와 비교할 때만 켠다.
    LatentPlusSensible,
}

/// 여유율을 더할 냉매.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ContingencyTarget {
    #[default]
    Lin,
    Lng,
}

/// 권고 최대 유량 계산에 쓰는 운전 기준.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdvisoryLimits {
    /// 허용 냉각 속도 상한 [°C/h]
    pub cooling_rate_ceiling_c_per_h: f64,
    /// 목표 총 쿨다운 시간 [h]
    pub target_duration_h: f64,
}

impl Default for AdvisoryLimits {
    fn default() -> Self {
        Self {
            cooling_rate_ceiling_c_per_h: 12.5,
            target_duration_h: 16.0,
        }
    }
}

impl AdvisoryLimits {
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_positive(Field::CoolingRateCeiling, self.cooling_rate_ceiling_c_per_h)?;
        require_positive(Field::TargetDuration, self.target_duration_h)?;
        Ok(())
    }
}

/// 계산 모델 설정 묶음.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CooldownModel {
    pub phase_layout: PhaseLayout,
    pub latent_heat: LatentHeatModel,
    pub contingency_target: ContingencyTarget,
    pub advisory: AdvisoryLimits,
}
