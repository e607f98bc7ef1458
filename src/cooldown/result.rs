use serde::{Deserialize, Serialize};

use super::cryogen::Cryogen;
use super::geometry::SystemMass;
use super::model::ContingencyTarget;
use super::phases::{Phase, PhaseResult};

/// 소요시간을 어떤 입력으로 산정했는지.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CalculationBasis {
    /// 공급 유량 기준
    FlowRate,
    /// 냉각 속도 기준
    CoolingRate,
}

/// 쿨다운 계산 결과. 계산마다 새로 만들며 모든 값은 유한하다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CooldownResult {
    pub basis: CalculationBasis,
    pub mass: SystemMass,
    pub phases: Vec<PhaseResult>,
    /// 초기→목표 전체 열부하 [J]
    pub total_heat_load_j: f64,
    /// 여유율 적용 전 LIN 체적 [m³]
    pub lin_volume_m3: f64,
    /// 여유율 적용 전 LNG 체적 [m³]
    pub lng_volume_m3: f64,
    pub contingency_target: ContingencyTarget,
    /// 여유분 체적 [m³]
    pub contingency_volume_m3: f64,
    /// 여유율 반영 LIN 체적 [m³]
    pub total_lin_volume_m3: f64,
    /// 여유율 반영 LNG 체적 [m³]
    pub total_lng_volume_m3: f64,
    pub lin_duration_h: f64,
    pub lng_duration_h: f64,
    pub total_duration_h: f64,
    /// LIN 공급 유량 [m³/h]. 냉각 속도 기준이면 평균 환산값.
    pub flow_rate_lin_m3_per_h: f64,
    /// LNG 공급 유량 [m³/h]. 냉각 속도 기준이면 평균 환산값.
    pub flow_rate_lng_m3_per_h: f64,
    /// 권고 최대 LIN 유량 (참고값)
    pub max_lin_flow_rate: f64,
    /// 냉각 속도 기준일 때 필요한 열 제거율 [W]
    pub heat_removal_rate_w: Option<f64>,
}

impl CooldownResult {
    pub fn phase(&self, phase: Phase) -> Option<&PhaseResult> {
        self.phases.iter().find(|p| p.phase == phase)
    }

    /// 여유율을 적용한 체적 [m³].
    pub fn adjusted_volume_m3(&self) -> f64 {
        match self.contingency_target {
            ContingencyTarget::Lin => self.total_lin_volume_m3,
            ContingencyTarget::Lng => self.total_lng_volume_m3,
        }
    }

    /// 냉매별 여유율 반영 체적 [m³].
    pub fn total_volume_m3(&self, cryogen: Cryogen) -> f64 {
        match cryogen {
            Cryogen::Lin => self.total_lin_volume_m3,
            Cryogen::Lng => self.total_lng_volume_m3,
        }
    }
}
