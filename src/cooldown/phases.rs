use serde::{Deserialize, Serialize};
use tracing::debug;

use super::cryogen::{Cryogen, LIN_LNG_BOUNDARY_C, VAPOR_LIN_BOUNDARY_C};
use super::error::{ComputationError, CooldownError, ValidationError};
use super::input::CoolingDrive;
use super::model::{LatentHeatModel, PhaseLayout};

/// 냉각 구간.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    VaporLin,
    Lin,
    Lng,
}

impl Phase {
    pub fn cryogen(self) -> Cryogen {
        match self {
            Phase::VaporLin | Phase::Lin => Cryogen::Lin,
            Phase::Lng => Cryogen::Lng,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Phase::VaporLin => "vapor-LIN",
            Phase::Lin => "LIN",
            Phase::Lng => "LNG",
        }
    }
}

/// 구간의 상한/하한 온도 [°C].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhaseSpan {
    pub phase: Phase,
    pub upper_c: f64,
    pub lower_c: f64,
}

impl PhaseSpan {
    /// ΔT = 상한 - 하한. 음수면 입력 순서가 잘못된 것이다.
    pub fn delta_t(&self) -> Result<f64, ValidationError> {
        let dt = self.upper_c - self.lower_c;
        if dt < 0.0 {
            return Err(ValidationError::NegativeDeltaT {
                phase: self.phase.label(),
                upper_c: self.upper_c,
                lower_c: self.lower_c,
            });
        }
        Ok(dt)
    }
}

/// 구간별 계산 결과.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PhaseResult {
    pub phase: Phase,
    pub cryogen: Cryogen,
    pub upper_c: f64,
    pub lower_c: f64,
    pub delta_t_k: f64,
    pub heat_load_j: f64,
    pub cryogen_mass_kg: f64,
    pub volume_m3: f64,
    pub duration_h: f64,
}

/// 구간 구성에 따라 고정 경계 온도로 구간을 나눈다.
pub fn plan_phases(layout: PhaseLayout, initial_c: f64, target_c: f64) -> Vec<PhaseSpan> {
    let lng = PhaseSpan {
        phase: Phase::Lng,
        upper_c: LIN_LNG_BOUNDARY_C,
        lower_c: target_c,
    };
    match layout {
        PhaseLayout::VaporLinLinLng => vec![
            PhaseSpan {
                phase: Phase::VaporLin,
                upper_c: initial_c,
                lower_c: VAPOR_LIN_BOUNDARY_C,
            },
            PhaseSpan {
                phase: Phase::Lin,
                upper_c: VAPOR_LIN_BOUNDARY_C,
                lower_c: LIN_LNG_BOUNDARY_C,
            },
            lng,
        ],
        PhaseLayout::LinLng => vec![
            PhaseSpan {
                phase: Phase::Lin,
                upper_c: initial_c,
                lower_c: LIN_LNG_BOUNDARY_C,
            },
            lng,
        ],
    }
}

/// 냉매 1 kg이 흡수하는 에너지 [J/kg].
pub fn energy_per_kg(
    model: LatentHeatModel,
    cryogen: Cryogen,
    delta_t_k: f64,
) -> Result<f64, ValidationError> {
    let l = match model {
        LatentHeatModel::Latent => cryogen.latent_heat_j_per_kg(),
        LatentHeatModel::LatentPlusSensible => {
            cryogen.latent_heat_j_per_kg() + cryogen.specific_heat_j_per_kgk() * delta_t_k
        }
    };
    if l.is_nan() || l <= 0.0 {
        return Err(ValidationError::EnergyDenominator {
            phase: cryogen.label(),
            value: l,
        });
    }
    Ok(l)
}

/// 한 구간의 열부하, 냉매량, 소요시간을 계산한다.
pub fn compute_phase(
    span: PhaseSpan,
    heat_capacity_j_per_k: f64,
    latent_heat: LatentHeatModel,
    drive: CoolingDrive,
) -> Result<PhaseResult, CooldownError> {
    let delta_t = span.delta_t()?;
    let cryogen = span.phase.cryogen();
    let heat_load = heat_capacity_j_per_k * delta_t;
    let l = energy_per_kg(latent_heat, cryogen, delta_t)?;
    let cryogen_mass = heat_load / l;
    let volume = cryogen.mass_to_volume_m3(cryogen_mass);

    let duration = match drive {
        CoolingDrive::FlowRates {
            lin_m3_per_h,
            lng_m3_per_h,
        } => {
            let flow = match cryogen {
                Cryogen::Lin => lin_m3_per_h,
                Cryogen::Lng => lng_m3_per_h,
            };
            divide(volume, flow, "phase duration (volume / flow)")?
        }
        CoolingDrive::CoolingRate { c_per_h } => {
            divide(delta_t, c_per_h, "phase duration (ΔT / cooling rate)")?
        }
    };

    debug!(
        phase = span.phase.label(),
        delta_t,
        heat_load_j = heat_load,
        volume_m3 = volume,
        duration_h = duration,
        "phase computed"
    );

    Ok(PhaseResult {
        phase: span.phase,
        cryogen,
        upper_c: span.upper_c,
        lower_c: span.lower_c,
        delta_t_k: delta_t,
        heat_load_j: finite("phase heat load", heat_load)?,
        cryogen_mass_kg: finite("phase cryogen mass", cryogen_mass)?,
        volume_m3: finite("phase volume", volume)?,
        duration_h: finite("phase duration", duration)?,
    })
}

pub(crate) fn divide(
    numerator: f64,
    divisor: f64,
    quantity: &'static str,
) -> Result<f64, ComputationError> {
    if divisor == 0.0 {
        return Err(ComputationError::ZeroDivisor { quantity });
    }
    finite(quantity, numerator / divisor)
}

pub(crate) fn finite(quantity: &'static str, value: f64) -> Result<f64, ComputationError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ComputationError::NonFinite { quantity, value })
    }
}
