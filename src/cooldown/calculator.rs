use tracing::{debug, warn};

use super::cryogen::Cryogen;
use super::error::{ComputationError, CooldownError};
use super::flow_limit::max_lin_flow_rate;
use super::geometry::system_mass;
use super::input::{CoolingDrive, CooldownInput};
use super::model::{ContingencyTarget, CooldownModel};
use super::phases::{compute_phase, divide, finite, plan_phases, PhaseResult};
use super::result::{CalculationBasis, CooldownResult};

/// 쿨다운 냉매량, 소요시간, 유량을 계산한다.
///
/// 부수효과가 없는 순수 함수이며 같은 입력에 대해 항상 같은 결과를 낸다.
pub fn calculate(
    input: &CooldownInput,
    model: &CooldownModel,
) -> Result<CooldownResult, CooldownError> {
    if let Err(e) = input.validate().and_then(|_| model.advisory.validate()) {
        warn!(error = %e, "cooldown input rejected");
        return Err(e.into());
    }

    let mass = system_mass(input);
    let heat_capacity = finite("heat capacity", mass.heat_capacity_j_per_k)?;
    if heat_capacity <= 0.0 {
        return Err(ComputationError::ZeroDivisor {
            quantity: "heat capacity",
        }
        .into());
    }

    let spans = plan_phases(
        model.phase_layout,
        input.initial_temperature_c,
        input.target_temperature_c,
    );
    let phases = spans
        .into_iter()
        .map(|span| compute_phase(span, heat_capacity, model.latent_heat, input.drive))
        .collect::<Result<Vec<_>, _>>()?;

    let lin_volume = sum_by(&phases, Cryogen::Lin, |p| p.volume_m3);
    let lng_volume = sum_by(&phases, Cryogen::Lng, |p| p.volume_m3);
    let lin_duration = sum_by(&phases, Cryogen::Lin, |p| p.duration_h);
    let lng_duration = sum_by(&phases, Cryogen::Lng, |p| p.duration_h);
    let total_duration: f64 = phases.iter().map(|p| p.duration_h).sum();

    let base = match model.contingency_target {
        ContingencyTarget::Lin => lin_volume,
        ContingencyTarget::Lng => lng_volume,
    };
    let contingency = (input.contingency_percent / 100.0) * base;
    let (total_lin, total_lng) = match model.contingency_target {
        ContingencyTarget::Lin => (lin_volume + contingency, lng_volume),
        ContingencyTarget::Lng => (lin_volume, lng_volume + contingency),
    };

    let (basis, flow_lin, flow_lng, heat_removal) = match input.drive {
        CoolingDrive::FlowRates {
            lin_m3_per_h,
            lng_m3_per_h,
        } => (CalculationBasis::FlowRate, lin_m3_per_h, lng_m3_per_h, None),
        CoolingDrive::CoolingRate { c_per_h } => (
            CalculationBasis::CoolingRate,
            divide(lin_volume, lin_duration, "average LIN flow rate")?,
            divide(lng_volume, lng_duration, "average LNG flow rate")?,
            Some(heat_capacity * c_per_h / 3600.0),
        ),
    };

    let total_heat_load =
        heat_capacity * (input.initial_temperature_c - input.target_temperature_c);
    let max_flow = max_lin_flow_rate(total_heat_load, heat_capacity, &model.advisory)?;

    let result = CooldownResult {
        basis,
        mass,
        phases,
        total_heat_load_j: finite("total heat load", total_heat_load)?,
        lin_volume_m3: finite("LIN volume", lin_volume)?,
        lng_volume_m3: finite("LNG volume", lng_volume)?,
        contingency_target: model.contingency_target,
        contingency_volume_m3: finite("contingency volume", contingency)?,
        total_lin_volume_m3: finite("total LIN volume", total_lin)?,
        total_lng_volume_m3: finite("total LNG volume", total_lng)?,
        lin_duration_h: finite("LIN duration", lin_duration)?,
        lng_duration_h: finite("LNG duration", lng_duration)?,
        total_duration_h: finite("total duration", total_duration)?,
        flow_rate_lin_m3_per_h: flow_lin,
        flow_rate_lng_m3_per_h: flow_lng,
        max_lin_flow_rate: max_flow,
        heat_removal_rate_w: heat_removal
            .map(|w| finite("heat removal rate", w))
            .transpose()?,
    };
    debug!(
        total_lin_m3 = result.total_lin_volume_m3,
        total_lng_m3 = result.total_lng_volume_m3,
        total_duration_h = result.total_duration_h,
        "cooldown calculated"
    );
    Ok(result)
}

fn sum_by(phases: &[PhaseResult], cryogen: Cryogen, value: impl Fn(&PhaseResult) -> f64) -> f64 {
    phases
        .iter()
        .filter(|p| p.cryogen == cryogen)
        .map(value)
        .sum()
}
