use super::error::ComputationError;
use super::model::AdvisoryLimits;
use super::phases::divide;

/// 권고 최대 LIN 유량.
///
/// `총열부하 / (냉각속도 상한 · 열용량) / 목표시간`. 1차 계산에는 반영하지 않는 참고값이다.
pub fn max_lin_flow_rate(
    total_heat_load_j: f64,
    heat_capacity_j_per_k: f64,
    limits: &AdvisoryLimits,
) -> Result<f64, ComputationError> {
    let ceiling_energy = limits.cooling_rate_ceiling_c_per_h * heat_capacity_j_per_k;
    let hours_at_ceiling = divide(total_heat_load_j, ceiling_energy, "max flow rate ceiling term")?;
    divide(
        hours_at_ceiling,
        limits.target_duration_h,
        "max flow rate target duration",
    )
}
