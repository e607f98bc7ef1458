//! 계산 결과를 사람이 읽는 텍스트나 JSON으로 표시한다.
//! 반올림과 일/시간 분해는 표시 단계에서만 수행하고 계산 결과 자체는 바꾸지 않는다.

use std::fmt::Write as _;

use crate::config::DisplayUnits;
use crate::cooldown::{CalculationBasis, CooldownResult};
use crate::i18n::{keys, Translator};
use crate::units::*;

/// 시간을 일과 나머지 시간으로 나눈 값.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DurationBreakdown {
    pub days: u64,
    pub hours: f64,
}

/// 시간[h]을 일 + 시간으로 분해한다. 0 이하나 유한하지 않은 값은 0으로 본다.
pub fn split_days_hours(total_hours: f64) -> DurationBreakdown {
    if !total_hours.is_finite() || total_hours <= 0.0 {
        return DurationBreakdown {
            days: 0,
            hours: 0.0,
        };
    }
    let days = (total_hours / 24.0).floor();
    DurationBreakdown {
        days: days as u64,
        hours: total_hours - days * 24.0,
    }
}

fn duration_text(tr: &Translator, hours: f64) -> String {
    let b = split_days_hours(hours);
    if b.days == 0 {
        format!("{hours:.2} h")
    } else {
        format!(
            "{hours:.2} h ({}{} {:.2} h)",
            b.days,
            tr.t(keys::DURATION_DAYS_HOURS),
            b.hours
        )
    }
}

/// 설정된 표시 단위로 결과를 텍스트 보고서로 만든다.
pub fn render_text(result: &CooldownResult, units: &DisplayUnits, tr: &Translator) -> String {
    let vol = |m3: f64| {
        format!(
            "{:.2} {}",
            convert_volume(m3, VolumeUnit::CubicMeter, units.volume),
            units.volume.symbol()
        )
    };
    let flow = |m3_per_h: f64| {
        format!(
            "{:.2} {}/h",
            convert_volume(m3_per_h, VolumeUnit::CubicMeter, units.volume),
            units.volume.symbol()
        )
    };
    let temp = |c: f64| {
        format!(
            "{:.1}{}",
            convert_temperature(c, TemperatureUnit::Celsius, units.temperature),
            units.temperature.symbol()
        )
    };
    let energy = |j: f64| {
        format!(
            "{:.3} {}",
            convert_energy(j, EnergyUnit::Joule, units.energy),
            units.energy.symbol()
        )
    };

    let mut out = String::new();
    let _ = writeln!(out, "{}", tr.t(keys::RESULT_HEADING));
    let basis = match result.basis {
        CalculationBasis::FlowRate => keys::RESULT_BASIS_FLOW,
        CalculationBasis::CoolingRate => keys::RESULT_BASIS_RATE,
    };
    let _ = writeln!(out, "{}", tr.t(basis));
    let _ = writeln!(
        out,
        "{} {:.2} {}",
        tr.t(keys::RESULT_MASS),
        convert_mass(result.mass.total_mass_kg, MassUnit::Kilogram, units.mass),
        units.mass.symbol()
    );
    let _ = writeln!(
        out,
        "{} {}",
        tr.t(keys::RESULT_HEAT_LOAD),
        energy(result.total_heat_load_j)
    );
    for p in &result.phases {
        let _ = writeln!(
            out,
            "  {} {:<9} {} → {}: {}, {}, {}",
            tr.t(keys::RESULT_PHASE),
            p.phase.label(),
            temp(p.upper_c),
            temp(p.lower_c),
            energy(p.heat_load_j),
            vol(p.volume_m3),
            duration_text(tr, p.duration_h)
        );
    }
    let _ = writeln!(
        out,
        "{} {}",
        tr.t(keys::RESULT_LIN_VOLUME),
        vol(result.total_lin_volume_m3)
    );
    let _ = writeln!(
        out,
        "{} {}",
        tr.t(keys::RESULT_LNG_VOLUME),
        vol(result.total_lng_volume_m3)
    );
    let _ = writeln!(
        out,
        "{} {} ({:?})",
        tr.t(keys::RESULT_CONTINGENCY),
        vol(result.contingency_volume_m3),
        result.contingency_target
    );
    let _ = writeln!(
        out,
        "{} {}",
        tr.t(keys::RESULT_LIN_DURATION),
        duration_text(tr, result.lin_duration_h)
    );
    let _ = writeln!(
        out,
        "{} {}",
        tr.t(keys::RESULT_LNG_DURATION),
        duration_text(tr, result.lng_duration_h)
    );
    let _ = writeln!(
        out,
        "{} {}",
        tr.t(keys::RESULT_TOTAL_DURATION),
        duration_text(tr, result.total_duration_h)
    );
    let _ = writeln!(
        out,
        "{} {}",
        tr.t(keys::RESULT_FLOW_LIN),
        flow(result.flow_rate_lin_m3_per_h)
    );
    let _ = writeln!(
        out,
        "{} {}",
        tr.t(keys::RESULT_FLOW_LNG),
        flow(result.flow_rate_lng_m3_per_h)
    );
    let _ = writeln!(
        out,
        "{} {:.4}",
        tr.t(keys::RESULT_MAX_FLOW),
        result.max_lin_flow_rate
    );
    if let Some(w) = result.heat_removal_rate_w {
        let _ = writeln!(out, "{} {:.1} kW", tr.t(keys::RESULT_HEAT_REMOVAL), w / 1000.0);
    }
    out
}

/// 결과를 SI 단위 그대로 JSON으로 직렬화한다.
pub fn render_json(result: &CooldownResult) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(result)
}
