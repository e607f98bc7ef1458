use serde::{Deserialize, Serialize};

/// 에너지 단위. 내부 기준은 줄(J)이다. 쿨다운 열부하는 보통 GJ 규모다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EnergyUnit {
    Joule,
    Megajoule,
    Gigajoule,
    KiloWattHour,
    Btu,
}

impl EnergyUnit {
    pub fn symbol(self) -> &'static str {
        match self {
            EnergyUnit::Joule => "J",
            EnergyUnit::Megajoule => "MJ",
            EnergyUnit::Gigajoule => "GJ",
            EnergyUnit::KiloWattHour => "kWh",
            EnergyUnit::Btu => "Btu",
        }
    }

    fn joules(self) -> f64 {
        match self {
            EnergyUnit::Joule => 1.0,
            EnergyUnit::Megajoule => 1.0e6,
            EnergyUnit::Gigajoule => 1.0e9,
            EnergyUnit::KiloWattHour => 3.6e6,
            EnergyUnit::Btu => 1055.06,
        }
    }
}

/// 에너지를 변환한다.
pub fn convert_energy(value: f64, from: EnergyUnit, to: EnergyUnit) -> f64 {
    value * from.joules() / to.joules()
}
