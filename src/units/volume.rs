use serde::{Deserialize, Serialize};

/// 체적 단위. 내부 기준은 입방미터이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VolumeUnit {
    CubicMeter,
    Liter,
    CubicFoot,
    UsGallon,
    Barrel,
}

impl VolumeUnit {
    pub fn symbol(self) -> &'static str {
        match self {
            VolumeUnit::CubicMeter => "m³",
            VolumeUnit::Liter => "L",
            VolumeUnit::CubicFoot => "ft³",
            VolumeUnit::UsGallon => "gal",
            VolumeUnit::Barrel => "bbl",
        }
    }

    /// 1 단위의 입방미터 값
    fn cubic_meters(self) -> f64 {
        match self {
            VolumeUnit::CubicMeter => 1.0,
            VolumeUnit::Liter => 0.001,
            VolumeUnit::CubicFoot => 0.028_316_846_592,
            VolumeUnit::UsGallon => 0.003_785_411_784,
            VolumeUnit::Barrel => 0.158_987_294_928,
        }
    }
}

/// 체적을 변환한다.
pub fn convert_volume(value: f64, from: VolumeUnit, to: VolumeUnit) -> f64 {
    value * from.cubic_meters() / to.cubic_meters()
}
