//! 입력/표시 단위 정의 및 변환 모듈 모음.
//! 계산 코어는 항상 SI(m, mm, kg, J, °C, m³) 기준으로 동작하고, 여기서는 경계에서만 환산한다.

pub mod energy;
pub mod length;
pub mod mass;
pub mod temperature;
pub mod volume;

pub use energy::{convert_energy, EnergyUnit};
pub use length::{convert_length, LengthUnit};
pub use mass::{convert_mass, MassUnit};
pub use temperature::{
    convert_temperature, convert_temperature_diff, TemperatureDiffUnit, TemperatureUnit,
};
pub use volume::{convert_volume, VolumeUnit};
