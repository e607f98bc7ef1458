use serde::{Deserialize, Serialize};

/// 온도 단위. 쿨다운 계산은 섭씨 기준이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TemperatureUnit {
    Celsius,
    Kelvin,
    Fahrenheit,
}

impl TemperatureUnit {
    pub fn symbol(self) -> &'static str {
        match self {
            TemperatureUnit::Celsius => "°C",
            TemperatureUnit::Kelvin => "K",
            TemperatureUnit::Fahrenheit => "°F",
        }
    }
}

/// 온도차 단위. 배율만 다르다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TemperatureDiffUnit {
    Kelvin,
    Fahrenheit,
}

impl TemperatureDiffUnit {
    pub fn symbol(self) -> &'static str {
        match self {
            TemperatureDiffUnit::Kelvin => "K",
            TemperatureDiffUnit::Fahrenheit => "°F",
        }
    }
}

fn to_celsius(value: f64, unit: TemperatureUnit) -> f64 {
    match unit {
        TemperatureUnit::Celsius => value,
        TemperatureUnit::Kelvin => value - 273.15,
        TemperatureUnit::Fahrenheit => (value - 32.0) * 5.0 / 9.0,
    }
}

fn from_celsius(value_c: f64, unit: TemperatureUnit) -> f64 {
    match unit {
        TemperatureUnit::Celsius => value_c,
        TemperatureUnit::Kelvin => value_c + 273.15,
        TemperatureUnit::Fahrenheit => value_c * 9.0 / 5.0 + 32.0,
    }
}

/// 온도를 다른 단위로 변환한다.
pub fn convert_temperature(value: f64, from: TemperatureUnit, to: TemperatureUnit) -> f64 {
    if from == to {
        return value;
    }
    from_celsius(to_celsius(value, from), to)
}

/// 온도차(냉각 속도 등)를 변환한다. 기준점 없이 배율만 적용한다.
pub fn convert_temperature_diff(
    value: f64,
    from: TemperatureDiffUnit,
    to: TemperatureDiffUnit,
) -> f64 {
    match (from, to) {
        (TemperatureDiffUnit::Kelvin, TemperatureDiffUnit::Fahrenheit) => value * 9.0 / 5.0,
        (TemperatureDiffUnit::Fahrenheit, TemperatureDiffUnit::Kelvin) => value * 5.0 / 9.0,
        _ => value,
    }
}
