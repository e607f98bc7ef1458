use std::str::FromStr;

/// 단위 변환기가 다루는 물리량 종류.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuantityKind {
    Temperature,
    TemperatureDifference,
    Length,
    Volume,
    Mass,
    Energy,
}

impl QuantityKind {
    pub const ALL: [QuantityKind; 6] = [
        QuantityKind::Temperature,
        QuantityKind::TemperatureDifference,
        QuantityKind::Length,
        QuantityKind::Volume,
        QuantityKind::Mass,
        QuantityKind::Energy,
    ];

    pub fn keyword(self) -> &'static str {
        match self {
            QuantityKind::Temperature => "temperature",
            QuantityKind::TemperatureDifference => "temperature-diff",
            QuantityKind::Length => "length",
            QuantityKind::Volume => "volume",
            QuantityKind::Mass => "mass",
            QuantityKind::Energy => "energy",
        }
    }
}

impl FromStr for QuantityKind {
    type Err = crate::conversion::ConversionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_lowercase();
        match key.as_str() {
            "t" | "temp" => return Ok(QuantityKind::Temperature),
            "dt" | "delta-t" => return Ok(QuantityKind::TemperatureDifference),
            _ => {}
        }
        QuantityKind::ALL
            .into_iter()
            .find(|k| k.keyword() == key)
            .ok_or_else(|| crate::conversion::ConversionError::UnknownQuantity(s.to_string()))
    }
}
