use std::fmt;

use thiserror::Error;

/// 검증 오류 메시지에 쓰이는 입력 필드 이름.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    TankHeight,
    TankDiameter,
    TankWallThickness,
    TankVolume,
    TankMaterial,
    PipelineLength,
    PipelineDiameter,
    PipelineMaterial,
    InitialTemperature,
    TargetTemperature,
    LinFlowRate,
    LngFlowRate,
    CoolingRate,
    ContingencyFactor,
    CoolingRateCeiling,
    TargetDuration,
}

impl Field {
    pub fn label(self) -> &'static str {
        match self {
            Field::TankHeight => "tank height [m]",
            Field::TankDiameter => "tank diameter [mm]",
            Field::TankWallThickness => "tank wall thickness [mm]",
            Field::TankVolume => "tank metal volume [m³]",
            Field::TankMaterial => "tank material",
            Field::PipelineLength => "pipeline length [m]",
            Field::PipelineDiameter => "pipeline diameter [mm]",
            Field::PipelineMaterial => "pipeline material",
            Field::InitialTemperature => "initial temperature [°C]",
            Field::TargetTemperature => "target temperature [°C]",
            Field::LinFlowRate => "LIN flow rate [m³/h]",
            Field::LngFlowRate => "LNG flow rate [m³/h]",
            Field::CoolingRate => "cooling rate [°C/h]",
            Field::ContingencyFactor => "contingency factor [%]",
            Field::CoolingRateCeiling => "cooling rate ceiling [°C/h]",
            Field::TargetDuration => "target duration [h]",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// 계산 전에 감지되는 입력 오류.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("필수 입력 누락: {0}")]
    Missing(Field),
    #[error("숫자가 아닌 입력: {field} = {raw:?}")]
    NotANumber { field: Field, raw: String },
    #[error("유한하지 않은 값: {field} = {value}")]
    NotFinite { field: Field, value: f64 },
    #[error("0보다 커야 합니다: {field} = {value}")]
    NotPositive { field: Field, value: f64 },
    #[error("절대영도(-273.15°C)보다 낮습니다: {field} = {value}°C")]
    BelowAbsoluteZero { field: Field, value: f64 },
    #[error("음수가 될 수 없습니다: {field} = {value}")]
    Negative { field: Field, value: f64 },
    #[error("함께 입력할 수 없습니다: {first}, {second}")]
    Conflicting { first: Field, second: Field },
    #[error("알 수 없는 재질: {field} = {raw:?}")]
    UnknownMaterial { field: Field, raw: String },
    #[error(
        "온도 순서 위반: 초기 {initial_c}°C > {upper_boundary_c}°C > {lower_boundary_c}°C > 목표 {target_c}°C 이어야 합니다"
    )]
    TemperatureOrder {
        initial_c: f64,
        target_c: f64,
        upper_boundary_c: f64,
        lower_boundary_c: f64,
    },
    #[error("{phase} 구간 온도차가 음수입니다: {upper_c}°C → {lower_c}°C")]
    NegativeDeltaT {
        phase: &'static str,
        upper_c: f64,
        lower_c: f64,
    },
    #[error("{phase} 구간 냉매 에너지 항이 0 이하입니다: {value} J/kg")]
    EnergyDenominator { phase: &'static str, value: f64 },
}

/// 검증을 통과한 뒤 산술 과정에서 발생한 오류. 정상 입력에서는 도달하지 않아야 한다.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ComputationError {
    #[error("계산 결과가 유한하지 않습니다: {quantity} = {value}")]
    NonFinite { quantity: &'static str, value: f64 },
    #[error("0으로 나누기: {quantity}")]
    ZeroDivisor { quantity: &'static str },
}

/// 쿨다운 계산 오류.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CooldownError {
    #[error("입력 검증 실패: {0}")]
    Validation(#[from] ValidationError),
    #[error("계산 오류: {0}")]
    Computation(#[from] ComputationError),
}

impl CooldownError {
    pub fn is_validation(&self) -> bool {
        matches!(self, CooldownError::Validation(_))
    }
}
