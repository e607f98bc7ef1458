use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::info;

use crate::cooldown::CooldownModel;
use crate::units::*;

/// 기본 설정 파일 경로.
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// 결과 표시 단위 프리셋.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum UnitSystem {
    /// SI 기준. 내부 계산 단위와 같다.
    #[default]
    SI,
    /// 영국식/야드파운드법
    Imperial,
}

impl UnitSystem {
    /// 프리셋에 해당하는 표시 단위 묶음.
    pub fn display_units(self) -> DisplayUnits {
        match self {
            UnitSystem::SI => DisplayUnits::default(),
            UnitSystem::Imperial => DisplayUnits {
                temperature: TemperatureUnit::Fahrenheit,
                volume: VolumeUnit::UsGallon,
                mass: MassUnit::Pound,
                energy: EnergyUnit::Btu,
            },
        }
    }
}

/// 결과 출력에 사용하는 단위.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayUnits {
    pub temperature: TemperatureUnit,
    pub volume: VolumeUnit,
    pub mass: MassUnit,
    pub energy: EnergyUnit,
}

impl Default for DisplayUnits {
    fn default() -> Self {
        Self {
            temperature: TemperatureUnit::Celsius,
            volume: VolumeUnit::CubicMeter,
            mass: MassUnit::Tonne,
            energy: EnergyUnit::Gigajoule,
        }
    }
}

/// 애플리케이션 설정을 표현한다.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 언어 코드(ko/en). 없으면 시스템 로케일을 따른다.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    pub unit_system: UnitSystem,
    pub display_units: DisplayUnits,
    /// 쿨다운 계산 모델 선택
    pub model: CooldownModel,
}

/// 설정 로드/저장 시 발생 가능한 오류를 표현한다.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// 파일 입출력 오류
    #[error("파일 입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    /// TOML 역직렬화 오류
    #[error("설정 파싱 오류: {0}")]
    Serde(#[from] toml::de::Error),
    /// TOML 직렬화 오류
    #[error("설정 직렬화 오류: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// 설정 파일을 로드하거나 없으면 기본 설정을 생성한다.
pub fn load_or_default(path: &Path) -> Result<Config, ConfigError> {
    if path.exists() {
        let content = fs::read_to_string(path)?;
        let cfg: Config = toml::from_str(&content)?;
        info!(path = %path.display(), "config loaded");
        Ok(cfg)
    } else {
        let cfg = Config::default();
        cfg.save(path)?;
        info!(path = %path.display(), "default config written");
        Ok(cfg)
    }
}

impl Config {
    /// 설정을 파일에 저장한다.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// 단위 시스템을 바꾸고 표시 단위를 프리셋으로 맞춘다.
    pub fn set_unit_system(&mut self, system: UnitSystem) {
        self.unit_system = system;
        self.display_units = system.display_units();
    }
}
