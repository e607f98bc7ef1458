use serde::{Deserialize, Serialize};

/// 기상 LIN 예냉과 액상 LIN 냉각의 경계 온도 [°C]
pub const VAPOR_LIN_BOUNDARY_C: f64 = -120.0;
/// LIN 냉각과 LNG 냉각의 경계 온도 [°C]
pub const LIN_LNG_BOUNDARY_C: f64 = -160.0;

/// 절대영도 [°C]
pub const ABSOLUTE_ZERO_C: f64 = -273.15;

/// 쿨다운에 쓰이는 냉매.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cryogen {
    /// 액체질소
    Lin,
    /// 액화천연가스
    Lng,
}

impl Cryogen {
    pub fn label(self) -> &'static str {
        match self {
            Cryogen::Lin => "LIN",
            Cryogen::Lng => "LNG",
        }
    }

    /// 잠열 [J/kg]
    pub fn latent_heat_j_per_kg(self) -> f64 {
        match self {
            Cryogen::Lin => 200.0 * 1000.0,
            Cryogen::Lng => 512.0 * 1000.0,
        }
    }

    /// 액 밀도 [kg/m³]
    pub fn density_kg_per_m3(self) -> f64 {
        match self {
            Cryogen::Lin => 800.0,
            Cryogen::Lng => 450.0,
        }
    }

    /// 액 비열 [J/(kg·K)]. 잠열+현열 모델에서만 사용한다.
    pub fn specific_heat_j_per_kgk(self) -> f64 {
        match self {
            Cryogen::Lin => 2040.0,
            Cryogen::Lng => 3480.0,
        }
    }

    /// 질량 [kg]을 액 체적 [m³]으로 환산한다.
    pub fn mass_to_volume_m3(self, mass_kg: f64) -> f64 {
        mass_kg / self.density_kg_per_m3()
    }

    /// 액 체적 [m³]을 질량 [kg]으로 환산한다.
    pub fn volume_to_mass_kg(self, volume_m3: f64) -> f64 {
        volume_m3 * self.density_kg_per_m3()
    }
}
