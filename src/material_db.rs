//! 탱크/배관 재질의 밀도와 비열을 제공하는 고정 참조 테이블.
//! 값은 상온 기준 대표값이며 설계 검토 시 재질 성적서로 확인해야 한다.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// 카탈로그 재질을 식별하는 안정적인 키.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MaterialId {
    CarbonSteel,
    StainlessSteel,
    NickelSteel9,
    Aluminum,
    Copper,
}

impl MaterialId {
    pub const ALL: [MaterialId; 5] = [
        MaterialId::CarbonSteel,
        MaterialId::StainlessSteel,
        MaterialId::NickelSteel9,
        MaterialId::Aluminum,
        MaterialId::Copper,
    ];

    /// 탱크 재질 기본값 (9% Ni 강).
    pub const DEFAULT_TANK: MaterialId = MaterialId::NickelSteel9;

    pub fn material(self) -> &'static Material {
        material(self)
    }
}

impl fmt::Display for MaterialId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.material().code)
    }
}

/// 재질 문자열을 해석하지 못했을 때의 오류.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("알 수 없는 재질: {0}")]
pub struct UnknownMaterial(pub String);

impl FromStr for MaterialId {
    type Err = UnknownMaterial;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        find_by_name(s)
            .map(|m| m.id)
            .ok_or_else(|| UnknownMaterial(s.trim().to_string()))
    }
}

/// 재질 물성 레코드.
#[derive(Debug, PartialEq)]
pub struct Material {
    pub id: MaterialId,
    pub code: &'static str,
    pub name: &'static str,
    /// 밀도 [kg/m³]
    pub density_kg_per_m3: f64,
    /// 비열 [J/(kg·K)]
    pub specific_heat_j_per_kgk: f64,
}

pub fn materials() -> &'static [Material] {
    MATERIALS
}

/// id로 재질을 조회한다. 카탈로그가 모든 id를 포함하므로 항상 성공한다.
pub fn material(id: MaterialId) -> &'static Material {
    match id {
        MaterialId::CarbonSteel => &MATERIALS[0],
        MaterialId::StainlessSteel => &MATERIALS[1],
        MaterialId::NickelSteel9 => &MATERIALS[2],
        MaterialId::Aluminum => &MATERIALS[3],
        MaterialId::Copper => &MATERIALS[4],
    }
}

/// 코드, 표시명 또는 enum 식별자로 재질을 찾는다. 대소문자는 무시한다.
pub fn find_by_name(value: &str) -> Option<&'static Material> {
    let key = value.trim();
    if key.is_empty() {
        return None;
    }
    MATERIALS.iter().find(|m| {
        m.code.eq_ignore_ascii_case(key)
            || m.name.eq_ignore_ascii_case(key)
            || format!("{:?}", m.id).eq_ignore_ascii_case(key)
    })
}

/// 밀도 값으로 재질을 찾는다.
///
/// 밀도는 고유 키가 아니므로 일치하는 재질이 정확히 하나일 때만 반환한다.
/// 새 코드는 [`find_by_name`] 또는 [`MaterialId`]를 사용해야 한다.
pub fn find_by_density(density_kg_per_m3: f64) -> Option<&'static Material> {
    if !density_kg_per_m3.is_finite() {
        return None;
    }
    let mut hits = MATERIALS
        .iter()
        .filter(|m| (m.density_kg_per_m3 - density_kg_per_m3).abs() < 1e-9);
    let first = hits.next()?;
    if hits.next().is_some() {
        return None;
    }
    Some(first)
}

const MATERIALS: &[Material] = &[
    Material {
        id: MaterialId::CarbonSteel,
        code: "cs",
        name: "Carbon Steel",
        density_kg_per_m3: 7850.0,
        specific_heat_j_per_kgk: 500.0,
    },
    Material {
        id: MaterialId::StainlessSteel,
        code: "ss",
        name: "Stainless Steel",
        density_kg_per_m3: 8000.0,
        specific_heat_j_per_kgk: 500.0,
    },
    Material {
        id: MaterialId::NickelSteel9,
        code: "9ni",
        name: "9% Nickel Steel",
        density_kg_per_m3: 8050.0,
        specific_heat_j_per_kgk: 490.0,
    },
    Material {
        id: MaterialId::Aluminum,
        code: "al",
        name: "Aluminum",
        density_kg_per_m3: 2700.0,
        specific_heat_j_per_kgk: 900.0,
    },
    Material {
        id: MaterialId::Copper,
        code: "cu",
        name: "Copper",
        density_kg_per_m3: 8960.0,
        specific_heat_j_per_kgk: 380.0,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_order_matches_id_lookup() {
        for id in MaterialId::ALL {
            assert_eq!(material(id).id, id);
        }
    }
}
