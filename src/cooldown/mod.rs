//! LNG 탱크 쿨다운(예냉) 계산 모듈.
//! 탱크/배관 질량 산정, 구간별 열부하와 냉매량, 소요시간, 권고 유량으로 구성한다.

pub mod calculator;
pub mod cryogen;
pub mod error;
pub mod flow_limit;
pub mod form;
pub mod geometry;
pub mod input;
pub mod model;
pub mod phases;
pub mod result;

pub use calculator::calculate;
pub use cryogen::{Cryogen, ABSOLUTE_ZERO_C, LIN_LNG_BOUNDARY_C, VAPOR_LIN_BOUNDARY_C};
pub use error::{ComputationError, CooldownError, Field, ValidationError};
pub use form::CooldownForm;
pub use geometry::SystemMass;
pub use input::{CoolingDrive, CooldownInput, PipelineInput, TankGeometry};
pub use model::{AdvisoryLimits, ContingencyTarget, CooldownModel, LatentHeatModel, PhaseLayout};
pub use phases::{Phase, PhaseResult, PhaseSpan};
pub use result::{CalculationBasis, CooldownResult};
