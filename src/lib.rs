//! 쿨다운 계산 코어를 라이브러리로 분리하여 CLI 뿐 아니라 다른 UI에서도 그대로 쓸 수 있게 한다.

pub mod app;
pub mod config;
pub mod conversion;
pub mod cooldown;
pub mod i18n;
pub mod material_db;
pub mod quantity;
pub mod report;
pub mod ui_cli;
pub mod units;
