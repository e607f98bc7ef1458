use std::path::Path;

use crate::config::Config;
use crate::conversion;
use crate::cooldown::{CooldownError, ValidationError};
use crate::i18n::{self, Translator};
use crate::ui_cli;
use crate::ui_cli::MenuChoice;

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// 파일/콘솔 입출력 오류
    #[error("입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    /// 설정 저장/로드 오류
    #[error("설정 오류: {0}")]
    Config(#[from] crate::config::ConfigError),
    /// 단위 변환 오류
    #[error("단위 변환 오류: {0}")]
    Conversion(#[from] conversion::ConversionError),
    /// 쿨다운 계산 오류
    #[error("쿨다운 계산 오류: {0}")]
    Cooldown(#[from] CooldownError),
    /// 결과 직렬화 오류
    #[error("결과 직렬화 오류: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<ValidationError> for AppError {
    fn from(value: ValidationError) -> Self {
        AppError::Cooldown(value.into())
    }
}

impl AppError {
    /// 사용자가 입력을 고쳐 다시 시도할 수 있는 오류인지.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            AppError::Conversion(_) | AppError::Cooldown(CooldownError::Validation(_))
        )
    }
}

/// 대화형 CLI의 메인 루프를 실행한다. 설정 변경은 `config_path`에 저장한다.
pub fn run(config: &mut Config, config_path: &Path, tr: &Translator) -> Result<(), AppError> {
    loop {
        let outcome = match ui_cli::main_menu(tr)? {
            MenuChoice::Cooldown => ui_cli::handle_cooldown(tr, config),
            MenuChoice::UnitConversion => ui_cli::handle_unit_conversion(tr),
            MenuChoice::Materials => {
                ui_cli::handle_materials(tr);
                Ok(())
            }
            MenuChoice::Settings => {
                ui_cli::handle_settings(tr, config)?;
                config.save(config_path)?;
                println!("{} {}", tr.t(i18n::keys::SETTINGS_SAVED), config_path.display());
                Ok(())
            }
            MenuChoice::Exit => {
                config.save(config_path)?;
                println!("{}", tr.t(i18n::keys::APP_EXIT));
                break;
            }
        };
        match outcome {
            Err(e) if e.is_input_error() => {
                println!("{}: {e}", tr.t(i18n::keys::ERROR_PREFIX));
            }
            other => other?,
        }
    }
    Ok(())
}
