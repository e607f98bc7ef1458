use std::collections::HashMap;
use std::fs;
use std::path::Path;
use sys_locale::get_locale;

/// 문자열 키를 모아두는 네임스페이스.
pub mod keys {
    pub const ERROR_PREFIX: &str = "general.error_prefix";
    pub const APP_EXIT: &str = "general.app_exit";
    pub const ERROR_INVALID_NUMBER: &str = "error.invalid_number";

    pub const MAIN_MENU_TITLE: &str = "main_menu.title";
    pub const MAIN_MENU_COOLDOWN: &str = "main_menu.cooldown";
    pub const MAIN_MENU_UNIT_CONVERSION: &str = "main_menu.unit_conversion";
    pub const MAIN_MENU_MATERIALS: &str = "main_menu.materials";
    pub const MAIN_MENU_SETTINGS: &str = "main_menu.settings";
    pub const MAIN_MENU_EXIT: &str = "main_menu.exit";
    pub const PROMPT_MENU_SELECT: &str = "prompt.menu_select";
    pub const PROMPT_SELECT: &str = "prompt.select";
    pub const INVALID_SELECTION_RETRY: &str = "error.invalid_selection_retry";

    pub const COOLDOWN_HEADING: &str = "cooldown.heading";
    pub const COOLDOWN_HELP: &str = "cooldown.help";
    pub const COOLDOWN_TANK_MODE: &str = "cooldown.tank_mode";
    pub const COOLDOWN_DRIVE_MODE: &str = "cooldown.drive_mode";
    pub const PROMPT_TANK_HEIGHT: &str = "prompt.tank_height";
    pub const PROMPT_TANK_DIAMETER: &str = "prompt.tank_diameter";
    pub const PROMPT_TANK_WALL: &str = "prompt.tank_wall";
    pub const PROMPT_TANK_VOLUME: &str = "prompt.tank_volume";
    pub const PROMPT_TANK_MATERIAL: &str = "prompt.tank_material";
    pub const PROMPT_PIPELINE_LENGTH: &str = "prompt.pipeline_length";
    pub const PROMPT_PIPELINE_DIAMETER: &str = "prompt.pipeline_diameter";
    pub const PROMPT_PIPELINE_MATERIAL: &str = "prompt.pipeline_material";
    pub const PROMPT_INITIAL_TEMP: &str = "prompt.initial_temperature";
    pub const PROMPT_TARGET_TEMP: &str = "prompt.target_temperature";
    pub const PROMPT_LIN_FLOW: &str = "prompt.lin_flow";
    pub const PROMPT_LNG_FLOW: &str = "prompt.lng_flow";
    pub const PROMPT_COOLING_RATE: &str = "prompt.cooling_rate";
    pub const PROMPT_CONTINGENCY: &str = "prompt.contingency";

    pub const RESULT_HEADING: &str = "result.heading";
    pub const RESULT_BASIS_FLOW: &str = "result.basis_flow";
    pub const RESULT_BASIS_RATE: &str = "result.basis_rate";
    pub const RESULT_MASS: &str = "result.mass";
    pub const RESULT_HEAT_LOAD: &str = "result.heat_load";
    pub const RESULT_PHASE: &str = "result.phase";
    pub const RESULT_LIN_VOLUME: &str = "result.lin_volume";
    pub const RESULT_LNG_VOLUME: &str = "result.lng_volume";
    pub const RESULT_CONTINGENCY: &str = "result.contingency";
    pub const RESULT_LIN_DURATION: &str = "result.lin_duration";
    pub const RESULT_LNG_DURATION: &str = "result.lng_duration";
    pub const RESULT_TOTAL_DURATION: &str = "result.total_duration";
    pub const RESULT_FLOW_LIN: &str = "result.flow_lin";
    pub const RESULT_FLOW_LNG: &str = "result.flow_lng";
    pub const RESULT_MAX_FLOW: &str = "result.max_flow";
    pub const RESULT_HEAT_REMOVAL: &str = "result.heat_removal";
    pub const DURATION_DAYS_HOURS: &str = "result.days_hours";

    pub const UNIT_CONVERSION_HEADING: &str = "unit_conversion.heading";
    pub const UNIT_CONVERSION_OPTIONS: &str = "unit_conversion.options";
    pub const UNIT_CONVERSION_PROMPT_KIND: &str = "unit_conversion.prompt_kind";
    pub const UNIT_CONVERSION_PROMPT_VALUE: &str = "unit_conversion.prompt_value";
    pub const UNIT_CONVERSION_PROMPT_FROM_UNIT: &str = "unit_conversion.prompt_from_unit";
    pub const UNIT_CONVERSION_PROMPT_TO_UNIT: &str = "unit_conversion.prompt_to_unit";
    pub const UNIT_CONVERSION_RESULT: &str = "unit_conversion.result";
    pub const UNIT_CONVERSION_UNSUPPORTED: &str = "unit_conversion.unsupported";

    pub const MATERIALS_HEADING: &str = "materials.heading";

    pub const SETTINGS_HEADING: &str = "settings.heading";
    pub const SETTINGS_CURRENT: &str = "settings.current";
    pub const SETTINGS_OPTIONS: &str = "settings.options";
    pub const SETTINGS_UNIT_OPTIONS: &str = "settings.unit_options";
    pub const SETTINGS_LAYOUT_OPTIONS: &str = "settings.layout_options";
    pub const SETTINGS_LATENT_OPTIONS: &str = "settings.latent_options";
    pub const SETTINGS_LATENT_WARNING: &str = "settings.latent_warning";
    pub const SETTINGS_CONTINGENCY_OPTIONS: &str = "settings.contingency_options";
    pub const SETTINGS_PROMPT_CHANGE: &str = "settings.prompt_change";
    pub const SETTINGS_INVALID: &str = "settings.invalid";
    pub const SETTINGS_SAVED: &str = "settings.saved";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Ko,
    En,
}

impl Language {
    fn from_code(code: &str) -> Self {
        let c = code.to_lowercase();
        if c.starts_with("ko") {
            Language::Ko
        } else {
            Language::En
        }
    }

    pub fn as_code(&self) -> &'static str {
        match self {
            Language::Ko => "ko",
            Language::En => "en",
        }
    }
}

/// 런타임 언어 번들을 제공한다.
#[derive(Debug, Clone)]
pub struct Translator {
    lang: Language,
    overrides: Option<HashMap<String, String>>,
}

impl Translator {
    /// 언어 코드(ko/en)에 따라 번역기를 생성한다. 알 수 없는 코드는 en으로 폴백한다.
    pub fn new(lang_code: &str) -> Self {
        Self {
            lang: Language::from_code(lang_code),
            overrides: None,
        }
    }

    /// 언어 코드 + 언어팩 디렉터리를 받아서 번역기를 생성한다.
    /// 디렉터리나 파일이 없으면 내장 문자열만 사용한다.
    pub fn new_with_pack(lang_code: &str, pack_dir: Option<&Path>) -> Self {
        let overrides = pack_dir
            .and_then(|dir| load_overrides(dir, lang_code))
            .or_else(|| load_overrides(Path::new("locales"), lang_code));
        Self {
            lang: Language::from_code(lang_code),
            overrides,
        }
    }

    pub fn language(&self) -> Language {
        self.lang
    }

    /// 번역을 가져온다. 언어팩 → 내장 영어/한국어 순으로 찾는다.
    pub fn t<'a>(&'a self, key: &str) -> &'a str {
        if let Some(v) = self.overrides.as_ref().and_then(|m| m.get(key)) {
            return v;
        }
        match self.lang {
            Language::En => en(key).unwrap_or_else(|| ko(key)),
            Language::Ko => ko(key),
        }
    }
}

/// CLI 플래그/설정/시스템 순으로 언어 코드를 결정한다.
pub fn resolve_language(cli_arg: Option<&str>, config_lang: Option<&str>) -> String {
    cli_arg
        .and_then(normalize_lang)
        .or_else(|| config_lang.and_then(normalize_lang))
        .or_else(detect_system_language)
        .unwrap_or_else(|| "en".to_string())
}

fn normalize_lang(code: &str) -> Option<String> {
    let c = code.trim().to_lowercase();
    match c.as_str() {
        "auto" | "" => None,
        other if other.starts_with("ko") => Some("ko".into()),
        other if other.starts_with("en") => Some("en".into()),
        _ => None,
    }
}

fn normalize_locale_string(loc: &str) -> Option<String> {
    let lang = loc.split(['.', '_', '-']).next().unwrap_or_default();
    normalize_lang(lang)
}

/// 시스템 로케일에서 언어를 추정한다.
pub fn detect_system_language() -> Option<String> {
    if let Some(lang) = get_locale().as_deref().and_then(normalize_locale_string) {
        return Some(lang);
    }
    ["LC_ALL", "LANG"]
        .into_iter()
        .filter_map(|var| std::env::var(var).ok())
        .find_map(|v| normalize_locale_string(&v))
}

/// TOML 기반 언어팩을 로드한다. 형식: key = "value" 또는 [section] 아래 key = "value".
fn load_overrides(dir: &Path, lang: &str) -> Option<HashMap<String, String>> {
    let path = dir.join(format!("{lang}.toml"));
    let content = fs::read_to_string(path).ok()?;
    parse_toml_to_map(&content)
}

fn parse_toml_to_map(src: &str) -> Option<HashMap<String, String>> {
    let value: toml::Value = toml::from_str(src).ok()?;
    let mut out = HashMap::new();
    fn walk(prefix: &str, val: &toml::Value, out: &mut HashMap<String, String>) {
        match val {
            toml::Value::String(s) => {
                out.insert(prefix.to_string(), s.clone());
            }
            toml::Value::Table(t) => {
                for (k, v) in t {
                    let key = if prefix.is_empty() {
                        k.clone()
                    } else {
                        format!("{prefix}.{k}")
                    };
                    walk(&key, v, out);
                }
            }
            _ => {}
        }
    }
    walk("", &value, &mut out);
    Some(out)
}

fn ko(key: &str) -> &'static str {
    use keys::*;
    match key {
        ERROR_PREFIX => "오류",
        APP_EXIT => "프로그램을 종료합니다.",
        ERROR_INVALID_NUMBER => "숫자를 입력하세요.",
        MAIN_MENU_TITLE => "\n=== LNG 탱크 쿨다운 계산기 ===",
        MAIN_MENU_COOLDOWN => "1) 쿨다운 추정",
        MAIN_MENU_UNIT_CONVERSION => "2) 단위 변환기",
        MAIN_MENU_MATERIALS => "3) 재질 목록",
        MAIN_MENU_SETTINGS => "4) 설정",
        MAIN_MENU_EXIT => "0) 종료",
        PROMPT_MENU_SELECT => "메뉴 선택: ",
        PROMPT_SELECT => "선택: ",
        INVALID_SELECTION_RETRY => "잘못된 입력입니다. 다시 선택하세요.",
        COOLDOWN_HEADING => "\n-- 쿨다운 추정 --",
        COOLDOWN_HELP => "도움말: 직경/두께는 mm, 높이/길이는 m. 값이 없는 항목은 엔터로 넘어갑니다.",
        COOLDOWN_TANK_MODE => "탱크 입력 방식: 1) 높이/직경/두께  2) 금속 체적",
        COOLDOWN_DRIVE_MODE => "시간 산정 방식: 1) 냉각 속도  2) LIN/LNG 공급 유량",
        PROMPT_TANK_HEIGHT => "탱크 높이 [m]: ",
        PROMPT_TANK_DIAMETER => "탱크 직경 [mm]: ",
        PROMPT_TANK_WALL => "벽 두께 [mm]: ",
        PROMPT_TANK_VOLUME => "금속 체적 [m3]: ",
        PROMPT_TANK_MATERIAL => "탱크 재질 (cs/ss/9ni/al/cu, 엔터=9ni): ",
        PROMPT_PIPELINE_LENGTH => "배관 길이 [m] (없으면 엔터): ",
        PROMPT_PIPELINE_DIAMETER => "배관 직경 [mm]: ",
        PROMPT_PIPELINE_MATERIAL => "배관 재질 (엔터=탱크와 동일): ",
        PROMPT_INITIAL_TEMP => "초기 온도 [°C]: ",
        PROMPT_TARGET_TEMP => "목표 온도 [°C]: ",
        PROMPT_LIN_FLOW => "LIN 공급 유량 [m3/h]: ",
        PROMPT_LNG_FLOW => "LNG 공급 유량 [m3/h]: ",
        PROMPT_COOLING_RATE => "냉각 속도 [°C/h]: ",
        PROMPT_CONTINGENCY => "여유율 [%]: ",
        RESULT_HEADING => "\n== 계산 결과 ==",
        RESULT_BASIS_FLOW => "공급 유량 기준으로 계산했습니다.",
        RESULT_BASIS_RATE => "냉각 속도 기준으로 계산했습니다.",
        RESULT_MASS => "냉각 대상 질량:",
        RESULT_HEAT_LOAD => "총 열부하:",
        RESULT_PHASE => "구간",
        RESULT_LIN_VOLUME => "LIN 소요량(여유율 포함):",
        RESULT_LNG_VOLUME => "LNG 소요량(여유율 포함):",
        RESULT_CONTINGENCY => "여유분:",
        RESULT_LIN_DURATION => "LIN 냉각 시간:",
        RESULT_LNG_DURATION => "LNG 냉각 시간:",
        RESULT_TOTAL_DURATION => "총 소요 시간:",
        RESULT_FLOW_LIN => "LIN 유량:",
        RESULT_FLOW_LNG => "LNG 유량:",
        RESULT_MAX_FLOW => "권고 최대 LIN 유량(참고):",
        RESULT_HEAT_REMOVAL => "필요 열 제거율:",
        DURATION_DAYS_HOURS => "일",
        UNIT_CONVERSION_HEADING => "\n-- 단위 변환 --",
        UNIT_CONVERSION_OPTIONS => "1) 온도  2) 온도차  3) 길이  4) 체적  5) 질량  6) 에너지",
        UNIT_CONVERSION_PROMPT_KIND => "항목 번호를 입력: ",
        UNIT_CONVERSION_PROMPT_VALUE => "값 입력: ",
        UNIT_CONVERSION_PROMPT_FROM_UNIT => "입력 단위(ex: C, mm, m3): ",
        UNIT_CONVERSION_PROMPT_TO_UNIT => "변환 단위(ex: F, in, gal): ",
        UNIT_CONVERSION_RESULT => "변환 결과:",
        UNIT_CONVERSION_UNSUPPORTED => "지원하지 않는 번호입니다.",
        MATERIALS_HEADING => "\n-- 재질 목록 (코드, 이름, 밀도 kg/m3, 비열 J/kgK) --",
        SETTINGS_HEADING => "\n-- 설정 --",
        SETTINGS_CURRENT => "현재 설정:",
        SETTINGS_OPTIONS => "1) 단위 시스템  2) 구간 구성  3) 잠열 산식  4) 여유율 적용 대상",
        SETTINGS_UNIT_OPTIONS => "1) SI  2) Imperial",
        SETTINGS_LAYOUT_OPTIONS => "1) 기상 LIN/LIN/LNG 3구간  2) LIN/LNG 2구간",
        SETTINGS_LATENT_OPTIONS => "1) 잠열만  2) 잠열 + 냉매 현열",
        SETTINGS_LATENT_WARNING => "주의: 잠열+현열 산식은 단위가 맞지 않는 기존 산식입니다. 비교용으로만 사용하세요.",
        SETTINGS_CONTINGENCY_OPTIONS => "1) LIN  2) LNG",
        SETTINGS_PROMPT_CHANGE => "변경할 번호(취소하려면 엔터): ",
        SETTINGS_INVALID => "잘못된 입력이므로 변경하지 않습니다.",
        SETTINGS_SAVED => "설정이 저장되었습니다:",
        _ => "[missing translation]",
    }
}

fn en(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        ERROR_PREFIX => "Error",
        APP_EXIT => "Exiting application.",
        ERROR_INVALID_NUMBER => "Please enter a number.",
        MAIN_MENU_TITLE => "\n=== LNG Tank Cool-Down Estimator ===",
        MAIN_MENU_COOLDOWN => "1) Cool-down estimate",
        MAIN_MENU_UNIT_CONVERSION => "2) Unit converter",
        MAIN_MENU_MATERIALS => "3) Materials",
        MAIN_MENU_SETTINGS => "4) Settings",
        MAIN_MENU_EXIT => "0) Exit",
        PROMPT_MENU_SELECT => "Select menu: ",
        PROMPT_SELECT => "Select: ",
        INVALID_SELECTION_RETRY => "Invalid input. Please try again.",
        COOLDOWN_HEADING => "\n-- Cool-Down Estimate --",
        COOLDOWN_HELP => "Help: diameter/thickness in mm, height/length in m. Press enter to skip optional fields.",
        COOLDOWN_TANK_MODE => "Tank input: 1) height/diameter/thickness  2) metal volume",
        COOLDOWN_DRIVE_MODE => "Duration basis: 1) cooling rate  2) LIN/LNG supply flow",
        PROMPT_TANK_HEIGHT => "Tank height [m]: ",
        PROMPT_TANK_DIAMETER => "Tank diameter [mm]: ",
        PROMPT_TANK_WALL => "Wall thickness [mm]: ",
        PROMPT_TANK_VOLUME => "Metal volume [m3]: ",
        PROMPT_TANK_MATERIAL => "Tank material (cs/ss/9ni/al/cu, enter=9ni): ",
        PROMPT_PIPELINE_LENGTH => "Pipeline length [m] (enter if none): ",
        PROMPT_PIPELINE_DIAMETER => "Pipeline diameter [mm]: ",
        PROMPT_PIPELINE_MATERIAL => "Pipeline material (enter=same as tank): ",
        PROMPT_INITIAL_TEMP => "Initial temperature [°C]: ",
        PROMPT_TARGET_TEMP => "Target temperature [°C]: ",
        PROMPT_LIN_FLOW => "LIN supply flow [m3/h]: ",
        PROMPT_LNG_FLOW => "LNG supply flow [m3/h]: ",
        PROMPT_COOLING_RATE => "Cooling rate [°C/h]: ",
        PROMPT_CONTINGENCY => "Contingency factor [%]: ",
        RESULT_HEADING => "\n== Results ==",
        RESULT_BASIS_FLOW => "Calculated from supply flow rates.",
        RESULT_BASIS_RATE => "Calculated from cooling rate.",
        RESULT_MASS => "Cooled metal mass:",
        RESULT_HEAT_LOAD => "Total heat load:",
        RESULT_PHASE => "Phase",
        RESULT_LIN_VOLUME => "Total LIN volume (incl. contingency):",
        RESULT_LNG_VOLUME => "Total LNG volume (incl. contingency):",
        RESULT_CONTINGENCY => "Contingency:",
        RESULT_LIN_DURATION => "LIN cool-down duration:",
        RESULT_LNG_DURATION => "LNG cool-down duration:",
        RESULT_TOTAL_DURATION => "Total duration:",
        RESULT_FLOW_LIN => "LIN flow rate:",
        RESULT_FLOW_LNG => "LNG flow rate:",
        RESULT_MAX_FLOW => "Advisory max LIN flow rate:",
        RESULT_HEAT_REMOVAL => "Required heat removal rate:",
        DURATION_DAYS_HOURS => "d",
        UNIT_CONVERSION_HEADING => "\n-- Unit Conversion --",
        UNIT_CONVERSION_OPTIONS => "1) Temperature  2) ΔTemperature  3) Length  4) Volume  5) Mass  6) Energy",
        UNIT_CONVERSION_PROMPT_KIND => "Enter item number: ",
        UNIT_CONVERSION_PROMPT_VALUE => "Value: ",
        UNIT_CONVERSION_PROMPT_FROM_UNIT => "From unit (ex: C, mm, m3): ",
        UNIT_CONVERSION_PROMPT_TO_UNIT => "To unit (ex: F, in, gal): ",
        UNIT_CONVERSION_RESULT => "Result:",
        UNIT_CONVERSION_UNSUPPORTED => "Unsupported selection.",
        MATERIALS_HEADING => "\n-- Materials (code, name, density kg/m3, specific heat J/kgK) --",
        SETTINGS_HEADING => "\n-- Settings --",
        SETTINGS_CURRENT => "Current settings:",
        SETTINGS_OPTIONS => "1) Unit system  2) Phase layout  3) Latent-heat formula  4) Contingency target",
        SETTINGS_UNIT_OPTIONS => "1) SI  2) Imperial",
        SETTINGS_LAYOUT_OPTIONS => "1) Vapor-LIN/LIN/LNG (3 phases)  2) LIN/LNG (2 phases)",
        SETTINGS_LATENT_OPTIONS => "1) Latent heat only  2) Latent + cryogen sensible heat",
        SETTINGS_LATENT_WARNING => "Warning: latent+sensible is a dimensionally inconsistent legacy formula. Use it for comparison only.",
        SETTINGS_CONTINGENCY_OPTIONS => "1) LIN  2) LNG",
        SETTINGS_PROMPT_CHANGE => "Enter number to change (enter to cancel): ",
        SETTINGS_INVALID => "Invalid input; setting unchanged.",
        SETTINGS_SAVED => "Settings saved:",
        _ => return None,
    })
}
