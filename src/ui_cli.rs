use std::io::{self, Write};

use crate::app::AppError;
use crate::config::{Config, UnitSystem};
use crate::conversion;
use crate::cooldown::{self, ContingencyTarget, CooldownForm, LatentHeatModel, PhaseLayout};
use crate::i18n::{keys, Translator};
use crate::material_db;
use crate::quantity::QuantityKind;
use crate::report;

/// 메인 메뉴 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Cooldown,
    UnitConversion,
    Materials,
    Settings,
    Exit,
}

/// 메인 메뉴를 표시하고 선택값을 반환한다.
pub fn main_menu(tr: &Translator) -> Result<MenuChoice, AppError> {
    println!("{}", tr.t(keys::MAIN_MENU_TITLE));
    println!("{}", tr.t(keys::MAIN_MENU_COOLDOWN));
    println!("{}", tr.t(keys::MAIN_MENU_UNIT_CONVERSION));
    println!("{}", tr.t(keys::MAIN_MENU_MATERIALS));
    println!("{}", tr.t(keys::MAIN_MENU_SETTINGS));
    println!("{}", tr.t(keys::MAIN_MENU_EXIT));
    loop {
        let sel = read_line(tr.t(keys::PROMPT_MENU_SELECT))?;
        match sel.trim() {
            "1" => return Ok(MenuChoice::Cooldown),
            "2" => return Ok(MenuChoice::UnitConversion),
            "3" => return Ok(MenuChoice::Materials),
            "4" => return Ok(MenuChoice::Settings),
            "0" => return Ok(MenuChoice::Exit),
            _ => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
        }
    }
}

/// 쿨다운 추정 메뉴를 처리한다. 입력은 폼 원문으로 모아 코어 검증에 맡긴다.
pub fn handle_cooldown(tr: &Translator, cfg: &Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::COOLDOWN_HEADING));
    println!("{}", tr.t(keys::COOLDOWN_HELP));

    let mut form = CooldownForm::default();
    println!("{}", tr.t(keys::COOLDOWN_TANK_MODE));
    if read_line(tr.t(keys::PROMPT_SELECT))?.trim() == "2" {
        form.tank_volume = read_field(tr.t(keys::PROMPT_TANK_VOLUME))?;
    } else {
        form.tank_height = read_field(tr.t(keys::PROMPT_TANK_HEIGHT))?;
        form.tank_diameter = read_field(tr.t(keys::PROMPT_TANK_DIAMETER))?;
        form.tank_wall_thickness = read_field(tr.t(keys::PROMPT_TANK_WALL))?;
    }
    form.tank_material = read_field(tr.t(keys::PROMPT_TANK_MATERIAL))?;

    form.pipeline_length = read_field(tr.t(keys::PROMPT_PIPELINE_LENGTH))?;
    if form.pipeline_length.is_some() {
        form.pipeline_diameter = read_field(tr.t(keys::PROMPT_PIPELINE_DIAMETER))?;
        form.pipeline_material = read_field(tr.t(keys::PROMPT_PIPELINE_MATERIAL))?;
    }

    form.initial_temperature = read_field(tr.t(keys::PROMPT_INITIAL_TEMP))?;
    form.target_temperature = read_field(tr.t(keys::PROMPT_TARGET_TEMP))?;

    println!("{}", tr.t(keys::COOLDOWN_DRIVE_MODE));
    if read_line(tr.t(keys::PROMPT_SELECT))?.trim() == "2" {
        form.lin_flow_rate = read_field(tr.t(keys::PROMPT_LIN_FLOW))?;
        form.lng_flow_rate = read_field(tr.t(keys::PROMPT_LNG_FLOW))?;
    } else {
        form.cooling_rate = read_field(tr.t(keys::PROMPT_COOLING_RATE))?;
    }
    form.contingency_factor = read_field(tr.t(keys::PROMPT_CONTINGENCY))?;

    let input = form.parse()?;
    let result = cooldown::calculate(&input, &cfg.model)?;
    print!("{}", report::render_text(&result, &cfg.display_units, tr));
    Ok(())
}

/// 단위 변환 메뉴를 처리한다.
pub fn handle_unit_conversion(tr: &Translator) -> Result<(), AppError> {
    println!("{}", tr.t(keys::UNIT_CONVERSION_HEADING));
    println!("{}", tr.t(keys::UNIT_CONVERSION_OPTIONS));
    let kind = loop {
        let sel = read_line(tr.t(keys::UNIT_CONVERSION_PROMPT_KIND))?;
        if let Some(kind) = sel
            .trim()
            .parse::<usize>()
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|i| QuantityKind::ALL.get(i).copied())
        {
            break kind;
        }
        println!("{}", tr.t(keys::UNIT_CONVERSION_UNSUPPORTED));
    };
    let value = read_f64(tr, tr.t(keys::UNIT_CONVERSION_PROMPT_VALUE))?;
    let from_unit = read_line(tr.t(keys::UNIT_CONVERSION_PROMPT_FROM_UNIT))?;
    let to_unit = read_line(tr.t(keys::UNIT_CONVERSION_PROMPT_TO_UNIT))?;
    let result = conversion::convert(kind, value, from_unit.trim(), to_unit.trim())?;
    println!(
        "{} {result} {}",
        tr.t(keys::UNIT_CONVERSION_RESULT),
        to_unit.trim()
    );
    Ok(())
}

/// 재질 카탈로그를 출력한다.
pub fn handle_materials(tr: &Translator) {
    println!("{}", tr.t(keys::MATERIALS_HEADING));
    for m in material_db::materials() {
        println!(
            "{:<4} {:<16} {:>6.0} {:>5.0}",
            m.code, m.name, m.density_kg_per_m3, m.specific_heat_j_per_kgk
        );
    }
}

/// 설정 메뉴를 처리한다.
pub fn handle_settings(tr: &Translator, cfg: &mut Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::SETTINGS_HEADING));
    println!(
        "{} {:?}, {:?}, {:?}, {:?}",
        tr.t(keys::SETTINGS_CURRENT),
        cfg.unit_system,
        cfg.model.phase_layout,
        cfg.model.latent_heat,
        cfg.model.contingency_target
    );
    println!("{}", tr.t(keys::SETTINGS_OPTIONS));
    let sel = read_line(tr.t(keys::SETTINGS_PROMPT_CHANGE))?;
    let options_key = match sel.trim() {
        "" => return Ok(()),
        "1" => keys::SETTINGS_UNIT_OPTIONS,
        "2" => keys::SETTINGS_LAYOUT_OPTIONS,
        "3" => keys::SETTINGS_LATENT_OPTIONS,
        "4" => keys::SETTINGS_CONTINGENCY_OPTIONS,
        _ => {
            println!("{}", tr.t(keys::SETTINGS_INVALID));
            return Ok(());
        }
    };
    println!("{}", tr.t(options_key));
    let choice = read_line(tr.t(keys::PROMPT_SELECT))?;
    let first = match choice.trim() {
        "1" => true,
        "2" => false,
        _ => {
            println!("{}", tr.t(keys::SETTINGS_INVALID));
            return Ok(());
        }
    };
    match sel.trim() {
        "1" => cfg.set_unit_system(if first {
            UnitSystem::SI
        } else {
            UnitSystem::Imperial
        }),
        "2" => {
            cfg.model.phase_layout = if first {
                PhaseLayout::VaporLinLinLng
            } else {
                PhaseLayout::LinLng
            }
        }
        "3" => {
            cfg.model.latent_heat = if first {
                LatentHeatModel::Latent
            } else {
                println!("{}", tr.t(keys::SETTINGS_LATENT_WARNING));
                LatentHeatModel::LatentPlusSensible
            }
        }
        _ => {
            cfg.model.contingency_target = if first {
                ContingencyTarget::Lin
            } else {
                ContingencyTarget::Lng
            }
        }
    }
    Ok(())
}

fn read_line(prompt: &str) -> Result<String, AppError> {
    print!("{prompt}");
    io::stdout().flush()?;
    let mut buf = String::new();
    io::stdin().read_line(&mut buf)?;
    Ok(buf)
}

/// 빈 입력은 `None`으로 돌려준다.
fn read_field(prompt: &str) -> Result<Option<String>, AppError> {
    let s = read_line(prompt)?;
    let s = s.trim();
    Ok((!s.is_empty()).then(|| s.to_string()))
}

fn read_f64(tr: &Translator, prompt: &str) -> Result<f64, AppError> {
    loop {
        let s = read_line(prompt)?;
        match s.trim().parse::<f64>() {
            Ok(v) => return Ok(v),
            Err(_) => println!("{}", tr.t(keys::ERROR_INVALID_NUMBER)),
        }
    }
}
