use lng_cooldown_toolbox::material_db::{self, MaterialId};

#[test]
fn catalog_has_five_positive_entries() {
    let all = material_db::materials();
    assert_eq!(all.len(), 5);
    assert!(all
        .iter()
        .all(|m| m.density_kg_per_m3 > 0.0 && m.specific_heat_j_per_kgk > 0.0));
}

#[test]
fn find_by_name_accepts_code_name_and_identifier() {
    for key in ["9ni", "9% Nickel Steel", "nickelsteel9", "  9% NICKEL STEEL "] {
        let m = material_db::find_by_name(key).unwrap_or_else(|| panic!("lookup {key}"));
        assert_eq!(m.id, MaterialId::NickelSteel9);
        assert_eq!(m.density_kg_per_m3, 8050.0);
        assert_eq!(m.specific_heat_j_per_kgk, 490.0);
    }
    assert!(material_db::find_by_name("titanium").is_none());
    assert!(material_db::find_by_name("").is_none());
}

#[test]
fn find_by_density_returns_unique_match_only() {
    let cs = material_db::find_by_density(7850.0).expect("carbon steel");
    assert_eq!(cs.id, MaterialId::CarbonSteel);
    assert!(material_db::find_by_density(500.0).is_none());
    assert!(material_db::find_by_density(f64::NAN).is_none());
}

#[test]
fn material_id_parses_and_displays_code() {
    let id: MaterialId = "Copper".parse().unwrap();
    assert_eq!(id, MaterialId::Copper);
    assert_eq!(id.to_string(), "cu");
    assert!("brass".parse::<MaterialId>().is_err());
}
