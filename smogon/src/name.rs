//! Display names as used by the strategy corpus

use pkstrat_dex::{FormeKind, Generation, Species};

/// Name a species is filed under.
///
/// With `specific == false` this is the root species. With `specific ==
/// true` it is the exact forme, except that cosmetic formes (totems,
/// seasonal/ornamental variants, disguise reveals) still collapse to the
/// root. Starter formes are never collapsed.
pub fn display_name(generation: &dyn Generation, species: &Species, specific: bool) -> String {
    if species.forme_kind == FormeKind::Starter {
        return species.name.clone();
    }
    if specific && !species.forme_kind.is_cosmetic() {
        return species.name.clone();
    }

    match generation.species(species.base_species()) {
        Some(base) if base.exists => base.name.clone(),
        _ => species.name.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pkstrat_dex::Dex;

    fn dex() -> Dex {
        let forme = |name: &str, base: &str, kind| Species::new(name).forme_of(base, kind);
        Dex::new(
            8,
            [
                Species::new("Venusaur"),
                forme("Venusaur-Mega", "Venusaur", FormeKind::Mega),
                Species::new("Kyogre"),
                forme("Kyogre-Primal", "Kyogre", FormeKind::Primal),
                Species::new("Greninja"),
                forme("Greninja-Ash", "Greninja", FormeKind::Ash),
                Species::new("Mimikyu"),
                forme("Mimikyu-Busted", "Mimikyu", FormeKind::Revealed),
                Species::new("Butterfree"),
                forme("Butterfree-Gmax", "Butterfree", FormeKind::Gigantamax),
                Species::new("Sinistea"),
                forme("Sinistea-Antique", "Sinistea", FormeKind::Cosmetic),
                Species::new("Gumshoos"),
                forme("Gumshoos-Totem", "Gumshoos", FormeKind::Totem),
                Species::new("Pikachu"),
                forme("Pikachu-Libre", "Pikachu", FormeKind::Cosmetic),
                forme("Pikachu-Starter", "Pikachu", FormeKind::Starter),
                Species::new("Gastrodon"),
                forme("Gastrodon-East", "Gastrodon", FormeKind::Alternate),
                Species::new("Keldeo"),
                forme("Keldeo-Resolute", "Keldeo", FormeKind::Alternate),
                Species::new("Meowth"),
                forme("Meowth-Galar", "Meowth", FormeKind::Regional),
                forme("Zygarde-Complete", "Zygarde", FormeKind::Alternate),
            ],
        )
    }

    fn names(name: &str) -> [String; 2] {
        let generation = dex();
        let species = generation.species(name).unwrap();
        [
            display_name(&generation, species, false),
            display_name(&generation, species, true),
        ]
    }

    #[test]
    fn test_distinct_formes() {
        assert_eq!(names("Venusaur-Mega"), ["Venusaur", "Venusaur-Mega"]);
        assert_eq!(names("Kyogre-Primal"), ["Kyogre", "Kyogre-Primal"]);
        assert_eq!(names("Greninja-Ash"), ["Greninja", "Greninja-Ash"]);
        assert_eq!(names("Butterfree-Gmax"), ["Butterfree", "Butterfree-Gmax"]);
        assert_eq!(names("Gastrodon-East"), ["Gastrodon", "Gastrodon-East"]);
        assert_eq!(names("Keldeo-Resolute"), ["Keldeo", "Keldeo-Resolute"]);
        assert_eq!(names("Meowth-Galar"), ["Meowth", "Meowth-Galar"]);
    }

    #[test]
    fn test_cosmetic_formes_collapse() {
        assert_eq!(names("Mimikyu-Busted"), ["Mimikyu", "Mimikyu"]);
        assert_eq!(names("Sinistea-Antique"), ["Sinistea", "Sinistea"]);
        assert_eq!(names("Gumshoos-Totem"), ["Gumshoos", "Gumshoos"]);
        assert_eq!(names("Pikachu-Libre"), ["Pikachu", "Pikachu"]);
    }

    #[test]
    fn test_starter_never_collapses() {
        assert_eq!(names("Pikachu-Starter"), ["Pikachu-Starter", "Pikachu-Starter"]);
    }

    #[test]
    fn test_base_species_is_its_own_name() {
        assert_eq!(names("Pikachu"), ["Pikachu", "Pikachu"]);
    }

    #[test]
    fn test_unknown_base_falls_back_to_own_name() {
        assert_eq!(names("Zygarde-Complete"), ["Zygarde-Complete", "Zygarde-Complete"]);
    }
}
