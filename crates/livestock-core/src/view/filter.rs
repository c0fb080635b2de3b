//! Search and categorical filters over an animal snapshot.

use serde::{Deserialize, Serialize};

use crate::models::{AnimalRecord, AnimalType, Sex};

/// Filter on the herd role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeFilter {
    #[default]
    All,
    Production,
    Replacement,
}

impl TypeFilter {
    /// Parse the select value: `"all"`, `"replacement"`, anything else is production.
    pub fn parse(raw: &str) -> Self {
        match raw {
            "all" => TypeFilter::All,
            "replacement" => TypeFilter::Replacement,
            _ => TypeFilter::Production,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TypeFilter::All => "all",
            TypeFilter::Production => "production",
            TypeFilter::Replacement => "replacement",
        }
    }

    /// Whether an animal with this `tipe` passes. Unknown types only pass `All`.
    pub fn accepts(&self, tipe: Option<AnimalType>) -> bool {
        match self {
            TypeFilter::All => true,
            TypeFilter::Production => tipe == Some(AnimalType::Production),
            TypeFilter::Replacement => tipe == Some(AnimalType::Replacement),
        }
    }
}

/// Filter on sex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SexFilter {
    #[default]
    All,
    Male,
    Female,
}

impl SexFilter {
    /// Parse the select value: `"all"`, `"female"`, anything else is male.
    pub fn parse(raw: &str) -> Self {
        match raw {
            "all" => SexFilter::All,
            "female" => SexFilter::Female,
            _ => SexFilter::Male,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SexFilter::All => "all",
            SexFilter::Male => "male",
            SexFilter::Female => "female",
        }
    }

    pub fn accepts(&self, sex: Option<Sex>) -> bool {
        match self {
            SexFilter::All => true,
            SexFilter::Male => sex == Some(Sex::Male),
            SexFilter::Female => sex == Some(Sex::Female),
        }
    }
}

/// The categorical filters of the animal list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct AnimalFilters {
    #[serde(rename = "type")]
    pub kind: TypeFilter,
    pub sex: SexFilter,
}

impl AnimalFilters {
    /// Build from the raw select values.
    pub fn parse(kind: &str, sex: &str) -> Self {
        Self {
            kind: TypeFilter::parse(kind),
            sex: SexFilter::parse(sex),
        }
    }

    pub fn is_active(&self) -> bool {
        self.kind != TypeFilter::All || self.sex != SexFilter::All
    }

    pub fn accepts(&self, animal: &AnimalRecord) -> bool {
        self.kind.accepts(animal.tipe) && self.sex.accepts(animal.sex)
    }
}

/// Lower-cased search needle, `None` when the term is blank.
fn needle(term: &str) -> Option<String> {
    if term.trim().is_empty() {
        None
    } else {
        Some(term.to_lowercase())
    }
}

/// Whether `name` or the caravan text contains an already lower-cased needle.
pub fn matches_search(animal: &AnimalRecord, needle: &str) -> bool {
    animal.name.to_lowercase().contains(needle)
        || animal.caravan_text().to_lowercase().contains(needle)
}

/// Search-only projection for the health screen (no categorical filters,
/// no paging). The term is not trimmed here: `" "` matches names with a space.
pub fn search_animals<'a>(all: &'a [AnimalRecord], term: &str) -> Vec<&'a AnimalRecord> {
    let needle = term.to_lowercase();
    all.iter().filter(|animal| matches_search(animal, &needle)).collect()
}

/// Apply search, then the categorical filters. Snapshot order is preserved.
pub fn filter_animals<'a>(
    all: &'a [AnimalRecord],
    term: &str,
    filters: &AnimalFilters,
) -> Vec<&'a AnimalRecord> {
    let needle = needle(term);
    all.iter()
        .filter(|animal| match &needle {
            Some(needle) => matches_search(animal, needle),
            None => true,
        })
        .filter(|animal| filters.accepts(animal))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Caravan, Production};

    fn animal(id: &str, name: &str, caravan: Option<i64>, sex: Sex, tipe: AnimalType) -> AnimalRecord {
        AnimalRecord {
            id: id.into(),
            name: name.into(),
            caravan: caravan.map(Caravan::Number),
            sex: Some(sex),
            tipe: Some(tipe),
            productive: Some(Production::Producing),
            liters_produce: "10".into(),
            cant_children: 0,
            age: 3,
        }
    }

    fn herd() -> Vec<AnimalRecord> {
        vec![
            animal("1", "Lola", Some(101), Sex::Female, AnimalType::Production),
            animal("2", "Toro Bravo", Some(202), Sex::Male, AnimalType::Replacement),
            animal("3", "Manchada", Some(0), Sex::Female, AnimalType::Replacement),
            animal("4", "Lolita", None, Sex::Female, AnimalType::Production),
        ]
    }

    fn ids(animals: &[&AnimalRecord]) -> Vec<String> {
        animals.iter().map(|a| a.id.clone()).collect()
    }

    #[test]
    fn test_filter_parse() {
        assert_eq!(TypeFilter::parse("all"), TypeFilter::All);
        assert_eq!(TypeFilter::parse("replacement"), TypeFilter::Replacement);
        assert_eq!(TypeFilter::parse("production"), TypeFilter::Production);
        assert_eq!(TypeFilter::parse("whatever"), TypeFilter::Production);
        assert_eq!(SexFilter::parse("female"), SexFilter::Female);
        assert_eq!(SexFilter::parse("male"), SexFilter::Male);
    }

    #[test]
    fn test_no_filters_keeps_everything() {
        let herd = herd();
        assert_eq!(filter_animals(&herd, "", &AnimalFilters::default()).len(), 4);
        assert_eq!(filter_animals(&herd, "   ", &AnimalFilters::default()).len(), 4);
    }

    #[test]
    fn test_search_by_name_case_insensitive() {
        let herd = herd();
        let found = filter_animals(&herd, "LOL", &AnimalFilters::default());
        assert_eq!(ids(&found), vec!["1", "4"]);
    }

    #[test]
    fn test_search_by_caravan() {
        let herd = herd();
        let found = filter_animals(&herd, "20", &AnimalFilters::default());
        assert_eq!(ids(&found), vec!["2"]);
    }

    #[test]
    fn test_search_by_text_caravan() {
        let mut herd = herd();
        herd[3].caravan = Some(Caravan::Tag("A-12".into()));
        let found = filter_animals(&herd, "a-1", &AnimalFilters::default());
        assert_eq!(ids(&found), vec!["4"]);
    }

    #[test]
    fn test_search_matches_caravan_zero() {
        let herd = herd();
        let found = filter_animals(&herd, "0", &AnimalFilters::default());
        // 101, 202 and 0 all contain a zero
        assert_eq!(ids(&found), vec!["1", "2", "3"]);
    }

    #[test]
    fn test_type_and_sex_filters_intersect() {
        let herd = herd();
        let filters = AnimalFilters::parse("replacement", "female");
        assert_eq!(ids(&filter_animals(&herd, "", &filters)), vec!["3"]);

        let filters = AnimalFilters::parse("production", "all");
        assert_eq!(ids(&filter_animals(&herd, "", &filters)), vec!["1", "4"]);

        let filters = AnimalFilters::parse("all", "male");
        assert_eq!(ids(&filter_animals(&herd, "", &filters)), vec!["2"]);
    }

    #[test]
    fn test_unknown_codes_only_pass_all() {
        let mut herd = herd();
        herd[0].sex = None;
        herd[0].tipe = None;

        let all = filter_animals(&herd, "", &AnimalFilters::default());
        assert_eq!(all.len(), 4);

        let females = filter_animals(&herd, "", &AnimalFilters::parse("all", "female"));
        assert_eq!(ids(&females), vec!["3", "4"]);

        let males = filter_animals(&herd, "", &AnimalFilters::parse("all", "male"));
        assert_eq!(ids(&males), vec!["2"]);
    }

    #[test]
    fn test_search_animals_ignores_categorical_filters() {
        let herd = herd();
        assert_eq!(ids(&search_animals(&herd, "toro")), vec!["2"]);
        assert_eq!(search_animals(&herd, "").len(), 4);
    }

    #[test]
    fn test_search_animals_keeps_whitespace() {
        let herd = herd();
        assert_eq!(ids(&search_animals(&herd, " ")), vec!["2"]);
        // The list screen treats the same term as blank.
        assert_eq!(filter_animals(&herd, " ", &AnimalFilters::default()).len(), 4);
    }

    #[test]
    fn test_filters_serialize_with_ui_names() {
        let filters = AnimalFilters::parse("replacement", "female");
        let json = serde_json::to_value(filters).unwrap();
        assert_eq!(json, serde_json::json!({"type": "replacement", "sex": "female"}));
    }
}
