//! Remote resource paths.
//!
//! Opaque keys for [`CollectionSource`](crate::CollectionSource); nothing
//! downstream interprets them.

/// All animals.
pub const ANIMALS: &str = "/animals";

/// All health records.
pub const HEALTH: &str = "/health";

/// A single animal, for update/delete.
pub fn animal(id: &str) -> String {
    format!("{}/{}", ANIMALS, id)
}

/// A single health record, for update/delete.
pub fn health_record(id: &str) -> String {
    format!("{}/{}", HEALTH, id)
}

/// Health records of one animal.
pub fn health_for_animal(animal_id: &str) -> String {
    format!("{}/animal/{}", HEALTH, animal_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths() {
        assert_eq!(animal("7"), "/animals/7");
        assert_eq!(health_record("12"), "/health/12");
        assert_eq!(health_for_animal("7"), "/health/animal/7");
    }
}
