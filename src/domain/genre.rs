/// Genre Aggregate
///
/// A genre groups categories (e.g. "Action" spanning "Movies" and
/// "Series"). Only the aggregate and its rules exist so far; there is no
/// gateway or use case for genres yet.

use chrono::{DateTime, Utc};

use super::category::CategoryId;
use super::entity::{self, uuid_identifier, AggregateRoot, Entity};
use super::validation::{check_name, ValidationHandler, Validator};

pub const NAME_MIN_LENGTH: usize = 1;
pub const NAME_MAX_LENGTH: usize = 255;

uuid_identifier!(
    /// Identifier of a `Genre`
    GenreId
);

#[derive(Debug, Clone)]
pub struct Genre {
    id: GenreId,
    name: Option<String>,
    is_active: bool,
    categories: Vec<CategoryId>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    deleted_at: Option<DateTime<Utc>>,
}

impl Genre {
    pub fn new_genre(name: Option<String>, is_active: bool) -> Self {
        let now = entity::now();
        Self {
            id: GenreId::unique(),
            name: entity::normalize_name(name),
            is_active,
            categories: Vec::new(),
            created_at: now,
            updated_at: now,
            deleted_at: if is_active { None } else { Some(now) },
        }
    }

    #[allow(clippy::too_many_arguments)]
    pub fn with(
        id: GenreId,
        name: Option<String>,
        is_active: bool,
        categories: Vec<CategoryId>,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
        deleted_at: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            id,
            name,
            is_active,
            categories,
            created_at,
            updated_at,
            deleted_at,
        }
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn is_active(&self) -> bool {
        self.is_active
    }

    pub fn categories(&self) -> &[CategoryId] {
        &self.categories
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    pub fn deleted_at(&self) -> Option<DateTime<Utc>> {
        self.deleted_at
    }
}

impl Entity for Genre {
    type Id = GenreId;

    fn id(&self) -> &GenreId {
        &self.id
    }

    fn validate(&self, handler: &mut dyn ValidationHandler) {
        GenreValidator::new(self).validate(handler);
    }
}

impl AggregateRoot for Genre {
    const NAME: &'static str = "Genre";
}

impl PartialEq for Genre {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Genre {}

/// Genre rules: name required, 1 to 255 characters after trimming
pub struct GenreValidator<'a> {
    genre: &'a Genre,
}

impl<'a> GenreValidator<'a> {
    pub fn new(genre: &'a Genre) -> Self {
        Self { genre }
    }
}

impl Validator for GenreValidator<'_> {
    fn validate(&self, handler: &mut dyn ValidationHandler) {
        check_name(self.genre.name(), NAME_MIN_LENGTH, NAME_MAX_LENGTH, handler);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::validation::Notification;

    #[test]
    fn test_new_genre() {
        let genre = Genre::new_genre(Some("Ação".into()), true);

        assert_eq!(genre.name(), Some("Ação"));
        assert!(genre.is_active());
        assert!(genre.categories().is_empty());
        assert_eq!(genre.created_at(), genre.updated_at());
        assert!(genre.deleted_at().is_none());
    }

    #[test]
    fn test_new_inactive_genre() {
        let genre = Genre::new_genre(Some("Ação".into()), false);
        assert!(genre.deleted_at().is_some());
    }

    #[test]
    fn test_genre_name_rules() {
        let cases = [
            (None, Some("'name' cannot be null")),
            (Some(String::from(" ")), Some("'name' cannot be empty")),
            (Some("a".repeat(256)), Some("'name' must be between 1 and 255 characters")),
            (Some(String::from("A")), None),
        ];

        for (name, expected) in cases {
            let genre = Genre::new_genre(name, true);
            let mut notification = Notification::new();
            genre.validate(&mut notification);
            assert_eq!(notification.first_error().map(|e| e.message.as_str()), expected);
        }
    }

    #[test]
    fn test_with_restores_categories() {
        let category_id = CategoryId::unique();
        let now = entity::now();
        let genre = Genre::with(GenreId::unique(), Some("Drama".into()), true, vec![category_id], now, now, None);

        assert_eq!(genre.categories(), &[category_id]);
    }
}
