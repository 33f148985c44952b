use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{
    render::{RecipeRef, RenderContext},
    slug::slugify,
    store::RecipeStore,
};

/// The classification vocabularies recipes are filed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum VocabularyKind {
    Category,
    MealType,
    Cuisine,
}

impl VocabularyKind {
    pub fn slug(self) -> &'static str {
        match self {
            VocabularyKind::Category => "recipe-category",
            VocabularyKind::MealType => "meal-type",
            VocabularyKind::Cuisine => "cuisine",
        }
    }
}

#[derive(Debug, thiserror::Error)]
#[error("unknown vocabulary: {0}")]
pub struct UnknownVocabulary(String);

impl FromStr for VocabularyKind {
    type Err = UnknownVocabulary;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "recipe-category" => Ok(VocabularyKind::Category),
            "meal-type" => Ok(VocabularyKind::MealType),
            "cuisine" => Ok(VocabularyKind::Cuisine),
            _ => Err(UnknownVocabulary(s.to_string())),
        }
    }
}

impl fmt::Display for VocabularyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

/// Registration options. The defaults suit every vocabulary registered here.
#[derive(Debug, Clone)]
pub struct TaxonomyOptions {
    pub hierarchical: bool,
    pub public: bool,
}

impl Default for TaxonomyOptions {
    fn default() -> Self {
        Self {
            hierarchical: false,
            public: true,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Vocabulary {
    pub kind: VocabularyKind,
    pub singular: String,
    pub plural: String,
    pub slug: String,
    pub options: TaxonomyOptions,
    pub object_types: Vec<String>,
}

/// A term attached to a recipe under one vocabulary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Term {
    pub name: String,
    pub slug: String,
}

impl Term {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            slug: slugify(name),
        }
    }
}

/// Declares the vocabularies available to the recipe content type. Built
/// once at startup; registration is idempotent per process.
#[derive(Debug, Default)]
pub struct TaxonomyRegistry {
    vocabularies: Vec<Vocabulary>,
}

impl TaxonomyRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with the three stock vocabularies attached to the recipe
    /// content type, defaults accepted.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();

        registry.register(
            VocabularyKind::Category,
            ("Recipe Category", "Recipe Categories", "recipe-category"),
            TaxonomyOptions::default(),
            &["recipe"],
        );
        registry.register(
            VocabularyKind::MealType,
            ("Meal Type", "Meal Types", "meal-type"),
            TaxonomyOptions::default(),
            &["recipe"],
        );
        registry.register(
            VocabularyKind::Cuisine,
            ("Cuisine", "Cuisines", "cuisine"),
            TaxonomyOptions::default(),
            &["recipe"],
        );

        registry
    }

    /// Registers a vocabulary from (singular, plural, machine slug) labels.
    /// Re-registering an already-known vocabulary is a no-op.
    pub fn register(
        &mut self,
        kind: VocabularyKind,
        labels: (&str, &str, &str),
        options: TaxonomyOptions,
        object_types: &[&str],
    ) {
        if self.is_registered(kind) {
            return;
        }

        let (singular, plural, slug) = labels;
        self.vocabularies.push(Vocabulary {
            kind,
            singular: singular.to_string(),
            plural: plural.to_string(),
            slug: slug.to_string(),
            options,
            object_types: object_types.iter().map(ToString::to_string).collect(),
        });
    }

    pub fn is_registered(&self, kind: VocabularyKind) -> bool {
        self.vocabularies.iter().any(|v| v.kind == kind)
    }

    pub fn get(&self, kind: VocabularyKind) -> Option<&Vocabulary> {
        self.vocabularies.iter().find(|v| v.kind == kind)
    }

    pub fn vocabularies(&self) -> &[Vocabulary] {
        &self.vocabularies
    }

    /// Terms attached to a recipe under the requested vocabulary. An
    /// unresolvable reference or an unregistered vocabulary reads as empty.
    pub fn recipe_terms<S: RecipeStore>(
        &self,
        store: &S,
        recipe: RecipeRef<'_>,
        vocabulary: VocabularyKind,
        context: &RenderContext,
    ) -> Vec<Term> {
        if !self.is_registered(vocabulary) {
            return Vec::new();
        }

        let id = match recipe {
            RecipeRef::Id(id) => Some(id),
            RecipeRef::Post(post) => Some(post.id),
            RecipeRef::Current => context.current(),
        };
        let Some(id) = id else {
            return Vec::new();
        };

        store
            .terms(id, vocabulary)
            .iter()
            .map(|name| Term::new(name))
            .collect()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::store::MemoryStore;
    use crate::RecipeId;

    const ID: RecipeId = RecipeId(3);

    fn store_with_terms() -> MemoryStore {
        let mut store = MemoryStore::new();
        store.insert_terms(
            ID,
            VocabularyKind::Category,
            vec!["Dessert".to_string(), "Holiday Baking".to_string()],
        );
        store.insert_terms(ID, VocabularyKind::Cuisine, vec!["Italian".to_string()]);
        store
    }

    #[test]
    fn stock_vocabularies_are_registered_for_recipes() {
        let registry = TaxonomyRegistry::with_defaults();

        assert_eq!(registry.vocabularies().len(), 3);

        let category = registry.get(VocabularyKind::Category).unwrap();
        assert_eq!(category.singular, "Recipe Category");
        assert_eq!(category.plural, "Recipe Categories");
        assert_eq!(category.slug, "recipe-category");
        assert_eq!(category.object_types, vec!["recipe".to_string()]);
    }

    #[test]
    fn registration_is_idempotent() {
        let mut registry = TaxonomyRegistry::with_defaults();
        registry.register(
            VocabularyKind::Category,
            ("Other", "Others", "other"),
            TaxonomyOptions::default(),
            &["recipe"],
        );

        assert_eq!(registry.vocabularies().len(), 3);
        assert_eq!(
            registry.get(VocabularyKind::Category).unwrap().slug,
            "recipe-category"
        );
    }

    #[test]
    fn term_lookup_honors_the_requested_vocabulary() {
        let registry = TaxonomyRegistry::with_defaults();
        let store = store_with_terms();
        let context = RenderContext::other();

        let cuisines =
            registry.recipe_terms(&store, RecipeRef::Id(ID), VocabularyKind::Cuisine, &context);
        assert_eq!(cuisines, vec![Term::new("Italian")]);

        let meal_types =
            registry.recipe_terms(&store, RecipeRef::Id(ID), VocabularyKind::MealType, &context);
        assert!(meal_types.is_empty());
    }

    #[test]
    fn terms_carry_slugs() {
        let registry = TaxonomyRegistry::with_defaults();
        let store = store_with_terms();
        let context = RenderContext::other();

        let terms =
            registry.recipe_terms(&store, RecipeRef::Id(ID), VocabularyKind::Category, &context);

        assert_eq!(terms[1].name, "Holiday Baking");
        assert_eq!(terms[1].slug, "holiday-baking");
    }

    #[test]
    fn current_ref_resolves_from_the_context() {
        let registry = TaxonomyRegistry::with_defaults();
        let store = store_with_terms();

        let single = RenderContext::single(ID);
        let terms =
            registry.recipe_terms(&store, RecipeRef::Current, VocabularyKind::Category, &single);
        assert_eq!(terms.len(), 2);

        let other = RenderContext::other();
        let terms =
            registry.recipe_terms(&store, RecipeRef::Current, VocabularyKind::Category, &other);
        assert!(terms.is_empty());
    }

    #[test]
    fn unregistered_vocabulary_reads_as_empty() {
        let registry = TaxonomyRegistry::new();
        let store = store_with_terms();
        let context = RenderContext::other();

        let terms =
            registry.recipe_terms(&store, RecipeRef::Id(ID), VocabularyKind::Category, &context);

        assert!(terms.is_empty());
    }

    #[test]
    fn vocabulary_slugs_round_trip() {
        for kind in [
            VocabularyKind::Category,
            VocabularyKind::MealType,
            VocabularyKind::Cuisine,
        ] {
            assert_eq!(kind.slug().parse::<VocabularyKind>().unwrap(), kind);
        }

        assert!("tags".parse::<VocabularyKind>().is_err());
    }
}
