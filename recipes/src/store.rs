use std::collections::HashMap;

use crate::{
    ingredients::Ingredient, preheat::Preheat, steps::InstructionGroup,
    taxonomy::VocabularyKind, RecipeBook, RecipeId,
};

/// The per-recipe fields the renderer reads, mirroring the stored meta keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetaField {
    PreheatGroup,
    IngredientsGroup,
    InstructionsGroup,
    PrepTime,
    CookTime,
}

#[derive(Debug, Clone, PartialEq)]
pub enum MetaValue {
    Preheat(Preheat),
    Ingredients(Vec<Ingredient>),
    Instructions(Vec<InstructionGroup>),
    Minutes(u32),
}

/// Read-only view of recipe storage. Each field is independently optional;
/// a missing field never affects the others.
pub trait RecipeStore {
    /// Keyed lookup of a single stored field. `None` when never set.
    fn field(&self, id: RecipeId, field: MetaField) -> Option<MetaValue>;

    /// Terms attached to the recipe under one vocabulary, in stored order.
    fn terms(&self, id: RecipeId, vocabulary: VocabularyKind) -> Vec<String>;

    fn preheat(&self, id: RecipeId) -> Option<Preheat> {
        match self.field(id, MetaField::PreheatGroup) {
            Some(MetaValue::Preheat(preheat)) => Some(preheat),
            _ => None,
        }
    }

    fn ingredients(&self, id: RecipeId) -> Vec<Ingredient> {
        match self.field(id, MetaField::IngredientsGroup) {
            Some(MetaValue::Ingredients(ingredients)) => ingredients,
            _ => Vec::new(),
        }
    }

    fn instructions(&self, id: RecipeId) -> Vec<InstructionGroup> {
        match self.field(id, MetaField::InstructionsGroup) {
            Some(MetaValue::Instructions(groups)) => groups,
            _ => Vec::new(),
        }
    }

    fn prep_time(&self, id: RecipeId) -> Option<u32> {
        match self.field(id, MetaField::PrepTime) {
            Some(MetaValue::Minutes(minutes)) => Some(minutes),
            _ => None,
        }
    }

    fn cook_time(&self, id: RecipeId) -> Option<u32> {
        match self.field(id, MetaField::CookTime) {
            Some(MetaValue::Minutes(minutes)) => Some(minutes),
            _ => None,
        }
    }

    /// Derived total time. Computed here, not by the renderer, and never
    /// filterable.
    fn total_time(&self, id: RecipeId) -> Option<u32> {
        match (self.prep_time(id), self.cook_time(id)) {
            (None, None) => None,
            (prep, cook) => Some(prep.unwrap_or(0) + cook.unwrap_or(0)),
        }
    }
}

impl RecipeStore for RecipeBook {
    fn field(&self, id: RecipeId, field: MetaField) -> Option<MetaValue> {
        let frontmatter = &self.get(id)?.frontmatter;

        match field {
            MetaField::PreheatGroup => frontmatter.preheat.clone().map(MetaValue::Preheat),
            MetaField::IngredientsGroup => {
                if frontmatter.ingredients.is_empty() {
                    None
                } else {
                    Some(MetaValue::Ingredients(frontmatter.ingredients.clone()))
                }
            }
            MetaField::InstructionsGroup => {
                if frontmatter.instructions.is_empty() {
                    None
                } else {
                    Some(MetaValue::Instructions(frontmatter.instructions.clone()))
                }
            }
            MetaField::PrepTime => frontmatter.prep_time.map(MetaValue::Minutes),
            MetaField::CookTime => frontmatter.cook_time.map(MetaValue::Minutes),
        }
    }

    fn terms(&self, id: RecipeId, vocabulary: VocabularyKind) -> Vec<String> {
        let Some(recipe) = self.get(id) else {
            return Vec::new();
        };

        match vocabulary {
            VocabularyKind::Category => recipe.frontmatter.categories.clone(),
            VocabularyKind::MealType => recipe.frontmatter.meal_types.clone(),
            VocabularyKind::Cuisine => recipe.frontmatter.cuisines.clone(),
        }
    }
}

/// In-memory store for tests and embedders that don't load recipe files.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    fields: HashMap<(RecipeId, MetaField), MetaValue>,
    terms: HashMap<(RecipeId, VocabularyKind), Vec<String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, id: RecipeId, field: MetaField, value: MetaValue) {
        self.fields.insert((id, field), value);
    }

    pub fn insert_terms(&mut self, id: RecipeId, vocabulary: VocabularyKind, terms: Vec<String>) {
        self.terms.insert((id, vocabulary), terms);
    }
}

impl RecipeStore for MemoryStore {
    fn field(&self, id: RecipeId, field: MetaField) -> Option<MetaValue> {
        self.fields.get(&(id, field)).cloned()
    }

    fn terms(&self, id: RecipeId, vocabulary: VocabularyKind) -> Vec<String> {
        self.terms.get(&(id, vocabulary)).cloned().unwrap_or_default()
    }
}
