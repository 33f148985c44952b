use std::fmt;

use maud::{html, Markup};

use crate::{ingredients::Ingredient, preheat::Preheat, steps::InstructionGroup, RecipeId};

pub type Transform<T> = Box<dyn Fn(T, RecipeId) -> T + Send + Sync>;

/// An ordered list of transforms sharing a fixed shape contract: each
/// receives the current value and the recipe it belongs to, and must return a
/// value of the same shape. Transforms run in registration order.
pub struct FilterChain<T> {
    transforms: Vec<Transform<T>>,
}

impl<T> FilterChain<T> {
    pub fn new() -> Self {
        Self {
            transforms: Vec::new(),
        }
    }

    pub fn register(&mut self, transform: impl Fn(T, RecipeId) -> T + Send + Sync + 'static) {
        self.transforms.push(Box::new(transform));
    }

    pub fn apply(&self, mut value: T, recipe: RecipeId) -> T {
        for transform in &self.transforms {
            value = transform(value, recipe);
        }

        value
    }
}

impl<T> Default for FilterChain<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for FilterChain<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FilterChain")
            .field("transforms", &self.transforms.len())
            .finish()
    }
}

pub type MarkupHook = Box<dyn Fn(RecipeId) -> Markup + Send + Sync>;

/// Notification-style extension point: each hook contributes a markup
/// fragment, concatenated in registration order.
pub struct HookChain {
    hooks: Vec<MarkupHook>,
}

impl HookChain {
    pub fn new() -> Self {
        Self { hooks: Vec::new() }
    }

    pub fn register(&mut self, hook: impl Fn(RecipeId) -> Markup + Send + Sync + 'static) {
        self.hooks.push(Box::new(hook));
    }

    pub fn render(&self, recipe: RecipeId) -> Markup {
        html! {
            @for hook in &self.hooks {
                (hook(recipe))
            }
        }
    }
}

impl Default for HookChain {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for HookChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HookChain")
            .field("hooks", &self.hooks.len())
            .finish()
    }
}

/// Every extension point the renderer exposes. Each read is filterable
/// except the derived total time, which is authoritative from the store.
#[derive(Debug, Default)]
pub struct RecipeFilters {
    /// May replace the preheat record; must return the same shape.
    pub preheat: FilterChain<Option<Preheat>>,
    /// May add, remove, or reorder ingredient entries.
    pub ingredients: FilterChain<Vec<Ingredient>>,
    /// May add, remove, or reorder instruction groups.
    pub steps: FilterChain<Vec<InstructionGroup>>,
    pub prep_time: FilterChain<Option<u32>>,
    pub cook_time: FilterChain<Option<u32>>,
    /// May replace the finished preheat fragment outright.
    pub preheat_display: FilterChain<Markup>,
    /// Markup injected immediately before the preheat block.
    pub before_preheat: HookChain,
    /// Markup injected immediately after the preheat block.
    pub after_preheat: HookChain,
}

impl RecipeFilters {
    pub fn new() -> Self {
        Self::default()
    }
}
