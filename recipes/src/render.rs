use maud::{html, Markup, PreEscaped};

use crate::{
    duration::hours_minutes,
    filters::RecipeFilters,
    ingredients::Ingredient,
    preheat::Preheat,
    sanitize,
    steps::InstructionGroup,
    store::RecipeStore,
    times::CookTimes,
    Recipe, RecipeId,
};

/// What the current request is looking at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    /// A single recipe page.
    Recipe(RecipeId),
    /// Anything else: listings, other post types, feeds.
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderContext {
    pub view: View,
}

impl RenderContext {
    pub fn single(id: RecipeId) -> Self {
        Self {
            view: View::Recipe(id),
        }
    }

    pub fn other() -> Self {
        Self { view: View::Other }
    }

    /// The recipe a bare `RecipeRef::Current` resolves to, if any.
    pub fn current(&self) -> Option<RecipeId> {
        match self.view {
            View::Recipe(id) => Some(id),
            View::Other => None,
        }
    }

}

/// How callers name a recipe: by id, by loaded post, or by deferring to the
/// current rendering context.
#[derive(Debug, Clone, Copy)]
pub enum RecipeRef<'a> {
    Id(RecipeId),
    Post(&'a Recipe),
    Current,
}

impl From<RecipeId> for RecipeRef<'static> {
    fn from(id: RecipeId) -> Self {
        RecipeRef::Id(id)
    }
}

impl<'a> From<&'a Recipe> for RecipeRef<'a> {
    fn from(recipe: &'a Recipe) -> Self {
        RecipeRef::Post(recipe)
    }
}

/// Renders stored recipe data into HTML fragments. Holds nothing but
/// borrowed collaborators; build one per request.
#[derive(Debug)]
pub struct Renderer<'a, S> {
    store: &'a S,
    filters: &'a RecipeFilters,
    context: RenderContext,
}

impl<'a, S: RecipeStore> Renderer<'a, S> {
    pub fn new(store: &'a S, filters: &'a RecipeFilters, context: RenderContext) -> Self {
        Self {
            store,
            filters,
            context,
        }
    }

    pub fn context(&self) -> &RenderContext {
        &self.context
    }

    fn resolve(&self, recipe: RecipeRef<'_>) -> Option<RecipeId> {
        match recipe {
            RecipeRef::Id(id) => Some(id),
            RecipeRef::Post(post) => Some(post.id),
            RecipeRef::Current => self.context.current(),
        }
    }

    /// The preheat record, run through its filter chain. The chain may
    /// replace the record but must keep the same shape.
    pub fn preheat(&self, recipe: RecipeRef<'_>) -> Option<Preheat> {
        let Some(id) = self.resolve(recipe) else {
            return None;
        };

        self.filters.preheat.apply(self.store.preheat(id), id)
    }

    pub fn ingredients(&self, recipe: RecipeRef<'_>) -> Vec<Ingredient> {
        let Some(id) = self.resolve(recipe) else {
            return Vec::new();
        };

        self.filters.ingredients.apply(self.store.ingredients(id), id)
    }

    pub fn steps(&self, recipe: RecipeRef<'_>) -> Vec<InstructionGroup> {
        let Some(id) = self.resolve(recipe) else {
            return Vec::new();
        };

        self.filters.steps.apply(self.store.instructions(id), id)
    }

    /// Prep and cook each pass through their own filter chain; total comes
    /// straight from the store and cannot be filtered.
    pub fn cook_times(&self, recipe: RecipeRef<'_>) -> CookTimes {
        let Some(id) = self.resolve(recipe) else {
            return CookTimes::default();
        };

        CookTimes {
            prep: self.filters.prep_time.apply(self.store.prep_time(id), id),
            cook: self.filters.cook_time.apply(self.store.cook_time(id), id),
            total: self.store.total_time(id),
        }
    }

    pub fn render_preheat(&self, recipe: RecipeRef<'_>) -> Markup {
        let Some(id) = self.resolve(recipe) else {
            return html! {};
        };

        let mut output = html! {};

        if let Some(preheat) = self.preheat(RecipeRef::Id(id)) {
            // A unit outside the known pair renders as empty unit text; the
            // temperature still shows.
            let unit = preheat.unit().map(|unit| unit.to_string()).unwrap_or_default();

            output = html! {
                (self.filters.before_preheat.render(id))
                div class="recipe-preheat-temp" {
                    h4 class="recipe-preheat-temp-heading" { "Preheat Temperature" }
                    p { (format!("{}° {unit}", preheat.temperature)) }
                }
                (self.filters.after_preheat.render(id))
            };
        }

        self.filters.preheat_display.apply(output, id)
    }

    pub fn render_ingredients(&self, recipe: RecipeRef<'_>) -> Markup {
        let Some(id) = self.resolve(recipe) else {
            return html! {};
        };

        let ingredients = self.ingredients(RecipeRef::Id(id));
        if ingredients.is_empty() {
            return html! {};
        }

        html! {
            ul class="recipe-ingredients" {
                @for ingredient in &ingredients {
                    li {
                        @if let Some(quantity) = ingredient.quantity() {
                            span class="recipe-ingredient-quantity" { (quantity) }
                            " "
                        }
                        @if let Some(unit) = ingredient.unit() {
                            span class="recipe-ingredient-unit" { (unit) }
                            " "
                        }
                        @if let Some(product) = ingredient.product() {
                            span class="recipe-ingredient-item" { (product) }
                        }
                        @if let Some(notes) = ingredient.notes() {
                            " "
                            span class="recipe-ingredient-notes" { (notes) }
                        }
                    }
                }
            }
        }
    }

    pub fn render_steps(&self, recipe: RecipeRef<'_>) -> Markup {
        let Some(id) = self.resolve(recipe) else {
            return html! {};
        };

        let groups = self.steps(RecipeRef::Id(id));
        if groups.is_empty() {
            return html! {};
        }

        html! {
            @for group in &groups {
                @let slug = group.slug();
                div class=(format!("recipe-instruction-group {slug}")) {
                    h3 class="instruction-heading" { (group.title) }
                    ol class=(format!("{slug}-steps")) {
                        @for step in &group.steps {
                            li class="recipe-step" { (PreEscaped(sanitize::clean_step(step))) }
                        }
                    }
                }
            }
        }
    }

    pub fn render_cook_times(&self, recipe: RecipeRef<'_>) -> Markup {
        let Some(id) = self.resolve(recipe) else {
            return html! {};
        };

        let times = self.cook_times(RecipeRef::Id(id));

        html! {
            div class="recipe-preparation-times" {
                @if let Some(prep) = times.prep {
                    div class="prep-time" { (format!("Prep time: {}", hours_minutes(prep))) }
                }
                @if let Some(cook) = times.cook {
                    div class="cook-time" { (format!("Cooking Time: {}", hours_minutes(cook))) }
                }
                @if let Some(total) = times.total {
                    div class="total-time" { (format!("Total Time: {}", hours_minutes(total))) }
                }
            }
        }
    }

    /// Every fragment, in display order: times, preheat, ingredients, steps.
    #[tracing::instrument(skip(self))]
    pub fn render_full(&self, recipe: RecipeRef<'_>) -> Markup {
        let Some(id) = self.resolve(recipe) else {
            return html! {};
        };

        html! {
            (self.render_cook_times(RecipeRef::Id(id)))
            (self.render_preheat(RecipeRef::Id(id)))
            (self.render_ingredients(RecipeRef::Id(id)))
            (self.render_steps(RecipeRef::Id(id)))
        }
    }

    /// The single integration point with the host content pipeline: on a
    /// single-recipe view the full display is appended to the post body;
    /// any other view passes through untouched.
    #[tracing::instrument(skip_all)]
    pub fn append_to_content(&self, content: &str) -> String {
        match self.context.view {
            View::Recipe(id) => {
                let mut content = content.to_string();
                content.push_str(&self.render_full(RecipeRef::Id(id)).into_string());
                content
            }
            View::Other => content.to_string(),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{
        filters::RecipeFilters,
        store::{MemoryStore, MetaField, MetaValue},
    };

    const ID: RecipeId = RecipeId(1);

    fn renderer<'a>(store: &'a MemoryStore, filters: &'a RecipeFilters) -> Renderer<'a, MemoryStore> {
        Renderer::new(store, filters, RenderContext::single(ID))
    }

    fn preheat_value(temperature: u32, unit: &str) -> MetaValue {
        MetaValue::Preheat(Preheat {
            temperature,
            unit: unit.to_string(),
        })
    }

    #[test]
    fn preheat_absent_renders_empty() {
        let store = MemoryStore::new();
        let filters = RecipeFilters::new();

        let markup = renderer(&store, &filters).render_preheat(RecipeRef::Current);

        assert_eq!(markup.into_string(), "");
    }

    #[test]
    fn preheat_renders_temperature_and_unit() {
        let mut store = MemoryStore::new();
        store.insert(ID, MetaField::PreheatGroup, preheat_value(350, "fahrenheit"));
        let filters = RecipeFilters::new();

        let html = renderer(&store, &filters)
            .render_preheat(RecipeRef::Current)
            .into_string();

        assert!(html.contains(r#"<div class="recipe-preheat-temp">"#));
        assert!(html.contains("<p>350° Fahrenheit</p>"));
    }

    #[test]
    fn unknown_unit_still_renders_the_temperature() {
        let mut store = MemoryStore::new();
        store.insert(ID, MetaField::PreheatGroup, preheat_value(350, "kelvin"));
        let filters = RecipeFilters::new();

        let html = renderer(&store, &filters)
            .render_preheat(RecipeRef::Current)
            .into_string();

        assert!(html.contains("<p>350° </p>"));
        assert!(!html.contains("kelvin"));
        assert!(!html.contains("Kelvin"));
    }

    #[test]
    fn preheat_hooks_wrap_the_block() {
        let mut store = MemoryStore::new();
        store.insert(ID, MetaField::PreheatGroup, preheat_value(200, "celsius"));

        let mut filters = RecipeFilters::new();
        filters.before_preheat.register(|_| html! { p class="before" { "before" } });
        filters.after_preheat.register(|_| html! { p class="after" { "after" } });

        let html = renderer(&store, &filters)
            .render_preheat(RecipeRef::Current)
            .into_string();

        let before = html.find(r#"<p class="before">"#).unwrap();
        let block = html.find("recipe-preheat-temp").unwrap();
        let after = html.find(r#"<p class="after">"#).unwrap();
        assert!(before < block && block < after);
    }

    #[test]
    fn preheat_display_filter_can_replace_the_fragment() {
        let mut store = MemoryStore::new();
        store.insert(ID, MetaField::PreheatGroup, preheat_value(200, "celsius"));

        let mut filters = RecipeFilters::new();
        filters
            .preheat_display
            .register(|_, recipe| html! { p { "replaced for " (recipe) } });

        let html = renderer(&store, &filters)
            .render_preheat(RecipeRef::Current)
            .into_string();

        assert_eq!(html, "<p>replaced for 1</p>");
    }

    #[test]
    fn ingredient_spans_render_in_fixed_order() {
        let mut store = MemoryStore::new();
        store.insert(
            ID,
            MetaField::IngredientsGroup,
            MetaValue::Ingredients(vec![Ingredient {
                quantity: Some("2".to_string()),
                unit: Some("cups".to_string()),
                product: Some("flour".to_string()),
                notes: Some(String::new()),
            }]),
        );
        let filters = RecipeFilters::new();

        let html = renderer(&store, &filters)
            .render_ingredients(RecipeRef::Current)
            .into_string();

        assert!(html.contains(concat!(
            r#"<li><span class="recipe-ingredient-quantity">2</span> "#,
            r#"<span class="recipe-ingredient-unit">cups</span> "#,
            r#"<span class="recipe-ingredient-item">flour</span></li>"#,
        )));
        assert!(!html.contains("recipe-ingredient-notes"));
    }

    #[test]
    fn none_unit_omits_the_unit_span() {
        let mut store = MemoryStore::new();
        store.insert(
            ID,
            MetaField::IngredientsGroup,
            MetaValue::Ingredients(vec![Ingredient {
                quantity: Some("1".to_string()),
                unit: Some("none".to_string()),
                product: Some("egg".to_string()),
                notes: Some("beaten".to_string()),
            }]),
        );
        let filters = RecipeFilters::new();

        let html = renderer(&store, &filters)
            .render_ingredients(RecipeRef::Current)
            .into_string();

        assert!(!html.contains("recipe-ingredient-unit"));
        assert!(html.contains(r#"<span class="recipe-ingredient-notes">beaten</span>"#));
    }

    #[test]
    fn no_ingredients_renders_empty() {
        let store = MemoryStore::new();
        let filters = RecipeFilters::new();

        let markup = renderer(&store, &filters).render_ingredients(RecipeRef::Current);

        assert_eq!(markup.into_string(), "");
    }

    #[test]
    fn ingredient_text_is_escaped() {
        let mut store = MemoryStore::new();
        store.insert(
            ID,
            MetaField::IngredientsGroup,
            MetaValue::Ingredients(vec![Ingredient {
                product: Some("<script>alert('flour')</script>".to_string()),
                ..Ingredient::default()
            }]),
        );
        let filters = RecipeFilters::new();

        let html = renderer(&store, &filters)
            .render_ingredients(RecipeRef::Current)
            .into_string();

        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn steps_are_sanitized_not_escaped() {
        let mut store = MemoryStore::new();
        store.insert(
            ID,
            MetaField::InstructionsGroup,
            MetaValue::Instructions(vec![InstructionGroup {
                title: "Make the Dough".to_string(),
                steps: vec![
                    "Mix <em>gently</em>.".to_string(),
                    "Rest.<script>alert('xss')</script>".to_string(),
                ],
            }]),
        );
        let filters = RecipeFilters::new();

        let html = renderer(&store, &filters)
            .render_steps(RecipeRef::Current)
            .into_string();

        assert!(html.contains(r#"<div class="recipe-instruction-group make-the-dough">"#));
        assert!(html.contains(r#"<ol class="make-the-dough-steps">"#));
        assert!(html.contains(r#"<li class="recipe-step">Mix <em>gently</em>.</li>"#));
        assert!(html.contains(r#"<li class="recipe-step">Rest.</li>"#));
    }

    #[test]
    fn cook_time_lines_are_individually_optional() {
        let mut store = MemoryStore::new();
        store.insert(ID, MetaField::PrepTime, MetaValue::Minutes(30));
        let filters = RecipeFilters::new();

        let html = renderer(&store, &filters)
            .render_cook_times(RecipeRef::Current)
            .into_string();

        assert!(html.contains(r#"<div class="prep-time">Prep time: 30 minutes</div>"#));
        assert!(!html.contains("cook-time"));
        assert!(html.contains(r#"<div class="total-time">Total Time: 30 minutes</div>"#));
    }

    #[test]
    fn zero_minutes_is_not_unset() {
        let mut store = MemoryStore::new();
        store.insert(ID, MetaField::CookTime, MetaValue::Minutes(0));
        let filters = RecipeFilters::new();

        let html = renderer(&store, &filters)
            .render_cook_times(RecipeRef::Current)
            .into_string();

        assert!(html.contains(r#"<div class="cook-time">Cooking Time: 0 minutes</div>"#));
    }

    #[test]
    fn durations_are_humanized() {
        let mut store = MemoryStore::new();
        store.insert(ID, MetaField::CookTime, MetaValue::Minutes(90));
        let filters = RecipeFilters::new();

        let html = renderer(&store, &filters)
            .render_cook_times(RecipeRef::Current)
            .into_string();

        assert!(html.contains("Cooking Time: 1 hour 30 minutes"));
    }

    #[test]
    fn prep_and_cook_filters_apply_but_total_stays_authoritative() {
        let mut store = MemoryStore::new();
        store.insert(ID, MetaField::PrepTime, MetaValue::Minutes(10));
        store.insert(ID, MetaField::CookTime, MetaValue::Minutes(20));

        let mut filters = RecipeFilters::new();
        filters.prep_time.register(|prep, _| prep.map(|p| p * 2));

        let times = renderer(&store, &filters).cook_times(RecipeRef::Current);

        assert_eq!(times.prep, Some(20));
        assert_eq!(times.cook, Some(20));
        // Derived from the stored values, not the filtered ones.
        assert_eq!(times.total, Some(30));
    }

    #[test]
    fn full_display_order_is_times_preheat_ingredients_steps() {
        let mut store = MemoryStore::new();
        store.insert(ID, MetaField::PrepTime, MetaValue::Minutes(5));
        store.insert(ID, MetaField::PreheatGroup, preheat_value(425, "fahrenheit"));
        store.insert(
            ID,
            MetaField::IngredientsGroup,
            MetaValue::Ingredients(vec![Ingredient {
                product: Some("bread".to_string()),
                ..Ingredient::default()
            }]),
        );
        store.insert(
            ID,
            MetaField::InstructionsGroup,
            MetaValue::Instructions(vec![InstructionGroup {
                title: "Bake".to_string(),
                steps: vec!["Bake it.".to_string()],
            }]),
        );
        let filters = RecipeFilters::new();

        let html = renderer(&store, &filters)
            .render_full(RecipeRef::Current)
            .into_string();

        let times = html.find("recipe-preparation-times").unwrap();
        let preheat = html.find("recipe-preheat-temp").unwrap();
        let ingredients = html.find("recipe-ingredients").unwrap();
        let steps = html.find("recipe-instruction-group").unwrap();
        assert!(times < preheat && preheat < ingredients && ingredients < steps);
    }

    #[test]
    fn append_to_content_on_a_recipe_view() {
        let mut store = MemoryStore::new();
        store.insert(ID, MetaField::PrepTime, MetaValue::Minutes(5));
        let filters = RecipeFilters::new();

        let appended = renderer(&store, &filters).append_to_content("<p>Intro.</p>");

        assert!(appended.starts_with("<p>Intro.</p>"));
        assert!(appended.contains("recipe-preparation-times"));
    }

    #[test]
    fn append_to_content_passes_other_views_through_unchanged() {
        let mut store = MemoryStore::new();
        store.insert(ID, MetaField::PrepTime, MetaValue::Minutes(5));
        let filters = RecipeFilters::new();

        let renderer = Renderer::new(&store, &filters, RenderContext::other());
        let content = "<p>Not a recipe.</p>";

        assert_eq!(renderer.append_to_content(content), content);
    }

    #[test]
    fn current_ref_without_context_renders_everything_empty() {
        let mut store = MemoryStore::new();
        store.insert(ID, MetaField::PrepTime, MetaValue::Minutes(5));
        let filters = RecipeFilters::new();

        let renderer = Renderer::new(&store, &filters, RenderContext::other());

        assert!(renderer.preheat(RecipeRef::Current).is_none());
        assert!(renderer.ingredients(RecipeRef::Current).is_empty());
        assert_eq!(renderer.render_full(RecipeRef::Current).into_string(), "");
    }

    #[test]
    fn ingredients_filter_can_insert_entries() {
        let mut store = MemoryStore::new();
        store.insert(
            ID,
            MetaField::IngredientsGroup,
            MetaValue::Ingredients(vec![Ingredient {
                product: Some("flour".to_string()),
                ..Ingredient::default()
            }]),
        );

        let mut filters = RecipeFilters::new();
        filters.ingredients.register(|mut ingredients, _| {
            ingredients.push(Ingredient {
                product: Some("a pinch of salt".to_string()),
                ..Ingredient::default()
            });
            ingredients
        });

        let html = renderer(&store, &filters)
            .render_ingredients(RecipeRef::Current)
            .into_string();

        let flour = html.find("flour").unwrap();
        let salt = html.find("a pinch of salt").unwrap();
        assert!(flour < salt);
    }
}
