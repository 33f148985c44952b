use axum::extract::{Path, State};
use axum::http::StatusCode;
use color_eyre::eyre::eyre;
use maud::{html, Markup, PreEscaped};
use recipes::render::{RenderContext, Renderer};
use recipes::taxonomy::VocabularyKind;

use crate::http_server::md::IntoHtml;
use crate::http_server::errors::ServerError;
use crate::http_server::templates::base;
use crate::http_server::ResponseResult;
use crate::state::AppState;

pub(crate) async fn recipes_index(State(state): State<AppState>) -> ResponseResult<Markup> {
    Ok(base(html! {
      main {
        h1 { "Recipes" }

        ul {
          @for recipe in state.book.by_recency() {
            li {
              span class="publish-date" { (recipe.date()) " " }
              a href=(format!("/recipes/{}", recipe.slug())) { (recipe.title()) }
            }
          }
        }
      }
    }))
}

pub(crate) async fn recipe_get(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> ResponseResult<Markup> {
    let Some(recipe) = state.book.by_slug(&slug) else {
        return Err(ServerError(eyre!("No recipe at {slug}"), StatusCode::NOT_FOUND));
    };

    let context = RenderContext::single(recipe.id());
    let renderer = Renderer::new(state.book.as_ref(), state.filters.as_ref(), context);

    let body = recipe.ast.clone().into_html().into_string();
    let content = renderer.append_to_content(&body);

    let categories = state.taxonomies.recipe_terms(
        state.book.as_ref(),
        recipe.into(),
        VocabularyKind::Category,
        renderer.context(),
    );

    Ok(base(html! {
      article class="recipe" {
        h1 { (recipe.title()) }

        @if !categories.is_empty() {
          ul class="recipe-categories" {
            @for term in &categories {
              li {
                a href=(format!("/taxonomy/recipe-category/{}", term.slug)) { (term.name) }
              }
            }
          }
        }

        (PreEscaped(content))
      }
    }))
}
