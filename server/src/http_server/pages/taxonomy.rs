use axum::extract::{Path, State};
use axum::http::StatusCode;
use color_eyre::eyre::eyre;
use maud::{html, Markup};
use recipes::render::RenderContext;
use recipes::taxonomy::VocabularyKind;

use crate::http_server::errors::ServerError;
use crate::http_server::templates::base;
use crate::http_server::ResponseResult;
use crate::state::AppState;

pub(crate) async fn term_get(
    State(state): State<AppState>,
    Path((vocabulary, term)): Path<(String, String)>,
) -> ResponseResult<Markup> {
    let Ok(kind) = vocabulary.parse::<VocabularyKind>() else {
        return Err(ServerError(
            eyre!("No vocabulary named {vocabulary}"),
            StatusCode::NOT_FOUND,
        ));
    };

    let context = RenderContext::other();
    let matches: Vec<_> = state
        .book
        .recipes()
        .iter()
        .filter(|recipe| {
            state
                .taxonomies
                .recipe_terms(state.book.as_ref(), (*recipe).into(), kind, &context)
                .iter()
                .any(|t| t.slug == term)
        })
        .collect();

    let heading = state
        .taxonomies
        .get(kind)
        .map_or_else(|| kind.slug().to_string(), |v| v.singular.clone());

    Ok(base(html! {
      main {
        h1 { (heading) ": " (term) }

        @if matches.is_empty() {
          p { "No recipes here yet." }
        } @else {
          ul {
            @for recipe in matches {
              li {
                a href=(format!("/recipes/{}", recipe.slug())) { (recipe.title()) }
              }
            }
          }
        }
      }
    }))
}
