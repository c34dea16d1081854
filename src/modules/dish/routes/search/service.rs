use super::types::{request, response};
use crate::{modules::dish::repository, types::Context};
use std::sync::Arc;

/// Ingredient fragments win over a title filter; with neither present the
/// whole catalog is returned.
fn filters_from_query(query: request::Query) -> repository::Filters {
    let ingredients = query
        .ingredients
        .map(|raw| {
            raw.split('.')
                .filter(|fragment| !fragment.is_empty())
                .map(|fragment| format!("%{}%", fragment))
                .collect::<Vec<String>>()
        })
        .filter(|patterns| !patterns.is_empty());

    if ingredients.is_some() {
        return repository::Filters {
            ingredients,
            ..Default::default()
        };
    }

    repository::Filters {
        title: query.title.map(|title| format!("%{}%", title)),
        ..Default::default()
    }
}

pub async fn service(ctx: Arc<Context>, query: request::Query) -> response::Response {
    repository::find_many(&ctx.db_conn.pool, filters_from_query(query))
        .await
        .map_err(|_| response::Error::FailedToFetchDishes)
        .map(response::Success::Dishes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ingredient_fragments_take_precedence_over_title() {
        let filters = filters_from_query(request::Query {
            title: Some(String::from("burger")),
            ingredients: Some(String::from("cheese.tomato")),
        });

        assert_eq!(
            filters.ingredients,
            Some(vec![String::from("%cheese%"), String::from("%tomato%")])
        );
        assert_eq!(filters.title, None);
    }

    #[test]
    fn a_title_alone_becomes_a_contains_pattern() {
        let filters = filters_from_query(request::Query {
            title: Some(String::from("burger")),
            ingredients: None,
        });

        assert_eq!(filters.title, Some(String::from("%burger%")));
        assert_eq!(filters.ingredients, None);
    }

    #[test]
    fn empty_fragments_are_dropped() {
        let filters = filters_from_query(request::Query {
            title: None,
            ingredients: Some(String::from("..cheese..")),
        });

        assert_eq!(filters.ingredients, Some(vec![String::from("%cheese%")]));
    }

    #[test]
    fn an_all_separator_filter_falls_back_to_everything() {
        let filters = filters_from_query(request::Query {
            title: None,
            ingredients: Some(String::from("...")),
        });

        assert_eq!(filters.ingredients, None);
        assert_eq!(filters.title, None);
    }
}
