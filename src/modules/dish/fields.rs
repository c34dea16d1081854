use async_trait::async_trait;
use axum::extract::multipart::Field;
use axum_typed_multipart::{TryFromField, TypedMultipartError};
use bigdecimal::BigDecimal;
use std::str::FromStr;

#[derive(Debug, Clone)]
pub struct Price(pub BigDecimal);

#[async_trait]
impl TryFromField for Price {
    async fn try_from_field<'a>(
        field: Field<'a>,
        _: Option<usize>,
    ) -> Result<Self, TypedMultipartError> {
        let text = field.text().await.map_err(|err| {
            tracing::error!("Error occurred while parsing body: {}", err);
            TypedMultipartError::InvalidRequestBody { source: err }
        })?;

        BigDecimal::from_str(text.trim()).map(Price).map_err(|err| {
            tracing::warn!("Rejecting price {:?}: {}", text, err);
            TypedMultipartError::UnknownField {
                field_name: String::from("price"),
            }
        })
    }
}

/// The ingredients form field accepts either a JSON array of names or a
/// bare name. The ambiguity is resolved here, once, at the boundary;
/// everything downstream works with the tagged value.
#[derive(Debug, Clone, PartialEq)]
pub enum Ingredients {
    Single(String),
    Many(Vec<String>),
}

impl Ingredients {
    pub fn parse(text: &str) -> Self {
        match serde_json::from_str::<Vec<String>>(text) {
            Ok(names) => Self::Many(names),
            Err(_) => Self::Single(text.to_string()),
        }
    }

    pub fn into_names(self) -> Vec<String> {
        match self {
            Self::Single(name) => vec![name],
            Self::Many(names) => names,
        }
    }
}

#[async_trait]
impl TryFromField for Ingredients {
    async fn try_from_field<'a>(
        field: Field<'a>,
        _: Option<usize>,
    ) -> Result<Self, TypedMultipartError> {
        field
            .text()
            .await
            .map(|text| Self::parse(text.as_ref()))
            .map_err(|err| {
                tracing::error!("Error occurred while parsing body: {}", err);
                TypedMultipartError::InvalidRequestBody { source: err }
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn a_json_array_is_many_names() {
        assert_eq!(
            Ingredients::parse(r#"["cheese","tomato"]"#),
            Ingredients::Many(vec![String::from("cheese"), String::from("tomato")])
        );
    }

    #[test]
    fn a_bare_name_is_a_single_ingredient() {
        assert_eq!(
            Ingredients::parse("cheese"),
            Ingredients::Single(String::from("cheese"))
        );
    }

    #[test]
    fn malformed_json_falls_back_to_a_single_name() {
        assert_eq!(
            Ingredients::parse(r#"["cheese""#),
            Ingredients::Single(String::from(r#"["cheese""#))
        );
    }

    #[test]
    fn an_empty_json_array_stays_empty() {
        assert_eq!(Ingredients::parse("[]").into_names(), Vec::<String>::new());
    }

    #[test]
    fn into_names_flattens_both_variants() {
        assert_eq!(
            Ingredients::Single(String::from("basil")).into_names(),
            vec![String::from("basil")]
        );
        assert_eq!(
            Ingredients::Many(vec![String::from("basil"), String::from("garlic")]).into_names(),
            vec![String::from("basil"), String::from("garlic")]
        );
    }
}
