use sea_orm::{entity::prelude::*, ActiveModelTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryOrder, Set};
use uuid::Uuid;
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::errors::{FieldErrors, ModelError};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "jersey")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub team: String,
    pub country: String,
    pub price: f64,
    pub image_url: String,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Fields exactly as submitted through the admin form.
///
/// Everything is kept as text so a rejected submission can be shown back to
/// the user untouched; absent fields deserialize as empty strings.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct JerseyInput {
    pub team: String,
    pub country: String,
    pub price: String,
    pub image_url: String,
}

/// Input that passed validation: trimmed text and a parsed, non-negative price.
#[derive(Clone, Debug, PartialEq)]
pub struct JerseyFields {
    pub team: String,
    pub country: String,
    pub price: f64,
    pub image_url: String,
}

impl JerseyInput {
    pub fn new(team: &str, country: &str, price: &str, image_url: &str) -> Self {
        Self {
            team: team.to_string(),
            country: country.to_string(),
            price: price.to_string(),
            image_url: image_url.to_string(),
        }
    }

    /// Check every field and report all failures at once.
    pub fn validate(&self) -> Result<JerseyFields, ModelError> {
        let mut errors = FieldErrors::default();

        let team = required(&self.team, "team", "Team name is required", &mut errors);
        let country = required(&self.country, "country", "Country name is required", &mut errors);
        let price = parse_price(&self.price, &mut errors);
        let image_url = required(&self.image_url, "imageUrl", "Image URL is required", &mut errors);

        if !errors.is_empty() {
            return Err(ModelError::Validation(errors));
        }
        Ok(JerseyFields { team, country, price: price.unwrap_or_default(), image_url })
    }
}

impl From<&Model> for JerseyInput {
    fn from(m: &Model) -> Self {
        Self {
            team: m.team.clone(),
            country: m.country.clone(),
            price: m.price.to_string(),
            image_url: m.image_url.clone(),
        }
    }
}

fn required(value: &str, field: &'static str, message: &str, errors: &mut FieldErrors) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        errors.push(field, message);
    }
    trimmed.to_string()
}

fn parse_price(raw: &str, errors: &mut FieldErrors) -> Option<f64> {
    let raw = raw.trim();
    if raw.is_empty() {
        errors.push("price", "Price is required");
        return None;
    }
    match raw.parse::<f64>() {
        Ok(p) if !p.is_finite() => {
            errors.push("price", "Price must be a number");
            None
        }
        Ok(p) if p < 0.0 => {
            errors.push("price", "Price cannot be negative");
            None
        }
        Ok(p) => Some(p),
        Err(_) => {
            errors.push("price", "Price must be a number");
            None
        }
    }
}

/// Malformed identifiers are indistinguishable from unknown ones.
pub fn parse_id(id: &str) -> Result<Uuid, ModelError> {
    Uuid::parse_str(id.trim()).map_err(|_| not_found(id))
}

pub(crate) fn not_found(id: impl std::fmt::Display) -> ModelError {
    ModelError::NotFound(format!("jersey {id}"))
}

/// Next `updated_at` for a record last touched at `previous`; never moves backwards.
pub fn touch(previous: DateTimeWithTimeZone) -> DateTimeWithTimeZone {
    let now: DateTimeWithTimeZone = Utc::now().into();
    now.max(previous)
}

pub async fn create(db: &DatabaseConnection, input: &JerseyInput) -> Result<Model, ModelError> {
    let fields = input.validate()?;
    let now: DateTimeWithTimeZone = Utc::now().into();
    let am = ActiveModel {
        id: Set(Uuid::new_v4()),
        team: Set(fields.team),
        country: Set(fields.country),
        price: Set(fields.price),
        image_url: Set(fields.image_url),
        created_at: Set(now),
        updated_at: Set(now),
    };
    am.insert(db).await.map_err(|e| ModelError::Db(e.to_string()))
}

pub async fn find_by_id(db: &DatabaseConnection, id: &str) -> Result<Model, ModelError> {
    let id = parse_id(id)?;
    Entity::find_by_id(id)
        .one(db)
        .await
        .map_err(|e| ModelError::Db(e.to_string()))?
        .ok_or_else(|| not_found(id))
}

pub async fn list_newest_first(db: &DatabaseConnection) -> Result<Vec<Model>, ModelError> {
    Entity::find()
        .order_by_desc(Column::CreatedAt)
        .all(db)
        .await
        .map_err(|e| ModelError::Db(e.to_string()))
}

/// Replace every mutable field. An unknown id wins over invalid fields.
pub async fn update(db: &DatabaseConnection, id: &str, input: &JerseyInput) -> Result<Model, ModelError> {
    let existing = find_by_id(db, id).await?;
    let fields = input.validate()?;
    let updated_at = touch(existing.updated_at);

    let mut am: ActiveModel = existing.into();
    am.team = Set(fields.team);
    am.country = Set(fields.country);
    am.price = Set(fields.price);
    am.image_url = Set(fields.image_url);
    am.updated_at = Set(updated_at);
    am.update(db).await.map_err(|e| ModelError::Db(e.to_string()))
}

pub async fn delete(db: &DatabaseConnection, id: &str) -> Result<Model, ModelError> {
    let existing = find_by_id(db, id).await?;
    let res = Entity::delete_by_id(existing.id).exec(db).await?;
    if res.rows_affected == 0 {
        // removed by a concurrent request between the lookup and the delete
        return Err(not_found(existing.id));
    }
    Ok(existing)
}

pub async fn count(db: &DatabaseConnection) -> Result<u64, ModelError> {
    Ok(Entity::find().count(db).await?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn eagles() -> JerseyInput {
        JerseyInput::new("Super Eagles", "Nigeria", "59.99", "https://x/y.jpg")
    }

    #[test]
    fn valid_input_is_trimmed_and_parsed() {
        let input = JerseyInput::new("  Black Stars ", "\tGhana", " 45.5 ", " /img/ghana.jpg ");
        let fields = input.validate().unwrap();
        assert_eq!(fields.team, "Black Stars");
        assert_eq!(fields.country, "Ghana");
        assert_eq!(fields.price, 45.5);
        assert_eq!(fields.image_url, "/img/ghana.jpg");
    }

    #[test]
    fn zero_price_is_allowed() {
        let mut input = eagles();
        input.price = "0".into();
        assert_eq!(input.validate().unwrap().price, 0.0);
    }

    #[test]
    fn all_missing_fields_are_reported_together() {
        let err = JerseyInput::default().validate().unwrap_err();
        let ModelError::Validation(errors) = err else { panic!("expected validation error") };
        assert_eq!(errors.len(), 4);
        assert_eq!(errors.get("team"), Some("Team name is required"));
        assert_eq!(errors.get("country"), Some("Country name is required"));
        assert_eq!(errors.get("price"), Some("Price is required"));
        assert_eq!(errors.get("imageUrl"), Some("Image URL is required"));
    }

    #[test]
    fn whitespace_only_counts_as_missing() {
        let mut input = eagles();
        input.team = "   ".into();
        let ModelError::Validation(errors) = input.validate().unwrap_err() else { panic!() };
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get("team"), Some("Team name is required"));
    }

    #[test]
    fn negative_price_is_rejected() {
        let mut input = eagles();
        input.price = "-0.01".into();
        let ModelError::Validation(errors) = input.validate().unwrap_err() else { panic!() };
        assert_eq!(errors.get("price"), Some("Price cannot be negative"));
    }

    #[test]
    fn non_numeric_price_is_rejected() {
        for raw in ["abc", "NaN", "inf", "12,50"] {
            let mut input = eagles();
            input.price = raw.into();
            let ModelError::Validation(errors) = input.validate().unwrap_err() else { panic!() };
            assert_eq!(errors.get("price"), Some("Price must be a number"), "price {raw:?}");
        }
    }

    #[test]
    fn malformed_id_is_not_found() {
        assert!(matches!(parse_id("not-a-uuid"), Err(ModelError::NotFound(_))));
        assert!(matches!(parse_id(""), Err(ModelError::NotFound(_))));
    }

    #[test]
    fn touch_never_moves_backwards() {
        let future: DateTimeWithTimeZone = (Utc::now() + chrono::Duration::hours(1)).into();
        assert_eq!(touch(future), future);
        let past: DateTimeWithTimeZone = (Utc::now() - chrono::Duration::hours(1)).into();
        assert!(touch(past) > past);
    }

    #[test]
    fn form_names_are_camel_case() {
        let input: JerseyInput = serde_json::from_value(serde_json::json!({
            "team": "Indomitable Lions",
            "imageUrl": "/img/cmr.jpg"
        }))
        .unwrap();
        assert_eq!(input.image_url, "/img/cmr.jpg");
        assert_eq!(input.country, "");
    }
}
