use sea_orm::{entity::prelude::*, DatabaseConnection, QueryOrder, Set, TransactionTrait};
use serde::{Deserialize, Serialize};

use crate::errors;

/// Upper bound shared by the three text columns.
pub const MAX_FIELD_LEN: usize = 100;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "student")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    #[sea_orm(unique)]
    pub email: String,
    pub course: String,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef { panic!("no relations defined here") }
}

impl ActiveModelBehavior for ActiveModel {}

fn validate_text(field: &str, value: &str) -> Result<(), errors::ModelError> {
    if value.trim().is_empty() {
        return Err(errors::ModelError::Validation(format!("{field} required")));
    }
    if value.chars().count() > MAX_FIELD_LEN {
        return Err(errors::ModelError::Validation(format!("{field} longer than {MAX_FIELD_LEN} characters")));
    }
    Ok(())
}

pub fn validate_name(name: &str) -> Result<(), errors::ModelError> { validate_text("name", name) }

pub fn validate_email(email: &str) -> Result<(), errors::ModelError> { validate_text("email", email) }

pub fn validate_course(course: &str) -> Result<(), errors::ModelError> { validate_text("course", course) }

/// All rows, oldest first.
pub async fn find_all(db: &DatabaseConnection) -> Result<Vec<Model>, errors::ModelError> {
    Ok(Entity::find().order_by_asc(Column::Id).all(db).await?)
}

pub async fn find_by_id(db: &DatabaseConnection, id: i32) -> Result<Option<Model>, errors::ModelError> {
    Ok(Entity::find_by_id(id).one(db).await?)
}

/// Insert a row; the id comes from the table's auto-increment.
///
/// A duplicate email surfaces as `ModelError::Conflict` and the transaction is
/// rolled back on drop.
pub async fn create(db: &DatabaseConnection, name: &str, email: &str, course: &str) -> Result<Model, errors::ModelError> {
    validate_name(name)?;
    validate_email(email)?;
    validate_course(course)?;
    let txn = db.begin().await?;
    let am = ActiveModel {
        name: Set(name.to_string()),
        email: Set(email.to_string()),
        course: Set(course.to_string()),
        ..Default::default()
    };
    let created = am.insert(&txn).await?;
    txn.commit().await?;
    Ok(created)
}

/// Overwrite only the supplied columns. `Ok(None)` when the row does not exist.
pub async fn update_fields(
    db: &DatabaseConnection,
    id: i32,
    name: Option<&str>,
    email: Option<&str>,
    course: Option<&str>,
) -> Result<Option<Model>, errors::ModelError> {
    if let Some(n) = name { validate_name(n)?; }
    if let Some(e) = email { validate_email(e)?; }
    if let Some(c) = course { validate_course(c)?; }

    let txn = db.begin().await?;
    let Some(existing) = Entity::find_by_id(id).one(&txn).await? else {
        return Ok(None);
    };
    if name.is_none() && email.is_none() && course.is_none() {
        return Ok(Some(existing));
    }
    let mut am: ActiveModel = existing.into();
    if let Some(n) = name { am.name = Set(n.to_string()); }
    if let Some(e) = email { am.email = Set(e.to_string()); }
    if let Some(c) = course { am.course = Set(c.to_string()); }
    let updated = am.update(&txn).await?;
    txn.commit().await?;
    Ok(Some(updated))
}

/// Hard delete; returns whether a row was removed.
pub async fn delete(db: &DatabaseConnection, id: i32) -> Result<bool, errors::ModelError> {
    let res = Entity::delete_by_id(id).exec(db).await?;
    Ok(res.rows_affected > 0)
}
