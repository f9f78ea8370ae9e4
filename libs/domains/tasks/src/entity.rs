use sea_orm::ActiveValue::{NotSet, Set};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::models::Task;

/// Sea-ORM Entity for the tasks table
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "tasks")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(column_type = "String(StringLen::N(255))")]
    pub title: String,
    pub completed: bool,
    pub parent_id: Option<i64>,
}

impl Model {
    /// OpenAPI tag for task endpoints
    pub const TAG: &'static str = "Tasks";
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "Entity",
        from = "Column::ParentId",
        to = "Column::Id",
        on_delete = "SetNull"
    )]
    Parent,
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Task {
    fn from(model: Model) -> Self {
        Self {
            id: Some(model.id),
            title: model.title,
            completed: model.completed,
            parent_id: model.parent_id,
        }
    }
}

/// Transient tasks leave `id` unset so the sequence assigns it
impl From<Task> for ActiveModel {
    fn from(task: Task) -> Self {
        ActiveModel {
            id: task.id.map_or(NotSet, Set),
            title: Set(task.title),
            completed: Set(task.completed),
            parent_id: Set(task.parent_id),
        }
    }
}
