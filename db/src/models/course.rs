use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use sea_orm::{ConnectionTrait, FromQueryResult, QueryOrder, QuerySelect};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Deserialize, Serialize)]
#[sea_orm(table_name = "courses")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,

    /// Owner. Assigned from the authenticated caller, never from a request body.
    pub user_id: i64,

    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub estimated_time: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub materials_needed: Option<String>,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id",
        on_delete = "Cascade"
    )]
    User,

    #[sea_orm(has_many = "super::step::Entity")]
    Step,

    #[sea_orm(has_many = "super::review::Entity")]
    Review,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::step::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Step.def()
    }
}

impl Related<super::review::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Review.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// `id` + `title` projection used by the course listing.
#[derive(Clone, Debug, PartialEq, FromQueryResult)]
pub struct CourseSummary {
    pub id: i64,
    pub title: String,
}

impl Model {
    /// All courses as `(id, title)` pairs, oldest first.
    pub async fn summaries(db: &DbConn) -> Result<Vec<CourseSummary>, DbErr> {
        Entity::find()
            .select_only()
            .column(Column::Id)
            .column(Column::Title)
            .order_by_asc(Column::Id)
            .into_model::<CourseSummary>()
            .all(db)
            .await
    }

    /// Steps in their stored order.
    pub async fn steps<C>(&self, db: &C) -> Result<Vec<super::step::Model>, DbErr>
    where
        C: ConnectionTrait,
    {
        self.find_related(super::step::Entity)
            .order_by_asc(super::step::Column::Position)
            .all(db)
            .await
    }

    /// Reviews in the order they were posted.
    pub async fn reviews<C>(&self, db: &C) -> Result<Vec<super::review::Model>, DbErr>
    where
        C: ConnectionTrait,
    {
        self.find_related(super::review::Entity)
            .order_by_asc(super::review::Column::Id)
            .all(db)
            .await
    }
}
