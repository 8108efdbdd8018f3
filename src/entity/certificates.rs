//! 证书实体（certificados）

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "certificados")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(unique)]
    pub code: String,
    pub user_id: i64,
    pub exam_config_id: i64,
    pub exam_result_id: Option<i64>,
    pub belt: String,
    pub issued_by: Option<i64>,
    pub issued_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::UserId",
        to = "super::users::Column::Id"
    )]
    User,
    #[sea_orm(
        belongs_to = "super::exam_configs::Entity",
        from = "Column::ExamConfigId",
        to = "super::exam_configs::Column::Id"
    )]
    ExamConfig,
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::exam_configs::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ExamConfig.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_certificate(self) -> crate::models::certificates::entities::Certificate {
        use crate::models::Belt;
        use crate::models::certificates::entities::Certificate;

        Certificate {
            id: self.id,
            code: self.code,
            user_id: self.user_id,
            exam_config_id: self.exam_config_id,
            exam_result_id: self.exam_result_id,
            belt: self.belt.parse::<Belt>().unwrap_or(Belt::Branca),
            issued_by: self.issued_by,
            issued_at: super::from_timestamp(self.issued_at),
        }
    }
}
