use sea_orm::entity::prelude::*;

/// Job type a person can hold (director, actor, ...).
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "types")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(column_name = "type")]
    pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::persons_types::Entity")]
    PersonsTypes,
}

impl Related<super::persons_types::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PersonsTypes.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
