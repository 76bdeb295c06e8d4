use sea_orm::entity::prelude::*;

/// An actor, director or other crew member.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "persons")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub img: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::films_casts::Entity")]
    FilmsCasts,
    #[sea_orm(has_many = "super::persons_types::Entity")]
    PersonsTypes,
}

impl Related<super::films_casts::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FilmsCasts.def()
    }
}

impl Related<super::persons_types::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PersonsTypes.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
