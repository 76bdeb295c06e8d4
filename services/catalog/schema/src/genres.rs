use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "genres")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub genre: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::films_genres::Entity")]
    FilmsGenres,
}

impl Related<super::films_genres::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FilmsGenres.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
