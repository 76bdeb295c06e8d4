use sea_orm::entity::prelude::*;

/// Named film list ("flow") owned by `username`. Names are unique per owner.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "watchlists")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub username: String,
    pub name: String,
    pub body: String,
    pub private: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::watchlists_films::Entity")]
    WatchlistsFilms,
}

impl Related<super::watchlists_films::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::WatchlistsFilms.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
