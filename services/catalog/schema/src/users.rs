use sea_orm::entity::prelude::*;

/// Registered user. `password` holds the hex-encoded salted hash.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub name: String,
    #[sea_orm(unique)]
    pub email: String,
    pub password: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::reviews::Entity")]
    Reviews,
    #[sea_orm(has_many = "super::films_rates::Entity")]
    FilmsRates,
}

impl Related<super::reviews::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Reviews.def()
    }
}

impl Related<super::films_rates::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FilmsRates.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
