use sea_orm::entity::prelude::*;

/// A film in the catalog.
///
/// `rate` and `votes` are the imported baseline; ratings given by users of
/// this service live in `films_rates` and are folded in on read.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "films")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub title: String,
    pub year: i32,
    pub rate: f64,
    pub votes: i32,
    pub box_office: i64,
    /// Precomputed ranking score.
    pub value: f64,
    pub img: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::films_casts::Entity")]
    FilmsCasts,
    #[sea_orm(has_many = "super::films_genres::Entity")]
    FilmsGenres,
    #[sea_orm(has_many = "super::films_rates::Entity")]
    FilmsRates,
    #[sea_orm(has_many = "super::reviews::Entity")]
    Reviews,
}

impl Related<super::films_casts::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FilmsCasts.def()
    }
}

impl Related<super::films_genres::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FilmsGenres.def()
    }
}

impl Related<super::films_rates::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FilmsRates.def()
    }
}

impl Related<super::reviews::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Reviews.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
