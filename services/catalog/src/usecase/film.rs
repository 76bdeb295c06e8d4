use cinema_domain::cast::CastType;
use cinema_domain::pagination::{Page, PageRequest};

use crate::domain::repository::{
    FilmRepository, RatingRepository, ReviewRepository, WatchlistRepository,
};
use crate::domain::types::{Film, FilmDetail, FilmRanking, FilmViewerState, Viewer};
use crate::error::CatalogServiceError;

pub const TOP_FILMS_LIMIT: u64 = 100;
pub const POPULAR_FILMS_LIMIT: u64 = 40;
pub const POPULAR_AFTER_YEAR: i32 = 2018;
pub const HIGHEST_GROSSING_LIMIT: u64 = 100;

// ── GetRankedFilms ───────────────────────────────────────────────────────────

pub struct GetRankedFilmsUseCase<F: FilmRepository> {
    pub films: F,
}

impl<F: FilmRepository> GetRankedFilmsUseCase<F> {
    pub async fn top(&self) -> Result<Vec<Film>, CatalogServiceError> {
        self.films.ranked(FilmRanking::Top, TOP_FILMS_LIMIT).await
    }

    pub async fn popular(&self) -> Result<Vec<Film>, CatalogServiceError> {
        self.films
            .ranked(
                FilmRanking::Popular {
                    after_year: POPULAR_AFTER_YEAR,
                },
                POPULAR_FILMS_LIMIT,
            )
            .await
    }

    pub async fn highest_grossing(&self) -> Result<Vec<Film>, CatalogServiceError> {
        self.films
            .ranked(FilmRanking::HighestGrossing, HIGHEST_GROSSING_LIMIT)
            .await
    }
}

// ── GetFilmDetail ────────────────────────────────────────────────────────────

pub struct GetFilmDetailUseCase<F, V, R, W>
where
    F: FilmRepository,
    V: ReviewRepository,
    R: RatingRepository,
    W: WatchlistRepository,
{
    pub films: F,
    pub reviews: V,
    pub ratings: R,
    pub watchlists: W,
    pub reviews_per_page: u32,
}

impl<F, V, R, W> GetFilmDetailUseCase<F, V, R, W>
where
    F: FilmRepository,
    V: ReviewRepository,
    R: RatingRepository,
    W: WatchlistRepository,
{
    pub async fn execute(
        &self,
        film_id: i32,
        raw_page: Option<&str>,
        viewer: Option<&Viewer>,
    ) -> Result<FilmDetail, CatalogServiceError> {
        let film = self
            .films
            .find(film_id)
            .await?
            .ok_or(CatalogServiceError::FilmNotFound)?;
        let directors = self.films.cast(film_id, CastType::Director).await?;
        let actors = self.films.cast(film_id, CastType::Actor).await?;
        let genres = self.films.genres(film_id).await?;

        let total = self.reviews.count_for_film(film_id).await?;
        let window = PageRequest::new(self.reviews_per_page, raw_page).resolve(total);
        let items = self.reviews.list_for_film(film_id, window).await?;
        let reviews = Page::new(items, window, total);

        let viewer = match viewer {
            Some(viewer) => {
                let my_rate = self
                    .ratings
                    .find(viewer.id, film_id)
                    .await?
                    .map(|r| r.get())
                    .unwrap_or(0);
                let watchlists = self.watchlists.names(&viewer.name).await?;
                Some(FilmViewerState {
                    my_rate,
                    watchlists,
                })
            }
            None => None,
        };

        Ok(FilmDetail {
            film,
            directors,
            actors,
            genres,
            reviews,
            viewer,
        })
    }
}
