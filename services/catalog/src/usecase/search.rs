use cinema_domain::cast::CastType;
use cinema_domain::pagination::{Page, PageRequest};
use cinema_domain::search::SearchTerm;

use crate::domain::repository::SearchRepository;
use crate::domain::types::{Film, SearchKind, SearchResult};
use crate::error::CatalogServiceError;

// ── Search ───────────────────────────────────────────────────────────────────

pub struct SearchInput<'a> {
    pub query: &'a str,
    pub kind: SearchKind,
    pub page: Option<&'a str>,
    /// Only consulted for person searches.
    pub roles: &'a [CastType],
}

pub struct SearchUseCase<S: SearchRepository> {
    pub repo: S,
    pub items_per_page: u32,
    pub users_limit: u64,
}

impl<S: SearchRepository> SearchUseCase<S> {
    pub async fn execute(&self, input: SearchInput<'_>) -> Result<SearchResult, CatalogServiceError> {
        let Some(term) = SearchTerm::parse(input.query) else {
            return Ok(empty_result(input.kind));
        };
        let request = PageRequest::new(self.items_per_page, input.page);

        match input.kind {
            SearchKind::Film => {
                let total = self.repo.count_films(&term).await?;
                let window = request.resolve(total);
                let items = self.repo.films(&term, window).await?;
                Ok(SearchResult::Films(Page::new(items, window, total)))
            }
            SearchKind::Person => {
                if input.roles.is_empty() {
                    return Ok(SearchResult::Persons(Page::empty()));
                }
                let total = self.repo.count_persons(&term, input.roles).await?;
                let window = request.resolve(total);
                let items = self.repo.persons(&term, input.roles, window).await?;
                Ok(SearchResult::Persons(Page::new(items, window, total)))
            }
            SearchKind::User => {
                let users = self.repo.users(&term, self.users_limit).await?;
                Ok(SearchResult::Users(users))
            }
        }
    }
}

fn empty_result(kind: SearchKind) -> SearchResult {
    match kind {
        SearchKind::Film => SearchResult::Films(Page::empty()),
        SearchKind::Person => SearchResult::Persons(Page::empty()),
        SearchKind::User => SearchResult::Users(Vec::new()),
    }
}

// ── GenreFilter ──────────────────────────────────────────────────────────────

pub struct GenreFilterUseCase<S: SearchRepository> {
    pub repo: S,
    pub items_per_page: u32,
}

impl<S: SearchRepository> GenreFilterUseCase<S> {
    /// Films carrying every requested genre. Names that match no genre are
    /// ignored; when none match the result is an empty page.
    pub async fn execute(
        &self,
        genres: &[String],
        raw_page: Option<&str>,
    ) -> Result<Page<Film>, CatalogServiceError> {
        let names: Vec<String> = genres
            .iter()
            .map(|g| g.trim().to_owned())
            .filter(|g| !g.is_empty())
            .collect();
        if names.is_empty() {
            return Ok(Page::empty());
        }
        let genre_ids = self.repo.genre_ids(&names).await?;
        if genre_ids.is_empty() {
            return Ok(Page::empty());
        }

        let total = self.repo.count_films_with_genres(&genre_ids).await?;
        let window = PageRequest::new(self.items_per_page, raw_page).resolve(total);
        let items = self.repo.films_with_genres(&genre_ids, window).await?;
        Ok(Page::new(items, window, total))
    }
}
