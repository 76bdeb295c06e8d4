//! In-memory repositories for use case tests.

use std::sync::Mutex;

use chrono::{DateTime, Utc};

use cinema_domain::cast::CastType;
use cinema_domain::pagination::PageWindow;
use cinema_domain::rating::RatingValue;
use cinema_domain::search::SearchTerm;

use crate::domain::repository::{
    FilmRepository, FilmSetRepository, FollowRepository, PasswordHasher, PersonRepository,
    RatingRepository, ReviewRepository, SearchRepository, UserRepository, WatchlistRepository,
};
use crate::domain::types::{
    Film, FilmRanking, NewUser, NewWatchlist, Person, Review, User, UserReview, UserSummary,
    Viewer, Watchlist,
};
use crate::error::CatalogServiceError;

pub fn film(id: i32, title: &str, year: i32) -> Film {
    Film {
        id,
        title: title.to_owned(),
        year,
        rate: 0.0,
        votes: 0,
        box_office: 0,
        value: f64::from(id),
        img: None,
    }
}

pub fn person(id: i32, name: &str) -> Person {
    Person {
        id,
        name: name.to_owned(),
        img: None,
    }
}

pub fn viewer(id: i32, name: &str) -> Viewer {
    Viewer {
        id,
        name: name.to_owned(),
    }
}

fn page_of<T: Clone>(items: &[T], window: PageWindow) -> Vec<T> {
    items
        .iter()
        .skip(window.offset as usize)
        .take(window.limit as usize)
        .cloned()
        .collect()
}

fn starts_with_ignore_case(value: &str, term: &SearchTerm) -> bool {
    value
        .to_uppercase()
        .starts_with(&term.as_str().to_uppercase())
}

// ── Films ────────────────────────────────────────────────────────────────────

#[derive(Default)]
pub struct MockFilmRepo {
    pub films: Vec<Film>,
    pub cast: Vec<(i32, CastType, Person)>,
    pub genres: Vec<(i32, String)>,
}

impl MockFilmRepo {
    pub fn with_films(films: Vec<Film>) -> Self {
        Self {
            films,
            ..Default::default()
        }
    }
}

impl FilmRepository for MockFilmRepo {
    async fn ranked(
        &self,
        ranking: FilmRanking,
        limit: u64,
    ) -> Result<Vec<Film>, CatalogServiceError> {
        let mut films: Vec<Film> = match ranking {
            FilmRanking::Popular { after_year } => self
                .films
                .iter()
                .filter(|f| f.year > after_year)
                .cloned()
                .collect(),
            _ => self.films.clone(),
        };
        match ranking {
            FilmRanking::HighestGrossing => films.sort_by(|a, b| b.box_office.cmp(&a.box_office)),
            _ => films.sort_by(|a, b| b.value.total_cmp(&a.value)),
        }
        films.truncate(limit as usize);
        Ok(films)
    }

    async fn exists(&self, id: i32) -> Result<bool, CatalogServiceError> {
        Ok(self.films.iter().any(|f| f.id == id))
    }

    async fn find(&self, id: i32) -> Result<Option<Film>, CatalogServiceError> {
        Ok(self.films.iter().find(|f| f.id == id).cloned())
    }

    async fn cast(&self, film_id: i32, role: CastType) -> Result<Vec<Person>, CatalogServiceError> {
        Ok(self
            .cast
            .iter()
            .filter(|(f, r, _)| *f == film_id && *r == role)
            .map(|(_, _, p)| p.clone())
            .collect())
    }

    async fn genres(&self, film_id: i32) -> Result<Vec<String>, CatalogServiceError> {
        Ok(self
            .genres
            .iter()
            .filter(|(f, _)| *f == film_id)
            .map(|(_, g)| g.clone())
            .collect())
    }
}

// ── Persons ──────────────────────────────────────────────────────────────────

#[derive(Default)]
pub struct MockPersonRepo {
    pub persons: Vec<Person>,
    pub jobs: Vec<(i32, String)>,
    pub credits: Vec<(i32, CastType, Film)>,
}

impl PersonRepository for MockPersonRepo {
    async fn find(&self, id: i32) -> Result<Option<Person>, CatalogServiceError> {
        Ok(self.persons.iter().find(|p| p.id == id).cloned())
    }

    async fn job_types(&self, person_id: i32) -> Result<Vec<String>, CatalogServiceError> {
        Ok(self
            .jobs
            .iter()
            .filter(|(p, _)| *p == person_id)
            .map(|(_, j)| j.clone())
            .collect())
    }

    async fn films(&self, person_id: i32, role: CastType) -> Result<Vec<Film>, CatalogServiceError> {
        Ok(self
            .credits
            .iter()
            .filter(|(p, r, _)| *p == person_id && *r == role)
            .map(|(_, _, f)| f.clone())
            .collect())
    }
}

// ── Reviews ──────────────────────────────────────────────────────────────────

#[derive(Default)]
pub struct MockReviewRepo {
    /// Stored oldest first, returned newest first.
    pub reviews: Mutex<Vec<Review>>,
    pub user_reviews: Vec<UserReview>,
}

impl MockReviewRepo {
    pub fn with_reviews(reviews: Vec<Review>) -> Self {
        Self {
            reviews: Mutex::new(reviews),
            ..Default::default()
        }
    }

    fn for_film(&self, film_id: i32) -> Vec<Review> {
        let mut reviews: Vec<Review> = self
            .reviews
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.film_id == film_id)
            .cloned()
            .collect();
        reviews.reverse();
        reviews
    }
}

impl ReviewRepository for MockReviewRepo {
    async fn count_for_film(&self, film_id: i32) -> Result<u64, CatalogServiceError> {
        Ok(self.for_film(film_id).len() as u64)
    }

    async fn list_for_film(
        &self,
        film_id: i32,
        window: PageWindow,
    ) -> Result<Vec<Review>, CatalogServiceError> {
        Ok(page_of(&self.for_film(film_id), window))
    }

    async fn count_for_user(&self, _user_id: i32) -> Result<u64, CatalogServiceError> {
        Ok(self.user_reviews.len() as u64)
    }

    async fn list_for_user(
        &self,
        _user_id: i32,
        window: PageWindow,
    ) -> Result<Vec<UserReview>, CatalogServiceError> {
        Ok(page_of(&self.user_reviews, window))
    }

    async fn create(
        &self,
        user_id: i32,
        film_id: i32,
        body: &str,
        date: DateTime<Utc>,
    ) -> Result<(), CatalogServiceError> {
        let mut reviews = self.reviews.lock().unwrap();
        let id = reviews.len() as i32 + 1;
        reviews.push(Review {
            id,
            user_id,
            user_name: String::new(),
            film_id,
            body: body.to_owned(),
            date,
        });
        Ok(())
    }
}

// ── Ratings ──────────────────────────────────────────────────────────────────

#[derive(Default)]
pub struct MockRatingRepo {
    pub rates: Mutex<Vec<(i32, i32, RatingValue)>>,
}

impl RatingRepository for MockRatingRepo {
    async fn find(
        &self,
        user_id: i32,
        film_id: i32,
    ) -> Result<Option<RatingValue>, CatalogServiceError> {
        Ok(self
            .rates
            .lock()
            .unwrap()
            .iter()
            .find(|(u, f, _)| *u == user_id && *f == film_id)
            .map(|(_, _, v)| *v))
    }

    async fn insert_if_absent(
        &self,
        user_id: i32,
        film_id: i32,
        value: RatingValue,
    ) -> Result<bool, CatalogServiceError> {
        let mut rates = self.rates.lock().unwrap();
        if rates.iter().any(|(u, f, _)| *u == user_id && *f == film_id) {
            return Ok(false);
        }
        rates.push((user_id, film_id, value));
        Ok(true)
    }

    async fn delete(&self, user_id: i32, film_id: i32) -> Result<bool, CatalogServiceError> {
        let mut rates = self.rates.lock().unwrap();
        let before = rates.len();
        rates.retain(|(u, f, _)| !(*u == user_id && *f == film_id));
        Ok(rates.len() < before)
    }
}

// ── Users ────────────────────────────────────────────────────────────────────

#[derive(Default)]
pub struct MockUserRepo {
    pub users: Mutex<Vec<User>>,
}

impl MockUserRepo {
    pub fn with_names(names: &[&str]) -> Self {
        let users = names
            .iter()
            .enumerate()
            .map(|(i, name)| User {
                id: i as i32 + 1,
                name: (*name).to_owned(),
                email: format!("{name}@example.com"),
                password_hash: String::new(),
            })
            .collect();
        Self {
            users: Mutex::new(users),
        }
    }
}

impl UserRepository for MockUserRepo {
    async fn find_by_name(&self, name: &str) -> Result<Option<User>, CatalogServiceError> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.name == name)
            .cloned())
    }

    async fn email_exists(&self, email: &str) -> Result<bool, CatalogServiceError> {
        Ok(self.users.lock().unwrap().iter().any(|u| u.email == email))
    }

    async fn create(&self, user: &NewUser) -> Result<i32, CatalogServiceError> {
        let mut users = self.users.lock().unwrap();
        if users
            .iter()
            .any(|u| u.name == user.name || u.email == user.email)
        {
            return Err(CatalogServiceError::UserAlreadyExists);
        }
        let id = users.len() as i32 + 1;
        users.push(User {
            id,
            name: user.name.clone(),
            email: user.email.clone(),
            password_hash: user.password_hash.clone(),
        });
        Ok(id)
    }
}

// ── Follow graph ─────────────────────────────────────────────────────────────

pub struct MockFollowRepo {
    pub edges: Mutex<Vec<(i32, i32)>>,
    pub names: Vec<(i32, String)>,
}

impl MockFollowRepo {
    pub fn new(names: &[&str]) -> Self {
        Self {
            edges: Mutex::new(vec![]),
            names: names
                .iter()
                .enumerate()
                .map(|(i, n)| (i as i32 + 1, (*n).to_owned()))
                .collect(),
        }
    }

    fn name_of(&self, id: i32) -> Option<String> {
        self.names.iter().find(|(i, _)| *i == id).map(|(_, n)| n.clone())
    }
}

impl FollowRepository for MockFollowRepo {
    async fn follow(&self, follower_id: i32, followed_id: i32) -> Result<bool, CatalogServiceError> {
        let mut edges = self.edges.lock().unwrap();
        if edges.contains(&(follower_id, followed_id)) {
            return Ok(false);
        }
        edges.push((follower_id, followed_id));
        Ok(true)
    }

    async fn unfollow(
        &self,
        follower_id: i32,
        followed_id: i32,
    ) -> Result<bool, CatalogServiceError> {
        let mut edges = self.edges.lock().unwrap();
        let before = edges.len();
        edges.retain(|e| *e != (follower_id, followed_id));
        Ok(edges.len() < before)
    }

    async fn is_following(
        &self,
        follower_id: i32,
        followed_id: i32,
    ) -> Result<bool, CatalogServiceError> {
        Ok(self
            .edges
            .lock()
            .unwrap()
            .contains(&(follower_id, followed_id)))
    }

    async fn followers(&self, user_id: i32) -> Result<Vec<String>, CatalogServiceError> {
        let edges = self.edges.lock().unwrap().clone();
        Ok(edges
            .into_iter()
            .filter(|(_, followed)| *followed == user_id)
            .filter_map(|(follower, _)| self.name_of(follower))
            .collect())
    }

    async fn followings(&self, user_id: i32) -> Result<Vec<String>, CatalogServiceError> {
        let edges = self.edges.lock().unwrap().clone();
        Ok(edges
            .into_iter()
            .filter(|(follower, _)| *follower == user_id)
            .filter_map(|(_, followed)| self.name_of(followed))
            .collect())
    }
}

// ── Watchlists ───────────────────────────────────────────────────────────────

#[derive(Default)]
pub struct MockWatchlistRepo {
    pub lists: Mutex<Vec<Watchlist>>,
    pub links: Mutex<Vec<(i32, i32)>>,
    pub films: Vec<Film>,
}

impl MockWatchlistRepo {
    pub fn with_films(films: Vec<Film>) -> Self {
        Self {
            films,
            ..Default::default()
        }
    }

    pub fn list_names(&self) -> Vec<(String, String)> {
        self.lists
            .lock()
            .unwrap()
            .iter()
            .map(|l| (l.username.clone(), l.name.clone()))
            .collect()
    }
}

impl WatchlistRepository for MockWatchlistRepo {
    async fn list(
        &self,
        username: &str,
        include_private: bool,
    ) -> Result<Vec<Watchlist>, CatalogServiceError> {
        let mut lists: Vec<Watchlist> = self
            .lists
            .lock()
            .unwrap()
            .iter()
            .filter(|l| l.username == username && (include_private || !l.private))
            .cloned()
            .collect();
        lists.reverse();
        Ok(lists)
    }

    async fn names(&self, username: &str) -> Result<Vec<String>, CatalogServiceError> {
        Ok(self
            .list(username, true)
            .await?
            .into_iter()
            .map(|l| l.name)
            .collect())
    }

    async fn find(
        &self,
        username: &str,
        name: &str,
    ) -> Result<Option<Watchlist>, CatalogServiceError> {
        Ok(self
            .lists
            .lock()
            .unwrap()
            .iter()
            .find(|l| l.username == username && l.name == name)
            .cloned())
    }

    async fn create(&self, list: &NewWatchlist) -> Result<Option<Watchlist>, CatalogServiceError> {
        let mut lists = self.lists.lock().unwrap();
        if lists
            .iter()
            .any(|l| l.username == list.username && l.name == list.name.as_str())
        {
            return Ok(None);
        }
        let created = Watchlist {
            id: lists.len() as i32 + 1,
            username: list.username.clone(),
            name: list.name.as_str().to_owned(),
            body: list.body.clone(),
            private: false,
        };
        lists.push(created.clone());
        Ok(Some(created))
    }

    async fn films(&self, watchlist_id: i32) -> Result<Vec<Film>, CatalogServiceError> {
        let links = self.links.lock().unwrap().clone();
        Ok(links
            .into_iter()
            .filter(|(w, _)| *w == watchlist_id)
            .filter_map(|(_, f)| self.films.iter().find(|film| film.id == f).cloned())
            .collect())
    }

    async fn add_film(&self, watchlist_id: i32, film_id: i32) -> Result<bool, CatalogServiceError> {
        let mut links = self.links.lock().unwrap();
        if links.contains(&(watchlist_id, film_id)) {
            return Ok(false);
        }
        links.push((watchlist_id, film_id));
        Ok(true)
    }

    async fn remove_film(
        &self,
        watchlist_id: i32,
        film_id: i32,
    ) -> Result<bool, CatalogServiceError> {
        let mut links = self.links.lock().unwrap();
        let before = links.len();
        links.retain(|l| *l != (watchlist_id, film_id));
        Ok(links.len() < before)
    }

    async fn set_private(
        &self,
        watchlist_id: i32,
        private: bool,
    ) -> Result<(), CatalogServiceError> {
        if let Some(list) = self
            .lists
            .lock()
            .unwrap()
            .iter_mut()
            .find(|l| l.id == watchlist_id)
        {
            list.private = private;
        }
        Ok(())
    }

    async fn update(
        &self,
        watchlist_id: i32,
        name: &str,
        body: &str,
    ) -> Result<(), CatalogServiceError> {
        let mut lists = self.lists.lock().unwrap();
        let Some(owner) = lists
            .iter()
            .find(|l| l.id == watchlist_id)
            .map(|l| l.username.clone())
        else {
            return Ok(());
        };
        if lists
            .iter()
            .any(|l| l.id != watchlist_id && l.username == owner && l.name == name)
        {
            return Err(CatalogServiceError::WatchlistAlreadyExists);
        }
        if let Some(list) = lists.iter_mut().find(|l| l.id == watchlist_id) {
            list.name = name.to_owned();
            list.body = body.to_owned();
        }
        Ok(())
    }

    async fn delete(&self, watchlist_id: i32) -> Result<(), CatalogServiceError> {
        self.links
            .lock()
            .unwrap()
            .retain(|(w, _)| *w != watchlist_id);
        self.lists.lock().unwrap().retain(|l| l.id != watchlist_id);
        Ok(())
    }
}

// ── Film sets ────────────────────────────────────────────────────────────────

#[derive(Default)]
pub struct MockFilmSetRepo {
    pub links: Mutex<Vec<(i32, i32)>>,
    pub films: Vec<Film>,
}

impl FilmSetRepository for MockFilmSetRepo {
    async fn list(&self, user_id: i32) -> Result<Vec<Film>, CatalogServiceError> {
        let links = self.links.lock().unwrap().clone();
        Ok(links
            .into_iter()
            .rev()
            .filter(|(u, _)| *u == user_id)
            .filter_map(|(_, f)| self.films.iter().find(|film| film.id == f).cloned())
            .collect())
    }

    async fn add(&self, user_id: i32, film_id: i32) -> Result<bool, CatalogServiceError> {
        let mut links = self.links.lock().unwrap();
        if links.contains(&(user_id, film_id)) {
            return Ok(false);
        }
        links.push((user_id, film_id));
        Ok(true)
    }

    async fn remove(&self, user_id: i32, film_id: i32) -> Result<bool, CatalogServiceError> {
        let mut links = self.links.lock().unwrap();
        let before = links.len();
        links.retain(|l| *l != (user_id, film_id));
        Ok(links.len() < before)
    }

    async fn contains(&self, user_id: i32, film_id: i32) -> Result<bool, CatalogServiceError> {
        Ok(self.links.lock().unwrap().contains(&(user_id, film_id)))
    }
}

// ── Search ───────────────────────────────────────────────────────────────────

#[derive(Default)]
pub struct MockSearchRepo {
    pub films: Vec<Film>,
    pub persons: Vec<(Person, Vec<CastType>)>,
    pub users: Vec<UserSummary>,
    pub genres: Vec<(i32, String)>,
    pub film_genres: Vec<(i32, i32)>,
}

impl MockSearchRepo {
    fn matching_films(&self, term: &SearchTerm) -> Vec<Film> {
        let mut films: Vec<Film> = self
            .films
            .iter()
            .filter(|f| starts_with_ignore_case(&f.title, term))
            .cloned()
            .collect();
        films.sort_by(|a, b| b.year.cmp(&a.year).then(b.value.total_cmp(&a.value)));
        films
    }

    fn matching_persons(&self, term: &SearchTerm, roles: &[CastType]) -> Vec<Person> {
        let mut persons: Vec<Person> = self
            .persons
            .iter()
            .filter(|(p, held)| {
                starts_with_ignore_case(&p.name, term) && held.iter().any(|r| roles.contains(r))
            })
            .map(|(p, _)| p.clone())
            .collect();
        persons.sort_by(|a, b| a.name.cmp(&b.name));
        persons
    }

    fn films_with_all(&self, genre_ids: &[i32]) -> Vec<Film> {
        if genre_ids.is_empty() {
            return vec![];
        }
        let mut films: Vec<Film> = self
            .films
            .iter()
            .filter(|f| {
                genre_ids
                    .iter()
                    .all(|g| self.film_genres.contains(&(f.id, *g)))
            })
            .cloned()
            .collect();
        films.sort_by(|a, b| b.year.cmp(&a.year).then(b.value.total_cmp(&a.value)));
        films
    }
}

impl SearchRepository for MockSearchRepo {
    async fn count_films(&self, term: &SearchTerm) -> Result<u64, CatalogServiceError> {
        Ok(self.matching_films(term).len() as u64)
    }

    async fn films(
        &self,
        term: &SearchTerm,
        window: PageWindow,
    ) -> Result<Vec<Film>, CatalogServiceError> {
        Ok(page_of(&self.matching_films(term), window))
    }

    async fn count_persons(
        &self,
        term: &SearchTerm,
        roles: &[CastType],
    ) -> Result<u64, CatalogServiceError> {
        Ok(self.matching_persons(term, roles).len() as u64)
    }

    async fn persons(
        &self,
        term: &SearchTerm,
        roles: &[CastType],
        window: PageWindow,
    ) -> Result<Vec<Person>, CatalogServiceError> {
        Ok(page_of(&self.matching_persons(term, roles), window))
    }

    async fn users(
        &self,
        term: &SearchTerm,
        limit: u64,
    ) -> Result<Vec<UserSummary>, CatalogServiceError> {
        let mut users: Vec<UserSummary> = self
            .users
            .iter()
            .filter(|u| starts_with_ignore_case(&u.name, term))
            .cloned()
            .collect();
        users.sort_by(|a, b| b.followers.cmp(&a.followers).then(a.name.cmp(&b.name)));
        users.truncate(limit as usize);
        Ok(users)
    }

    async fn genre_ids(&self, names: &[String]) -> Result<Vec<i32>, CatalogServiceError> {
        let mut ids: Vec<i32> = self
            .genres
            .iter()
            .filter(|(_, g)| names.iter().any(|n| n.eq_ignore_ascii_case(g)))
            .map(|(id, _)| *id)
            .collect();
        ids.sort_unstable();
        ids.dedup();
        Ok(ids)
    }

    async fn count_films_with_genres(&self, genre_ids: &[i32]) -> Result<u64, CatalogServiceError> {
        Ok(self.films_with_all(genre_ids).len() as u64)
    }

    async fn films_with_genres(
        &self,
        genre_ids: &[i32],
        window: PageWindow,
    ) -> Result<Vec<Film>, CatalogServiceError> {
        Ok(page_of(&self.films_with_all(genre_ids), window))
    }
}

// ── Password hashing ─────────────────────────────────────────────────────────

pub struct MockHasher;

impl PasswordHasher for MockHasher {
    fn hash(&self, password: &str) -> String {
        format!("hashed:{password}")
    }
}
