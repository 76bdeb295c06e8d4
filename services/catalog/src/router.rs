use axum::{
    Router,
    routing::{get, post, put},
};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use cinema_core::health::healthz;
use cinema_core::middleware::{propagate_request_id_layer, request_id_layer};

use crate::handlers::{
    film::{
        create_review, delete_rating, get_film, get_highest_grossing_films, get_my_rating,
        get_popular_films, get_top_films, rate_film,
    },
    film_set::{
        add_favorite, add_watch_later, get_favorite_film, get_favorites, get_watch_later,
        get_watch_later_film, remove_favorite, remove_watch_later,
    },
    person::get_person,
    readyz,
    search::{filter_by_genres, search},
    user::{follow, get_following, get_profile, get_user, login, register, unfollow},
    watchlist::{
        add_watchlist_film, create_watchlist, delete_watchlist, get_own_watchlist,
        get_own_watchlists, get_watchlist, get_watchlists, make_private, make_public,
        remove_watchlist_film, update_watchlist,
    },
};
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        // Films
        .route("/films/top", get(get_top_films))
        .route("/films/popular", get(get_popular_films))
        .route("/films/highest-grossing", get(get_highest_grossing_films))
        .route("/films/{id}", get(get_film))
        .route("/films/{id}/reviews", post(create_review))
        .route("/films/{id}/rating", get(get_my_rating).delete(delete_rating))
        .route("/films/{id}/rating/{value}", put(rate_film))
        // Persons
        .route("/persons/{id}", get(get_person))
        // Search
        .route("/search", get(search))
        .route("/genres", get(filter_by_genres))
        // Users
        .route("/users", post(register))
        .route("/login", post(login))
        .route("/users/{name}", get(get_user))
        .route("/users/{name}/profile", get(get_profile))
        .route(
            "/users/{name}/follow",
            get(get_following).put(follow).delete(unfollow),
        )
        // Watchlists
        .route("/users/{name}/flows", get(get_watchlists))
        .route("/users/{name}/flows/{list}", get(get_watchlist))
        .route(
            "/users/@me/flows",
            get(get_own_watchlists).post(create_watchlist),
        )
        .route(
            "/users/@me/flows/{list}",
            get(get_own_watchlist)
                .patch(update_watchlist)
                .delete(delete_watchlist),
        )
        .route("/users/@me/flows/{list}/private", put(make_private))
        .route("/users/@me/flows/{list}/public", put(make_public))
        .route(
            "/users/@me/flows/{list}/films/{film_id}",
            put(add_watchlist_film).delete(remove_watchlist_film),
        )
        // Watch later / favorites
        .route("/users/@me/watchlater", get(get_watch_later))
        .route(
            "/users/@me/watchlater/{film_id}",
            get(get_watch_later_film)
                .put(add_watch_later)
                .delete(remove_watch_later),
        )
        .route("/users/@me/favorites", get(get_favorites))
        .route(
            "/users/@me/favorites/{film_id}",
            get(get_favorite_film)
                .put(add_favorite)
                .delete(remove_favorite),
        )
        .layer(
            ServiceBuilder::new()
                .layer(request_id_layer())
                .layer(TraceLayer::new_for_http())
                .layer(propagate_request_id_layer()),
        )
        .with_state(state)
}
