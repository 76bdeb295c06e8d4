use cinema_catalog::domain::repository::FollowRepository;
use cinema_catalog::domain::types::{SearchKind, SearchResult};
use cinema_catalog::infra::db::DbFollowRepository;
use cinema_catalog::infra::search::DbSearchRepository;
use cinema_catalog::usecase::search::{GenreFilterUseCase, SearchInput, SearchUseCase};
use cinema_domain::cast::CastType;
use sea_orm::DatabaseConnection;

use crate::helpers::{INCEPTION, INTERSTELLAR, NOLAN, TENET, create_user, test_db};

fn search_usecase(db: &DatabaseConnection) -> SearchUseCase<DbSearchRepository> {
    SearchUseCase {
        repo: DbSearchRepository { db: db.clone() },
        items_per_page: 2,
        users_limit: 2,
    }
}

fn films<'a>(query: &'a str, page: Option<&'static str>) -> SearchInput<'a> {
    SearchInput {
        query,
        kind: SearchKind::Film,
        page,
        roles: &[],
    }
}

#[tokio::test]
async fn should_find_films_by_case_insensitive_title_prefix() {
    let db = test_db().await;
    let usecase = search_usecase(&db);

    let SearchResult::Films(page) = usecase.execute(films("inception", Some("1"))).await.unwrap()
    else {
        panic!("expected a film page");
    };
    assert_eq!(page.items.len(), 1);
    assert_eq!(page.items[0].id, INCEPTION);
    assert_eq!((page.page, page.page_count, page.total), (1, 1, 1));

    let SearchResult::Films(page) = usecase.execute(films("IN", None)).await.unwrap() else {
        panic!("expected a film page");
    };
    let ids: Vec<i32> = page.items.iter().map(|f| f.id).collect();
    assert_eq!(ids, vec![INTERSTELLAR, INCEPTION]);
}

#[tokio::test]
async fn should_reset_page_past_the_end_to_the_first() {
    let db = test_db().await;
    let SearchResult::Films(page) = search_usecase(&db)
        .execute(films("in", Some("7")))
        .await
        .unwrap()
    else {
        panic!("expected a film page");
    };
    assert_eq!(page.page, 1);
    assert_eq!(page.items[0].id, INTERSTELLAR);
}

#[tokio::test]
async fn should_treat_wildcards_in_the_query_literally() {
    let db = test_db().await;
    let usecase = search_usecase(&db);
    for query in ["_nception", "%ception", "\"inc"] {
        let SearchResult::Films(page) = usecase.execute(films(query, None)).await.unwrap() else {
            panic!("expected a film page");
        };
        let expected = if query.starts_with('"') { 1 } else { 0 };
        assert_eq!(page.total, expected, "query {query:?}");
    }
}

#[tokio::test]
async fn should_restrict_person_search_to_requested_roles() {
    let db = test_db().await;
    let usecase = search_usecase(&db);

    let SearchResult::Persons(page) = usecase
        .execute(SearchInput {
            query: "chris",
            kind: SearchKind::Person,
            page: None,
            roles: &[CastType::Director],
        })
        .await
        .unwrap()
    else {
        panic!("expected a person page");
    };
    assert_eq!(page.total, 1);
    assert_eq!(page.items[0].id, NOLAN);

    let SearchResult::Persons(page) = usecase
        .execute(SearchInput {
            query: "chris",
            kind: SearchKind::Person,
            page: None,
            roles: &CastType::ALL,
        })
        .await
        .unwrap()
    else {
        panic!("expected a person page");
    };
    let names: Vec<&str> = page.items.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["Christian Bale", "Christopher Nolan"]);
}

#[tokio::test]
async fn should_rank_users_by_followers() {
    let db = test_db().await;
    let alice = create_user(&db, "alice").await;
    let alan = create_user(&db, "alan").await;
    let albert = create_user(&db, "albert").await;
    let bob = create_user(&db, "bob").await;
    let follows = DbFollowRepository { db: db.clone() };
    follows.follow(bob, albert).await.unwrap();
    follows.follow(alice, albert).await.unwrap();
    follows.follow(bob, alan).await.unwrap();
    follows.follow(alan, alice).await.unwrap();
    follows.follow(alan, bob).await.unwrap();

    let SearchResult::Users(users) = search_usecase(&db)
        .execute(SearchInput {
            query: "al",
            kind: SearchKind::User,
            page: None,
            roles: &[],
        })
        .await
        .unwrap()
    else {
        panic!("expected users");
    };
    let ranked: Vec<(&str, i64, i64)> = users
        .iter()
        .map(|u| (u.name.as_str(), u.followers, u.followings))
        .collect();
    assert_eq!(ranked, vec![("albert", 2, 0), ("alan", 1, 2)]);
}

#[tokio::test]
async fn should_filter_films_carrying_every_genre() {
    let db = test_db().await;
    let usecase = GenreFilterUseCase {
        repo: DbSearchRepository { db },
        items_per_page: 10,
    };

    let page = usecase
        .execute(&["sci-fi".to_owned(), " Thriller ".to_owned()], None)
        .await
        .unwrap();
    let ids: Vec<i32> = page.items.iter().map(|f| f.id).collect();
    assert_eq!(ids, vec![TENET, INCEPTION]);
    assert_eq!(page.total, 2);

    let page = usecase
        .execute(&["thriller".to_owned(), "western".to_owned()], None)
        .await
        .unwrap();
    assert_eq!(page.total, 2);

    let page = usecase.execute(&["western".to_owned()], None).await.unwrap();
    assert!(page.items.is_empty());
    assert_eq!((page.page, page.page_count, page.total), (1, 0, 0));
}

#[tokio::test]
async fn should_match_non_ascii_user_prefixes() {
    let db = test_db().await;
    create_user(&db, "émile").await;
    create_user(&db, "Ölaf").await;
    let usecase = search_usecase(&db);

    for (query, expected) in [("ém", "émile"), ("éM", "émile"), ("Öl", "Ölaf")] {
        let SearchResult::Users(users) = usecase
            .execute(SearchInput {
                query,
                kind: SearchKind::User,
                page: None,
                roles: &[],
            })
            .await
            .unwrap()
        else {
            panic!("expected users");
        };
        let names: Vec<&str> = users.iter().map(|u| u.name.as_str()).collect();
        assert_eq!(names, vec![expected], "query {query:?}");
    }
}
