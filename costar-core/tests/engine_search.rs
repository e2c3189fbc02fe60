//! End-to-end coverage for `SearchEngine::search` against the in-memory
//! fake provider.

mod support;

use costar_core::{
    EngineConfig, MediaKind, MissReason, PersonId, SearchEngine, TitleId,
};
use support::{FakeProvider, movie_credit, pages_fetched, person, tv_credit};

fn engine_with(provider: FakeProvider) -> SearchEngine<FakeProvider> {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
    SearchEngine::new(provider, EngineConfig::new("test-key"))
}

/// Both actors resolvable, one shared movie with an IMDb entry.
fn toy_story_provider() -> FakeProvider {
    let mut provider = FakeProvider::default();
    provider.add_search_page(
        "Tom Hanks",
        1,
        1,
        vec![person(31, "Tom Hanks", 88.0)],
    );
    provider.add_search_page(
        "Tim Allen",
        1,
        1,
        vec![person(12898, "Tim Allen", 35.0)],
    );
    provider.add_credits(
        PersonId(31),
        vec![
            movie_credit(862, "Toy Story", "Woody (voice)", "1995-10-30"),
            movie_credit(13, "Forrest Gump", "Forrest Gump", "1994-06-23"),
        ],
    );
    provider.add_credits(
        PersonId(12898),
        vec![
            movie_credit(862, "Toy Story", "Buzz Lightyear (voice)", "1995-10-30"),
            movie_credit(9279, "The Santa Clause", "Scott Calvin", "1994-11-11"),
        ],
    );
    provider.add_imdb(MediaKind::Movie, TitleId(862), "tt0114709");
    provider
}

#[tokio::test]
async fn shared_toy_story_credit_resolves_with_link() {
    let provider = toy_story_provider();
    let external_calls = provider.external_calls.clone();

    let engine = engine_with(provider);
    let outcome = engine.search("Tom Hanks", "Tim Allen").await;

    assert_eq!(outcome.actors[0].id, Some(PersonId(31)));
    assert_eq!(outcome.actors[1].id, Some(PersonId(12898)));
    assert_eq!(
        outcome.actors[0].image.as_deref(),
        Some("https://image.tmdb.org/t/p/w185/profile-31.jpg")
    );
    assert!(outcome.miss.is_none());

    let media = outcome.media.expect("one shared movie");
    assert_eq!(media.len(), 1);

    let toy_story = &media[0];
    assert_eq!(toy_story.kind, MediaKind::Movie);
    assert_eq!(toy_story.title, "Toy Story");
    assert_eq!(toy_story.year.as_str(), "1995");
    assert_eq!(
        toy_story.characters,
        ["Woody (voice)", "Buzz Lightyear (voice)"]
    );
    assert_eq!(toy_story.episodes, None);
    assert_eq!(toy_story.link, "https://www.imdb.com/title/tt0114709/");

    // Only the genuinely shared credit was enriched, not the individual
    // filmographies.
    assert_eq!(
        *external_calls.lock().unwrap(),
        [(MediaKind::Movie, TitleId(862))]
    );
}

#[tokio::test]
async fn unresolvable_first_actor_keeps_query_name() {
    let engine = engine_with(toy_story_provider());
    let outcome = engine
        .search("Zzzznonexistentperson123", "Tim Allen")
        .await;

    assert!(outcome.media.is_none());
    assert_eq!(outcome.miss, Some(MissReason::UnresolvedActor));
    assert!(outcome.actors[0].id.is_none());
    assert_eq!(outcome.actors[0].name, "Zzzznonexistentperson123");
    assert!(outcome.actors[0].image.is_none());
    assert_eq!(outcome.actors[1].id, Some(PersonId(12898)));
}

#[tokio::test]
async fn same_person_twice_is_not_intersected() {
    let mut provider = toy_story_provider();
    provider.add_search_page(
        "tom hanks",
        1,
        1,
        vec![person(31, "Tom Hanks", 88.0)],
    );

    let engine = engine_with(provider);
    let outcome = engine.search("Tom Hanks", "tom hanks").await;

    assert!(outcome.media.is_none());
    assert_eq!(outcome.miss, Some(MissReason::SameActor));
}

#[tokio::test]
async fn disjoint_filmographies_report_no_shared_credits() {
    let mut provider = toy_story_provider();
    provider.add_credits(
        PersonId(31),
        vec![movie_credit(13, "Forrest Gump", "Forrest Gump", "1994-06-23")],
    );
    provider.add_credits(
        PersonId(12898),
        vec![movie_credit(9279, "The Santa Clause", "Scott Calvin", "1994-11-11")],
    );

    let engine = engine_with(provider);
    let outcome = engine.search("Tom Hanks", "Tim Allen").await;

    assert!(outcome.media.is_none());
    assert_eq!(outcome.miss, Some(MissReason::NoSharedCredits));
    assert_eq!(outcome.actors[0].id, Some(PersonId(31)));
    assert_eq!(outcome.actors[1].id, Some(PersonId(12898)));
}

#[tokio::test]
async fn search_pages_are_capped_at_twelve() {
    let mut provider = toy_story_provider();
    provider.add_search_page(
        "John Smith",
        1,
        50,
        vec![person(777, "John Smith", 10.0)],
    );
    provider.add_credits(
        PersonId(777),
        vec![movie_credit(13, "Forrest Gump", "Extra", "1994-06-23")],
    );
    let calls = provider.search_calls.clone();

    let engine = engine_with(provider);
    let outcome = engine.search("John Smith", "Tom Hanks").await;
    assert_eq!(outcome.actors[0].id, Some(PersonId(777)));

    let pages = pages_fetched(&calls, "John Smith");
    assert_eq!(pages.len(), 12);
    assert!(pages.contains(&1));
    assert!(pages.contains(&12));
    assert!(pages.iter().all(|&page| page <= 12));
}

#[tokio::test]
async fn failed_link_lookup_degrades_to_empty_string() {
    let mut provider = FakeProvider::default();
    provider.add_search_page("Actor One", 1, 1, vec![person(1, "Actor One", 5.0)]);
    provider.add_search_page("Actor Two", 1, 1, vec![person(2, "Actor Two", 5.0)]);

    let shared: Vec<(u64, String)> = (1..=5)
        .map(|n| (n, format!("Film {n}")))
        .collect();
    for (person_id, character) in [(1, "Hero"), (2, "Villain")] {
        let cast = shared
            .iter()
            .map(|(id, title)| {
                movie_credit(*id, title, character, &format!("200{id}-01-01"))
            })
            .collect();
        provider.add_credits(PersonId(person_id), cast);
    }
    for (id, _) in &shared {
        provider.add_imdb(MediaKind::Movie, TitleId(*id), &format!("tt000000{id}"));
    }
    provider.fail_external(MediaKind::Movie, TitleId(3));

    let engine = engine_with(provider);
    let outcome = engine.search("Actor One", "Actor Two").await;

    let media = outcome.media.expect("five shared movies");
    assert_eq!(media.len(), 5);
    for credit in &media {
        if credit.title == "Film 3" {
            assert_eq!(credit.link, "");
        } else {
            assert!(credit.link.starts_with("https://www.imdb.com/title/tt"));
        }
    }
}

#[tokio::test]
async fn shared_tv_credit_carries_episode_counts() {
    let mut provider = FakeProvider::default();
    provider.add_search_page(
        "Alec Baldwin",
        1,
        1,
        vec![person(7447, "Alec Baldwin", 40.0)],
    );
    provider.add_search_page(
        "Will Arnett",
        1,
        1,
        vec![person(21200, "Will Arnett", 22.0)],
    );
    provider.add_credits(
        PersonId(7447),
        vec![
            tv_credit(4608, "30 Rock", "Jack Donaghy", "2006-10-11", 138),
            movie_credit(862, "Toy Story", "Not Actually In This", "1995-10-30"),
        ],
    );
    provider.add_credits(
        PersonId(21200),
        vec![tv_credit(4608, "30 Rock", "Devon Banks", "2006-10-11", 12)],
    );
    provider.add_imdb(MediaKind::Tv, TitleId(4608), "tt0496424");

    let engine = engine_with(provider);
    let outcome = engine.search("Alec Baldwin", "Will Arnett").await;

    let media = outcome.media.expect("one shared series");
    assert_eq!(media.len(), 1);

    let rock = &media[0];
    assert_eq!(rock.kind, MediaKind::Tv);
    assert_eq!(rock.title, "30 Rock");
    assert_eq!(rock.characters, ["Jack Donaghy", "Devon Banks"]);
    assert_eq!(rock.episodes, Some([138, 12]));
    assert_eq!(rock.link, "https://www.imdb.com/title/tt0496424/");
}

#[tokio::test]
async fn merged_results_sort_year_descending() {
    let mut provider = FakeProvider::default();
    provider.add_search_page("Actor One", 1, 1, vec![person(1, "Actor One", 5.0)]);
    provider.add_search_page("Actor Two", 1, 1, vec![person(2, "Actor Two", 5.0)]);

    for (person_id, character) in [(1, "A"), (2, "B")] {
        provider.add_credits(
            PersonId(person_id),
            vec![
                movie_credit(10, "Nineties Film", character, "1995-05-05"),
                tv_credit(20, "Late Series", character, "2016-02-02", 4),
                movie_credit(30, "Undated Film", character, ""),
            ],
        );
    }

    let engine = engine_with(provider);
    let outcome = engine.search("Actor One", "Actor Two").await;

    let media = outcome.media.expect("three shared credits");
    let titles: Vec<&str> =
        media.iter().map(|credit| credit.title.as_str()).collect();
    assert_eq!(titles, ["Late Series", "Nineties Film", "Undated Film"]);
}
