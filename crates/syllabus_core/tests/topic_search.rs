use rusqlite::Connection;
use syllabus_core::db::open_db_in_memory;
use syllabus_core::{
    search_topics, LanguageService, SqliteLanguageRepository, SqliteTopicRepository, TopicDraft,
    TopicService,
};
use std::collections::HashSet;

fn seed_topic(conn: &Connection, language: &str, title: &str, closed: bool) {
    let service = TopicService::new(
        SqliteLanguageRepository::try_new(conn).unwrap(),
        SqliteTopicRepository::try_new(conn).unwrap(),
    );
    let draft = TopicDraft {
        title: title.to_string(),
        closed,
    };
    service.add_topic(language, &draft).unwrap();
}

fn add_language(conn: &Connection, title: &str) {
    LanguageService::new(
        SqliteLanguageRepository::try_new(conn).unwrap(),
        SqliteTopicRepository::try_new(conn).unwrap(),
    )
    .add_language(title)
    .unwrap();
}

fn matched_titles(conn: &Connection, needle: &str) -> HashSet<String> {
    search_topics(conn, needle)
        .unwrap()
        .into_iter()
        .map(|topic| topic.title)
        .collect()
}

#[test]
fn search_matches_case_insensitive_substring() {
    let conn = open_db_in_memory().unwrap();
    add_language(&conn, "Go");
    add_language(&conn, "Rust");
    seed_topic(&conn, "Go", "Golang basics", false);
    seed_topic(&conn, "Go", "GO syntax", false);
    seed_topic(&conn, "Rust", "Rust ownership", false);

    let matched = matched_titles(&conn, "go");
    assert_eq!(
        matched,
        HashSet::from(["Golang basics".to_string(), "GO syntax".to_string()])
    );
}

#[test]
fn empty_needle_matches_every_topic() {
    let conn = open_db_in_memory().unwrap();
    add_language(&conn, "Go");
    seed_topic(&conn, "Go", "Basics", false);
    seed_topic(&conn, "Go", "Channels", true);

    let matched = search_topics(&conn, "").unwrap();
    assert_eq!(matched.len(), 2);
}

#[test]
fn search_includes_closed_topics() {
    let conn = open_db_in_memory().unwrap();
    add_language(&conn, "Go");
    seed_topic(&conn, "Go", "Goroutines", true);

    let matched = matched_titles(&conn, "goroutines");
    assert_eq!(matched, HashSet::from(["Goroutines".to_string()]));
}

#[test]
fn search_without_hits_returns_empty() {
    let conn = open_db_in_memory().unwrap();
    add_language(&conn, "Go");
    seed_topic(&conn, "Go", "Basics", false);

    assert!(search_topics(&conn, "monads").unwrap().is_empty());
}

#[test]
fn like_metacharacters_match_literally() {
    let conn = open_db_in_memory().unwrap();
    add_language(&conn, "Go");
    seed_topic(&conn, "Go", "100% test coverage", false);
    seed_topic(&conn, "Go", "snake_case styles", false);
    seed_topic(&conn, "Go", "plain title", false);

    assert_eq!(
        matched_titles(&conn, "100%"),
        HashSet::from(["100% test coverage".to_string()])
    );
    assert_eq!(
        matched_titles(&conn, "e_c"),
        HashSet::from(["snake_case styles".to_string()])
    );
}
