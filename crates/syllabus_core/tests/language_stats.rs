use rusqlite::Connection;
use syllabus_core::db::open_db_in_memory;
use syllabus_core::{
    language_statistics, LanguageService, LanguageStat, SqliteLanguageRepository,
    SqliteTopicRepository, TopicDraft, TopicService,
};

fn language_service(
    conn: &Connection,
) -> LanguageService<SqliteLanguageRepository<'_>, SqliteTopicRepository<'_>> {
    LanguageService::new(
        SqliteLanguageRepository::try_new(conn).unwrap(),
        SqliteTopicRepository::try_new(conn).unwrap(),
    )
}

fn seed_topics(conn: &Connection, language: &str, titles: &[&str]) {
    let service = TopicService::new(
        SqliteLanguageRepository::try_new(conn).unwrap(),
        SqliteTopicRepository::try_new(conn).unwrap(),
    );
    for title in titles {
        service
            .add_topic(language, &TopicDraft::active(*title))
            .unwrap();
    }
}

#[test]
fn statistics_count_topics_per_language_including_zero() {
    let conn = open_db_in_memory().unwrap();
    let languages = language_service(&conn);
    languages.add_language("Go").unwrap();
    languages.add_language("Rust").unwrap();
    seed_topics(&conn, "Go", &["Basics", "Channels", "Goroutines"]);

    let stats = language_statistics(&conn).unwrap();
    assert_eq!(
        stats,
        vec![
            LanguageStat {
                title: "Go".to_string(),
                topics: 3,
            },
            LanguageStat {
                title: "Rust".to_string(),
                topics: 0,
            },
        ]
    );
}

#[test]
fn statistics_reflect_cascading_delete() {
    let conn = open_db_in_memory().unwrap();
    let languages = language_service(&conn);
    let go = languages.add_language("Go").unwrap();
    languages.add_language("Rust").unwrap();
    seed_topics(&conn, "Go", &["Basics", "Channels"]);
    seed_topics(&conn, "Rust", &["Ownership"]);

    languages.delete_language(go.id).unwrap();

    let stats = language_statistics(&conn).unwrap();
    assert_eq!(
        stats,
        vec![LanguageStat {
            title: "Rust".to_string(),
            topics: 1,
        }]
    );
}

#[test]
fn statistics_on_empty_catalog_return_no_rows() {
    let conn = open_db_in_memory().unwrap();
    assert!(language_statistics(&conn).unwrap().is_empty());
}
