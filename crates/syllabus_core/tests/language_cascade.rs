use rusqlite::Connection;
use syllabus_core::db::open_db_in_memory;
use syllabus_core::{
    LanguageService, SqliteLanguageRepository, SqliteTopicRepository, TopicDraft, TopicRepository,
    TopicService, TopicServiceError,
};

fn language_service(
    conn: &Connection,
) -> LanguageService<SqliteLanguageRepository<'_>, SqliteTopicRepository<'_>> {
    LanguageService::new(
        SqliteLanguageRepository::try_new(conn).unwrap(),
        SqliteTopicRepository::try_new(conn).unwrap(),
    )
}

fn topic_service(
    conn: &Connection,
) -> TopicService<SqliteLanguageRepository<'_>, SqliteTopicRepository<'_>> {
    TopicService::new(
        SqliteLanguageRepository::try_new(conn).unwrap(),
        SqliteTopicRepository::try_new(conn).unwrap(),
    )
}

#[test]
fn deleting_language_removes_owned_topics() {
    let conn = open_db_in_memory().unwrap();
    let go = language_service(&conn).add_language("Go").unwrap();
    let topics = topic_service(&conn);

    let basics = topics.add_topic("Go", &TopicDraft::active("Basics")).unwrap();
    let channels = topics
        .add_topic(
            "Go",
            &TopicDraft {
                title: "Channels".to_string(),
                closed: true,
            },
        )
        .unwrap();

    language_service(&conn).delete_language(go.id).unwrap();

    let repo = SqliteTopicRepository::try_new(&conn).unwrap();
    assert!(repo.get_topic(basics.id).unwrap().is_none());
    assert!(repo.get_topic(channels.id).unwrap().is_none());

    assert!(topics.list_topics_by_status(false).unwrap().is_empty());
    assert!(topics.list_topics_by_status(true).unwrap().is_empty());
}

#[test]
fn listing_topics_for_deleted_language_returns_not_found() {
    let conn = open_db_in_memory().unwrap();
    let go = language_service(&conn).add_language("Go").unwrap();
    let topics = topic_service(&conn);

    topics.add_topic("Go", &TopicDraft::active("Basics")).unwrap();
    language_service(&conn).delete_language(go.id).unwrap();

    let err = topics.list_topics_for_language("Go").unwrap_err();
    assert!(matches!(err, TopicServiceError::LanguageNotFound(title) if title == "Go"));
}

#[test]
fn deleting_language_without_topics_changes_no_topic() {
    let conn = open_db_in_memory().unwrap();
    let languages = language_service(&conn);
    languages.add_language("Go").unwrap();
    let empty = languages.add_language("X").unwrap();
    let topics = topic_service(&conn);

    let kept = topics.add_topic("Go", &TopicDraft::active("Basics")).unwrap();

    let removed = languages.delete_language(empty.id).unwrap();
    assert_eq!(removed, empty);

    let listed = topics.list_topics_for_language("Go").unwrap();
    assert_eq!(listed, vec![kept]);
}

#[test]
fn cascade_leaves_other_languages_untouched() {
    let conn = open_db_in_memory().unwrap();
    let languages = language_service(&conn);
    let go = languages.add_language("Go").unwrap();
    languages.add_language("Rust").unwrap();
    let topics = topic_service(&conn);

    topics.add_topic("Go", &TopicDraft::active("Basics")).unwrap();
    let ownership = topics
        .add_topic("Rust", &TopicDraft::active("Ownership"))
        .unwrap();

    languages.delete_language(go.id).unwrap();

    let remaining = topics.list_topics_for_language("Rust").unwrap();
    assert_eq!(remaining, vec![ownership]);
}
