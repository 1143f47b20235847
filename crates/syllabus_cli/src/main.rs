//! Command-line surface for the Syllabus core.
//!
//! # Responsibility
//! - Decode argv into core service calls and print the results.
//! - Stay free of business logic; every rule lives in `syllabus_core`.

use anyhow::{anyhow, bail, Result};
use clap::{Parser, Subcommand, ValueEnum};
use rusqlite::Connection;
use std::path::PathBuf;
use syllabus_core::db::open_db;
use syllabus_core::{
    default_log_level, init_logging, language_statistics, search_topics, Language, LanguageService,
    SqliteLanguageRepository, SqliteTopicRepository, Topic, TopicDraft, TopicService,
};
use uuid::Uuid;

#[derive(Parser)]
#[command(name = "syllabus", version, about = "Track languages and learning topics")]
struct Cli {
    /// Database file path.
    #[arg(long, default_value = "syllabus.sqlite3")]
    db: PathBuf,
    /// Absolute directory for rolling log files; logging is off without it.
    #[arg(long)]
    log_dir: Option<String>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Registers a new language.
    AddLanguage { title: String },
    /// Renames an existing language, keeping its id.
    RenameLanguage {
        old_title: String,
        new_title: String,
    },
    /// Lists every language.
    Languages,
    /// Deletes a language and every topic it owns.
    DeleteLanguage { id: Uuid },
    /// Adds a topic under the given language.
    AddTopic {
        language: String,
        title: String,
        /// Create the topic already marked as done.
        #[arg(long)]
        closed: bool,
    },
    /// Replaces title and status of a topic.
    UpdateTopic {
        id: Uuid,
        title: String,
        #[arg(long)]
        closed: bool,
    },
    /// Marks a topic as done.
    CloseTopic { id: Uuid },
    /// Marks a topic as active again.
    ReopenTopic { id: Uuid },
    /// Deletes a topic.
    DeleteTopic { id: Uuid },
    /// Lists topics of one language or by completion status.
    Topics {
        #[arg(long, conflicts_with = "status")]
        language: Option<String>,
        #[arg(long, value_enum)]
        status: Option<StatusFilter>,
    },
    /// Searches topic titles by substring, ignoring case.
    Search { text: String },
    /// Prints per-language topic counts.
    Stats,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum StatusFilter {
    Open,
    Closed,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(log_dir) = &cli.log_dir {
        init_logging(default_log_level(), log_dir).map_err(|err| anyhow!(err))?;
    }

    let conn = open_db(&cli.db)?;
    run(cli.command, &conn)
}

fn run(command: Command, conn: &Connection) -> Result<()> {
    let languages = LanguageService::new(
        SqliteLanguageRepository::try_new(conn)?,
        SqliteTopicRepository::try_new(conn)?,
    );
    let topics = TopicService::new(
        SqliteLanguageRepository::try_new(conn)?,
        SqliteTopicRepository::try_new(conn)?,
    );

    match command {
        Command::AddLanguage { title } => print_language(&languages.add_language(&title)?),
        Command::RenameLanguage {
            old_title,
            new_title,
        } => print_language(&languages.rename_language(&old_title, &new_title)?),
        Command::Languages => {
            for language in languages.list_languages()? {
                print_language(&language);
            }
        }
        Command::DeleteLanguage { id } => print_language(&languages.delete_language(id)?),
        Command::AddTopic {
            language,
            title,
            closed,
        } => print_topic(&topics.add_topic(&language, &TopicDraft { title, closed })?),
        Command::UpdateTopic { id, title, closed } => {
            print_topic(&topics.update_topic(id, &TopicDraft { title, closed })?)
        }
        Command::CloseTopic { id } => print_topic(&topics.set_topic_status(id, true)?),
        Command::ReopenTopic { id } => print_topic(&topics.set_topic_status(id, false)?),
        Command::DeleteTopic { id } => print_topic(&topics.delete_topic(id)?),
        Command::Topics { language, status } => {
            let listed = match (language, status) {
                (Some(language), None) => topics.list_topics_for_language(&language)?,
                (None, Some(status)) => {
                    topics.list_topics_by_status(matches!(status, StatusFilter::Closed))?
                }
                _ => bail!("provide exactly one of --language or --status"),
            };
            for topic in listed {
                print_topic(&topic);
            }
        }
        Command::Search { text } => {
            for topic in search_topics(conn, &text)? {
                print_topic(&topic);
            }
        }
        Command::Stats => {
            for stat in language_statistics(conn)? {
                println!("{}\t{}", stat.title, stat.topics);
            }
        }
    }

    Ok(())
}

fn print_language(language: &Language) {
    println!("{}\t{}", language.id, language.title);
}

fn print_topic(topic: &Topic) {
    let status = if topic.closed { "closed" } else { "open" };
    println!(
        "{}\t{}\t{}\t{}",
        topic.id, topic.language_id, status, topic.title
    );
}
