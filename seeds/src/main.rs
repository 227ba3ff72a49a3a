#[macro_use]
extern crate log;

use chrono::{Duration, Utc};
use dotenv::dotenv;

use auth::{create_jwt, PrivateClaim, Role};
use db::{pool_from_env, PgStore, PollStore};

fn main() {
    dotenv().ok();
    env_logger::init();

    let pool = pool_from_env()
        .expect("DATABASE_URL must be set")
        .expect("failed to create db pool");
    let store = PgStore::new(pool);

    let now = Utc::now();
    let polls = vec![
        (
            "What's new?",
            now - Duration::days(2),
            vec!["Not much", "The sky", "Just hacking again"],
        ),
        (
            "Which editor do you use?",
            now - Duration::hours(3),
            vec!["vim", "emacs", "Something else"],
        ),
        (
            "Tabs or spaces?",
            now + Duration::days(7),
            vec!["Tabs", "Spaces"],
        ),
    ];

    for (question_text, pub_date, choices) in polls {
        let (question, choices) = store
            .create_question_with_choices(
                question_text.to_string(),
                pub_date,
                choices.into_iter().map(String::from).collect(),
            )
            .unwrap();
        info!(
            "Seeded question {} ({} choices)",
            question.id,
            choices.len()
        );
    }

    match create_jwt(PrivateClaim::new(1, "admin".to_string(), Role::Admin)) {
        Ok(token) => println!("Admin token: {}", token),
        Err(err) => warn!("Could not create an admin token - {}", err),
    }
}
