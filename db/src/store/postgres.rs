use chrono::{DateTime, Utc};
use diesel::Connection as _;

use errors::Error;

use crate::models::{Choice, Question};
use crate::store::PollStore;
use crate::{get_conn, PgPool};

#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        PgStore { pool }
    }
}

impl PollStore for PgStore {
    fn create_question(
        &self,
        question_text: String,
        pub_date: DateTime<Utc>,
    ) -> Result<Question, Error> {
        let conn = get_conn(&self.pool)?;
        Question::create(&conn, question_text, pub_date)
    }

    fn all_questions(&self) -> Result<Vec<Question>, Error> {
        let conn = get_conn(&self.pool)?;
        Question::find_all(&conn)
    }

    fn question(&self, id: i32) -> Result<Question, Error> {
        let conn = get_conn(&self.pool)?;
        Question::find_by_id(&conn, id)
    }

    fn create_choice(&self, question_id: i32, choice_text: String) -> Result<Choice, Error> {
        let conn = get_conn(&self.pool)?;
        Choice::create(&conn, question_id, choice_text)
    }

    /// Inserts a question and its choices in one transaction.
    fn create_question_with_choices(
        &self,
        question_text: String,
        pub_date: DateTime<Utc>,
        choice_texts: Vec<String>,
    ) -> Result<(Question, Vec<Choice>), Error> {
        let conn = get_conn(&self.pool)?;
        conn.transaction::<_, Error, _>(|| {
            let question = Question::create(&conn, question_text, pub_date)?;
            let choices = choice_texts
                .into_iter()
                .map(|text| Choice::create(&conn, question.id, text))
                .collect::<Result<Vec<Choice>, Error>>()?;
            Ok((question, choices))
        })
    }

    fn choices_for(&self, question_id: i32) -> Result<Vec<Choice>, Error> {
        let conn = get_conn(&self.pool)?;
        Choice::find_by_question_id(&conn, question_id)
    }

    fn vote(&self, question_id: i32, choice_id: i32) -> Result<Choice, Error> {
        let conn = get_conn(&self.pool)?;
        Choice::add_vote(&conn, question_id, choice_id)
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, Utc};
    use diesel::{self, RunQueryDsl};
    use dotenv::dotenv;

    use errors::Error;

    use super::PgStore;
    use crate::schema::{choices, questions};
    use crate::store::PollStore;
    use crate::{get_conn, pool_from_env};

    fn store() -> PgStore {
        dotenv().ok();
        let pool = pool_from_env()
            .expect("DATABASE_URL must be set")
            .unwrap();
        PgStore::new(pool)
    }

    fn clean(store: &PgStore) {
        let conn = get_conn(&store.pool).unwrap();
        diesel::delete(choices::table).execute(&conn).unwrap();
        diesel::delete(questions::table).execute(&conn).unwrap();
    }

    #[test]
    #[ignore = "requires DATABASE_URL"]
    fn test_create_and_vote() {
        let store = store();
        clean(&store);

        let (question, choices) = store
            .create_question_with_choices(
                "What's up?".to_string(),
                Utc::now() - Duration::days(1),
                vec!["Not much".to_string(), "The sky".to_string()],
            )
            .unwrap();
        assert_eq!(choices.len(), 2);

        let choice = store.vote(question.id, choices[1].id).unwrap();
        assert_eq!(choice.votes, 1);

        let tally = store.choices_for(question.id).unwrap();
        assert_eq!(tally[0].votes, 0);
        assert_eq!(tally[1].votes, 1);

        clean(&store);
    }

    #[test]
    #[ignore = "requires DATABASE_URL"]
    fn test_vote_for_other_question_choice() {
        let store = store();
        clean(&store);

        let (first, _) = store
            .create_question_with_choices("First".to_string(), Utc::now(), vec![])
            .unwrap();
        let (_, other_choices) = store
            .create_question_with_choices(
                "Second".to_string(),
                Utc::now(),
                vec!["Yes".to_string()],
            )
            .unwrap();

        let res = store.vote(first.id, other_choices[0].id);
        assert_eq!(res, Err(Error::NotFound("Record not found".to_string())));

        assert_eq!(
            store.question(first.id + 1000),
            Err(Error::NotFound("Record not found".to_string()))
        );

        clean(&store);
    }
}
