use chrono::{DateTime, Utc};

use errors::Error;

use crate::models::{Choice, Question};

mod memory;
mod postgres;

pub use self::memory::MemoryStore;
pub use self::postgres::PgStore;

/// Persistence for questions and their choices.
///
/// Every method blocks; callers on the actix runtime go through `web::block`.
pub trait PollStore: Send + Sync {
    fn create_question(&self, question_text: String, pub_date: DateTime<Utc>)
        -> Result<Question, Error>;

    /// All questions in creation order, published or not.
    fn all_questions(&self) -> Result<Vec<Question>, Error>;

    /// Fails with `Error::NotFound` when no question has this id.
    fn question(&self, id: i32) -> Result<Question, Error>;

    fn create_choice(&self, question_id: i32, choice_text: String) -> Result<Choice, Error>;

    fn create_question_with_choices(
        &self,
        question_text: String,
        pub_date: DateTime<Utc>,
        choice_texts: Vec<String>,
    ) -> Result<(Question, Vec<Choice>), Error> {
        let question = self.create_question(question_text, pub_date)?;
        let choices = choice_texts
            .into_iter()
            .map(|text| self.create_choice(question.id, text))
            .collect::<Result<Vec<Choice>, Error>>()?;

        Ok((question, choices))
    }

    fn choices_for(&self, question_id: i32) -> Result<Vec<Choice>, Error>;

    /// Fails with `Error::NotFound` when the choice does not belong to the question.
    fn vote(&self, question_id: i32, choice_id: i32) -> Result<Choice, Error>;
}
