use chrono::{DateTime, Utc};
use parking_lot::RwLock;

use errors::Error;

use crate::models::{Choice, Question};
use crate::store::PollStore;

#[derive(Default)]
struct Tables {
    questions: Vec<Question>,
    choices: Vec<Choice>,
}

/// In-process store used when no database is configured, and by the handler tests.
///
/// Ids are assigned sequentially from 1, matching a fresh `SERIAL` column.
#[derive(Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

fn not_found() -> Error {
    Error::NotFound("Record not found".into())
}

impl PollStore for MemoryStore {
    fn create_question(
        &self,
        question_text: String,
        pub_date: DateTime<Utc>,
    ) -> Result<Question, Error> {
        let mut tables = self.tables.write();
        let question = Question {
            id: tables.questions.len() as i32 + 1,
            question_text,
            pub_date,
        };
        tables.questions.push(question.clone());

        Ok(question)
    }

    fn all_questions(&self) -> Result<Vec<Question>, Error> {
        Ok(self.tables.read().questions.clone())
    }

    fn question(&self, id: i32) -> Result<Question, Error> {
        self.tables
            .read()
            .questions
            .iter()
            .find(|question| question.id == id)
            .cloned()
            .ok_or_else(not_found)
    }

    fn create_choice(&self, question_id: i32, choice_text: String) -> Result<Choice, Error> {
        let mut tables = self.tables.write();
        if !tables.questions.iter().any(|q| q.id == question_id) {
            return Err(Error::BadRequest(format!(
                "question {} does not exist",
                question_id
            )));
        }

        let choice = Choice {
            id: tables.choices.len() as i32 + 1,
            question_id,
            choice_text,
            votes: 0,
        };
        tables.choices.push(choice.clone());

        Ok(choice)
    }

    fn choices_for(&self, question_id: i32) -> Result<Vec<Choice>, Error> {
        Ok(self
            .tables
            .read()
            .choices
            .iter()
            .filter(|choice| choice.question_id == question_id)
            .cloned()
            .collect())
    }

    fn vote(&self, question_id: i32, choice_id: i32) -> Result<Choice, Error> {
        let mut tables = self.tables.write();
        let choice = tables
            .choices
            .iter_mut()
            .find(|choice| choice.id == choice_id && choice.question_id == question_id)
            .ok_or_else(not_found)?;
        choice.votes += 1;

        Ok(choice.clone())
    }
}
