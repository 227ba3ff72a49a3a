//! Publication rules shared by the public poll views.
//!
//! A question is visible once its `pub_date` is not after the query time. The
//! current time is always passed in so callers decide which clock to use.

use chrono::{DateTime, Utc};

use errors::Error;

use crate::models::Question;
use crate::store::PollStore;

/// Keeps the questions published at `now`, newest `pub_date` first.
///
/// The sort is stable, so questions sharing a `pub_date` keep their input order.
pub fn list_visible_questions(questions: Vec<Question>, now: DateTime<Utc>) -> Vec<Question> {
    let mut visible: Vec<Question> = questions
        .into_iter()
        .filter(|question| question.is_published(now))
        .collect();
    visible.sort_by(|a, b| b.pub_date.cmp(&a.pub_date));
    visible
}

/// Looks up a question by id, treating unpublished questions as missing.
pub fn get_question_detail<S>(store: &S, id: i32, now: DateTime<Utc>) -> Result<Question, Error>
where
    S: PollStore + ?Sized,
{
    let question = store.question(id)?;
    if !question.is_published(now) {
        return Err(Error::NotFound("Record not found".into()));
    }

    Ok(question)
}
