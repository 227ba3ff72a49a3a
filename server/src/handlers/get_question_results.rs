use actix_web::web::{block, Data};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use db::{
    models::{Choice, Question},
    polls::get_question_detail,
    PollStore,
};
use errors::Error;

#[derive(Debug, Deserialize, Serialize)]
pub struct ResultsResponse {
    pub question: Question,
    pub choices: Vec<Choice>,
}

pub async fn get_question_results(
    store: Data<dyn PollStore>,
    question_id: i32,
    now: DateTime<Utc>,
) -> Result<ResultsResponse, Error> {
    let response = block(move || {
        let question = get_question_detail(store.get_ref(), question_id, now)?;
        let choices = store.choices_for(question.id)?;
        Ok::<_, Error>(ResultsResponse { question, choices })
    })
    .await??;

    Ok(response)
}
