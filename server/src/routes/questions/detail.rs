use actix_web::{
    web::{block, Data, Json, Path},
    Result,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use db::{models::ChoiceDetails, polls::get_question_detail, PollStore};
use errors::Error;

#[derive(Debug, Deserialize, Serialize)]
pub struct DetailResponse {
    pub id: i32,
    pub question_text: String,
    pub pub_date: DateTime<Utc>,
    pub choices: Vec<ChoiceDetails>,
}

pub async fn detail(
    store: Data<dyn PollStore>,
    question_id: Path<i32>,
) -> Result<Json<DetailResponse>, Error> {
    let question_id = question_id.into_inner();
    let now = Utc::now();

    let response = block(move || {
        let question = get_question_detail(store.get_ref(), question_id, now)?;
        let choices = store.choices_for(question.id)?;
        Ok::<_, Error>(DetailResponse {
            id: question.id,
            question_text: question.question_text,
            pub_date: question.pub_date,
            choices: choices.into_iter().map(ChoiceDetails::from).collect(),
        })
    })
    .await??;

    Ok(Json(response))
}
