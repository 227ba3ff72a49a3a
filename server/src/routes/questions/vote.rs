use actix_web::{
    web::{block, Data, Form, Json, Path},
    Either, Result,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use db::{polls::get_question_detail, PollStore};
use errors::Error;

use crate::handlers::{get_question_results, ResultsResponse};

pub const NO_CHOICE_MESSAGE: &str = "You didn't select a choice.";

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct VoteRequest {
    #[serde(default)]
    pub choice: Option<i32>,
}

fn no_choice() -> Error {
    Error::UnprocessableEntity(NO_CHOICE_MESSAGE.to_string())
}

/// Takes the choice as JSON or as a urlencoded form.
///
/// A missing or unreadable body is treated as no choice.
pub async fn vote(
    store: Data<dyn PollStore>,
    question_id: Path<i32>,
    params: Option<Either<Json<VoteRequest>, Form<VoteRequest>>>,
) -> Result<Json<ResultsResponse>, Error> {
    let question_id = question_id.into_inner();
    let now = Utc::now();
    let choice_id = params.and_then(|params| match params {
        Either::Left(json) => json.choice,
        Either::Right(form) => form.choice,
    });

    let vote_store = store.clone();
    let choice = block(move || {
        let question = get_question_detail(vote_store.get_ref(), question_id, now)?;
        let choice_id = choice_id.ok_or_else(no_choice)?;
        vote_store
            .vote(question.id, choice_id)
            .map_err(|err| match err {
                // a choice from another question is treated like no choice at all
                Error::NotFound(_) => no_choice(),
                _ => err,
            })
    })
    .await??;

    info!(
        "Recorded vote for choice {} on question {}",
        choice.id, question_id
    );

    let response = get_question_results(store, question_id, now).await?;

    Ok(Json(response))
}
