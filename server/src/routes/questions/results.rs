use actix_web::{
    web::{Data, Json, Path},
    Result,
};
use chrono::Utc;

use db::PollStore;
use errors::Error;

use crate::handlers::{get_question_results, ResultsResponse};

pub async fn results(
    store: Data<dyn PollStore>,
    question_id: Path<i32>,
) -> Result<Json<ResultsResponse>, Error> {
    let response = get_question_results(store, question_id.into_inner(), Utc::now()).await?;

    Ok(Json(response))
}
