use actix_web::{
    web::{block, Data, Json},
    Result,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use db::{models::Question, polls::list_visible_questions, PollStore};
use errors::Error;

use crate::config::AppConfig;

pub const NO_POLLS_MESSAGE: &str = "No polls are available.";

#[derive(Debug, Deserialize, Serialize)]
pub struct IndexResponse {
    pub latest_question_list: Vec<Question>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

pub async fn index(
    store: Data<dyn PollStore>,
    config: Data<AppConfig>,
) -> Result<Json<IndexResponse>, Error> {
    let questions = block(move || store.all_questions()).await??;

    let mut latest_question_list = list_visible_questions(questions, Utc::now());
    if let Some(limit) = config.index_limit {
        latest_question_list.truncate(limit);
    }

    let message = if latest_question_list.is_empty() {
        Some(NO_POLLS_MESSAGE.to_string())
    } else {
        None
    };

    Ok(Json(IndexResponse {
        latest_question_list,
        message,
    }))
}
