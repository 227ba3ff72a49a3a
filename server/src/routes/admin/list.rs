use actix_identity::Identity;
use actix_web::{
    web::{block, Data, Json},
    Result,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use auth::require_admin;
use db::PollStore;
use errors::Error;

/// Row of the admin change list. Unpublished questions are included.
#[derive(Debug, Deserialize, Serialize)]
pub struct AdminQuestion {
    pub id: i32,
    pub question_text: String,
    pub pub_date: DateTime<Utc>,
    pub was_published_recently: bool,
}

pub async fn list(
    id: Identity,
    store: Data<dyn PollStore>,
) -> Result<Json<Vec<AdminQuestion>>, Error> {
    require_admin(id)?;

    let mut questions = block(move || store.all_questions()).await??;
    questions.sort_by(|a, b| b.pub_date.cmp(&a.pub_date));

    let now = Utc::now();
    let rows = questions
        .into_iter()
        .map(|question| AdminQuestion {
            was_published_recently: question.was_published_recently(now),
            id: question.id,
            question_text: question.question_text,
            pub_date: question.pub_date,
        })
        .collect();

    Ok(Json(rows))
}
