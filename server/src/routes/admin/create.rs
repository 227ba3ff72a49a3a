use actix_identity::Identity;
use actix_web::{
    web::{block, Data, Json},
    Result,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use auth::require_admin;
use db::PollStore;
use errors::Error;

use crate::handlers::ResultsResponse;
use crate::validate::validate;

const MAX_TEXT_LENGTH: usize = 200;

#[derive(Clone, Debug, Deserialize, Serialize, Validate)]
pub struct CreateQuestionRequest {
    #[validate(length(
        min = 1,
        max = 200,
        message = "question_text must be between 1 and 200 characters"
    ))]
    pub question_text: String,
    /// Defaults to the time of the request.
    #[serde(default)]
    pub pub_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub choices: Vec<String>,
}

fn validate_choices(choices: &[String]) -> Result<(), Error> {
    let invalid = choices.iter().any(|choice| {
        let length = choice.chars().count();
        length == 0 || length > MAX_TEXT_LENGTH
    });
    if invalid {
        return Err(Error::ValidationError(vec![
            "choices must be between 1 and 200 characters".to_string(),
        ]));
    }

    Ok(())
}

pub async fn create(
    id: Identity,
    store: Data<dyn PollStore>,
    params: Json<CreateQuestionRequest>,
) -> Result<Json<ResultsResponse>, Error> {
    let claim = require_admin(id)?;
    validate(&params)?;
    validate_choices(&params.choices)?;

    let params = params.into_inner();
    let pub_date = params.pub_date.unwrap_or_else(Utc::now);

    let (question, choices) = block(move || {
        store.create_question_with_choices(params.question_text, pub_date, params.choices)
    })
    .await??;

    info!(
        "{} created question {} with {} choices",
        claim.user_name,
        question.id,
        choices.len()
    );

    Ok(Json(ResultsResponse { question, choices }))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use chrono::{Duration, Utc};

    use auth::Role;
    use db::{MemoryStore, PollStore};
    use errors::ErrorResponse;

    use super::CreateQuestionRequest;
    use crate::handlers::ResultsResponse;
    use crate::tests::helpers::tests::{get_auth_token, test_post};

    fn request(question_text: &str, choices: Vec<&str>) -> CreateQuestionRequest {
        CreateQuestionRequest {
            question_text: question_text.to_string(),
            pub_date: None,
            choices: choices.into_iter().map(String::from).collect(),
        }
    }

    #[actix_rt::test]
    async fn test_create_question_with_choices() {
        let store = Arc::new(MemoryStore::default());
        let token = get_auth_token(Role::Admin);
        let before = Utc::now();

        let res: (u16, ResultsResponse) = test_post(
            store.clone(),
            "/polls/admin/questions/",
            request("What's up?", vec!["Not much", "The sky"]),
            Some(token),
        )
        .await;
        assert_eq!(res.0, 200);

        assert_eq!(res.1.question.question_text, "What's up?");
        assert!(res.1.question.pub_date >= before);
        assert_eq!(res.1.choices.len(), 2);
        assert_eq!(res.1.choices[0].votes, 0);

        let saved = store.question(res.1.question.id).unwrap();
        assert_eq!(saved, res.1.question);
        assert_eq!(store.choices_for(saved.id).unwrap().len(), 2);
    }

    #[actix_rt::test]
    async fn test_create_future_question() {
        let store = Arc::new(MemoryStore::default());
        let token = get_auth_token(Role::Admin);
        let pub_date = Utc::now() + Duration::days(3);

        let mut params = request("Later", vec!["Yes"]);
        params.pub_date = Some(pub_date);

        let res: (u16, ResultsResponse) =
            test_post(store, "/polls/admin/questions/", params, Some(token)).await;
        assert_eq!(res.0, 200);
        assert_eq!(res.1.question.pub_date, pub_date);
    }

    #[actix_rt::test]
    async fn test_create_question_validation() {
        let store = Arc::new(MemoryStore::default());
        let token = get_auth_token(Role::Admin);

        let res: (u16, ErrorResponse) = test_post(
            store.clone(),
            "/polls/admin/questions/",
            request("", vec!["Fine"]),
            Some(token.clone()),
        )
        .await;
        assert_eq!(res.0, 422);
        assert_eq!(
            res.1.errors[0],
            "question_text must be between 1 and 200 characters"
        );

        let res: (u16, ErrorResponse) = test_post(
            store.clone(),
            "/polls/admin/questions/",
            request("Fine", vec![""]),
            Some(token),
        )
        .await;
        assert_eq!(res.0, 422);

        assert_eq!(store.all_questions().unwrap().len(), 0);
    }

    #[actix_rt::test]
    async fn test_create_requires_admin() {
        let store = Arc::new(MemoryStore::default());

        let res: (u16, ErrorResponse) = test_post(
            store.clone(),
            "/polls/admin/questions/",
            request("Sneaky", vec![]),
            Some(get_auth_token(Role::Viewer)),
        )
        .await;
        assert_eq!(res.0, 403);

        let res: (u16, ErrorResponse) = test_post(
            store.clone(),
            "/polls/admin/questions/",
            request("Sneaky", vec![]),
            None,
        )
        .await;
        assert_eq!(res.0, 401);

        assert_eq!(store.all_questions().unwrap().len(), 0);
    }
}
