#[cfg(test)]
pub mod tests {
    use std::env;
    use std::sync::Arc;

    use actix_http::Request;
    use actix_service::Service;
    use actix_web::{
        body::MessageBody, dev::ServiceResponse, error::Error, test, web, web::Data, App,
    };
    use chrono::{Duration, Utc};
    use serde::{de::DeserializeOwned, Serialize};

    use auth::{create_jwt, get_identity_service, PrivateClaim, Role};
    use db::{models::Question, PollStore};

    use crate::config::AppConfig;
    use crate::routes::{not_found, routes};

    pub async fn get_service(
        store: Arc<dyn PollStore>,
        config: AppConfig,
    ) -> impl Service<Request, Response = ServiceResponse<impl MessageBody>, Error = Error> {
        test::init_service(
            App::new()
                .wrap(get_identity_service())
                .app_data(Data::from(store))
                .app_data(Data::new(config))
                .configure(routes)
                .default_service(web::route().to(not_found)),
        )
        .await
    }

    /// Sends a request through a fresh app and decodes the JSON body.
    pub async fn call<R>(
        store: Arc<dyn PollStore>,
        config: AppConfig,
        req: test::TestRequest,
    ) -> (u16, R)
    where
        R: DeserializeOwned,
    {
        let app = get_service(store, config).await;

        let res = test::call_service(&app, req.to_request()).await;

        let status = res.status().as_u16();
        let body = test::read_body(res).await;
        let json_body = serde_json::from_slice(&body).unwrap_or_else(|_| {
            panic!(
                "read_response_json failed during deserialization. response: {} status: {}",
                String::from_utf8(body.to_vec())
                    .unwrap_or_else(|_| "Could not convert Bytes -> String".to_string()),
                status
            )
        });

        (status, json_body)
    }

    fn with_token(req: test::TestRequest, token: Option<String>) -> test::TestRequest {
        match token {
            Some(token) => req.insert_header(("Authorization", format!("Bearer {}", token))),
            None => req,
        }
    }

    /// Helper for HTTP GET integration tests
    pub async fn test_get<R>(
        store: Arc<dyn PollStore>,
        route: &str,
        token: Option<String>,
    ) -> (u16, R)
    where
        R: DeserializeOwned,
    {
        let req = with_token(test::TestRequest::get().uri(route), token);
        call(store, AppConfig::default(), req).await
    }

    /// Helper for HTTP POST integration tests
    pub async fn test_post<T: Serialize, R>(
        store: Arc<dyn PollStore>,
        route: &str,
        params: T,
        token: Option<String>,
    ) -> (u16, R)
    where
        R: DeserializeOwned,
    {
        let req = with_token(
            test::TestRequest::post().set_json(&params).uri(route),
            token,
        );
        call(store, AppConfig::default(), req).await
    }

    /// Creates a question published `days` from now; negative is in the past.
    pub fn create_question(store: &dyn PollStore, question_text: &str, days: i64) -> Question {
        store
            .create_question(question_text.to_string(), Utc::now() + Duration::days(days))
            .unwrap()
    }

    pub fn get_auth_token(role: Role) -> String {
        env::set_var("JWT_KEY", "polls-test-secret");
        create_jwt(PrivateClaim::new(1, "admin".to_string(), role)).unwrap()
    }
}
