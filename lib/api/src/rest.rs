use actix_cors::Cors;
use actix_web::http::header::{self, HeaderName};
use actix_web::http::Method;
use actix_web::{web, App, HttpResponse, HttpServer, Result as ActixResult};
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;
use tracing::info;

/// Paths the merged catalog is served under
pub const CATALOG_PATHS: [&str; 2] = ["/api/characters", "/api/characters-api"];

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    characters: usize,
}

pub struct RestApi;

impl RestApi {
    pub async fn start(catalog: Arc<Vec<Value>>, port: u16) -> std::io::Result<()> {
        let catalog = web::Data::from(catalog);
        info!("Serving {} characters", catalog.len());

        HttpServer::new(move || {
            App::new()
                .wrap(cors())
                .app_data(catalog.clone())
                .configure(configure)
        })
        .bind(("0.0.0.0", port))?
        .run()
        .await
    }
}

/// Any origin, read-only methods
pub fn cors() -> Cors {
    Cors::default()
        .allow_any_origin()
        .allowed_methods(vec![Method::GET, Method::OPTIONS])
        .allowed_headers(vec![
            header::ORIGIN,
            HeaderName::from_static("x-requested-with"),
            header::CONTENT_TYPE,
            header::ACCEPT,
        ])
        .max_age(3600)
}

/// Register the catalog and health routes.
///
/// Expects the catalog as `web::Data<Vec<Value>>` app data.
pub fn configure(cfg: &mut web::ServiceConfig) {
    for path in CATALOG_PATHS {
        cfg.service(
            web::resource(path)
                .route(web::get().to(get_catalog))
                .route(web::method(Method::OPTIONS).to(preflight))
                .default_service(web::to(method_not_allowed)),
        );
    }
    cfg.route("/health", web::get().to(health));
}

async fn get_catalog(catalog: web::Data<Vec<Value>>) -> ActixResult<HttpResponse> {
    Ok(HttpResponse::Ok().json(catalog.get_ref()))
}

async fn preflight() -> HttpResponse {
    HttpResponse::Ok().finish()
}

async fn method_not_allowed() -> HttpResponse {
    HttpResponse::MethodNotAllowed().json(serde_json::json!({
        "error": "Method not allowed"
    }))
}

async fn health(catalog: web::Data<Vec<Value>>) -> HttpResponse {
    HttpResponse::Ok().json(HealthResponse {
        status: "ok",
        characters: catalog.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;
    use actix_web::test;
    use serde_json::json;

    fn catalog() -> web::Data<Vec<Value>> {
        web::Data::new(vec![
            json!({"id": 1, "name": "Monkey D Luffy", "images": {"jpg": "a.jpg"}}),
            json!({"id": 3, "name": "Nami"}),
        ])
    }

    #[actix_web::test]
    async fn test_get_catalog() {
        let app = test::init_service(App::new().wrap(cors()).app_data(catalog()).configure(configure)).await;

        for path in CATALOG_PATHS {
            let req = test::TestRequest::get().uri(path).to_request();
            let body: Value = test::call_and_read_body_json(&app, req).await;
            assert_eq!(body.as_array().unwrap().len(), 2);
            assert_eq!(body[0]["images"]["jpg"], "a.jpg");
        }
    }

    #[actix_web::test]
    async fn test_options_returns_ok() {
        let app = test::init_service(App::new().app_data(catalog()).configure(configure)).await;
        let req = test::TestRequest::default()
            .method(Method::OPTIONS)
            .uri("/api/characters")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
    }

    #[actix_web::test]
    async fn test_cors_preflight() {
        let app = test::init_service(App::new().wrap(cors()).app_data(catalog()).configure(configure)).await;
        let req = test::TestRequest::default()
            .method(Method::OPTIONS)
            .uri("/api/characters")
            .insert_header((header::ORIGIN, "https://example.com"))
            .insert_header((header::ACCESS_CONTROL_REQUEST_METHOD, "GET"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert!(resp.headers().contains_key(header::ACCESS_CONTROL_ALLOW_ORIGIN));
    }

    #[actix_web::test]
    async fn test_other_methods_rejected() {
        let app = test::init_service(App::new().wrap(cors()).app_data(catalog()).configure(configure)).await;
        let req = test::TestRequest::post()
            .uri("/api/characters-api")
            .set_json(json!({"name": "Buggy"}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, json!({"error": "Method not allowed"}));
    }

    #[actix_web::test]
    async fn test_cors_header_on_get() {
        let app = test::init_service(App::new().wrap(cors()).app_data(catalog()).configure(configure)).await;
        let req = test::TestRequest::get()
            .uri("/api/characters")
            .insert_header((header::ORIGIN, "https://example.com"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert!(resp.headers().contains_key(header::ACCESS_CONTROL_ALLOW_ORIGIN));
    }

    #[actix_web::test]
    async fn test_health() {
        let app = test::init_service(App::new().app_data(catalog()).configure(configure)).await;
        let req = test::TestRequest::get().uri("/health").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body, json!({"status": "ok", "characters": 2}));
    }
}
