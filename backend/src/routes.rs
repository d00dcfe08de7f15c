use actix_files::{Files, NamedFile};
use actix_multipart::Multipart;
use actix_web::dev::{ServiceRequest, ServiceResponse, fn_service};
use actix_web::{HttpResponse, web};
use serde::Deserialize;

use crate::catalog::CatalogService;
use crate::error::{AnalyzeError, CatalogError};
use crate::inference::model::ImageAnalyzer;
use crate::upload::AnalyzeUpload;

#[derive(Debug, Deserialize)]
struct ShoeQuery {
    category: Option<String>,
}

pub fn configure_api(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/api/analyze").route(web::post().to(handle_analyze)))
        .service(web::resource("/api/shoes").route(web::get().to(list_shoes)))
        .service(web::resource("/api/shoes/{id}").route(web::get().to(get_shoe)));
}

/// API routes plus the built single-page app. Client-side routes that do not
/// match a file are answered with `index.html`.
pub fn configure_routes(cfg: &mut web::ServiceConfig, frontend_dir: String) {
    configure_api(cfg);

    let index_path = format!("{}/index.html", frontend_dir);
    cfg.service(
        Files::new("/", frontend_dir)
            .index_file("index.html")
            .default_handler(fn_service(move |req: ServiceRequest| {
                let index_path = index_path.clone();
                async move {
                    let (req, _) = req.into_parts();
                    let file = NamedFile::open_async(index_path).await?;
                    let res = file.into_response(&req);
                    Ok(ServiceResponse::new(req, res))
                }
            })),
    );
}

async fn handle_analyze(
    analyzer: web::Data<dyn ImageAnalyzer>,
    payload: Multipart,
) -> Result<HttpResponse, AnalyzeError> {
    let upload = AnalyzeUpload::read(payload).await?;
    let (rgb, thermal) = upload.into_pair()?;
    let report = analyzer.analyze(&rgb, &thermal)?;
    Ok(HttpResponse::Ok().json(report))
}

async fn list_shoes(
    catalog: web::Data<CatalogService>,
    query: web::Query<ShoeQuery>,
) -> Result<HttpResponse, CatalogError> {
    let items = catalog.list(query.category.as_deref())?;
    Ok(HttpResponse::Ok().json(items))
}

async fn get_shoe(
    catalog: web::Data<CatalogService>,
    path: web::Path<String>,
) -> Result<HttpResponse, CatalogError> {
    let shoe = catalog.detail(&path.into_inner())?;
    Ok(HttpResponse::Ok().json(shoe))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::error::MISSING_IMAGES;
    use crate::inference::config::AnalyzerConfig;
    use crate::inference::model::MockAnalyzer;
    use actix_web::http::{StatusCode, header};
    use actix_web::{App, test};
    use chrono::{TimeZone, Utc};
    use shared::analysis::sample_conditions;
    use shared::{AnalysisReport, CatalogItem, ErrorResponse, ShoeDetail};
    use std::sync::Arc;

    const BOUNDARY: &str = "screening-test-boundary";

    fn multipart_body(parts: &[(&str, &[u8])]) -> Vec<u8> {
        let mut body = Vec::new();
        for (name, data) in parts {
            body.extend_from_slice(
                format!(
                    "--{BOUNDARY}\r\n\
                     Content-Disposition: form-data; name=\"{name}\"; filename=\"{name}.png\"\r\n\
                     Content-Type: image/png\r\n\r\n"
                )
                .as_bytes(),
            );
            body.extend_from_slice(data);
            body.extend_from_slice(b"\r\n");
        }
        body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
        body
    }

    fn analyze_request(parts: &[(&str, &[u8])]) -> test::TestRequest {
        test::TestRequest::post()
            .uri("/api/analyze")
            .insert_header((
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={BOUNDARY}"),
            ))
            .set_payload(multipart_body(parts))
    }

    macro_rules! test_app {
        () => {{
            let at = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();
            let analyzer: Arc<dyn ImageAnalyzer> = Arc::new(MockAnalyzer::new(
                AnalyzerConfig::default(),
                Arc::new(FixedClock(at)),
            ));
            test::init_service(
                App::new()
                    .app_data(web::Data::from(analyzer))
                    .app_data(web::Data::new(CatalogService::default()))
                    .configure(configure_api),
            )
            .await
        }};
    }

    #[actix_web::test]
    async fn test_analyze_returns_fixed_report() {
        let app = test_app!();
        let req = analyze_request(&[("rgbImage", b"rgb-bytes"), ("thermalImage", b"thermal-bytes")]).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let report: AnalysisReport = test::read_body_json(resp).await;
        assert_eq!(report.conditions.len(), 4);
        assert_eq!(report.conditions, sample_conditions());
        assert_eq!(report.scan_id.as_str(), "SCAN-1709294400000");
        assert_eq!(report.recommendations.len(), 4);
    }

    #[actix_web::test]
    async fn test_analyze_wire_field_names() {
        let app = test_app!();
        let req = analyze_request(&[("thermalImage", b"t"), ("rgbImage", b"r")]).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["scanId"], "SCAN-1709294400000");
        assert_eq!(body["timestamp"], "2024-03-01T12:00:00Z");
        assert_eq!(body["overallRisk"], "moderate");
        assert_eq!(body["conditions"][0]["name"], "Loss of Protective Sensation (LOPS)");
    }

    #[actix_web::test]
    async fn test_analyze_missing_thermal_is_bad_request() {
        let app = test_app!();
        let req = analyze_request(&[("rgbImage", b"rgb-bytes")]).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: ErrorResponse = test::read_body_json(resp).await;
        assert_eq!(body.error, MISSING_IMAGES);
        assert_eq!(body.error, "Both RGB and thermal images are required");
    }

    #[actix_web::test]
    async fn test_analyze_missing_rgb_is_bad_request() {
        let app = test_app!();
        let req = analyze_request(&[("thermalImage", b"t"), ("image", b"other")]).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: ErrorResponse = test::read_body_json(resp).await;
        assert_eq!(body.error, MISSING_IMAGES);
    }

    #[actix_web::test]
    async fn test_analyze_empty_parts_still_count() {
        let app = test_app!();
        let req = analyze_request(&[("rgbImage", b""), ("thermalImage", b"")]).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
    }

    #[actix_web::test]
    async fn test_analyze_non_multipart_is_internal_error() {
        let app = test_app!();
        let req = test::TestRequest::post()
            .uri("/api/analyze")
            .insert_header((header::CONTENT_TYPE, "application/json"))
            .set_payload("{}")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body: ErrorResponse = test::read_body_json(resp).await;
        assert_eq!(body.error, "Failed to analyze images");
    }

    #[actix_web::test]
    async fn test_list_shoes() {
        let app = test_app!();
        let req = test::TestRequest::get().uri("/api/shoes").to_request();
        let items: Vec<CatalogItem> = test::call_and_read_body_json(&app, req).await;
        let ids: Vec<u32> = items.iter().map(|item| item.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);

        let req = test::TestRequest::get()
            .uri("/api/shoes?category=athletic")
            .to_request();
        let items: Vec<CatalogItem> = test::call_and_read_body_json(&app, req).await;
        let ids: Vec<u32> = items.iter().map(|item| item.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[actix_web::test]
    async fn test_list_shoes_unknown_category() {
        let app = test_app!();
        let req = test::TestRequest::get()
            .uri("/api/shoes?category=boots")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_get_shoe() {
        let app = test_app!();
        let req = test::TestRequest::get().uri("/api/shoes/2").to_request();
        let shoe: ShoeDetail = test::call_and_read_body_json(&app, req).await;
        assert_eq!(shoe.name, "Diabetic Comfort Plus");
        assert_eq!(shoe.colors, vec!["Black", "Brown", "White"]);

        let req = test::TestRequest::get().uri("/api/shoes/99").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}
