use gloo_file::Blob;
use gloo_net::http::Request;
use shared::capture::{CapturedImage, Modality};
use shared::{AnalysisReport, ErrorResponse};
use web_sys::FormData;

fn js_error(err: wasm_bindgen::JsValue) -> String {
    format!("{:?}", err)
}

/// Posts both captures to `/api/analyze` as multipart form data.
pub async fn submit_analysis(
    rgb: &CapturedImage,
    thermal: &CapturedImage,
) -> Result<AnalysisReport, String> {
    let form_data = FormData::new().map_err(js_error)?;

    for (modality, image) in [(Modality::Rgb, rgb), (Modality::Thermal, thermal)] {
        let decoded = image
            .decode()
            .map_err(|e| format!("Invalid {} capture: {}", modality.as_ref(), e))?;
        let blob = Blob::new_with_options(decoded.bytes.as_slice(), Some(&decoded.mime_type));
        form_data
            .append_with_blob_and_filename(
                modality.form_field(),
                blob.as_ref(),
                &format!("{}.png", modality.as_ref()),
            )
            .map_err(js_error)?;
    }

    let response = Request::post("/api/analyze")
        .body(form_data)
        .map_err(|e| format!("Failed to build request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if response.ok() {
        response
            .json::<AnalysisReport>()
            .await
            .map_err(|e| format!("Failed to parse response: {}", e))
    } else {
        let status = response.status();
        let body = response
            .json::<ErrorResponse>()
            .await
            .map(|e| e.error)
            .unwrap_or_default();
        Err(format!("Server error: {} - {}", status, body))
    }
}
