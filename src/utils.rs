use crate::constants::{DetectionMode, MAX_RESPONSE_TOKENS, VISION_MODEL};
use crate::encode::encode_image;
use crate::error::AnalyzeError;
use crate::vision::{
    ImageUrl, VisionApiResponse, VisionContent, VisionRequestBody, VisionUserMessage,
};
use image::DynamicImage;
use indicatif::{ProgressBar, ProgressStyle};
use reqwest::{
    header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE},
    Client,
};

pub fn build_headers(api_key: &str) -> Result<HeaderMap, AnalyzeError> {
    let mut headers = HeaderMap::new();
    headers.insert(
        AUTHORIZATION,
        HeaderValue::from_str(&format!("Bearer {}", api_key))?,
    );
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    Ok(headers)
}

pub fn create_spinner(color: &str, message: String) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"])
            .template(&format!("{{spinner:.{}}} {{msg}}", color)),
    );
    spinner.enable_steady_tick(100);
    spinner.set_message(message);

    spinner
}

/// Validate a user-supplied confidence threshold.
pub fn parse_threshold(raw: &str) -> Result<f64, AnalyzeError> {
    let value: f64 = raw
        .parse()
        .map_err(|_| AnalyzeError::InvalidThreshold(raw.to_string()))?;
    if !(0.0..=1.0).contains(&value) {
        return Err(AnalyzeError::InvalidThreshold(raw.to_string()));
    }
    Ok(value)
}

/// Assemble the request body: the mode's fixed instruction plus the image as
/// a high-detail data URI.
pub fn build_vision_request(
    image: &DynamicImage,
    mode: DetectionMode,
) -> Result<VisionRequestBody, AnalyzeError> {
    let image_base64 = encode_image(image)?;
    Ok(VisionRequestBody {
        model: VISION_MODEL.to_string(),
        messages: vec![VisionUserMessage {
            role: "user".to_string(),
            content: vec![
                VisionContent::Text {
                    text: mode.instructions().to_string(),
                },
                VisionContent::ImageUrl {
                    image_url: ImageUrl {
                        url: format!("data:image/jpeg;base64,{}", image_base64),
                        detail: "high".to_string(),
                    },
                },
            ],
        }],
        max_tokens: MAX_RESPONSE_TOKENS,
    })
}

/// POST the request and pull out the first choice's message content.
///
/// The credential is checked before any network I/O happens; an empty key
/// never produces a request on the wire.
pub async fn send_vision_request(
    client: &Client,
    api_url: &str,
    api_key: &str,
    body: &VisionRequestBody,
) -> Result<String, AnalyzeError> {
    if api_key.trim().is_empty() {
        return Err(AnalyzeError::MissingCredential);
    }
    let headers = build_headers(api_key)?;

    let response = client
        .post(api_url)
        .headers(headers)
        .json(body)
        .send()
        .await?;

    if !response.status().is_success() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        return Err(AnalyzeError::Api { status, body });
    }

    let api_response = response
        .json::<VisionApiResponse>()
        .await
        .map_err(|_| AnalyzeError::UnexpectedFormat)?;
    match api_response.choices.into_iter().next() {
        Some(choice) => Ok(choice.message.content),
        None => Err(AnalyzeError::UnexpectedFormat),
    }
}

/// One full analysis pass: precondition check, build the request, send it.
pub async fn run_analysis(
    client: &Client,
    api_url: &str,
    api_key: &str,
    image: &DynamicImage,
    mode: DetectionMode,
) -> Result<String, AnalyzeError> {
    if api_key.trim().is_empty() {
        return Err(AnalyzeError::MissingCredential);
    }
    let request = build_vision_request(image, mode)?;
    send_vision_request(client, api_url, api_key, &request).await
}
