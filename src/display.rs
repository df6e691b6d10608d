use colored::Colorize;
use serde::Deserialize;

/// One entry of the object-detection reply.
#[derive(Debug, Deserialize)]
pub struct DetectedObject {
    pub name: String,
    pub confidence: f64,
    #[serde(default)]
    pub description: Option<String>,
}

/// The shape the object-detection prompt asks the model to produce.
#[derive(Debug, Deserialize)]
pub struct ObjectReport {
    pub objects: Vec<DetectedObject>,
}

/// Keep entries whose confidence meets or exceeds the threshold.
pub fn filter_by_confidence(objects: &[DetectedObject], threshold: f64) -> Vec<&DetectedObject> {
    objects
        .iter()
        .filter(|object| object.confidence >= threshold)
        .collect()
}

/// Best-effort rendering of whatever the model sent back.
///
/// Only the object-detection prompt has a known shape. Scene and text
/// replies are arbitrary JSON, so anything that parses but does not match
/// the object report is pretty-printed as returned, and anything that does
/// not parse at all falls back to the raw text with a notice.
pub fn render_results(raw: &str, threshold: f64) {
    if let Ok(report) = serde_json::from_str::<ObjectReport>(raw) {
        let kept = filter_by_confidence(&report.objects, threshold);
        if kept.is_empty() {
            println!("No objects at or above confidence {:.2}.", threshold);
            return;
        }
        println!("{}", "Detected objects:".bold());
        for object in kept {
            println!(
                "{} (confidence: {:.2})",
                object.name.green().bold(),
                object.confidence
            );
            if let Some(description) = &object.description {
                println!("  {}", description);
            }
        }
        return;
    }

    match serde_json::from_str::<serde_json::Value>(raw) {
        Ok(value) => {
            let pretty = serde_json::to_string_pretty(&value).unwrap_or_else(|_| raw.to_string());
            println!("{}", pretty);
        }
        Err(_) => {
            println!("{}", "Could not parse the structured results.".yellow());
            println!("{}", raw);
        }
    }
}
