pub const API_URL: &str = "https://api.openai.com/v1/chat/completions";
pub const VISION_MODEL: &str = "gpt-4-vision-preview";
pub const MAX_RESPONSE_TOKENS: u32 = 800;
pub const JPEG_QUALITY: u8 = 90;
pub const DEFAULT_CONFIDENCE_THRESHOLD: f64 = 0.5;
pub const CMD_OBJECTS: &str = "o";
pub const CMD_SCENE: &str = "s";
pub const CMD_TEXT: &str = "t";

const OBJECT_DETECTION_PROMPT: &str = "Detect all objects in this image. For each object, provide: 1) the name of the object, 2) a confidence score from 0 to 1, and 3) a brief description. Format as a JSON with a list of objects.";
const SCENE_ANALYSIS_PROMPT: &str = "Analyze this scene. Describe: 1) the overall setting, 2) key elements in the scene, 3) the mood or atmosphere, and 4) any notable activities happening. Format as a JSON.";
const TEXT_RECOGNITION_PROMPT: &str = "Extract all visible text from this image. Provide: 1) the text content, 2) the location in the image (top, middle, bottom, left, right, etc.), and 3) confidence level for each text element. Format as a JSON.";

/// The three analysis modes the tool supports. Each maps to a fixed
/// instruction string sent alongside the image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetectionMode {
    ObjectDetection,
    SceneAnalysis,
    TextRecognition,
}

impl DetectionMode {
    pub fn from_command(cmd: &str) -> Option<Self> {
        match cmd {
            CMD_OBJECTS => Some(Self::ObjectDetection),
            CMD_SCENE => Some(Self::SceneAnalysis),
            CMD_TEXT => Some(Self::TextRecognition),
            _ => None,
        }
    }

    pub fn instructions(&self) -> &'static str {
        match self {
            Self::ObjectDetection => OBJECT_DETECTION_PROMPT,
            Self::SceneAnalysis => SCENE_ANALYSIS_PROMPT,
            Self::TextRecognition => TEXT_RECOGNITION_PROMPT,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::ObjectDetection => "Object Detection",
            Self::SceneAnalysis => "Scene Analysis",
            Self::TextRecognition => "Text Recognition",
        }
    }
}
