use rust_i18n::t;

#[derive(Debug, Clone, PartialEq)]
pub enum CoreError {
    LayerNotFound(String),
    InvalidDimensions { width: u32, height: u32 },
    InvalidConfig(String),
    Export(String),
}

impl std::fmt::Display for CoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CoreError::LayerNotFound(id) => write!(f, "{}", t!("error.layer_not_found", id = id)),
            CoreError::InvalidDimensions { width, height } => {
                write!(f, "{}", t!("error.invalid_dimensions", width = width, height = height))
            }
            CoreError::InvalidConfig(msg) => write!(f, "{}", t!("error.invalid_config", msg = msg)),
            CoreError::Export(msg) => write!(f, "{}", t!("error.export_failed", msg = msg)),
        }
    }
}

impl std::error::Error for CoreError {}

impl From<serde_json::Error> for CoreError {
    fn from(err: serde_json::Error) -> Self { CoreError::InvalidConfig(err.to_string()) }
}

impl From<image::ImageError> for CoreError {
    fn from(err: image::ImageError) -> Self { CoreError::Export(err.to_string()) }
}

pub type Result<T> = std::result::Result<T, CoreError>;
