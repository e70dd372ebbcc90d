use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderErrorKind {
    Error,
    Warning,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderError {
    pub kind: RenderErrorKind,
    pub msg: String,
}

impl RenderError {
    pub fn error(msg: &str) -> Self {
        RenderError {
            kind: RenderErrorKind::Error,
            msg: msg.to_string(),
        }
    }

    pub fn warning(msg: &str) -> Self {
        RenderError {
            kind: RenderErrorKind::Warning,
            msg: msg.to_string(),
        }
    }

    pub fn is_warning(&self) -> bool {
        return self.kind == RenderErrorKind::Warning;
    }
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            RenderErrorKind::Error => write!(f, "Error: {}", self.msg),
            RenderErrorKind::Warning => write!(f, "Warning: {}", self.msg),
        }
    }
}

impl std::error::Error for RenderError {}

impl From<&str> for RenderError {
    fn from(msg: &str) -> Self {
        return RenderError::error(msg);
    }
}

impl From<String> for RenderError {
    fn from(msg: String) -> Self {
        return RenderError::error(&msg);
    }
}

impl From<std::io::Error> for RenderError {
    fn from(value: std::io::Error) -> Self {
        let msg = value.to_string();
        return RenderError::error(&msg);
    }
}

impl From<serde_json::Error> for RenderError {
    fn from(value: serde_json::Error) -> Self {
        let msg = format!("json: {}", value);
        return RenderError::error(&msg);
    }
}
