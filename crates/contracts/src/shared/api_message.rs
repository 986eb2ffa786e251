use serde::{Deserialize, Serialize};

/// Cuerpo de respuesta genérico del backend: `{"message": ...}` o `{"error": ...}`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApiMessage {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl ApiMessage {
    /// Texto para mostrar/registrar: primero `error`, luego `message`
    pub fn text(&self) -> Option<&str> {
        self.error
            .as_deref()
            .or(self.message.as_deref())
            .filter(|s| !s.trim().is_empty())
    }

    /// Arma el mensaje de error de una respuesta HTTP fallida.
    ///
    /// Si el cuerpo trae `error`/`message`, se agrega al código de estado.
    pub fn describe_failure(status: u16, body: &str) -> String {
        match serde_json::from_str::<ApiMessage>(body) {
            Ok(msg) => match msg.text() {
                Some(text) => format!("HTTP {}: {}", status, text),
                None => format!("HTTP {}", status),
            },
            Err(_) => format!("HTTP {}", status),
        }
    }
}
