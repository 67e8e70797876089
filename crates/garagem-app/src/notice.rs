//! Blocking notices (the TUI counterpart of a modal alert).
//!
//! A notice covers the current screen until dismissed. Remote failures always
//! surface as an error notice; successful saves as a success notice.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Error,
    Success,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub title: String,
    pub message: String,
}

impl Notice {
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            title: "Erro".to_string(),
            message: message.into(),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            title: "Sucesso".to_string(),
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.kind == NoticeKind::Error
    }
}

pub const LOAD_LIST_FAILED: &str = "Não foi possível carregar os veículos.";
pub const LOAD_VEHICLE_FAILED: &str = "Não foi possível carregar o veículo.";
pub const DELETE_FAILED: &str = "Não foi possível excluir o veículo.";
pub const SAVE_FAILED: &str = "Não foi possível salvar o veículo.";
pub const CREATED: &str = "Veículo cadastrado com sucesso!";
pub const UPDATED: &str = "Veículo atualizado com sucesso!";
