//! Diálogos bloqueantes: confirmación y aviso

/// `confirm()` / `alert()` del front. Los controladores no hacen I/O directo.
pub trait Prompt: Send + Sync {
    fn confirm(&self, message: &str) -> bool;
    fn alert(&self, message: &str);
}
