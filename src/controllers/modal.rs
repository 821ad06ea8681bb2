//! Modal de alta / edición / detalle superpuesto al listado

#[derive(Debug, Clone, PartialEq)]
pub enum Modal<D, E> {
    Closed,
    Add(D),
    Edit { draft: D, target: E },
    View(E),
}

impl<D, E> Modal<D, E> {
    pub fn is_open(&self) -> bool {
        !matches!(self, Modal::Closed)
    }

    pub fn draft(&self) -> Option<&D> {
        match self {
            Modal::Add(draft) | Modal::Edit { draft, .. } => Some(draft),
            _ => None,
        }
    }

    /// Formulario editable; el modo detalle es de solo lectura
    pub fn draft_mut(&mut self) -> Option<&mut D> {
        match self {
            Modal::Add(draft) | Modal::Edit { draft, .. } => Some(draft),
            _ => None,
        }
    }

    pub fn target(&self) -> Option<&E> {
        match self {
            Modal::Edit { target, .. } | Modal::View(target) => Some(target),
            _ => None,
        }
    }

    pub fn close(&mut self) {
        *self = Modal::Closed;
    }
}
