//! Shared handler state.

use std::sync::Arc;

use crate::assembler::QuizAssembler;

/// Cloned into every request. The assembler only holds read-only data, so
/// no locking is needed.
#[derive(Clone)]
pub struct AppState {
    pub assembler: Arc<QuizAssembler>,
}

impl AppState {
    pub fn new(assembler: QuizAssembler) -> Self {
        Self {
            assembler: Arc::new(assembler),
        }
    }
}
