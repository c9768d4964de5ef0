#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use oxide_idl_core::dialect::{Dialect, GenericDialect};
use oxide_idl_session::prelude::*;

pub fn url(url: &str) -> Arc<dyn ConnectionSource> {
    Arc::new(UrlSource::new(url))
}

/// Factory that counts how often it is invoked.
#[derive(Clone, Default)]
pub struct CountingFactory {
    calls: Arc<AtomicUsize>,
}

impl CountingFactory {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl SessionFactory for CountingFactory {
    fn create(&self, context: SessionContext) -> Result<DialectSession> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        // Widen the race window between check and insert.
        std::thread::sleep(std::time::Duration::from_millis(5));
        let dialect: Arc<dyn Dialect> = Arc::new(GenericDialect::new());
        Ok(DialectSession::new(
            context.dialect_id,
            dialect,
            context.source,
            context.naming,
        ))
    }
}
