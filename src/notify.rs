//! Transient banners shown above everything else.

use std::time::{Duration, Instant};

/// How long a banner stays up.
pub const NOTICE_TTL: Duration = Duration::from_secs(5);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

#[derive(Clone, Debug)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
    /// Wall-clock RFC3339 timestamp, for display.
    pub ts: String,
    created: Instant,
}

impl Notice {
    pub fn expired(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.created) >= NOTICE_TTL
    }
}

/// Newest first. Duplicates are kept.
#[derive(Debug, Default)]
pub struct Notices {
    items: Vec<Notice>,
}

impl Notices {
    pub fn push(&mut self, kind: NoticeKind, message: impl Into<String>) {
        self.push_at(kind, message, Instant::now());
    }

    pub fn push_at(&mut self, kind: NoticeKind, message: impl Into<String>, now: Instant) {
        let message = message.into();
        match kind {
            NoticeKind::Success => tracing::info!("{}", message),
            NoticeKind::Error => tracing::warn!("{}", message),
        }
        self.items.insert(
            0,
            Notice {
                kind,
                message,
                ts: now_ts(),
                created: now,
            },
        );
    }

    /// Drops every banner whose lifetime has run out.
    pub fn prune(&mut self, now: Instant) {
        self.items.retain(|n| !n.expired(now));
    }

    pub fn iter(&self) -> impl Iterator<Item = &Notice> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn latest(&self) -> Option<&Notice> {
        self.items.first()
    }
}

fn now_ts() -> String {
    time::OffsetDateTime::now_utc()
        .format(&time::format_description::well_known::Rfc3339)
        .unwrap_or_else(|_| "<time>".to_string())
}

#[cfg(test)]
#[path = "tests/notify_tests.rs"]
mod tests;
