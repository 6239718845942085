// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Notices collected during a run and reported when it ends.

/// Notice severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    /// Something degraded but the narrative still works.
    Warn,
    /// The narrative cannot continue.
    Fatal,
}

/// Identifier for a notice entry.
pub type NoticeId = u64;

/// One posted notice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    /// Stable identifier, in posting order.
    pub id: NoticeId,
    /// Severity.
    pub kind: NoticeKind,
    /// Short title line.
    pub title: String,
    /// Optional body text.
    pub body: Option<String>,
}

/// Append-only notice log. Nothing posted is ever dropped.
#[derive(Debug, Default)]
pub struct NoticeService {
    notices: Vec<Notice>,
}

impl NoticeService {
    /// Empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a notice.
    pub fn post<S, B>(&mut self, kind: NoticeKind, title: S, body: B) -> NoticeId
    where
        S: Into<String>,
        B: Into<Option<String>>,
    {
        let id = self.notices.len() as NoticeId + 1;
        self.notices.push(Notice {
            id,
            kind,
            title: title.into(),
            body: body.into(),
        });
        id
    }

    /// Every notice posted so far, oldest first.
    pub fn notices(&self) -> &[Notice] {
        &self.notices
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_posted_notice_is_kept_in_order() {
        let mut svc = NoticeService::new();
        let a = svc.post(NoticeKind::Warn, "Config store unavailable", None::<String>);
        let b = svc.post(
            NoticeKind::Fatal,
            "Data failed to load",
            Some("world.json missing".to_owned()),
        );
        assert!(a < b);
        let titles: Vec<_> = svc.notices().iter().map(|n| n.title.as_str()).collect();
        assert_eq!(titles, ["Config store unavailable", "Data failed to load"]);
        assert_eq!(svc.notices()[1].body.as_deref(), Some("world.json missing"));
    }

    #[test]
    fn repeated_warnings_are_all_reported() {
        let mut svc = NoticeService::new();
        for _ in 0..20 {
            svc.post(NoticeKind::Warn, "Saved settings unreadable", None::<String>);
        }
        assert_eq!(svc.notices().len(), 20);
    }
}
