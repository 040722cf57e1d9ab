//! Toast notices

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::utils::constants::NOTICE_TIMEOUT_MS;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub kind: NoticeKind,
}

#[derive(Clone, Copy)]
pub struct NoticeContext {
    pub notices: RwSignal<Vec<Notice>>,
    next_id: StoredValue<u64>,
}

impl NoticeContext {
    pub fn new() -> Self {
        Self {
            notices: RwSignal::new(Vec::new()),
            next_id: StoredValue::new(0),
        }
    }

    /// Show a notice and drop it again after a few seconds.
    pub fn push(&self, kind: NoticeKind, title: impl Into<String>, description: impl Into<String>) {
        let id = self.next_id.get_value();
        self.next_id.set_value(id + 1);

        let notice = Notice {
            id,
            title: title.into(),
            description: description.into(),
            kind,
        };
        log::debug!("Notice: {} - {}", notice.title, notice.description);
        self.notices.update(|list| list.push(notice));

        let this = *self;
        spawn_local(async move {
            TimeoutFuture::new(NOTICE_TIMEOUT_MS).await;
            this.dismiss(id);
        });
    }

    pub fn info(&self, title: impl Into<String>, description: impl Into<String>) {
        self.push(NoticeKind::Info, title, description);
    }

    pub fn success(&self, title: impl Into<String>, description: impl Into<String>) {
        self.push(NoticeKind::Success, title, description);
    }

    pub fn error(&self, title: impl Into<String>, description: impl Into<String>) {
        self.push(NoticeKind::Error, title, description);
    }

    pub fn dismiss(&self, id: u64) {
        self.notices.update(|list| list.retain(|n| n.id != id));
    }
}

impl Default for NoticeContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn provide_notice_context() -> NoticeContext {
    let context = NoticeContext::new();
    provide_context(context);
    context
}

pub fn use_notices() -> NoticeContext {
    expect_context::<NoticeContext>()
}
