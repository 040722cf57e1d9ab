//! Toast notice stack

use leptos::prelude::*;

use crate::state::notice::{use_notices, Notice, NoticeKind};

fn kind_class(kind: NoticeKind) -> &'static str {
    match kind {
        NoticeKind::Info => "toast",
        NoticeKind::Success => "toast toast-success",
        NoticeKind::Error => "toast toast-error",
    }
}

#[component]
pub fn Toaster() -> impl IntoView {
    let notices = use_notices();

    view! {
        <div class="toaster">
            <For
                each=move || notices.notices.get()
                key=|notice| notice.id
                children=move |notice: Notice| {
                    let id = notice.id;
                    view! {
                        <div class=kind_class(notice.kind) role="status">
                            <div class="toast-body">
                                <strong>{notice.title}</strong>
                                <p>{notice.description}</p>
                            </div>
                            <button class="toast-close" on:click=move |_| notices.dismiss(id)>"×"</button>
                        </div>
                    }
                }
            />
        </div>
    }
}
