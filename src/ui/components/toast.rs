use dioxus::prelude::*;
use std::time::Duration;

const TOAST_DURATION: Duration = Duration::from_secs(4);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ToastMessage {
    pub kind: ToastKind,
    pub text: String,
}

/// One toast at a time; a new one replaces the old
#[derive(Clone, Copy)]
pub struct ToastContext {
    pub current: Signal<Option<ToastMessage>>,
}

impl ToastContext {
    pub fn show(&self, kind: ToastKind, text: impl Into<String>) {
        let mut current = self.current;
        current.set(Some(ToastMessage {
            kind,
            text: text.into(),
        }));
    }

    pub fn success(&self, text: impl Into<String>) {
        self.show(ToastKind::Success, text);
    }

    pub fn error(&self, text: impl Into<String>) {
        self.show(ToastKind::Error, text);
    }

    pub fn info(&self, text: impl Into<String>) {
        self.show(ToastKind::Info, text);
    }

    pub fn dismiss(&self) {
        let mut current = self.current;
        current.set(None);
    }
}

pub fn use_toast() -> ToastContext {
    use_context::<ToastContext>()
}

#[component]
pub fn ToastProvider(children: Element) -> Element {
    let current = use_signal(|| None::<ToastMessage>);
    use_context_provider(|| ToastContext { current });

    rsx! {
        {children}
    }
}

#[component]
pub fn Toast() -> Element {
    let toast = use_toast();

    // Auto-dismiss; a newer toast restarts the timer
    use_effect(move || {
        let Some(shown) = toast.current.read().clone() else {
            return;
        };
        spawn(async move {
            tokio::time::sleep(TOAST_DURATION).await;
            if toast.current.peek().as_ref() == Some(&shown) {
                toast.dismiss();
            }
        });
    });

    let Some(message) = toast.current.read().clone() else {
        return rsx! {};
    };

    let color = match message.kind {
        ToastKind::Success => "bg-green-600",
        ToastKind::Error => "bg-red-600",
        ToastKind::Info => "bg-blue-600",
    };

    rsx! {
        div { class: "toast-enter fixed bottom-6 right-6 z-[3100] {color} text-white px-4 py-3 rounded-lg shadow-lg flex items-center gap-3",
            span { "{message.text}" }
            button {
                class: "text-white/80 hover:text-white",
                onclick: move |_| toast.dismiss(),
                "✕"
            }
        }
    }
}
