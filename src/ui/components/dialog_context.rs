use dioxus::prelude::*;
use std::rc::Rc;

type ConfirmCallback = Rc<dyn Fn()>;

/// Contents of the confirmation dialog while it is open
#[derive(Clone)]
pub struct ConfirmRequest {
    pub title: String,
    pub message: String,
    pub confirm_label: String,
    pub cancel_label: String,
    /// Red confirm button for irreversible actions
    pub destructive: bool,
    on_confirm: ConfirmCallback,
}

impl ConfirmRequest {
    pub fn new(title: impl Into<String>, message: impl Into<String>, on_confirm: impl Fn() + 'static) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            confirm_label: "Confirm".to_string(),
            cancel_label: "Cancel".to_string(),
            destructive: false,
            on_confirm: Rc::new(on_confirm),
        }
    }

    pub fn labels(mut self, confirm: &str, cancel: &str) -> Self {
        self.confirm_label = confirm.to_string();
        self.cancel_label = cancel.to_string();
        self
    }

    pub fn destructive(mut self) -> Self {
        self.destructive = true;
        self
    }
}

/// Confirmation dialog shared by every page (cancel booking, delete hotel)
#[derive(Clone, Copy)]
pub struct DialogContext {
    request: Signal<Option<ConfirmRequest>>,
}

impl DialogContext {
    pub fn current(&self) -> Option<ConfirmRequest> {
        self.request.read().clone()
    }

    pub fn ask(&self, request: ConfirmRequest) {
        let mut slot = self.request;
        slot.set(Some(request));
    }

    pub fn hide(&self) {
        let mut slot = self.request;
        slot.set(None);
    }

    /// Close the dialog and run its confirm action
    pub fn confirm(&self) {
        let mut slot = self.request;
        let request = slot.write().take();
        if let Some(request) = request {
            (request.on_confirm)();
        }
    }
}

#[component]
pub fn DialogProvider(children: Element) -> Element {
    let request = use_signal(|| None::<ConfirmRequest>);
    use_context_provider(|| DialogContext { request });

    rsx! {
        {children}
    }
}

pub fn use_dialog() -> DialogContext {
    use_context::<DialogContext>()
}
