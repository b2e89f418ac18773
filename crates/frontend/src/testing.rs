use std::cell::{Cell, RefCell};

use crate::{FrontendError, FrontendResult, View};

/// Page stand-in for controller tests.
#[derive(Default)]
pub struct MemoryView {
    input: RefCell<String>,
    message: RefCell<Option<String>>,
    options: RefCell<Vec<(String, String)>>,
    append_budget: Cell<Option<usize>>,
}

impl MemoryView {
    pub fn type_name(&self, name: &str) {
        *self.input.borrow_mut() = name.to_owned();
    }

    pub fn message(&self) -> Option<String> {
        self.message.borrow().clone()
    }

    /// `(value, text)` of every option, in document order.
    pub fn options(&self) -> Vec<(String, String)> {
        self.options.borrow().clone()
    }

    /// Lets `count` more appends succeed, then fails the rest.
    pub fn fail_appends_after(&self, count: usize) {
        self.append_budget.set(Some(count));
    }
}

impl View for MemoryView {
    fn input_value(&self) -> String {
        self.input.borrow().clone()
    }

    fn set_message(&self, text: &str) {
        *self.message.borrow_mut() = Some(text.to_owned());
    }

    fn append_option(&self, value: &str, text: &str) -> FrontendResult<()> {
        match self.append_budget.get() {
            Some(0) => return Err(FrontendError::Dom(String::from("append refused"))),
            Some(left) => self.append_budget.set(Some(left - 1)),
            None => {}
        }

        self.options
            .borrow_mut()
            .push((value.to_owned(), text.to_owned()));
        Ok(())
    }
}

/// The four elements the frontend binds, with their default ids.
#[cfg(target_arch = "wasm32")]
pub const PAGE: &str = r#"<form id="greet-form"><input id="greet-input" /><button type="submit">Greet</button></form><p id="greet-msg"></p><select id="apis"></select>"#;

/// Replaces the test page body with `html`.
#[cfg(target_arch = "wasm32")]
pub fn page(html: &str) -> web_sys::Document {
    let document = neo_web::document().unwrap();
    document.body().unwrap().set_inner_html(html);
    document
}

/// Waits one macrotask so spawned futures and promise callbacks run.
#[cfg(target_arch = "wasm32")]
pub async fn settle() {
    let timer = js_sys::Promise::new(&mut |resolve, _reject| {
        neo_web::window()
            .unwrap()
            .set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, 0)
            .unwrap();
    });
    wasm_bindgen_futures::JsFuture::from(timer).await.unwrap();
}
