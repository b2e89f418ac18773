use web_sys::{
    Document, HtmlElement, HtmlFormElement, HtmlInputElement, HtmlOptionElement,
    HtmlSelectElement,
};

use neo_web::{describe_js_value, query};

use crate::{ElementSelectors, FrontendError, FrontendResult, View};

/// Element handles bound once when the page is ready.
#[derive(Clone, Debug)]
pub struct Elements {
    pub input: HtmlInputElement,
    pub message: HtmlElement,
    pub form: HtmlFormElement,
    pub apis: HtmlSelectElement,
}

impl Elements {
    pub fn bind(document: &Document, selectors: &ElementSelectors) -> FrontendResult<Self> {
        Ok(Self {
            input: query(document, &selectors.greet_input)?,
            message: query(document, &selectors.greet_msg)?,
            form: query(document, &selectors.greet_form)?,
            apis: query(document, &selectors.apis)?,
        })
    }

    /// Value of the currently selected dropdown option.
    #[must_use]
    pub fn selected_api(&self) -> String {
        self.apis.value()
    }
}

impl View for Elements {
    fn input_value(&self) -> String {
        self.input.value()
    }

    fn set_message(&self, text: &str) {
        self.message.set_text_content(Some(text));
    }

    fn append_option(&self, value: &str, text: &str) -> FrontendResult<()> {
        let option = HtmlOptionElement::new_with_text_and_value(text, value)
            .map_err(|err| FrontendError::Dom(describe_js_value(&err)))?;
        self.apis
            .append_child(&option)
            .map_err(|err| FrontendError::Dom(describe_js_value(&err)))?;
        Ok(())
    }
}
