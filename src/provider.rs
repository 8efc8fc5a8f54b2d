use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use log::debug;

use crate::prompt::{Choice, ConfirmationPrompt, PromptError};
use crate::store::{DecisionStore, MemoryStore};

const PROMPT_TITLE: &str = "Untrusted HTTP certificate detected";
const BUTTON_YES: &str = "Yes";
const BUTTON_NO: &str = "No";

fn prompt_message(uri: &str) -> String {
    format!(
        "Do you want to temporarily trust this certificate in order to \
         connect to the server at {uri}?"
    )
}

/// Session-scoped override decision for certificates the transport layer
/// can't validate on its own (self-signed, untrusted root, ...).
pub trait TrustProvider: std::fmt::Debug {
    fn is_trusted(&self, uri: &str, fingerprint: &str) -> Result<bool, PromptError>;
}

/// Answer a trust query against `store`, asking `prompt` on a miss. The
/// stored decision is keyed by fingerprint only; `uri` appears in the
/// question text and nowhere else. A prompt failure caches nothing.
pub fn decide(
    store: &mut impl DecisionStore,
    prompt: &dyn ConfirmationPrompt,
    uri: &str,
    fingerprint: &str,
) -> Result<bool, PromptError> {
    if let Some(trusted) = store.get(fingerprint) {
        return Ok(trusted);
    }
    debug!("no stored decision for {}, asking", fingerprint);
    let choice = prompt.ask(PROMPT_TITLE, &prompt_message(uri), BUTTON_YES, BUTTON_NO)?;
    let trusted = choice == Choice::Affirmative;
    store.insert(fingerprint, trusted);
    debug!("recorded decision for {}: trusted={}", fingerprint, trusted);
    Ok(trusted)
}

#[derive(Debug, Clone)]
pub struct TrustCache {
    decisions: Rc<RefCell<MemoryStore>>,
    prompt: Rc<dyn ConfirmationPrompt>,
}

impl TrustCache {
    pub fn new(prompt: Rc<dyn ConfirmationPrompt>) -> Self {
        Self {
            decisions: Default::default(),
            prompt,
        }
    }

    pub fn decisions(&self) -> HashMap<String, bool> {
        self.decisions.borrow().values()
    }
}

impl TrustProvider for TrustCache {
    fn is_trusted(&self, uri: &str, fingerprint: &str) -> Result<bool, PromptError> {
        decide(
            &mut *self.decisions.borrow_mut(),
            &*self.prompt,
            uri,
            fingerprint,
        )
    }
}
