//! The form session controller behind the order page.
//!
//! A session owns the visitor's [`OrderRequest`] and the [`SubmissionState`].
//! Submitting happens in two steps: [`FormSession::submit`] validates, composes
//! the mail and hands it to the [`MailComposer`]; after the page's pacing delay
//! [`FormSession::complete_handoff`] marks the submission as succeeded and
//! clears the form. No step can observe whether a mail was really sent.

use log::{debug, info, warn};

use super::validation::{validate, ValidationError};
use crate::mail::{MailComposer, MailDraft};
use crate::model::order::{OrderField, OrderRequest, UnknownField};
use crate::model::submission::SubmissionState;

/// Result of a [`FormSession::submit`] call that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The draft was handed to the mail composer.
    HandedOff(MailDraft),
    /// A submission is already running; nothing was done.
    Ignored,
}

pub struct FormSession<C: MailComposer> {
    request: OrderRequest,
    state: SubmissionState,
    recipient: String,
    composer: C,
}

impl<C: MailComposer> FormSession<C> {
    pub fn new(recipient: impl Into<String>, composer: C) -> Self {
        Self {
            request: OrderRequest::default(),
            state: SubmissionState::Idle,
            recipient: recipient.into(),
            composer,
        }
    }

    pub fn request(&self) -> &OrderRequest {
        &self.request
    }

    pub fn state(&self) -> SubmissionState {
        self.state
    }

    pub fn is_submitting(&self) -> bool {
        self.state.is_submitting()
    }

    pub fn composer(&self) -> &C {
        &self.composer
    }

    /// Replaces one field. Any text is accepted; checks wait for `submit`.
    pub fn update_field(&mut self, field: OrderField, value: impl Into<String>) {
        self.request.set(field, value);
    }

    /// Same as [`update_field`](Self::update_field), addressed by form input name.
    pub fn update_field_by_name(
        &mut self,
        name: &str,
        value: impl Into<String>,
    ) -> Result<(), UnknownField> {
        let field = name.parse::<OrderField>()?;
        self.update_field(field, value);
        Ok(())
    }

    /// Validates the request and starts the mail handoff.
    ///
    /// Refused submissions leave the state untouched so the visitor can fix
    /// the form. While a submission is running further calls are ignored.
    pub fn submit(&mut self) -> Result<SubmitOutcome, ValidationError> {
        if self.is_submitting() {
            debug!("submit ignored: handoff already in progress");
            return Ok(SubmitOutcome::Ignored);
        }

        if let Err(err) = validate(&self.request) {
            warn!("order submission refused: {}", err);
            return Err(err);
        }

        self.state = SubmissionState::Submitting;
        let draft = MailDraft::for_order(&self.recipient, &self.request);
        info!("handing order off to mail client: {}", draft.subject);
        self.composer.compose_and_open(&draft);

        Ok(SubmitOutcome::HandedOff(draft))
    }

    /// Finishes a running submission: marks it succeeded and clears the form.
    ///
    /// Returns `false` when no submission was running.
    pub fn complete_handoff(&mut self) -> bool {
        if !self.is_submitting() {
            return false;
        }
        self.state = SubmissionState::Succeeded;
        self.request.clear();
        debug!("order handoff settled, form cleared");
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CONTACT_EMAIL;
    use crate::order::validation::FieldError;
    use proptest::prelude::*;

    #[derive(Default)]
    struct RecordingComposer {
        drafts: Vec<MailDraft>,
    }

    impl MailComposer for RecordingComposer {
        fn compose_and_open(&mut self, draft: &MailDraft) {
            self.drafts.push(draft.clone());
        }
    }

    fn session() -> FormSession<RecordingComposer> {
        FormSession::new(CONTACT_EMAIL, RecordingComposer::default())
    }

    fn fill_required(session: &mut FormSession<RecordingComposer>) {
        session.update_field(OrderField::Name, "Jean Dupont");
        session.update_field(OrderField::Email, "jean@example.com");
        session.update_field(OrderField::Product, "Planche 120cm");
    }

    #[test]
    fn new_session_is_idle_and_empty() {
        let session = session();
        assert_eq!(session.state(), SubmissionState::Idle);
        assert_eq!(session.request(), &OrderRequest::default());
    }

    #[test]
    fn update_accepts_unchecked_text() {
        let mut session = session();
        session.update_field(OrderField::Email, "not an email");
        session.update_field(OrderField::Quantity, "beaucoup");
        assert_eq!(session.request().email, "not an email");
        assert_eq!(session.request().quantity, "beaucoup");
        assert_eq!(session.state(), SubmissionState::Idle);
    }

    #[test]
    fn update_by_html_name() {
        let mut session = session();
        session.update_field_by_name("telephone", "0601020304").unwrap();
        assert_eq!(session.request().phone, "0601020304");
        assert_eq!(
            session.update_field_by_name("adresse", "x"),
            Err(UnknownField("adresse".into()))
        );
    }

    #[test]
    fn repeating_an_update_changes_nothing() {
        let mut session = session();
        session.update_field(OrderField::Message, "Bonjour");
        let after_first = session.request().clone();
        session.update_field(OrderField::Message, "Bonjour");
        assert_eq!(session.request(), &after_first);
    }

    #[test]
    fn submit_refused_when_required_field_blank() {
        for missing in [OrderField::Name, OrderField::Email, OrderField::Product] {
            let mut session = session();
            fill_required(&mut session);
            session.update_field(missing, "  ");

            let err = session.submit().unwrap_err();
            assert_eq!(err.errors, vec![FieldError::Required(missing)]);
            assert_eq!(session.state(), SubmissionState::Idle);
            assert!(session.composer().drafts.is_empty());
        }
    }

    #[test]
    fn submit_hands_off_expected_draft() {
        let mut session = session();
        fill_required(&mut session);

        let draft = match session.submit().unwrap() {
            SubmitOutcome::HandedOff(draft) => draft,
            other => panic!("expected a handoff, got {:?}", other),
        };
        assert_eq!(draft.recipient, "contact@bois-et-saveurs.fr");
        assert_eq!(draft.subject, "Commande de planche - Planche 120cm");
        assert!(draft.body.contains("Téléphone: Non spécifiée"));
        assert!(draft.body.contains("Quantité: Non spécifiée"));
        assert!(draft.body.contains("Message:\nAucun message"));

        assert_eq!(session.state(), SubmissionState::Submitting);
        assert_eq!(session.composer().drafts, vec![draft]);
        // The form keeps its values until the handoff settles.
        assert_eq!(session.request().name, "Jean Dupont");
    }

    #[test]
    fn completing_handoff_resets_form_and_succeeds() {
        let mut session = session();
        fill_required(&mut session);
        session.update_field(OrderField::Message, "Merci");
        session.submit().unwrap();

        assert!(session.complete_handoff());
        assert_eq!(session.state(), SubmissionState::Succeeded);
        assert_eq!(session.request(), &OrderRequest::default());
    }

    #[test]
    fn submit_while_submitting_is_a_no_op() {
        let mut session = session();
        fill_required(&mut session);
        session.submit().unwrap();
        let request = session.request().clone();

        assert_eq!(session.submit(), Ok(SubmitOutcome::Ignored));
        assert_eq!(session.state(), SubmissionState::Submitting);
        assert_eq!(session.request(), &request);
        assert_eq!(session.composer().drafts.len(), 1);
    }

    #[test]
    fn complete_handoff_without_submission_does_nothing() {
        let mut session = session();
        session.update_field(OrderField::Name, "Jean");
        assert!(!session.complete_handoff());
        assert_eq!(session.state(), SubmissionState::Idle);
        assert_eq!(session.request().name, "Jean");
    }

    #[test]
    fn can_submit_again_after_success() {
        let mut session = session();
        fill_required(&mut session);
        session.submit().unwrap();
        session.complete_handoff();

        // Cleared form is refused, state stays succeeded.
        assert!(session.submit().is_err());
        assert_eq!(session.state(), SubmissionState::Succeeded);

        fill_required(&mut session);
        session.update_field(OrderField::Product, "Planche 100cm");
        assert!(matches!(session.submit(), Ok(SubmitOutcome::HandedOff(_))));
        assert_eq!(session.composer().drafts.len(), 2);
        assert_eq!(
            session.composer().drafts[1].subject,
            "Commande de planche - Planche 100cm"
        );
    }

    fn field_strategy() -> impl Strategy<Value = OrderField> {
        prop::sample::select(OrderField::ALL.to_vec())
    }

    proptest! {
        #[test]
        fn last_write_per_field_wins(
            updates in prop::collection::vec((field_strategy(), ".{0,12}"), 0..40)
        ) {
            let mut session = session();
            for (field, value) in &updates {
                session.update_field(*field, value.clone());
            }
            for field in OrderField::ALL {
                let expected = updates
                    .iter()
                    .rev()
                    .find(|(f, _)| *f == field)
                    .map(|(_, v)| v.as_str())
                    .unwrap_or("");
                prop_assert_eq!(session.request().get(field), expected);
            }
        }

        #[test]
        fn distinct_field_updates_commute(
            a in field_strategy(),
            b in field_strategy(),
            x in ".{0,12}",
            y in ".{0,12}",
        ) {
            prop_assume!(a != b);
            let mut first = session();
            first.update_field(a, x.clone());
            first.update_field(b, y.clone());

            let mut second = session();
            second.update_field(b, y);
            second.update_field(a, x);

            prop_assert_eq!(first.request(), second.request());
        }
    }
}
