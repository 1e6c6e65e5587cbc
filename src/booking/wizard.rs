//! Two-step booking form.
//!
//! Step one asks for the student's name and WhatsApp number and sends them as a
//! partial lead straight away, so a parent who drops off at step two can still
//! be called back. Step two asks for grade, subject and location and sends the
//! full lead.
//!
//! [`BookingForm::update`] is the only way to change the form. It returns the
//! [`Effect`]s the host has to carry out; the form itself never talks to the
//! network or the clock.

use super::lead::{FullLead, LeadError, PartialLead};
use crate::config;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    One,
    Two,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    StudentName,
    WhatsappNumber,
    Grade,
    Subject,
    Place,
}

impl Field {
    pub const CONTACT: [Field; 2] = [Field::StudentName, Field::WhatsappNumber];
    pub const ACADEMIC: [Field; 3] = [Field::Grade, Field::Subject, Field::Place];

    /// Form control name.
    pub fn name(self) -> &'static str {
        match self {
            Field::StudentName => "studentName",
            Field::WhatsappNumber => "whatsappNumber",
            Field::Grade => "grade",
            Field::Subject => "subject",
            Field::Place => "place",
        }
    }

    pub fn step(self) -> Step {
        match self {
            Field::StudentName | Field::WhatsappNumber => Step::One,
            Field::Grade | Field::Subject | Field::Place => Step::Two,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LeadFields {
    pub student_name: String,
    pub whatsapp_number: String,
    pub grade: String,
    pub subject: String,
    pub place: String,
}

impl LeadFields {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::StudentName => &self.student_name,
            Field::WhatsappNumber => &self.whatsapp_number,
            Field::Grade => &self.grade,
            Field::Subject => &self.subject,
            Field::Place => &self.place,
        }
    }

    fn slot(&mut self, field: Field) -> &mut String {
        match field {
            Field::StudentName => &mut self.student_name,
            Field::WhatsappNumber => &mut self.whatsapp_number,
            Field::Grade => &mut self.grade,
            Field::Subject => &mut self.subject,
            Field::Place => &mut self.place,
        }
    }

    /// Whitespace-only input counts as missing.
    pub fn all_present(&self, fields: &[Field]) -> bool {
        fields.iter().all(|field| !self.get(*field).trim().is_empty())
    }

    fn partial_lead(&self) -> PartialLead {
        PartialLead {
            student_name: self.student_name.clone(),
            whatsapp_number: self.whatsapp_number.clone(),
        }
    }

    fn full_lead(&self) -> FullLead {
        FullLead {
            student_name: self.student_name.clone(),
            whatsapp_number: self.whatsapp_number.clone(),
            grade: self.grade.clone(),
            subject: self.subject.clone(),
            place: self.place.clone(),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Stage {
    #[default]
    Step1,
    Step2,
    /// Full lead sent, waiting for the delivery result.
    Submitting,
    Completed,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Event {
    Edit(Field, String),
    SubmitContact,
    Back,
    SubmitFinal,
    SubmissionSettled(Result<(), LeadError>),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Effect {
    SendPartialLead(PartialLead),
    SendFullLead(FullLead),
    ScheduleAutoClose { after_ms: u32 },
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BookingForm {
    stage: Stage,
    fields: LeadFields,
    partial_lead_sent: bool,
    notice: Option<&'static str>,
}

impl BookingForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    /// Step shown by the step indicator, `None` once the booking is done.
    pub fn step(&self) -> Option<Step> {
        match self.stage {
            Stage::Step1 => Some(Step::One),
            Stage::Step2 | Stage::Submitting => Some(Step::Two),
            Stage::Completed => None,
        }
    }

    pub fn fields(&self) -> &LeadFields {
        &self.fields
    }

    pub fn submission_in_flight(&self) -> bool {
        self.stage == Stage::Submitting
    }

    pub fn partial_lead_sent(&self) -> bool {
        self.partial_lead_sent
    }

    pub fn is_completed(&self) -> bool {
        self.stage == Stage::Completed
    }

    /// Message left by a failed final submission.
    pub fn notice(&self) -> Option<&'static str> {
        self.notice
    }

    pub fn update(&mut self, event: Event) -> Vec<Effect> {
        match (self.stage, event) {
            (Stage::Step1 | Stage::Step2, Event::Edit(field, value)) => {
                if self.step() == Some(field.step()) {
                    *self.fields.slot(field) = value;
                    self.notice = None;
                }
                Vec::new()
            }
            (Stage::Step1, Event::SubmitContact) => self.submit_contact(),
            (Stage::Step2, Event::Back) => {
                self.stage = Stage::Step1;
                self.notice = None;
                Vec::new()
            }
            (Stage::Step2, Event::SubmitFinal) => {
                if !self.fields.all_present(&Field::ACADEMIC) {
                    return Vec::new();
                }
                self.stage = Stage::Submitting;
                self.notice = None;
                vec![Effect::SendFullLead(self.fields.full_lead())]
            }
            (Stage::Submitting, Event::SubmissionSettled(Ok(()))) => {
                self.stage = Stage::Completed;
                vec![Effect::ScheduleAutoClose {
                    after_ms: config::AUTO_CLOSE_MS,
                }]
            }
            (Stage::Submitting, Event::SubmissionSettled(Err(err))) => {
                log::warn!("Booking submission failed: {}", err);
                self.stage = Stage::Step2;
                self.notice = Some(err.user_message());
                Vec::new()
            }
            _ => Vec::new(),
        }
    }

    fn submit_contact(&mut self) -> Vec<Effect> {
        if !self.fields.all_present(&Field::CONTACT) {
            return Vec::new();
        }
        self.stage = Stage::Step2;

        if self.partial_lead_sent {
            log::info!("Partial lead already captured this session, skipping");
            return Vec::new();
        }
        self.partial_lead_sent = true;
        vec![Effect::SendPartialLead(self.fields.partial_lead())]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn edit(form: &mut BookingForm, field: Field, value: &str) -> Vec<Effect> {
        form.update(Event::Edit(field, value.to_string()))
    }

    fn at_step_two() -> BookingForm {
        let mut form = BookingForm::new();
        edit(&mut form, Field::StudentName, "Ali");
        edit(&mut form, Field::WhatsappNumber, "+971501234567");
        form.update(Event::SubmitContact);
        form
    }

    fn ready_to_submit() -> BookingForm {
        let mut form = at_step_two();
        edit(&mut form, Field::Grade, "Grade 5");
        edit(&mut form, Field::Subject, "Mathematics");
        edit(&mut form, Field::Place, "Dubai");
        form
    }

    #[test]
    fn fresh_form_starts_empty_on_step_one() {
        let form = BookingForm::new();

        assert_eq!(form.stage(), Stage::Step1);
        assert_eq!(form.step(), Some(Step::One));
        assert_eq!(form.fields(), &LeadFields::default());
        assert!(!form.is_completed());
        assert!(!form.submission_in_flight());
        assert!(!form.partial_lead_sent());
    }

    #[test]
    fn contact_step_requires_name_and_number() {
        let mut form = BookingForm::new();
        edit(&mut form, Field::WhatsappNumber, "+971501234567");
        assert_eq!(form.update(Event::SubmitContact), vec![]);
        assert_eq!(form.stage(), Stage::Step1);
        assert!(!form.partial_lead_sent());

        let mut form = BookingForm::new();
        edit(&mut form, Field::StudentName, "Ali");
        edit(&mut form, Field::WhatsappNumber, "   ");
        assert_eq!(form.update(Event::SubmitContact), vec![]);
        assert_eq!(form.stage(), Stage::Step1);
        assert!(!form.partial_lead_sent());
    }

    #[test]
    fn contact_step_sends_one_partial_lead() {
        let mut form = BookingForm::new();
        edit(&mut form, Field::StudentName, "Ali");
        edit(&mut form, Field::WhatsappNumber, "+971501234567");

        let effects = form.update(Event::SubmitContact);

        assert_eq!(form.stage(), Stage::Step2);
        assert!(form.partial_lead_sent());
        assert_eq!(
            effects,
            vec![Effect::SendPartialLead(PartialLead {
                student_name: "Ali".to_string(),
                whatsapp_number: "+971501234567".to_string(),
            })]
        );
    }

    #[test]
    fn going_back_and_forward_does_not_resend_partial_lead() {
        let mut form = at_step_two();

        assert_eq!(form.update(Event::Back), vec![]);
        assert_eq!(form.stage(), Stage::Step1);
        edit(&mut form, Field::StudentName, "Ali Hassan");
        edit(&mut form, Field::WhatsappNumber, "+971509999999");

        assert_eq!(form.update(Event::SubmitContact), vec![]);
        assert_eq!(form.stage(), Stage::Step2);
        assert_eq!(form.fields().student_name, "Ali Hassan");
        assert_eq!(form.fields().whatsapp_number, "+971509999999");
    }

    #[test]
    fn back_keeps_academic_details() {
        let mut form = at_step_two();
        edit(&mut form, Field::Grade, "Grade 5");

        form.update(Event::Back);
        form.update(Event::SubmitContact);

        assert_eq!(form.stage(), Stage::Step2);
        assert_eq!(form.fields().grade, "Grade 5");
    }

    #[test]
    fn edits_only_touch_fields_of_the_current_step() {
        let mut form = BookingForm::new();
        edit(&mut form, Field::Grade, "Grade 5");
        assert_eq!(form.fields().grade, "");

        let mut form = at_step_two();
        edit(&mut form, Field::StudentName, "Someone else");
        assert_eq!(form.fields().student_name, "Ali");
    }

    #[test]
    fn final_step_requires_all_academic_details() {
        let mut form = at_step_two();
        edit(&mut form, Field::Grade, "Grade 5");
        edit(&mut form, Field::Subject, "Mathematics");

        assert_eq!(form.update(Event::SubmitFinal), vec![]);
        assert_eq!(form.stage(), Stage::Step2);
        assert!(!form.submission_in_flight());
    }

    #[test]
    fn final_submission_completes_after_delivery() {
        let mut form = ready_to_submit();

        let effects = form.update(Event::SubmitFinal);
        assert!(form.submission_in_flight());
        assert!(!form.is_completed());
        assert_eq!(
            effects,
            vec![Effect::SendFullLead(FullLead {
                student_name: "Ali".to_string(),
                whatsapp_number: "+971501234567".to_string(),
                grade: "Grade 5".to_string(),
                subject: "Mathematics".to_string(),
                place: "Dubai".to_string(),
            })]
        );

        let effects = form.update(Event::SubmissionSettled(Ok(())));
        assert!(form.is_completed());
        assert!(!form.submission_in_flight());
        assert_eq!(form.step(), None);
        assert_eq!(
            effects,
            vec![Effect::ScheduleAutoClose {
                after_ms: config::AUTO_CLOSE_MS
            }]
        );
    }

    #[test]
    fn second_submit_while_in_flight_is_ignored() {
        let mut form = ready_to_submit();
        form.update(Event::SubmitFinal);

        assert_eq!(form.update(Event::SubmitFinal), vec![]);
        assert_eq!(form.update(Event::Back), vec![]);
        assert_eq!(form.update(Event::Edit(Field::Place, "Doha".to_string())), vec![]);
        assert_eq!(form.stage(), Stage::Submitting);
        assert_eq!(form.fields().place, "Dubai");
    }

    #[test]
    fn failed_delivery_returns_to_step_two_with_notice() {
        let mut form = ready_to_submit();
        form.update(Event::SubmitFinal);

        let effects = form.update(Event::SubmissionSettled(Err(LeadError::Rejected {
            status: 500,
        })));

        assert_eq!(effects, vec![]);
        assert_eq!(form.stage(), Stage::Step2);
        assert_eq!(form.fields().grade, "Grade 5");
        assert!(form.notice().is_some());

        // retrying clears the notice and sends again
        let effects = form.update(Event::SubmitFinal);
        assert!(form.notice().is_none());
        assert!(matches!(effects.as_slice(), [Effect::SendFullLead(_)]));
    }

    #[test]
    fn completed_form_ignores_further_input() {
        let mut form = ready_to_submit();
        form.update(Event::SubmitFinal);
        form.update(Event::SubmissionSettled(Ok(())));

        assert_eq!(form.update(Event::Back), vec![]);
        assert_eq!(form.update(Event::SubmitFinal), vec![]);
        assert_eq!(form.update(Event::SubmissionSettled(Ok(()))), vec![]);
        assert!(form.is_completed());
    }

    #[test]
    fn stray_settlement_outside_submission_is_ignored() {
        let mut form = at_step_two();
        assert_eq!(form.update(Event::SubmissionSettled(Ok(()))), vec![]);
        assert_eq!(form.stage(), Stage::Step2);
    }
}
